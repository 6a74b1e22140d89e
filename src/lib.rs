/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! `tgmedia` prepares media items for sending to a Telegram-style bot API.
//!
//! A media item references its content via a [`MediaSource`]: a remote file id, a URL,
//! or local content that has to be uploaded along with the request.
//! Before a request can be sent, local content has to be replaced in the request parameters
//! with an `attach://<name>` reference, and the content itself has to be attached as a multipart part with that very `<name>`.
//!
//! These two steps are done by [`prepare_for_params`] and [`collect_files`] respectively.
//! Both assign the name `file-<i>` to the primary source of the item at index `i`
//! and `file-<i>-thumb` to its thumbnail, so every reference in the parameters points to exactly one uploaded part.
//!
//! The request builders in [`request`] do both steps at once and validate the media list for the API method.
//! Items can also be described in a config file, see [`config`].

pub mod attach;
pub mod clone;
pub mod collect;
pub mod config;
pub mod error;
pub mod media;
pub mod request;
pub mod resolve;
#[cfg(feature = "scaffold")]
pub mod scaffold;
pub mod source;

pub use self::{
	attach::AttachName,
	collect::{FilePart, UploadFile, collect_files, load_files},
	error::Error,
	media::{InputMedia, InputMediaItem, InputPaidMedia, MediaKind, MediaSources},
	request::{MediaRequest, PreparedRequest},
	resolve::prepare_for_params,
	source::MediaSource,
};
