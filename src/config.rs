/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains the serializable description of media items,
//! e.g. to keep them in a config file, and its conversion into [`crate::media`] types.
//!
//! ```json
//! [
//!     { "type": "photo", "media": { "url": "https://example.com/image.jpg" }, "caption": "Hello" },
//!     { "type": "video", "media": { "path": "video.mp4" }, "thumbnail": { "file_id": "AgAD" } }
//! ]
//! ```

pub mod error;
pub mod media;
pub mod source;

pub use self::{error::ConfigError, media::InputMedia, source::Source};

use crate::media::InputMediaItem as CInputMediaItem;

/// Converts a whole list of media, keeping the order
///
/// # Errors
/// if any of the items is invalid. The error contains the index of the offending item
pub fn parse_list(items: Vec<InputMedia>) -> Result<Vec<CInputMediaItem>, ConfigError> {
	items
		.into_iter()
		.enumerate()
		.map(|(index, item)| {
			item.parse().map_err(|e| ConfigError::InvalidItem {
				index,
				source: Box::new(e),
			})
		})
		.collect()
}
