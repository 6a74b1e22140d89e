/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! An error that happened while preparing a request

use crate::{collect::UploadError, media::MediaKind};

#[expect(missing_docs, reason = "error message is self-documenting")]
#[derive(thiserror::Error, Debug)]
pub enum RequestError {
	#[error("{method} accepts {min} to {max} media items, got {found}")]
	MediaCount {
		method: &'static str,
		min: usize,
		max: usize,
		found: usize,
	},

	#[error("Item #{index} ({kind}) can't be sent with {method}: {reason}")]
	UnsupportedMedia {
		method: &'static str,
		index: usize,
		kind: MediaKind,
		reason: &'static str,
	},

	#[error("Star count {0} is out of range, should be 1 to 10000")]
	StarCount(u32),

	#[error("Either a chat id together with a message id or an inline message id is required, but not both")]
	MissingTarget,

	#[error("Can't encode the request parameters")]
	Encode(#[from] serde_json::Error),

	#[error(transparent)]
	Upload(#[from] UploadError),
}
