/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! An error that happened while reading the files to upload

use crate::attach::AttachName;

use std::io;

#[expect(missing_docs, reason = "error message is self-documenting")]
#[derive(thiserror::Error, Debug)]
pub enum UploadError {
	#[error("Can't read the {} of item #{} (part {name})", .name.slot, .name.index)]
	Read {
		name: AttachName,
		source: io::Error,
	},
}

impl UploadError {
	/// Name of the part that couldn't be read
	#[must_use]
	pub const fn name(&self) -> AttachName {
		match self {
			UploadError::Read { name, .. } => *name,
		}
	}
}
