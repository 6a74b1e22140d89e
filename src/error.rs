/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains the [`Error`] enum that contains every error [`tgmedia`](`crate`) may return

use crate::{collect::UploadError, config::ConfigError, request::RequestError};

/// Every error [`tgmedia`](`crate`) may return
#[expect(missing_docs, reason = "error message is self-documenting")]
#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error(transparent)]
	Upload(#[from] UploadError),

	#[error(transparent)]
	Request(#[from] RequestError),

	#[error("Invalid media config")]
	Config(#[from] ConfigError),
}
