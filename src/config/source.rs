/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::ConfigError;
use crate::source::MediaSource as CMediaSource;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Refer to [`crate::source::MediaSource`]. Only sources that can be written down in a config are supported
#[expect(missing_docs, reason = "refer to the core type")]
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum Source {
	FileId(String),
	Url(String),
	Path(PathBuf),
}

impl Source {
	/// Converts into the core type
	///
	/// # Errors
	/// if the URL is invalid
	pub fn parse(self) -> Result<CMediaSource, ConfigError> {
		Ok(match self {
			Source::FileId(id) => CMediaSource::FileId(id),
			Source::Url(url) => {
				if let Err(source) = Url::parse(&url) {
					return Err(ConfigError::InvalidUrl { url, source });
				}

				CMediaSource::Url(url)
			}
			Source::Path(path) => CMediaSource::Path(path),
		})
	}
}
