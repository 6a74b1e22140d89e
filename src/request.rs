/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains the requests that send media: [`MediaGroup`], [`PaidMedia`], and [`EditMessageMedia`].
//!
//! Each of them is turned into a [`PreparedRequest`] through the [`MediaRequest`] trait:
//! the parameters with the `media` field already referencing the uploaded parts, and the parts themselves.
//! Actually sending the request is left to the HTTP client of your choice

pub mod edit_media;
pub mod error;
pub mod media_group;
#[cfg(feature = "multipart")]
pub mod multipart;
pub mod paid_media;

pub use self::{
	edit_media::EditMessageMedia, error::RequestError, media_group::MediaGroup,
	paid_media::PaidMedia,
};

use crate::{
	collect::{UploadFile, load_files},
	media::MediaSources,
	resolve::prepare_for_params,
};

use serde::Serialize;
use serde_json::{Map, Value};

/// Name of the request parameter that holds the media
pub const MEDIA_PARAM: &str = "media";

/// Unique identifier of a chat or username of a channel (in the format `@channelusername`)
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
#[serde(untagged)]
pub enum ChatId {
	#[expect(missing_docs, reason = "self-documenting")]
	Id(i64),

	#[expect(missing_docs, reason = "self-documenting")]
	Username(String),
}

/// A request ready to be sent: parameters plus the files they reference
#[derive(Debug)]
pub struct PreparedRequest {
	/// Name of the remote method, e.g. `sendMediaGroup`
	pub method: &'static str,

	/// All parameters of the request, including [`MEDIA_PARAM`]
	pub params: Map<String, Value>,

	/// Files that have to be attached as multipart parts, named as referenced from [`MEDIA_PARAM`]
	pub files: Vec<UploadFile>,
}

/// A request that sends one or more media items
pub trait MediaRequest: Serialize {
	/// Type of the media items this request sends
	type Media: MediaSources + Serialize;

	/// Name of the remote method
	const METHOD: &'static str;

	/// If true, [`MEDIA_PARAM`] is a single object instead of an array
	const SINGLE_MEDIA: bool = false;

	/// The media items to send, in order
	fn media(&self) -> &[Self::Media];

	/// Checks that the remote service would accept this request
	///
	/// # Errors
	/// if it wouldn't
	fn validate(&self) -> Result<(), RequestError>;

	/// Validates the request, resolves its media and reads all files that have to be uploaded
	///
	/// # Errors
	/// * if the request is invalid, see [`validate`](`Self::validate`)
	/// * if any of the files couldn't be read
	#[tracing::instrument(level = "trace", skip_all, fields(method = Self::METHOD))]
	fn prepare(&self) -> Result<PreparedRequest, RequestError> {
		self.validate()?;

		let media = self.media();
		let resolved = prepare_for_params(media);
		let media_param = if Self::SINGLE_MEDIA {
			serde_json::to_value(resolved.first())?
		} else {
			serde_json::to_value(&resolved)?
		};

		let files = load_files(media)?;

		let mut params: Map<String, Value> = serde_json::from_value(serde_json::to_value(self)?)?;
		params.insert(MEDIA_PARAM.to_owned(), media_param);

		tracing::debug!(
			"Prepared {} with {} media items and {} files",
			Self::METHOD,
			media.len(),
			files.len()
		);

		Ok(PreparedRequest {
			method: Self::METHOD,
			params,
			files,
		})
	}
}

impl PreparedRequest {
	/// Checks if the request has to be sent as `multipart/form-data`
	#[must_use]
	pub fn is_multipart(&self) -> bool {
		!self.files.is_empty()
	}

	/// The parameters as text fields of a multipart form.
	///
	/// Strings are kept as is, everything else (including [`MEDIA_PARAM`]) is encoded as JSON
	pub fn form_fields(&self) -> impl Iterator<Item = (&str, String)> + '_ {
		self.params.iter().map(|(name, value)| {
			let value = match value {
				Value::String(s) => s.clone(),
				other => other.to_string(),
			};

			(name.as_str(), value)
		})
	}

	/// The parameters as a JSON object, suitable as a request body when there are no files to upload
	#[must_use]
	pub fn json_body(&self) -> Value {
		Value::Object(self.params.clone())
	}
}

impl From<i64> for ChatId {
	fn from(value: i64) -> Self {
		Self::Id(value)
	}
}

impl From<String> for ChatId {
	fn from(value: String) -> Self {
		Self::Username(value)
	}
}

impl From<&str> for ChatId {
	fn from(value: &str) -> Self {
		Self::Username(value.to_owned())
	}
}
