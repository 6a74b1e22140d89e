/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`MediaSource`] that describes where a single media file comes from,
//! as well as [`Payload`], the borrowed bytes of a source that has to be uploaded

pub mod shared_reader;

pub use self::shared_reader::SharedReader;

use crate::attach::AttachName;

use serde::{Serialize, Serializer, ser::Error as _};
use std::{
	borrow::Cow,
	fs,
	io,
	path::{Path, PathBuf},
};

/// File name used for a part when nothing better is known
const DEFAULT_FILE_NAME: &str = "file";

/// Where the contents of a media file come from
#[derive(Clone, Debug)]
pub enum MediaSource {
	/// A file already stored on the remote service
	FileId(String),

	/// A URL the remote service downloads the file from by itself
	Url(String),

	/// A file on the local filesystem
	Path(PathBuf),

	/// An in-memory buffer
	Bytes {
		/// Name of the file as presented to the remote service
		file_name: String,

		/// Contents of the file
		bytes: Vec<u8>,
	},

	/// A readable stream
	Reader {
		/// Name of the file as presented to the remote service
		file_name: String,

		/// The stream itself
		reader: SharedReader,
	},

	/// A reference to a multipart part of the same request.
	///
	/// Produced by [`prepare_for_params`](`crate::resolve::prepare_for_params`) in place of sources that need uploading
	Attach(AttachName),
}

/// Borrowed contents of a [`MediaSource`] that has to be uploaded
#[derive(Clone, Copy, Debug)]
pub enum Payload<'a> {
	/// Read the file from this path
	Path(&'a Path),

	/// Upload these bytes
	Bytes {
		/// Name of the file as presented to the remote service
		file_name: &'a str,

		/// Contents of the file
		bytes: &'a [u8],
	},

	/// Read everything from this stream
	Reader {
		/// Name of the file as presented to the remote service
		file_name: &'a str,

		/// The stream to read the contents from
		reader: &'a SharedReader,
	},
}

impl MediaSource {
	/// Creates a source referring to a file already known to the remote service
	pub fn file_id(id: impl Into<String>) -> Self {
		Self::FileId(id.into())
	}

	/// Creates a source the remote service should download from `url`
	pub fn url(url: impl Into<String>) -> Self {
		Self::Url(url.into())
	}

	/// Creates a source that uploads the local file at `path`
	pub fn path(path: impl Into<PathBuf>) -> Self {
		Self::Path(path.into())
	}

	/// Creates a source that uploads an in-memory buffer under `file_name`
	pub fn bytes(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
		Self::Bytes {
			file_name: file_name.into(),
			bytes: bytes.into(),
		}
	}

	/// Creates a source that uploads everything `reader` yields under `file_name`
	pub fn reader<R>(file_name: impl Into<String>, reader: R) -> Self
	where
		R: io::Read + Send + 'static,
	{
		Self::Reader {
			file_name: file_name.into(),
			reader: SharedReader::new(reader),
		}
	}

	/// The value of this source as it appears in the request parameters.
	///
	/// That is the id or the URL for remote sources and an `attach://` URI for resolved ones.
	/// Sources that still need uploading render to their local path or file name which is never a valid wire value
	#[must_use]
	pub fn render(&self) -> Cow<'_, str> {
		match self {
			MediaSource::FileId(id) => Cow::Borrowed(id),
			MediaSource::Url(url) => Cow::Borrowed(url),
			MediaSource::Path(path) => path.to_string_lossy(),
			MediaSource::Bytes { file_name, .. } | MediaSource::Reader { file_name, .. } => {
				Cow::Borrowed(file_name)
			}
			MediaSource::Attach(name) => Cow::Owned(name.uri()),
		}
	}

	/// Checks if the contents of this source have to be shipped with the request
	/// instead of being referenced by a remote id or URL
	#[must_use]
	pub fn needs_upload(&self) -> bool {
		self.upload_payload().is_some()
	}

	/// Returns the contents to upload if this source [needs uploading](`Self::needs_upload`)
	#[must_use]
	pub fn upload_payload(&self) -> Option<Payload<'_>> {
		match self {
			MediaSource::FileId(_) | MediaSource::Url(_) | MediaSource::Attach(_) => None,
			MediaSource::Path(path) => Some(Payload::Path(path)),
			MediaSource::Bytes { file_name, bytes } => Some(Payload::Bytes { file_name, bytes }),
			MediaSource::Reader { file_name, reader } => {
				Some(Payload::Reader { file_name, reader })
			}
		}
	}
}

impl Payload<'_> {
	/// Name of the file as presented to the remote service
	#[must_use]
	pub fn file_name(&self) -> Cow<'_, str> {
		match self {
			Payload::Path(path) => path
				.file_name()
				.map_or(Cow::Borrowed(DEFAULT_FILE_NAME), |name| {
					name.to_string_lossy()
				}),
			Payload::Bytes { file_name, .. } | Payload::Reader { file_name, .. } => {
				Cow::Borrowed(file_name)
			}
		}
	}

	/// Reads the whole payload into memory
	///
	/// # Errors
	/// if the file couldn't be read or the stream returned an error
	pub fn read(&self) -> io::Result<Vec<u8>> {
		match self {
			Payload::Path(path) => fs::read(path),
			Payload::Bytes { bytes, .. } => Ok(bytes.to_vec()),
			Payload::Reader { reader, .. } => reader.read_to_end(),
		}
	}
}

impl Serialize for MediaSource {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if self.needs_upload() {
			return Err(S::Error::custom(format!(
				"media source {:?} has to be uploaded and can't be referenced directly",
				self.render()
			)));
		}

		serializer.serialize_str(&self.render())
	}
}
