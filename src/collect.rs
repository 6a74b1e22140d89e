/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`collect_files`] and [`load_files`] that gather the files a list of media needs uploaded,
//! named the same way [`prepare_for_params`](`crate::resolve::prepare_for_params`) references them

pub mod error;

pub use self::error::UploadError;

use crate::{attach::AttachName, media::MediaSources, source::Payload};

use tap::Tap;

/// A file that has to be attached to the request as a multipart part
#[derive(Clone, Copy, Debug)]
pub struct FilePart<'a> {
	/// Name of the multipart part
	pub name: AttachName,

	/// Where to take the contents of the part from
	pub payload: Payload<'a>,
}

/// A [`FilePart`] whose contents have been read into memory
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UploadFile {
	/// Name of the multipart part, e.g. `file-0`
	pub name: String,

	/// Name of the file as presented to the remote service
	pub file_name: String,

	/// Contents of the file
	pub bytes: Vec<u8>,
}

/// Lists every source in `items` that has to be uploaded.
///
/// The primary source of the item at position `i` is named `file-<i>`, its thumbnail `file-<i>-thumb`.
/// Items with only remote sources contribute nothing, so the result is usually shorter than `items`
/// and should be matched against the output of [`prepare_for_params`](`crate::resolve::prepare_for_params`) by name only.
///
/// Nothing is read yet, see [`load_files`] for that
#[tracing::instrument(level = "trace", skip_all, fields(len = items.len()))]
#[must_use]
pub fn collect_files<T: MediaSources>(items: &[T]) -> Vec<FilePart<'_>> {
	items
		.iter()
		.enumerate()
		.flat_map(|(index, item)| {
			[
				(AttachName::media(index), item.media_source()),
				(AttachName::thumb(index), item.thumb_source()),
			]
		})
		.filter_map(|(name, source)| {
			Some(FilePart {
				name,
				payload: source?.upload_payload()?,
			})
		})
		.collect::<Vec<_>>()
		.tap(|parts| tracing::debug!("Found {} files to upload", parts.len()))
}

/// Collects the files of `items` like [`collect_files`] and reads all of them into memory
///
/// # Errors
/// if any of the files couldn't be read. No files are returned in that case
/// since sending only some of them would leave references without parts
pub fn load_files<T: MediaSources>(items: &[T]) -> Result<Vec<UploadFile>, UploadError> {
	collect_files(items)
		.into_iter()
		.map(FilePart::load)
		.collect()
}

impl FilePart<'_> {
	/// Reads the contents of this part into memory
	///
	/// # Errors
	/// if the file or the stream couldn't be read
	pub fn load(self) -> Result<UploadFile, UploadError> {
		tracing::trace!("Reading {} from {:?}", self.name, self.payload);

		let bytes = self.payload.read().map_err(|source| UploadError::Read {
			name: self.name,
			source,
		})?;

		Ok(UploadFile {
			name: self.name.to_string(),
			file_name: self.payload.file_name().into_owned(),
			bytes,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		media::{InputMedia, InputMediaItem, InputMediaPhoto, InputMediaVideo, InputPaidMedia},
		source::MediaSource,
	};

	use assert_matches::assert_matches;
	use std::io::Cursor;

	fn names(parts: &[FilePart<'_>]) -> Vec<String> {
		parts.iter().map(|part| part.name.to_string()).collect()
	}

	#[test]
	fn skips_remote_sources() {
		let items: Vec<InputMediaItem> = vec![
			InputMediaPhoto::new(MediaSource::path("tests/data/image.jpg")).into(),
			InputMediaVideo::new(MediaSource::url("https://example.com/video.mp4")).into(),
			InputMediaVideo::builder()
				.media(MediaSource::path("tests/data/video.mp4"))
				.thumbnail(MediaSource::path("tests/data/image.jpg"))
				.build()
				.into(),
			InputPaidMedia::builder()
				.media(InputMediaVideo::new(MediaSource::path("tests/data/video.mp4")))
				.thumbnail(MediaSource::path("tests/data/image.jpg"))
				.build()
				.into(),
		];

		assert_eq!(
			names(&collect_files(&items)),
			["file-0", "file-2", "file-2-thumb", "file-3", "file-3-thumb"]
		);
	}

	#[test]
	fn remote_only_has_no_files() {
		let items: Vec<InputMediaItem> = vec![
			InputMediaPhoto::new(MediaSource::file_id("photo123")).into(),
			InputMediaVideo::builder()
				.media(MediaSource::url("https://example.com/video.mp4"))
				.thumbnail(MediaSource::file_id("thumb123"))
				.build()
				.into(),
		];

		assert!(collect_files(&items).is_empty());
	}

	#[test]
	fn shadowed_inner_thumbnail_is_not_uploaded() {
		let items = vec![
			InputPaidMedia::builder()
				.media(
					InputMediaVideo::builder()
						.media(MediaSource::file_id("video"))
						.thumbnail(MediaSource::bytes("inner.jpg", b"inner".to_vec()))
						.build(),
				)
				.thumbnail(MediaSource::bytes("outer.jpg", b"outer".to_vec()))
				.build(),
		];

		let files = load_files(&items).unwrap();
		assert_eq!(files.len(), 1);
		assert_eq!(files[0].name, "file-0-thumb");
		assert_eq!(files[0].file_name, "outer.jpg");
		assert_eq!(files[0].bytes, b"outer");
	}

	#[test]
	fn loads_memory_and_streams() {
		let items = vec![
			InputMedia::from(InputMediaPhoto::new(MediaSource::bytes(
				"photo.jpg",
				b"photo".to_vec(),
			))),
			InputMedia::from(InputMediaVideo::new(MediaSource::reader(
				"video.mp4",
				Cursor::new(b"video".to_vec()),
			))),
		];

		let files = load_files(&items).unwrap();
		assert_eq!(
			files,
			[
				UploadFile {
					name: "file-0".to_owned(),
					file_name: "photo.jpg".to_owned(),
					bytes: b"photo".to_vec(),
				},
				UploadFile {
					name: "file-1".to_owned(),
					file_name: "video.mp4".to_owned(),
					bytes: b"video".to_vec(),
				},
			]
		);
	}

	#[test]
	fn missing_file_fails_everything() {
		let items = vec![
			InputMedia::from(InputMediaPhoto::new(MediaSource::bytes(
				"photo.jpg",
				b"photo".to_vec(),
			))),
			InputMedia::from(
				InputMediaVideo::builder()
					.media(MediaSource::file_id("video"))
					.thumbnail(MediaSource::path("this/file/does/not/exist.jpg"))
					.build(),
			),
		];

		assert_matches!(
			load_files(&items),
			Err(UploadError::Read { name, .. }) if name == crate::attach::AttachName::thumb(1)
		);
	}
}
