/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`InputPaidMedia`]

use super::{InputMedia, MediaKind};
use crate::source::MediaSource;

use serde::{Serialize, Serializer};

/// Media that is only shown after the user pays for it.
///
/// Wraps exactly one [`InputMedia`] that provides the primary source.
/// The wrapper can carry its own thumbnail that takes precedence over the thumbnail of the inner item,
/// see [`thumbnail`](`Self::thumbnail`)
#[derive(bon::Builder, Clone, Debug)]
pub struct InputPaidMedia {
	/// The wrapped media item
	#[builder(into)]
	pub media: InputMedia,

	/// Thumbnail of the paid media.
	///
	/// If set, it replaces the thumbnail of the inner item: only one thumbnail per paid item is ever sent or uploaded
	pub thumbnail: Option<MediaSource>,

	/// Width as sent to the remote service. Falls back to the width of the inner item
	pub width: Option<u32>,

	/// Height as sent to the remote service. Falls back to the height of the inner item
	pub height: Option<u32>,

	/// Duration in seconds as sent to the remote service. Falls back to the duration of the inner item
	pub duration: Option<u32>,
}

impl InputPaidMedia {
	/// Wraps `media` without overriding any of its metadata
	#[must_use]
	pub fn new(media: impl Into<InputMedia>) -> Self {
		Self::builder().media(media).build()
	}

	/// Kind of the wrapped item
	#[must_use]
	pub fn kind(&self) -> MediaKind {
		self.media.kind()
	}

	/// The thumbnail that is actually sent: the one of the wrapper if it's set, or the one of the inner item otherwise
	#[must_use]
	pub fn effective_thumbnail(&self) -> Option<&MediaSource> {
		self.thumbnail
			.as_ref()
			.or_else(|| self.media.thumbnail())
	}

	/// Mutable version of [`effective_thumbnail`](`Self::effective_thumbnail`)
	pub fn effective_thumbnail_mut(&mut self) -> Option<&mut MediaSource> {
		if self.thumbnail.is_some() {
			self.thumbnail.as_mut()
		} else {
			self.media.thumbnail_mut()
		}
	}
}

impl Serialize for InputPaidMedia {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		#[derive(Serialize)]
		struct Wire<'a> {
			#[serde(rename = "type")]
			kind: MediaKind,
			media: &'a MediaSource,
			#[serde(skip_serializing_if = "Option::is_none")]
			thumbnail: Option<&'a MediaSource>,
			#[serde(skip_serializing_if = "Option::is_none")]
			width: Option<u32>,
			#[serde(skip_serializing_if = "Option::is_none")]
			height: Option<u32>,
			#[serde(skip_serializing_if = "Option::is_none")]
			duration: Option<u32>,
			#[serde(skip_serializing_if = "crate::media::is_false")]
			supports_streaming: bool,
		}

		Wire {
			kind: self.kind(),
			media: self.media.media(),
			thumbnail: self.effective_thumbnail(),
			width: self.width.or_else(|| self.media.width()),
			height: self.height.or_else(|| self.media.height()),
			duration: self.duration.or_else(|| self.media.duration()),
			supports_streaming: self.media.supports_streaming(),
		}
		.serialize(serializer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::media::{InputMediaPhoto, InputMediaVideo};

	use serde_json::json;

	#[test]
	fn wrapper_thumbnail_takes_precedence() {
		let paid = InputPaidMedia::builder()
			.media(
				InputMediaVideo::builder()
					.media(MediaSource::file_id("video"))
					.thumbnail(MediaSource::file_id("inner-thumb"))
					.build(),
			)
			.thumbnail(MediaSource::file_id("outer-thumb"))
			.build();

		assert_eq!(paid.effective_thumbnail().unwrap().render(), "outer-thumb");
	}

	#[test]
	fn falls_back_to_inner_thumbnail() {
		let mut paid = InputPaidMedia::new(
			InputMediaVideo::builder()
				.media(MediaSource::file_id("video"))
				.thumbnail(MediaSource::file_id("inner-thumb"))
				.build(),
		);

		assert_eq!(paid.effective_thumbnail().unwrap().render(), "inner-thumb");

		*paid.effective_thumbnail_mut().unwrap() = MediaSource::file_id("replaced");
		assert_eq!(paid.media.thumbnail().unwrap().render(), "replaced");
	}

	#[test]
	fn serialize_mirrors_inner_metadata() {
		let paid = InputPaidMedia::builder()
			.media(
				InputMediaVideo::builder()
					.media(MediaSource::url("https://example.com/video.mp4"))
					.width(1280)
					.height(720)
					.duration(30)
					.supports_streaming(true)
					.build(),
			)
			.width(640)
			.build();

		assert_eq!(
			serde_json::to_value(&paid).unwrap(),
			json!({
				"type": "video",
				"media": "https://example.com/video.mp4",
				"width": 640,
				"height": 720,
				"duration": 30,
				"supports_streaming": true,
			})
		);
	}

	#[test]
	fn serialize_photo() {
		let paid = InputPaidMedia::new(InputMediaPhoto::new(MediaSource::file_id("photo123")));

		assert_eq!(
			serde_json::to_value(&paid).unwrap(),
			json!({ "type": "photo", "media": "photo123" })
		);
	}
}
