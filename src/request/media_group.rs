/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains the [`MediaGroup`] request

use super::{ChatId, MediaRequest, RequestError};
use crate::media::{InputMedia, MediaKind};

use itertools::Itertools;
use serde::Serialize;

/// Send a group of photos, videos, documents or audios as an album
#[derive(bon::Builder, Serialize, Debug)]
pub struct MediaGroup {
	/// Target chat
	#[builder(into)]
	pub chat_id: ChatId,

	/// Target topic of a forum
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message_thread_id: Option<i64>,

	/// The album itself, 2 to 10 items.
	///
	/// Documents and audio files can only be grouped with media of the same kind
	#[serde(skip)]
	pub media: Vec<InputMedia>,

	/// Send silently
	#[builder(default)]
	#[serde(skip_serializing_if = "crate::media::is_false")]
	pub disable_notification: bool,

	/// Protect the contents from forwarding and saving
	#[builder(default)]
	#[serde(skip_serializing_if = "crate::media::is_false")]
	pub protect_content: bool,
}

impl MediaGroup {
	/// Minimum number of items in a group
	pub const MIN_MEDIA: usize = 2;

	/// Maximum number of items in a group
	pub const MAX_MEDIA: usize = 10;

	fn unsupported(index: usize, kind: MediaKind, reason: &'static str) -> RequestError {
		RequestError::UnsupportedMedia {
			method: Self::METHOD,
			index,
			kind,
			reason,
		}
	}
}

impl MediaRequest for MediaGroup {
	type Media = InputMedia;

	const METHOD: &'static str = "sendMediaGroup";

	fn media(&self) -> &[Self::Media] {
		&self.media
	}

	fn validate(&self) -> Result<(), RequestError> {
		if !(Self::MIN_MEDIA..=Self::MAX_MEDIA).contains(&self.media.len()) {
			return Err(RequestError::MediaCount {
				method: Self::METHOD,
				min: Self::MIN_MEDIA,
				max: Self::MAX_MEDIA,
				found: self.media.len(),
			});
		}

		let kinds = self.media.iter().map(InputMedia::kind);

		if let Some((index, kind)) = kinds.clone().find_position(|&k| k == MediaKind::Animation) {
			return Err(Self::unsupported(
				index,
				kind,
				"animations can't be a part of a media group",
			));
		}

		for exclusive in [MediaKind::Audio, MediaKind::Document] {
			if !kinds.clone().contains(&exclusive) {
				continue;
			}

			if let Some((index, kind)) = kinds.clone().find_position(|&k| k != exclusive) {
				return Err(Self::unsupported(
					index,
					kind,
					"audio files and documents can only be grouped with media of the same kind",
				));
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		media::{
			InputMediaAnimation, InputMediaAudio, InputMediaDocument, InputMediaPhoto,
			InputMediaVideo,
		},
		source::MediaSource,
	};

	use assert_matches::assert_matches;
	use serde_json::json;

	fn group(media: Vec<InputMedia>) -> MediaGroup {
		MediaGroup::builder().chat_id(42_i64).media(media).build()
	}

	#[test]
	fn too_few_items() {
		let request = group(vec![
			InputMediaPhoto::new(MediaSource::file_id("photo")).into(),
		]);

		assert_matches!(
			request.validate(),
			Err(RequestError::MediaCount { found: 1, .. })
		);
	}

	#[test]
	fn too_many_items() {
		let request = group(
			(0..11)
				.map(|i| InputMediaPhoto::new(MediaSource::file_id(format!("photo{i}"))).into())
				.collect(),
		);

		assert_matches!(
			request.validate(),
			Err(RequestError::MediaCount { found: 11, .. })
		);
	}

	#[test]
	fn animations_are_rejected() {
		let request = group(vec![
			InputMediaPhoto::new(MediaSource::file_id("photo")).into(),
			InputMediaAnimation::new(MediaSource::file_id("gif")).into(),
		]);

		assert_matches!(
			request.validate(),
			Err(RequestError::UnsupportedMedia {
				index: 1,
				kind: MediaKind::Animation,
				..
			})
		);
	}

	#[test]
	fn documents_only_with_documents() {
		let request = group(vec![
			InputMediaDocument::new(MediaSource::file_id("doc")).into(),
			InputMediaPhoto::new(MediaSource::file_id("photo")).into(),
		]);

		assert_matches!(
			request.validate(),
			Err(RequestError::UnsupportedMedia {
				index: 1,
				kind: MediaKind::Photo,
				..
			})
		);

		let request = group(vec![
			InputMediaAudio::new(MediaSource::file_id("a")).into(),
			InputMediaAudio::new(MediaSource::file_id("b")).into(),
		]);
		assert!(request.validate().is_ok());
	}

	#[test]
	fn prepare() {
		let request = MediaGroup::builder()
			.chat_id(42_i64)
			.message_thread_id(7)
			.media(vec![
				InputMediaPhoto::builder()
					.media(MediaSource::bytes("photo.jpg", b"photo".to_vec()))
					.caption("album")
					.build()
					.into(),
				InputMediaVideo::builder()
					.media(MediaSource::url("https://example.com/video.mp4"))
					.thumbnail(MediaSource::bytes("thumb.jpg", b"thumb".to_vec()))
					.build()
					.into(),
			])
			.build()
			.prepare()
			.unwrap();

		assert_eq!(request.method, "sendMediaGroup");
		assert_eq!(
			request.json_body(),
			json!({
				"chat_id": 42,
				"message_thread_id": 7,
				"media": [
					{ "type": "photo", "media": "attach://file-0", "caption": "album" },
					{
						"type": "video",
						"media": "https://example.com/video.mp4",
						"thumbnail": "attach://file-1-thumb",
					},
				],
			})
		);
		assert_eq!(
			request
				.files
				.iter()
				.map(|f| f.name.as_str())
				.collect::<Vec<_>>(),
			["file-0", "file-1-thumb"]
		);
	}
}
