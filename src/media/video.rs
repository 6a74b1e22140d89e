/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`InputMediaVideo`]

use super::entity::{MessageEntity, ParseMode};
use crate::source::MediaSource;

use serde::Serialize;

/// A video to be sent
#[derive(bon::Builder, Serialize, Clone, Debug)]
pub struct InputMediaVideo {
	/// The video itself
	pub media: MediaSource,

	/// Thumbnail of the video. Should be a JPEG no larger than 200 kB and 320x320
	#[serde(skip_serializing_if = "Option::is_none")]
	pub thumbnail: Option<MediaSource>,

	/// Caption of the video, 0-1024 characters after entities parsing
	#[builder(into)]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub caption: Option<String>,

	/// Mode for parsing entities in the caption
	#[serde(skip_serializing_if = "Option::is_none")]
	pub parse_mode: Option<ParseMode>,

	/// Formatting spans of the caption
	#[builder(default)]
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub caption_entities: Vec<MessageEntity>,

	/// Show the caption above the video instead of below
	#[builder(default)]
	#[serde(skip_serializing_if = "crate::media::is_false")]
	pub show_caption_above_media: bool,

	#[expect(missing_docs, reason = "self-documenting")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub width: Option<u32>,

	#[expect(missing_docs, reason = "self-documenting")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub height: Option<u32>,

	/// Duration in seconds
	#[serde(skip_serializing_if = "Option::is_none")]
	pub duration: Option<u32>,

	/// The video is suitable for streaming
	#[builder(default)]
	#[serde(skip_serializing_if = "crate::media::is_false")]
	pub supports_streaming: bool,

	/// Cover the video with a spoiler animation
	#[builder(default)]
	#[serde(skip_serializing_if = "crate::media::is_false")]
	pub has_spoiler: bool,
}

impl InputMediaVideo {
	/// Creates a video without a caption or a thumbnail
	#[must_use]
	pub fn new(media: MediaSource) -> Self {
		Self::builder().media(media).build()
	}
}
