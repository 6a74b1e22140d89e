/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::entity::{MessageEntity, ParseMode};
use crate::source::MediaSource;

use serde::Serialize;

/// An animation (GIF or H.264/MPEG-4 AVC video without sound) to be sent
#[derive(bon::Builder, Serialize, Clone, Debug)]
pub struct InputMediaAnimation {
	#[expect(missing_docs, reason = "self-documenting")]
	pub media: MediaSource,

	#[expect(missing_docs, reason = "self-documenting")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub thumbnail: Option<MediaSource>,

	#[expect(missing_docs, reason = "self-documenting")]
	#[builder(into)]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub caption: Option<String>,

	#[expect(missing_docs, reason = "self-documenting")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub parse_mode: Option<ParseMode>,

	#[expect(missing_docs, reason = "self-documenting")]
	#[builder(default)]
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub caption_entities: Vec<MessageEntity>,

	#[expect(missing_docs, reason = "self-documenting")]
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

	#[expect(missing_docs, reason = "self-documenting")]
	#[builder(default)]
	#[serde(skip_serializing_if = "crate::media::is_false")]
	pub has_spoiler: bool,
}

impl InputMediaAnimation {
	/// Creates an animation without a caption or a thumbnail
	#[must_use]
	pub fn new(media: MediaSource) -> Self {
		Self::builder().media(media).build()
	}
}
