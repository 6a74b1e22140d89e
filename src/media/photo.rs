/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`InputMediaPhoto`]

use super::entity::{MessageEntity, ParseMode};
use crate::source::MediaSource;

use serde::Serialize;

/// A photo to be sent
#[derive(bon::Builder, Serialize, Clone, Debug)]
pub struct InputMediaPhoto {
	/// The photo itself
	pub media: MediaSource,

	/// Caption of the photo, 0-1024 characters after entities parsing
	#[builder(into)]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub caption: Option<String>,

	/// Mode for parsing entities in the caption
	#[serde(skip_serializing_if = "Option::is_none")]
	pub parse_mode: Option<ParseMode>,

	/// Formatting spans of the caption, can be specified instead of [`parse_mode`](`Self::parse_mode`)
	#[builder(default)]
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub caption_entities: Vec<MessageEntity>,

	/// Show the caption above the photo instead of below
	#[builder(default)]
	#[serde(skip_serializing_if = "crate::media::is_false")]
	pub show_caption_above_media: bool,

	/// Cover the photo with a spoiler animation
	#[builder(default)]
	#[serde(skip_serializing_if = "crate::media::is_false")]
	pub has_spoiler: bool,
}

impl InputMediaPhoto {
	/// Creates a photo without a caption
	#[must_use]
	pub fn new(media: MediaSource) -> Self {
		Self::builder().media(media).build()
	}
}
