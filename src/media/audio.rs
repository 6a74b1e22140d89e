/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`InputMediaAudio`]

use super::entity::{MessageEntity, ParseMode};
use crate::source::MediaSource;

use serde::Serialize;

/// An audio file to be treated as music
#[derive(bon::Builder, Serialize, Clone, Debug)]
pub struct InputMediaAudio {
	/// The audio file itself
	pub media: MediaSource,

	/// Album cover of the track
	#[serde(skip_serializing_if = "Option::is_none")]
	pub thumbnail: Option<MediaSource>,

	/// Caption of the audio, 0-1024 characters after entities parsing
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

	/// Duration in seconds
	#[serde(skip_serializing_if = "Option::is_none")]
	pub duration: Option<u32>,

	/// Performer of the track
	#[builder(into)]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub performer: Option<String>,

	/// Title of the track
	#[builder(into)]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,

	/// Hide the audio behind a spoiler
	#[builder(default)]
	#[serde(skip_serializing_if = "crate::media::is_false")]
	pub has_spoiler: bool,
}

impl InputMediaAudio {
	/// Creates an audio file without a caption or a thumbnail
	#[must_use]
	pub fn new(media: MediaSource) -> Self {
		Self::builder().media(media).build()
	}
}
