/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`InputMediaDocument`]

use super::entity::{MessageEntity, ParseMode};
use crate::source::MediaSource;

use serde::Serialize;

/// A general file to be sent
#[derive(bon::Builder, Serialize, Clone, Debug)]
pub struct InputMediaDocument {
	/// The file itself
	pub media: MediaSource,

	/// Thumbnail of the file
	#[serde(skip_serializing_if = "Option::is_none")]
	pub thumbnail: Option<MediaSource>,

	/// Caption of the document, 0-1024 characters after entities parsing
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

	/// Disable automatic server-side content type detection for files uploaded via multipart/form-data
	#[builder(default)]
	#[serde(skip_serializing_if = "crate::media::is_false")]
	pub disable_content_type_detection: bool,

	/// Hide the document behind a spoiler
	#[builder(default)]
	#[serde(skip_serializing_if = "crate::media::is_false")]
	pub has_spoiler: bool,
}

impl InputMediaDocument {
	/// Creates a document without a caption or a thumbnail
	#[must_use]
	pub fn new(media: MediaSource) -> Self {
		Self::builder().media(media).build()
	}
}
