/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains the [`EditMessageMedia`] request

use super::{ChatId, MediaRequest, RequestError};
use crate::media::InputMedia;

use serde::Serialize;
use std::slice;

/// Replace the media of an already sent message.
///
/// The message is identified either by [`chat_id`](`Self::chat_id`) and [`message_id`](`Self::message_id`),
/// or by [`inline_message_id`](`Self::inline_message_id`)
#[derive(bon::Builder, Serialize, Debug)]
pub struct EditMessageMedia {
	/// Chat the message was sent to
	#[builder(into)]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub chat_id: Option<ChatId>,

	/// Id of the message in [`chat_id`](`Self::chat_id`)
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message_id: Option<i64>,

	/// Id of an inline message
	#[builder(into)]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub inline_message_id: Option<String>,

	/// The new media of the message
	#[builder(into)]
	#[serde(skip)]
	pub media: InputMedia,
}

impl MediaRequest for EditMessageMedia {
	type Media = InputMedia;

	const METHOD: &'static str = "editMessageMedia";
	const SINGLE_MEDIA: bool = true;

	fn media(&self) -> &[Self::Media] {
		slice::from_ref(&self.media)
	}

	fn validate(&self) -> Result<(), RequestError> {
		match (&self.chat_id, self.message_id, &self.inline_message_id) {
			(Some(_), Some(_), None) | (None, None, Some(_)) => Ok(()),
			_ => Err(RequestError::MissingTarget),
		}
	}
}
