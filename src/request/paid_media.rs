/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains the [`PaidMedia`] request

use super::{ChatId, MediaRequest, RequestError};
use crate::media::{InputPaidMedia, MediaKind, MessageEntity, ParseMode};

use serde::Serialize;

/// Send photos or videos that are only shown after the user pays for them with Telegram Stars
#[derive(bon::Builder, Serialize, Debug)]
pub struct PaidMedia {
	/// Target chat
	#[builder(into)]
	pub chat_id: ChatId,

	/// Price of access to the media, 1 to 10000
	pub star_count: u32,

	/// The media to send, 1 to 10 items
	#[serde(skip)]
	pub media: Vec<InputPaidMedia>,

	/// Bot-defined payload, not shown to the user
	#[builder(into)]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub payload: Option<String>,

	/// Caption of the whole album
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

	/// Send silently
	#[builder(default)]
	#[serde(skip_serializing_if = "crate::media::is_false")]
	pub disable_notification: bool,

	/// Protect the contents from forwarding and saving
	#[builder(default)]
	#[serde(skip_serializing_if = "crate::media::is_false")]
	pub protect_content: bool,
}

impl PaidMedia {
	/// Minimum number of items
	pub const MIN_MEDIA: usize = 1;

	/// Maximum number of items
	pub const MAX_MEDIA: usize = 10;

	/// Maximum price in Telegram Stars
	pub const MAX_STAR_COUNT: u32 = 10_000;
}

impl MediaRequest for PaidMedia {
	type Media = InputPaidMedia;

	const METHOD: &'static str = "sendPaidMedia";

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

		if !(1..=Self::MAX_STAR_COUNT).contains(&self.star_count) {
			return Err(RequestError::StarCount(self.star_count));
		}

		for (index, item) in self.media.iter().enumerate() {
			match item.kind() {
				MediaKind::Photo | MediaKind::Video => (),
				kind => {
					return Err(RequestError::UnsupportedMedia {
						method: Self::METHOD,
						index,
						kind,
						reason: "only photos and videos can be sent as paid media",
					});
				}
			}
		}

		Ok(())
	}
}
