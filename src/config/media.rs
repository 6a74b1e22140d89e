/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{ConfigError, Source};
use crate::media::{
	InputMedia as CInputMedia, InputMediaAnimation as CAnimation, InputMediaAudio as CAudio,
	InputMediaDocument as CDocument, InputMediaItem as CInputMediaItem, InputMediaPhoto as CPhoto,
	InputMediaVideo as CVideo, InputPaidMedia as CPaid, MessageEntity, ParseMode,
};

use serde::{Deserialize, Serialize};

/// Refer to [`crate::media::InputMediaItem`]
#[expect(missing_docs, reason = "refer to the core types")]
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputMedia {
	Photo(Photo),
	Video(Video),
	Animation(Animation),
	Audio(Audio),
	Document(Document),
	Paid(Paid),
}

#[expect(missing_docs, reason = "refer to the core type")]
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct Photo {
	pub media: Source,
	pub caption: Option<String>,
	pub parse_mode: Option<ParseMode>,
	#[serde(default)]
	pub caption_entities: Vec<MessageEntity>,
	#[serde(default)]
	pub show_caption_above_media: bool,
	#[serde(default)]
	pub has_spoiler: bool,
}

#[expect(missing_docs, reason = "refer to the core type")]
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct Video {
	pub media: Source,
	pub thumbnail: Option<Source>,
	pub caption: Option<String>,
	pub parse_mode: Option<ParseMode>,
	#[serde(default)]
	pub caption_entities: Vec<MessageEntity>,
	#[serde(default)]
	pub show_caption_above_media: bool,
	pub width: Option<u32>,
	pub height: Option<u32>,
	pub duration: Option<u32>,
	#[serde(default)]
	pub supports_streaming: bool,
	#[serde(default)]
	pub has_spoiler: bool,
}

#[expect(missing_docs, reason = "refer to the core type")]
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct Animation {
	pub media: Source,
	pub thumbnail: Option<Source>,
	pub caption: Option<String>,
	pub parse_mode: Option<ParseMode>,
	#[serde(default)]
	pub caption_entities: Vec<MessageEntity>,
	#[serde(default)]
	pub show_caption_above_media: bool,
	pub width: Option<u32>,
	pub height: Option<u32>,
	pub duration: Option<u32>,
	#[serde(default)]
	pub has_spoiler: bool,
}

#[expect(missing_docs, reason = "refer to the core type")]
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct Audio {
	pub media: Source,
	pub thumbnail: Option<Source>,
	pub caption: Option<String>,
	pub parse_mode: Option<ParseMode>,
	#[serde(default)]
	pub caption_entities: Vec<MessageEntity>,
	pub duration: Option<u32>,
	pub performer: Option<String>,
	pub title: Option<String>,
	#[serde(default)]
	pub has_spoiler: bool,
}

#[expect(missing_docs, reason = "refer to the core type")]
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct Document {
	pub media: Source,
	pub thumbnail: Option<Source>,
	pub caption: Option<String>,
	pub parse_mode: Option<ParseMode>,
	#[serde(default)]
	pub caption_entities: Vec<MessageEntity>,
	#[serde(default)]
	pub disable_content_type_detection: bool,
	#[serde(default)]
	pub has_spoiler: bool,
}

/// Paid media. The inner item can't be paid media itself
#[expect(missing_docs, reason = "refer to the core type")]
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct Paid {
	pub media: Box<InputMedia>,
	pub thumbnail: Option<Source>,
	pub width: Option<u32>,
	pub height: Option<u32>,
	pub duration: Option<u32>,
}

impl InputMedia {
	/// Converts into the core type
	///
	/// # Errors
	/// * if any of the URLs is invalid
	/// * if paid media wraps paid media
	pub fn parse(self) -> Result<CInputMediaItem, ConfigError> {
		Ok(match self {
			InputMedia::Paid(paid) => CInputMediaItem::Paid(paid.parse()?),
			other => CInputMediaItem::Media(other.parse_regular()?),
		})
	}

	fn parse_regular(self) -> Result<CInputMedia, ConfigError> {
		Ok(match self {
			InputMedia::Photo(x) => CInputMedia::Photo(x.parse()?),
			InputMedia::Video(x) => CInputMedia::Video(x.parse()?),
			InputMedia::Animation(x) => CInputMedia::Animation(x.parse()?),
			InputMedia::Audio(x) => CInputMedia::Audio(x.parse()?),
			InputMedia::Document(x) => CInputMedia::Document(x.parse()?),
			InputMedia::Paid(_) => return Err(ConfigError::NestedPaidMedia),
		})
	}
}

impl Photo {
	#[expect(missing_docs, reason = "refer to InputMedia::parse")]
	pub fn parse(self) -> Result<CPhoto, ConfigError> {
		Ok(CPhoto {
			media: self.media.parse()?,
			caption: self.caption,
			parse_mode: self.parse_mode,
			caption_entities: self.caption_entities,
			show_caption_above_media: self.show_caption_above_media,
			has_spoiler: self.has_spoiler,
		})
	}
}

impl Video {
	#[expect(missing_docs, reason = "refer to InputMedia::parse")]
	pub fn parse(self) -> Result<CVideo, ConfigError> {
		Ok(CVideo {
			media: self.media.parse()?,
			thumbnail: self.thumbnail.map(Source::parse).transpose()?,
			caption: self.caption,
			parse_mode: self.parse_mode,
			caption_entities: self.caption_entities,
			show_caption_above_media: self.show_caption_above_media,
			width: self.width,
			height: self.height,
			duration: self.duration,
			supports_streaming: self.supports_streaming,
			has_spoiler: self.has_spoiler,
		})
	}
}

impl Animation {
	#[expect(missing_docs, reason = "refer to InputMedia::parse")]
	pub fn parse(self) -> Result<CAnimation, ConfigError> {
		Ok(CAnimation {
			media: self.media.parse()?,
			thumbnail: self.thumbnail.map(Source::parse).transpose()?,
			caption: self.caption,
			parse_mode: self.parse_mode,
			caption_entities: self.caption_entities,
			show_caption_above_media: self.show_caption_above_media,
			width: self.width,
			height: self.height,
			duration: self.duration,
			has_spoiler: self.has_spoiler,
		})
	}
}

impl Audio {
	#[expect(missing_docs, reason = "refer to InputMedia::parse")]
	pub fn parse(self) -> Result<CAudio, ConfigError> {
		Ok(CAudio {
			media: self.media.parse()?,
			thumbnail: self.thumbnail.map(Source::parse).transpose()?,
			caption: self.caption,
			parse_mode: self.parse_mode,
			caption_entities: self.caption_entities,
			duration: self.duration,
			performer: self.performer,
			title: self.title,
			has_spoiler: self.has_spoiler,
		})
	}
}

impl Document {
	#[expect(missing_docs, reason = "refer to InputMedia::parse")]
	pub fn parse(self) -> Result<CDocument, ConfigError> {
		Ok(CDocument {
			media: self.media.parse()?,
			thumbnail: self.thumbnail.map(Source::parse).transpose()?,
			caption: self.caption,
			parse_mode: self.parse_mode,
			caption_entities: self.caption_entities,
			disable_content_type_detection: self.disable_content_type_detection,
			has_spoiler: self.has_spoiler,
		})
	}
}

impl Paid {
	#[expect(missing_docs, reason = "refer to InputMedia::parse")]
	pub fn parse(self) -> Result<CPaid, ConfigError> {
		Ok(CPaid {
			media: self.media.parse_regular()?,
			thumbnail: self.thumbnail.map(Source::parse).transpose()?,
			width: self.width,
			height: self.height,
			duration: self.duration,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	use assert_matches::assert_matches;

	#[test]
	fn nested_paid_media() {
		let media: InputMedia = serde_json::from_str(
			r#"{
				"type": "paid",
				"media": { "type": "paid", "media": { "type": "photo", "media": { "file_id": "x" } } }
			}"#,
		)
		.unwrap();

		assert_matches!(media.parse(), Err(ConfigError::NestedPaidMedia));
	}

	#[test]
	fn unknown_fields_are_rejected() {
		assert!(
			serde_json::from_str::<InputMedia>(
				r#"{ "type": "photo", "media": { "file_id": "x" }, "thumbnail": { "file_id": "y" } }"#
			)
			.is_err()
		);
	}

	#[test]
	fn caption_formatting() {
		let media: InputMedia = serde_json::from_str(
			r#"{
				"type": "document",
				"media": { "path": "report.pdf" },
				"caption": "Report",
				"caption_entities": [{ "type": "bold", "offset": 0, "length": 6 }]
			}"#,
		)
		.unwrap();

		let CInputMediaItem::Media(CInputMedia::Document(doc)) = media.parse().unwrap() else {
			panic!("expected a document");
		};

		assert_eq!(doc.caption.as_deref(), Some("Report"));
		assert_eq!(doc.caption_entities.len(), 1);
		assert!(doc.media.needs_upload());
	}
}
