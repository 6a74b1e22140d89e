/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Caption formatting: [`ParseMode`] and [`MessageEntity`]

use serde::{Deserialize, Serialize};

/// How the remote service should parse the markup in a caption
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParseMode {
	#[expect(missing_docs, reason = "self-documenting")]
	#[serde(rename = "HTML")]
	Html,

	#[expect(missing_docs, reason = "self-documenting")]
	MarkdownV2,

	/// Legacy Markdown, kept for backwards compatibility
	Markdown,
}

/// A formatting span inside a caption, used instead of a [`ParseMode`]
#[derive(bon::Builder, Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(deny_unknown_fields)]
pub struct MessageEntity {
	/// Type of the span
	#[serde(rename = "type")]
	pub kind: MessageEntityKind,

	/// Offset in UTF-16 code units to the start of the span
	pub offset: usize,

	/// Length of the span in UTF-16 code units
	pub length: usize,

	/// URL that will be opened after the user taps on the text, for [`MessageEntityKind::TextLink`] only
	#[builder(into)]
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub url: Option<String>,

	/// Programming language of the entity text, for [`MessageEntityKind::Pre`] only
	#[builder(into)]
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub language: Option<String>,

	/// Unique identifier of the custom emoji, for [`MessageEntityKind::CustomEmoji`] only
	#[builder(into)]
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub custom_emoji_id: Option<String>,
}

#[expect(missing_docs, reason = "names are self-documenting")]
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum MessageEntityKind {
	Mention,
	Hashtag,
	Cashtag,
	BotCommand,
	Url,
	Email,
	PhoneNumber,
	Bold,
	Italic,
	Underline,
	Strikethrough,
	Spoiler,
	Blockquote,
	ExpandableBlockquote,
	Code,
	Pre,
	TextLink,
	CustomEmoji,
}
