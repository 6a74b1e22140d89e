/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains all media items that can be sent: [`InputMedia`], [`InputPaidMedia`], and the list element [`InputMediaItem`],
//! as well as the [`MediaSources`] trait that exposes the sources of an item that may need uploading

pub mod animation;
pub mod audio;
pub mod document;
pub mod entity;
pub mod paid;
pub mod photo;
pub mod video;

pub use self::{
	animation::InputMediaAnimation,
	audio::InputMediaAudio,
	document::InputMediaDocument,
	entity::{MessageEntity, MessageEntityKind, ParseMode},
	paid::InputPaidMedia,
	photo::InputMediaPhoto,
	video::InputMediaVideo,
};

use crate::source::MediaSource;

use serde::Serialize;
use std::fmt::{self, Display};

/// Access to the sources of a media item that may need uploading.
///
/// Both [`prepare_for_params`](`crate::resolve::prepare_for_params`) and [`collect_files`](`crate::collect::collect_files`)
/// only ever look at an item through this trait, so they always agree on which sources an item has
pub trait MediaSources: Clone {
	/// The primary source of the item, if there is an item at all
	fn media_source(&self) -> Option<&MediaSource>;

	/// The thumbnail that is sent along with the item, if any
	fn thumb_source(&self) -> Option<&MediaSource>;

	/// Mutable version of [`media_source`](`Self::media_source`)
	fn media_source_mut(&mut self) -> Option<&mut MediaSource>;

	/// Mutable version of [`thumb_source`](`Self::thumb_source`)
	fn thumb_source_mut(&mut self) -> Option<&mut MediaSource>;
}

/// Kind of a media item. Written as the `type` field on the wire
#[expect(missing_docs, reason = "names are self-documenting")]
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
	Photo,
	Video,
	Animation,
	Audio,
	Document,
}

/// A single media item
#[expect(missing_docs, reason = "names are self-documenting")]
#[derive(Serialize, Clone, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputMedia {
	Photo(InputMediaPhoto),
	Video(InputMediaVideo),
	Animation(InputMediaAnimation),
	Audio(InputMediaAudio),
	Document(InputMediaDocument),
}

/// An element of a list of media to send: either a regular media item or a paid one
#[derive(Serialize, Clone, Debug)]
#[serde(untagged)]
pub enum InputMediaItem {
	/// A regular media item
	Media(InputMedia),

	/// A media item that is only shown after the user pays for it
	Paid(InputPaidMedia),
}

impl InputMedia {
	/// Kind of this item
	#[must_use]
	pub const fn kind(&self) -> MediaKind {
		match self {
			InputMedia::Photo(_) => MediaKind::Photo,
			InputMedia::Video(_) => MediaKind::Video,
			InputMedia::Animation(_) => MediaKind::Animation,
			InputMedia::Audio(_) => MediaKind::Audio,
			InputMedia::Document(_) => MediaKind::Document,
		}
	}

	/// The primary source of this item
	#[must_use]
	pub const fn media(&self) -> &MediaSource {
		match self {
			InputMedia::Photo(x) => &x.media,
			InputMedia::Video(x) => &x.media,
			InputMedia::Animation(x) => &x.media,
			InputMedia::Audio(x) => &x.media,
			InputMedia::Document(x) => &x.media,
		}
	}

	/// Mutable version of [`media`](`Self::media`)
	pub fn media_mut(&mut self) -> &mut MediaSource {
		match self {
			InputMedia::Photo(x) => &mut x.media,
			InputMedia::Video(x) => &mut x.media,
			InputMedia::Animation(x) => &mut x.media,
			InputMedia::Audio(x) => &mut x.media,
			InputMedia::Document(x) => &mut x.media,
		}
	}

	/// The thumbnail of this item. Photos never have one
	#[must_use]
	pub const fn thumbnail(&self) -> Option<&MediaSource> {
		match self {
			InputMedia::Photo(_) => None,
			InputMedia::Video(x) => x.thumbnail.as_ref(),
			InputMedia::Animation(x) => x.thumbnail.as_ref(),
			InputMedia::Audio(x) => x.thumbnail.as_ref(),
			InputMedia::Document(x) => x.thumbnail.as_ref(),
		}
	}

	/// Mutable version of [`thumbnail`](`Self::thumbnail`)
	pub fn thumbnail_mut(&mut self) -> Option<&mut MediaSource> {
		match self {
			InputMedia::Photo(_) => None,
			InputMedia::Video(x) => x.thumbnail.as_mut(),
			InputMedia::Animation(x) => x.thumbnail.as_mut(),
			InputMedia::Audio(x) => x.thumbnail.as_mut(),
			InputMedia::Document(x) => x.thumbnail.as_mut(),
		}
	}

	/// Caption of this item
	#[must_use]
	pub fn caption(&self) -> Option<&str> {
		match self {
			InputMedia::Photo(x) => x.caption.as_deref(),
			InputMedia::Video(x) => x.caption.as_deref(),
			InputMedia::Animation(x) => x.caption.as_deref(),
			InputMedia::Audio(x) => x.caption.as_deref(),
			InputMedia::Document(x) => x.caption.as_deref(),
		}
	}

	/// Replaces the caption of this item
	pub fn set_caption(&mut self, caption: Option<String>) {
		let field = match self {
			InputMedia::Photo(x) => &mut x.caption,
			InputMedia::Video(x) => &mut x.caption,
			InputMedia::Animation(x) => &mut x.caption,
			InputMedia::Audio(x) => &mut x.caption,
			InputMedia::Document(x) => &mut x.caption,
		};

		*field = caption;
	}

	/// Formatting spans of the caption of this item
	#[must_use]
	pub fn caption_entities(&self) -> &[MessageEntity] {
		match self {
			InputMedia::Photo(x) => &x.caption_entities,
			InputMedia::Video(x) => &x.caption_entities,
			InputMedia::Animation(x) => &x.caption_entities,
			InputMedia::Audio(x) => &x.caption_entities,
			InputMedia::Document(x) => &x.caption_entities,
		}
	}

	/// Mutable access to the formatting spans of the caption of this item
	pub fn caption_entities_mut(&mut self) -> &mut Vec<MessageEntity> {
		match self {
			InputMedia::Photo(x) => &mut x.caption_entities,
			InputMedia::Video(x) => &mut x.caption_entities,
			InputMedia::Animation(x) => &mut x.caption_entities,
			InputMedia::Audio(x) => &mut x.caption_entities,
			InputMedia::Document(x) => &mut x.caption_entities,
		}
	}

	#[expect(missing_docs, reason = "self-documenting")]
	#[must_use]
	pub const fn width(&self) -> Option<u32> {
		match self {
			InputMedia::Video(x) => x.width,
			InputMedia::Animation(x) => x.width,
			InputMedia::Photo(_) | InputMedia::Audio(_) | InputMedia::Document(_) => None,
		}
	}

	#[expect(missing_docs, reason = "self-documenting")]
	#[must_use]
	pub const fn height(&self) -> Option<u32> {
		match self {
			InputMedia::Video(x) => x.height,
			InputMedia::Animation(x) => x.height,
			InputMedia::Photo(_) | InputMedia::Audio(_) | InputMedia::Document(_) => None,
		}
	}

	/// Duration in seconds
	#[must_use]
	pub const fn duration(&self) -> Option<u32> {
		match self {
			InputMedia::Video(x) => x.duration,
			InputMedia::Animation(x) => x.duration,
			InputMedia::Audio(x) => x.duration,
			InputMedia::Photo(_) | InputMedia::Document(_) => None,
		}
	}

	/// Only videos can support streaming
	#[must_use]
	pub const fn supports_streaming(&self) -> bool {
		match self {
			InputMedia::Video(x) => x.supports_streaming,
			_ => false,
		}
	}
}

impl InputMediaItem {
	/// Kind of the item. For paid media that is the kind of the wrapped item
	#[must_use]
	pub fn kind(&self) -> MediaKind {
		match self {
			InputMediaItem::Media(media) => media.kind(),
			InputMediaItem::Paid(paid) => paid.kind(),
		}
	}

	/// Checks if this is a paid media item
	#[must_use]
	pub const fn is_paid(&self) -> bool {
		matches!(self, InputMediaItem::Paid(_))
	}
}

impl MediaSources for InputMedia {
	fn media_source(&self) -> Option<&MediaSource> {
		Some(self.media())
	}

	fn thumb_source(&self) -> Option<&MediaSource> {
		self.thumbnail()
	}

	fn media_source_mut(&mut self) -> Option<&mut MediaSource> {
		Some(self.media_mut())
	}

	fn thumb_source_mut(&mut self) -> Option<&mut MediaSource> {
		self.thumbnail_mut()
	}
}

// the wrapper has no primary source of its own
impl MediaSources for InputPaidMedia {
	fn media_source(&self) -> Option<&MediaSource> {
		Some(self.media.media())
	}

	fn thumb_source(&self) -> Option<&MediaSource> {
		self.effective_thumbnail()
	}

	fn media_source_mut(&mut self) -> Option<&mut MediaSource> {
		Some(self.media.media_mut())
	}

	fn thumb_source_mut(&mut self) -> Option<&mut MediaSource> {
		self.effective_thumbnail_mut()
	}
}

impl MediaSources for InputMediaItem {
	fn media_source(&self) -> Option<&MediaSource> {
		match self {
			InputMediaItem::Media(media) => media.media_source(),
			InputMediaItem::Paid(paid) => paid.media_source(),
		}
	}

	fn thumb_source(&self) -> Option<&MediaSource> {
		match self {
			InputMediaItem::Media(media) => media.thumb_source(),
			InputMediaItem::Paid(paid) => paid.thumb_source(),
		}
	}

	fn media_source_mut(&mut self) -> Option<&mut MediaSource> {
		match self {
			InputMediaItem::Media(media) => media.media_source_mut(),
			InputMediaItem::Paid(paid) => paid.media_source_mut(),
		}
	}

	fn thumb_source_mut(&mut self) -> Option<&mut MediaSource> {
		match self {
			InputMediaItem::Media(media) => media.thumb_source_mut(),
			InputMediaItem::Paid(paid) => paid.thumb_source_mut(),
		}
	}
}

/// An absent item has no sources at all
impl<T: MediaSources> MediaSources for Option<T> {
	fn media_source(&self) -> Option<&MediaSource> {
		self.as_ref().and_then(MediaSources::media_source)
	}

	fn thumb_source(&self) -> Option<&MediaSource> {
		self.as_ref().and_then(MediaSources::thumb_source)
	}

	fn media_source_mut(&mut self) -> Option<&mut MediaSource> {
		self.as_mut().and_then(MediaSources::media_source_mut)
	}

	fn thumb_source_mut(&mut self) -> Option<&mut MediaSource> {
		self.as_mut().and_then(MediaSources::thumb_source_mut)
	}
}

impl Display for MediaKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			MediaKind::Photo => "photo",
			MediaKind::Video => "video",
			MediaKind::Animation => "animation",
			MediaKind::Audio => "audio",
			MediaKind::Document => "document",
		})
	}
}

macro_rules! impl_from_media {
	($($variant:ident($ty:ty)),+ $(,)?) => {
		$(
			impl From<$ty> for InputMedia {
				fn from(value: $ty) -> Self {
					InputMedia::$variant(value)
				}
			}

			impl From<$ty> for InputMediaItem {
				fn from(value: $ty) -> Self {
					InputMediaItem::Media(InputMedia::$variant(value))
				}
			}
		)+
	};
}

impl_from_media!(
	Photo(InputMediaPhoto),
	Video(InputMediaVideo),
	Animation(InputMediaAnimation),
	Audio(InputMediaAudio),
	Document(InputMediaDocument),
);

impl From<InputMedia> for InputMediaItem {
	fn from(value: InputMedia) -> Self {
		InputMediaItem::Media(value)
	}
}

impl From<InputPaidMedia> for InputMediaItem {
	fn from(value: InputPaidMedia) -> Self {
		InputMediaItem::Paid(value)
	}
}

#[expect(clippy::trivially_copy_pass_by_ref, reason = "signature required by serde")]
pub(crate) fn is_false(b: &bool) -> bool {
	!*b
}
