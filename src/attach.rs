/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`AttachName`], the naming scheme that ties the JSON parameters to the uploaded multipart parts
//!
//! Both [`prepare_for_params`](`crate::resolve::prepare_for_params`) and [`collect_files`](`crate::collect::collect_files`)
//! name everything through this type, so a reference and the part it points to are always spelled the same way.

use std::fmt::{self, Display};

/// URI scheme the remote service uses to refer to a multipart part of the same request
pub const ATTACH_SCHEME: &str = "attach://";

/// Which source of a media item a part carries
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Slot {
	/// The primary media source
	Media,

	/// The thumbnail source
	Thumb,
}

/// Name of a multipart part, e.g. `file-0` or `file-2-thumb`
///
/// The index is always the position of the item in the top-level list,
/// even for paid media whose primary source lives on the inner item.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct AttachName {
	/// Position of the item in the top-level list
	pub index: usize,

	/// Which source of that item this name refers to
	pub slot: Slot,
}

impl AttachName {
	/// Name of the primary media part of the item at `index`
	#[must_use]
	pub const fn media(index: usize) -> Self {
		Self {
			index,
			slot: Slot::Media,
		}
	}

	/// Name of the thumbnail part of the item at `index`
	#[must_use]
	pub const fn thumb(index: usize) -> Self {
		Self {
			index,
			slot: Slot::Thumb,
		}
	}

	/// The `attach://` URI pointing to this part
	#[must_use]
	pub fn uri(&self) -> String {
		format!("{ATTACH_SCHEME}{self}")
	}
}

impl Display for AttachName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.slot {
			Slot::Media => write!(f, "file-{}", self.index),
			Slot::Thumb => write!(f, "file-{}-thumb", self.index),
		}
	}
}

impl Display for Slot {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Slot::Media => "media",
			Slot::Thumb => "thumbnail",
		})
	}
}
