/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains the functions that produce independent copies of media items.
//!
//! Every media item owns all of its data (captions, caption entities, the inner item of paid media),
//! so a copy shares no mutable storage with the original at any depth.
//! The only exception is [`SharedReader`](`crate::source::SharedReader`) which is a handle to a stream rather than data

use crate::media::MediaSources;

/// Copies a single media item. Copying an absent item results in an absent item
#[must_use]
pub fn clone_item<T: MediaSources>(item: Option<&T>) -> Option<T> {
	item.cloned()
}

/// Copies a list of media items, keeping their order
#[must_use]
pub fn clone_list<T: MediaSources>(items: &[T]) -> Vec<T> {
	tracing::trace!("Copying {} media items", items.len());
	items.to_vec()
}
