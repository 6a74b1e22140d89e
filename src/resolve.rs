/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`prepare_for_params`] that turns a list of media into the value of the `media` request parameter

use crate::{
	attach::AttachName,
	clone::clone_list,
	media::MediaSources,
	source::MediaSource,
};

/// Copies `items` and replaces every source that has to be uploaded with an `attach://` reference.
///
/// The primary source of the item at position `i` becomes `attach://file-<i>`,
/// its thumbnail becomes `attach://file-<i>-thumb`.
/// Paid media use the index of the wrapper for the source of the inner item.
/// Remote sources and already resolved references are left as is.
///
/// `items` itself is never modified, the returned list shares no data with it.
/// The parts the references point to are produced by [`collect_files`](`crate::collect::collect_files`) from the same `items`
#[tracing::instrument(level = "trace", skip_all, fields(len = items.len()))]
#[must_use]
pub fn prepare_for_params<T: MediaSources>(items: &[T]) -> Vec<T> {
	let mut resolved = clone_list(items);

	for (index, item) in resolved.iter_mut().enumerate() {
		if let Some(source) = item.media_source_mut() {
			attach_if_local(source, AttachName::media(index));
		}

		if let Some(source) = item.thumb_source_mut() {
			attach_if_local(source, AttachName::thumb(index));
		}
	}

	resolved
}

fn attach_if_local(source: &mut MediaSource, name: AttachName) {
	if source.needs_upload() {
		tracing::trace!("Referencing {:?} as {}", source.render(), name.uri());
		*source = MediaSource::Attach(name);
	}
}
