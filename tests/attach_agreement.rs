/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! These tests assert that every `attach://` reference written into the request parameters
//! has exactly one file part with the same name, and that there are no parts nothing refers to

#![allow(clippy::missing_assert_message)]
#![allow(clippy::tests_outside_test_module)]
#![allow(clippy::unwrap_used)]

use std::{collections::BTreeSet, io::Cursor, path::PathBuf};
use tgmedia::{
	InputMedia, InputMediaItem, InputPaidMedia, MediaRequest, MediaSource, MediaSources,
	attach::ATTACH_SCHEME,
	collect_files,
	media::{
		InputMediaAnimation, InputMediaAudio, InputMediaDocument, InputMediaPhoto,
		InputMediaVideo,
	},
	prepare_for_params,
	request::{MEDIA_PARAM, media_group::MediaGroup, paid_media::PaidMedia},
};

fn fixture(name: &str) -> MediaSource {
	MediaSource::path(
		[env!("CARGO_MANIFEST_DIR"), "tests", "data", name]
			.iter()
			.collect::<PathBuf>(),
	)
}

fn rendered_media<T: MediaSources>(items: &[T]) -> Vec<String> {
	items
		.iter()
		.map(|item| item.media_source().unwrap().render().into_owned())
		.collect()
}

fn rendered_thumbs<T: MediaSources>(items: &[T]) -> Vec<String> {
	items
		.iter()
		.map(|item| {
			item.thumb_source()
				.map(|thumb| thumb.render().into_owned())
				.unwrap_or_default()
		})
		.collect()
}

fn file_names<T: MediaSources>(items: &[T]) -> Vec<String> {
	collect_files(items)
		.iter()
		.map(|part| part.name.to_string())
		.collect()
}

/// Every `attach://` name in the resolved items, in order
fn references<T: MediaSources>(resolved: &[T]) -> Vec<String> {
	resolved
		.iter()
		.flat_map(|item| [item.media_source(), item.thumb_source()])
		.flatten()
		.filter_map(|source| {
			source
				.render()
				.strip_prefix(ATTACH_SCHEME)
				.map(ToOwned::to_owned)
		})
		.collect()
}

#[test]
fn single_local_photo() {
	let items = [InputMedia::from(InputMediaPhoto::new(fixture("image.jpg")))];

	assert_eq!(rendered_media(&prepare_for_params(&items)), ["attach://file-0"]);
	assert_eq!(file_names(&items), ["file-0"]);
}

#[test]
fn single_local_video_with_thumbnail() {
	let items = [InputMedia::from(
		InputMediaVideo::builder()
			.media(fixture("video.mp4"))
			.thumbnail(fixture("image.jpg"))
			.build(),
	)];

	let resolved = prepare_for_params(&items);
	assert_eq!(rendered_media(&resolved), ["attach://file-0"]);
	assert_eq!(rendered_thumbs(&resolved), ["attach://file-0-thumb"]);
	assert_eq!(file_names(&items), ["file-0", "file-0-thumb"]);
}

#[test]
fn mixed_local_and_remote() {
	let items: [InputMedia; 3] = [
		InputMediaPhoto::new(fixture("image.jpg")).into(),
		InputMediaVideo::new(MediaSource::url("https://example.com/video.mp4")).into(),
		InputMediaDocument::builder()
			.media(fixture("audio.mp3"))
			.thumbnail(fixture("image.jpg"))
			.build()
			.into(),
	];

	let resolved = prepare_for_params(&items);
	assert_eq!(
		rendered_media(&resolved),
		[
			"attach://file-0",
			"https://example.com/video.mp4",
			"attach://file-2"
		]
	);
	assert_eq!(rendered_thumbs(&resolved), ["", "", "attach://file-2-thumb"]);
	assert_eq!(file_names(&items), ["file-0", "file-2", "file-2-thumb"]);
}

#[test]
fn all_remote() {
	let items: [InputMedia; 2] = [
		InputMediaPhoto::new(MediaSource::file_id("AgACAgIAAxk")).into(),
		InputMediaVideo::builder()
			.media(MediaSource::url("https://example.com/video.mp4"))
			.thumbnail(MediaSource::file_id("AAMCAgADGQ"))
			.build()
			.into(),
	];

	let resolved = prepare_for_params(&items);
	assert_eq!(rendered_media(&resolved), rendered_media(&items));
	assert_eq!(rendered_thumbs(&resolved), rendered_thumbs(&items));
	assert!(file_names(&items).is_empty());
}

#[test]
fn empty() {
	let items: [InputMediaItem; 0] = [];

	assert!(prepare_for_params(&items).is_empty());
	assert!(collect_files(&items).is_empty());
}

#[test]
fn references_and_parts_agree() {
	let items: Vec<Option<InputMediaItem>> = vec![
		Some(InputMediaPhoto::new(MediaSource::bytes("a.jpg", b"a".to_vec())).into()),
		None,
		Some(
			InputMediaAnimation::builder()
				.media(MediaSource::file_id("gif"))
				.thumbnail(MediaSource::reader("thumb.jpg", Cursor::new(b"t".to_vec())))
				.build()
				.into(),
		),
		Some(
			InputMediaAudio::builder()
				.media(fixture("audio.mp3"))
				.thumbnail(MediaSource::url("https://example.com/cover.jpg"))
				.build()
				.into(),
		),
		Some(
			InputPaidMedia::builder()
				.media(
					InputMediaVideo::builder()
						.media(fixture("video.mp4"))
						.thumbnail(MediaSource::bytes("inner.jpg", b"inner".to_vec()))
						.build(),
				)
				.thumbnail(fixture("image.jpg"))
				.build()
				.into(),
		),
		Some(InputPaidMedia::new(InputMediaPhoto::new(MediaSource::file_id("paid"))).into()),
	];

	let resolved = prepare_for_params(&items);
	assert_eq!(resolved.len(), items.len());
	assert!(resolved[1].is_none());

	let references = references(&resolved);
	let parts = file_names(&items);

	assert_eq!(
		references,
		["file-0", "file-2-thumb", "file-3", "file-4", "file-4-thumb"]
	);
	assert_eq!(
		references.iter().collect::<BTreeSet<_>>(),
		parts.iter().collect::<BTreeSet<_>>()
	);
	assert_eq!(references.len(), parts.len());
}

#[test]
fn prepared_media_group() {
	let request = MediaGroup::builder()
		.chat_id(-100_123_i64)
		.media(vec![
			InputMediaPhoto::builder()
				.media(fixture("image.jpg"))
				.caption("Local")
				.build()
				.into(),
			InputMediaPhoto::new(MediaSource::file_id("AgACAgIAAxk")).into(),
		])
		.build()
		.prepare()
		.unwrap();

	assert_eq!(request.method, "sendMediaGroup");
	assert!(request.is_multipart());
	assert_eq!(request.params["chat_id"], -100_123);
	assert_eq!(
		request.params[MEDIA_PARAM][0]["media"],
		"attach://file-0"
	);
	assert_eq!(request.params[MEDIA_PARAM][1]["media"], "AgACAgIAAxk");

	assert_eq!(request.files.len(), 1);
	assert_eq!(request.files[0].name, "file-0");
	assert_eq!(request.files[0].file_name, "image.jpg");
	assert_eq!(request.files[0].bytes, b"JPEGDATA");
}

#[test]
fn prepared_paid_media() {
	let request = PaidMedia::builder()
		.chat_id("@channelusername")
		.star_count(50)
		.media(vec![
			InputPaidMedia::builder()
				.media(InputMediaVideo::new(fixture("video.mp4")))
				.thumbnail(fixture("image.jpg"))
				.build(),
		])
		.build()
		.prepare()
		.unwrap();

	assert_eq!(request.params["star_count"], 50);
	assert_eq!(request.params[MEDIA_PARAM][0]["type"], "video");
	assert_eq!(request.params[MEDIA_PARAM][0]["media"], "attach://file-0");
	assert_eq!(
		request.params[MEDIA_PARAM][0]["thumbnail"],
		"attach://file-0-thumb"
	);
	assert_eq!(
		request
			.files
			.iter()
			.map(|file| file.name.as_str())
			.collect::<Vec<_>>(),
		["file-0", "file-0-thumb"]
	);
}
