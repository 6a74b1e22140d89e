/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Reads an album from a JSON config and prepares a `sendMediaGroup` request out of it.
//!
//! Run from the crate root with `RUST_LOG=debug` to see what gets uploaded

use tgmedia::{
	InputMedia, InputMediaItem, MediaRequest,
	config,
	request::media_group::MediaGroup,
};

const ALBUM: &str = r#"[
	{ "type": "photo", "media": { "path": "tests/data/image.jpg" }, "caption": "Local photo" },
	{ "type": "photo", "media": { "url": "https://example.com/image.jpg" } },
	{ "type": "video", "media": { "path": "tests/data/video.mp4" }, "thumbnail": { "path": "tests/data/image.jpg" } }
]"#;

fn main() -> Result<(), tgmedia::Error> {
	if tgmedia::scaffold::set_up_logging().is_err() {
		eprintln!("Unable to set up logging");
	}

	let album: Vec<config::InputMedia> = match serde_json::from_str(ALBUM) {
		Ok(album) => album,
		Err(e) => {
			tracing::error!("Invalid album config: {e}");
			return Ok(());
		}
	};

	let media = config::parse_list(album)?
		.into_iter()
		.filter_map(|item| match item {
			InputMediaItem::Media(media) => Some(media),
			InputMediaItem::Paid(_) => {
				tracing::warn!("Paid media can't be a part of an album, skipping");
				None
			}
		})
		.collect::<Vec<InputMedia>>();

	let request = MediaGroup::builder()
		.chat_id("@channelusername")
		.media(media)
		.build()
		.prepare()?;

	for (name, value) in request.form_fields() {
		tracing::info!("{name} = {value}");
	}

	for file in &request.files {
		tracing::info!(
			"{} <- {} ({} bytes)",
			file.name,
			file.file_name,
			file.bytes.len()
		);
	}

	Ok(())
}
