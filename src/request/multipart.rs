/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Conversion of a [`PreparedRequest`] into a [`reqwest`] multipart form

use super::PreparedRequest;

use reqwest::multipart::{Form, Part};

impl PreparedRequest {
	/// Builds a `multipart/form-data` body: one text field per parameter and one part per file,
	/// named the same way the `media` parameter references them
	#[must_use]
	pub fn into_form(self) -> Form {
		let form = self
			.form_fields()
			.fold(Form::new(), |form, (name, value)| {
				form.text(name.to_owned(), value)
			});

		self.files.into_iter().fold(form, |form, file| {
			tracing::trace!(
				"Attaching {} ({} bytes) as {}",
				file.file_name,
				file.bytes.len(),
				file.name
			);
			form.part(file.name, Part::bytes(file.bytes).file_name(file.file_name))
		})
	}
}
