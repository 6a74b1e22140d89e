/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#[expect(missing_docs, reason = "error message is self-documenting")]
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
	#[error("{url:?} is not a valid URL")]
	InvalidUrl {
		url: String,
		source: url::ParseError,
	},

	#[error("Paid media can't wrap another paid media")]
	NestedPaidMedia,

	#[error("Media item #{index} is invalid")]
	InvalidItem {
		index: usize,
		source: Box<ConfigError>,
	},
}
