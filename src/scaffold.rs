/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains a "scaffold", in other words, functions that pre-configure your application for common uses of [`tgmedia`](`crate`).
//!
//! The main entry point of this module is [`set_up_logging`]

use tracing::subscriber::SetGlobalDefaultError;

/// Installs a tracing subscriber as the default.
///
/// The log level is read from the `RUST_LOG` environment variable and defaults to INFO.
/// The subscriber shows compact one-line log messages when log level is > DEBUG,
/// and pretty multi-line log messages when it's set to <= DEBUG.
///
/// # Errors
/// If a different global tracing subscriber has already been registered.
pub fn set_up_logging() -> Result<(), SetGlobalDefaultError> {
	use tracing::Level;
	use tracing_subscriber::{
		EnvFilter, Layer, filter::LevelFilter, layer::SubscriberExt,
	};

	let env_filter = EnvFilter::builder()
		.with_default_directive(LevelFilter::INFO.into())
		.from_env_lossy();

	let is_debug_log_level = env_filter
		.max_level_hint()
		.map_or_else(|| false, |level| level >= Level::DEBUG);

	let stdout = tracing_subscriber::fmt::layer()
		.with_target(is_debug_log_level)
		.with_file(is_debug_log_level)
		.with_line_number(is_debug_log_level)
		.with_thread_ids(is_debug_log_level);

	let stdout = if is_debug_log_level {
		stdout.pretty().boxed()
	} else {
		stdout.compact().boxed()
	};

	let subscriber = tracing_subscriber::registry().with(stdout.with_filter(env_filter));

	tracing::subscriber::set_global_default(subscriber)
}
