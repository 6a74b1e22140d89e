/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`SharedReader`]

use std::{
	fmt::{self, Debug},
	io::{self, Read},
	sync::{Arc, Mutex},
};

/// A cloneable handle to a caller-supplied stream.
///
/// Cloning the handle doesn't clone the stream itself: every clone reads from the same underlying reader,
/// and the stream is consumed by the first [`read_to_end`](`Self::read_to_end`)
#[derive(Clone)]
pub struct SharedReader(Arc<Mutex<dyn Read + Send>>);

impl SharedReader {
	/// Wraps `reader` into a shareable handle
	pub fn new<R>(reader: R) -> Self
	where
		R: Read + Send + 'static,
	{
		Self(Arc::new(Mutex::new(reader)))
	}

	/// Reads everything left in the stream
	///
	/// # Errors
	/// * if the underlying reader returned an error
	/// * if another thread panicked while reading from this stream
	pub fn read_to_end(&self) -> io::Result<Vec<u8>> {
		let mut reader = self
			.0
			.lock()
			.map_err(|_| io::Error::other("stream was poisoned by a panic in another reader"))?;

		let mut buf = Vec::new();
		reader.read_to_end(&mut buf)?;

		Ok(buf)
	}

	/// Checks if both handles point to the same stream
	#[must_use]
	pub fn same_stream(&self, other: &SharedReader) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

impl Debug for SharedReader {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SharedReader").finish_non_exhaustive()
	}
}
