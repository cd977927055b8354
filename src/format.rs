// Copyright (c) ferrossh 2025
// This file is licensed under the Apache-2.0 license, see license.md file

//! Bounded message formatting and timestamp rendering

use std::fmt::{self, Write};

/// Width of the message buffer used by the facade entry points.
pub const MESSAGE_WIDTH: usize = 120;

/// `fmt::Write` adapter with a hard byte budget of `width - 1`.
///
/// Overflow is discarded at a UTF-8 boundary, never reported: formatting a
/// record must not fail, the only visible effect is a truncated message.
pub struct BoundedWriter {
	buf: String,
	limit: usize,
	truncated: bool,
}

impl BoundedWriter {
	pub fn new(width: usize) -> Self {
		Self {
			buf: String::new(),
			limit: width.saturating_sub(1),
			truncated: false,
		}
	}

	pub fn is_truncated(&self) -> bool {
		self.truncated
	}

	pub fn into_string(self) -> String {
		self.buf
	}
}

impl Write for BoundedWriter {
	fn write_str(&mut self, s: &str) -> fmt::Result {
		if self.truncated {
			return Ok(());
		}
		let room = self.limit - self.buf.len();
		if s.len() <= room {
			self.buf.push_str(s);
		} else {
			let mut cut = room;
			while cut > 0 && !s.is_char_boundary(cut) {
				cut -= 1;
			}
			self.buf.push_str(&s[..cut]);
			self.truncated = true;
		}
		Ok(())
	}
}

/// Format `args` into a fresh string bounded to `width - 1` bytes.
pub fn format_bounded(width: usize, args: fmt::Arguments<'_>) -> String {
	let mut writer = BoundedWriter::new(width);
	let _ = writer.write_fmt(args);
	writer.into_string()
}

/// Local wall-clock prefix for the default sink, e.g.
/// `"2024-06-01 12:34:56 "` (note the trailing space).
#[cfg(feature = "timestamp")]
pub(crate) fn timestamp() -> String {
	chrono::Local::now().format("%Y-%m-%d %H:%M:%S ").to_string()
}

/// Timestamp rendering compiled out; the prefix is always empty.
#[cfg(not(feature = "timestamp"))]
pub(crate) fn timestamp() -> String {
	String::new()
}
