// Copyright (c) ferrossh 2025
// This file is licensed under the Apache-2.0 license, see license.md file

//! Log severity levels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Log severity levels, ordered by increasing verbosity.
///
/// The numeric order is the filter order: a record is dispatched when its
/// level is at or above the configured minimum level.
#[repr(u8)]
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Hash,
	Serialize,
	Deserialize,
)]
pub enum LogLevel {
	Info = 0,
	Warn = 1,
	Error = 2,
	Debug = 3,
	User = 4,
	Sftp = 5,
	Scp = 6,
	Agent = 7,
}

impl LogLevel {
	/// Initial minimum level of a fresh process.
	pub const DEFAULT: LogLevel = LogLevel::Debug;

	pub fn as_str(&self) -> &'static str {
		match self {
			LogLevel::Info => "INFO",
			LogLevel::Warn => "WARNING",
			LogLevel::Error => "ERROR",
			LogLevel::Debug => "DEBUG",
			LogLevel::User => "USER",
			LogLevel::Sftp => "SFTP",
			LogLevel::Scp => "SCP",
			LogLevel::Agent => "AGENT",
		}
	}

	/// Reconstruct a level from its raw discriminant.
	pub fn from_raw(raw: u8) -> Option<LogLevel> {
		match raw {
			0 => Some(LogLevel::Info),
			1 => Some(LogLevel::Warn),
			2 => Some(LogLevel::Error),
			3 => Some(LogLevel::Debug),
			4 => Some(LogLevel::User),
			5 => Some(LogLevel::Sftp),
			6 => Some(LogLevel::Scp),
			7 => Some(LogLevel::Agent),
			_ => None,
		}
	}

	/// Label for a raw discriminant, "UNKNOWN" when out of range.
	pub fn label_of(raw: u8) -> &'static str {
		match LogLevel::from_raw(raw) {
			Some(level) => level.as_str(),
			None => "UNKNOWN",
		}
	}
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}
