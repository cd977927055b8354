// Copyright (c) ferrossh 2025
// This file is licensed under the Apache-2.0 license, see license.md file

//! Log domain tags naming the subsystem a record came from

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical subsystem that emitted a record.
///
/// Purely informational; domains never take part in filtering. Some
/// spellings overlap with [`LogLevel`](crate::LogLevel) (SFTP, SCP, AGENT)
/// but the two enumerations are deliberately disjoint types.
#[repr(u8)]
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	Serialize,
	Deserialize,
)]
pub enum LogDomain {
	General = 0,
	Init = 1,
	Setup = 2,
	Connect = 3,
	Accept = 4,
	Cbio = 5,
	Kex = 6,
	UserAuth = 7,
	Sftp = 8,
	Scp = 9,
	Keygen = 10,
	Term = 11,
	Agent = 12,
}

impl LogDomain {
	pub fn as_str(&self) -> &'static str {
		match self {
			LogDomain::General => "GENERAL",
			LogDomain::Init => "INIT",
			LogDomain::Setup => "SETUP",
			LogDomain::Connect => "CONNECT",
			LogDomain::Accept => "ACCEPT",
			LogDomain::Cbio => "CBIO",
			LogDomain::Kex => "KEX",
			LogDomain::UserAuth => "USERAUTH",
			LogDomain::Sftp => "SFTP",
			LogDomain::Scp => "SCP",
			LogDomain::Keygen => "KEYGEN",
			LogDomain::Term => "TERM",
			LogDomain::Agent => "AGENT",
		}
	}

	/// Reconstruct a domain from its raw discriminant.
	pub fn from_raw(raw: u8) -> Option<LogDomain> {
		match raw {
			0 => Some(LogDomain::General),
			1 => Some(LogDomain::Init),
			2 => Some(LogDomain::Setup),
			3 => Some(LogDomain::Connect),
			4 => Some(LogDomain::Accept),
			5 => Some(LogDomain::Cbio),
			6 => Some(LogDomain::Kex),
			7 => Some(LogDomain::UserAuth),
			8 => Some(LogDomain::Sftp),
			9 => Some(LogDomain::Scp),
			10 => Some(LogDomain::Keygen),
			11 => Some(LogDomain::Term),
			12 => Some(LogDomain::Agent),
			_ => None,
		}
	}

	/// Label for a raw discriminant, "UNKNOWN" when out of range.
	pub fn label_of(raw: u8) -> &'static str {
		match LogDomain::from_raw(raw) {
			Some(domain) => domain.as_str(),
			None => "UNKNOWN",
		}
	}
}

impl fmt::Display for LogDomain {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_labels() {
		assert_eq!(LogDomain::General.as_str(), "GENERAL");
		assert_eq!(LogDomain::UserAuth.as_str(), "USERAUTH");
		assert_eq!(LogDomain::Sftp.as_str(), "SFTP");
		assert_eq!(LogDomain::Scp.as_str(), "SCP");
		assert_eq!(LogDomain::Agent.as_str(), "AGENT");
	}

	#[test]
	fn test_from_raw_round_trip() {
		for raw in 0u8..=12 {
			let domain = LogDomain::from_raw(raw).unwrap();
			assert_eq!(domain as u8, raw);
		}
		assert_eq!(LogDomain::from_raw(13), None);
	}

	#[test]
	fn test_label_of_unknown() {
		assert_eq!(LogDomain::label_of(99), "UNKNOWN");
		assert_eq!(LogDomain::label_of(6), "KEX");
	}
}
