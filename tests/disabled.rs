// Copyright (c) ferrossh 2025
// This file is licensed under the Apache-2.0 license, see license.md file

//! Inertness of the compiled-out facade. Run with
//! `--no-default-features`.

#![cfg(not(feature = "logging"))]

use ferrossh_log::{
	LogDomain, LogLevel, enable, is_enabled, log_ex_raw, log_raw,
	set_level, would_log,
};

#[test]
fn test_disabled_build_is_inert() {
	enable();
	assert!(!is_enabled());

	set_level(LogLevel::Info);
	assert!(!would_log(LogLevel::Agent));

	// Entry points and macros compile to nothing and return normally.
	log_raw(LogLevel::Error, "dropped");
	log_ex_raw(LogLevel::Error, LogDomain::General, "dropped");
	ferrossh_log::log!(LogLevel::Error, "dropped {}", 1);
	ferrossh_log::log_ex!(LogLevel::Error, LogDomain::Kex, "dropped");
}
