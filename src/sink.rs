// Copyright (c) ferrossh 2025
// This file is licensed under the Apache-2.0 license, see license.md file

//! Sink contracts consuming formatted records

use crate::domain::LogDomain;
use crate::level::LogLevel;

/// Consumer of plain records.
///
/// The message is a single line of text with no trailing newline; the sink
/// decides line termination. Sinks must not panic: a faulty sink would
/// otherwise destabilize the library that called into the logger.
pub trait LogSink: Send + Sync {
	fn emit(&self, level: LogLevel, message: &str);
}

/// Consumer of extended records carrying a domain tag.
pub trait LogSinkEx: Send + Sync {
	fn emit(&self, level: LogLevel, domain: LogDomain, message: &str);
}

/// Adapter turning a plain function or closure into a [`LogSink`].
pub struct FnSink<F>(F);

impl<F> FnSink<F>
where
	F: Fn(LogLevel, &str) + Send + Sync,
{
	pub fn new(f: F) -> Self {
		Self(f)
	}
}

impl<F> LogSink for FnSink<F>
where
	F: Fn(LogLevel, &str) + Send + Sync,
{
	fn emit(&self, level: LogLevel, message: &str) {
		(self.0)(level, message)
	}
}

/// Adapter turning a function or closure into a [`LogSinkEx`].
pub struct FnSinkEx<F>(F);

impl<F> FnSinkEx<F>
where
	F: Fn(LogLevel, LogDomain, &str) + Send + Sync,
{
	pub fn new(f: F) -> Self {
		Self(f)
	}
}

impl<F> LogSinkEx for FnSinkEx<F>
where
	F: Fn(LogLevel, LogDomain, &str) + Send + Sync,
{
	fn emit(&self, level: LogLevel, domain: LogDomain, message: &str) {
		(self.0)(level, domain, message)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::atomic::{AtomicUsize, Ordering};

	static PLAIN_HITS: AtomicUsize = AtomicUsize::new(0);
	static EX_HITS: AtomicUsize = AtomicUsize::new(0);

	fn plain_fn(_level: LogLevel, _message: &str) {
		PLAIN_HITS.fetch_add(1, Ordering::Relaxed);
	}

	fn ex_fn(_level: LogLevel, _domain: LogDomain, _message: &str) {
		EX_HITS.fetch_add(1, Ordering::Relaxed);
	}

	#[test]
	fn test_fn_sink_adapts_plain_function() {
		let sink = FnSink::new(plain_fn);
		sink.emit(LogLevel::Info, "hello");
		assert_eq!(PLAIN_HITS.load(Ordering::Relaxed), 1);
	}

	#[test]
	fn test_fn_sink_ex_adapts_extended_function() {
		let sink = FnSinkEx::new(ex_fn);
		sink.emit(LogLevel::Debug, LogDomain::Kex, "x");
		assert_eq!(EX_HITS.load(Ordering::Relaxed), 1);
	}

	#[test]
	fn test_fn_sink_adapts_closure() {
		let seen = std::sync::Mutex::new(Vec::new());
		let sink = FnSink::new(|level: LogLevel, message: &str| {
			seen.lock().unwrap().push((level, message.to_string()));
		});
		sink.emit(LogLevel::Error, "boom");
		drop(sink);
		assert_eq!(
			seen.into_inner().unwrap(),
			vec![(LogLevel::Error, "boom".to_string())]
		);
	}
}
