// Copyright (c) ferrossh 2025
// This file is licensed under the Apache-2.0 license, see license.md file

//! Process-wide diagnostic logging for the ferrossh SSH library.
//!
//! Records are filtered by severity, formatted into single lines with an
//! optional timestamp and domain tag, and handed to a replaceable sink.
//! The default sink writes to stdout. A custom sink may be installed with
//! [`set_sink`] / [`set_sink_ex`].
//!
//! Logging calls never return errors and never panic: format overflow
//! truncates, a missing sink drops the record, write errors are ignored.
//! A faulty logger must not destabilize the protocol engine calling it.
//!
//! The whole facade can be compiled out by disabling the `logging`
//! feature, in which case every entry point is inert and the macros
//! expand to nothing.

mod console;
mod domain;
mod format;
mod level;
mod macros;
mod sink;

pub use console::{ConsoleSink, ConsoleSinkBuilder};
pub use domain::LogDomain;
pub use format::{BoundedWriter, MESSAGE_WIDTH, format_bounded};
pub use level::LogLevel;
pub use sink::{FnSink, FnSinkEx, LogSink, LogSinkEx};

pub use facade::{
	disable, enable, is_enabled, level, log, log_ex, log_ex_raw, log_raw,
	set_level, set_sink, set_sink_ex, would_log,
};

#[cfg(feature = "logging")]
mod facade {
	use crate::domain::LogDomain;
	use crate::format::{MESSAGE_WIDTH, format_bounded};
	use crate::level::LogLevel;
	use crate::sink::{LogSink, LogSinkEx};
	use parking_lot::RwLock;
	use std::fmt;
	use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
	use std::sync::{Arc, LazyLock};

	/// Process-wide logger configuration. Each field is independently
	/// consistent; configuration is expected to happen during setup,
	/// before worker threads start emitting, and last writer wins.
	struct LoggerState {
		enabled: AtomicBool,
		min_level: AtomicU8,
		sink: RwLock<Option<Arc<dyn LogSink>>>,
		sink_ex: RwLock<Option<Arc<dyn LogSinkEx>>>,
	}

	static STATE: LazyLock<LoggerState> = LazyLock::new(|| LoggerState {
		enabled: AtomicBool::new(false),
		min_level: AtomicU8::new(LogLevel::DEFAULT as u8),
		sink: RwLock::new(initial_sink()),
		sink_ex: RwLock::new(initial_sink_ex()),
	});

	#[cfg(feature = "default-sink")]
	fn initial_sink() -> Option<Arc<dyn LogSink>> {
		Some(Arc::new(crate::console::ConsoleSink::new()))
	}

	#[cfg(not(feature = "default-sink"))]
	fn initial_sink() -> Option<Arc<dyn LogSink>> {
		None
	}

	#[cfg(feature = "default-sink")]
	fn initial_sink_ex() -> Option<Arc<dyn LogSinkEx>> {
		Some(Arc::new(crate::console::ConsoleSink::new()))
	}

	#[cfg(not(feature = "default-sink"))]
	fn initial_sink_ex() -> Option<Arc<dyn LogSinkEx>> {
		None
	}

	/// Turn the advisory debugging flag on.
	///
	/// The flag is a cooperative hint for callers that want to skip
	/// expensive message construction; the entry points themselves only
	/// consult the level filter.
	pub fn enable() {
		STATE.enabled.store(true, Ordering::Relaxed);
	}

	/// Turn the advisory debugging flag off.
	pub fn disable() {
		STATE.enabled.store(false, Ordering::Relaxed);
	}

	pub fn is_enabled() -> bool {
		STATE.enabled.load(Ordering::Relaxed)
	}

	/// Set the minimum level; records below it are dropped.
	pub fn set_level(level: LogLevel) {
		STATE.min_level.store(level as u8, Ordering::Relaxed);
	}

	pub fn level() -> LogLevel {
		LogLevel::from_raw(STATE.min_level.load(Ordering::Relaxed))
			.unwrap_or(LogLevel::DEFAULT)
	}

	/// The filter predicate used by the entry points and the macros.
	pub fn would_log(level: LogLevel) -> bool {
		(level as u8) >= STATE.min_level.load(Ordering::Relaxed)
	}

	/// Install a plain sink. `None` leaves the current sink in place,
	/// so an installation can never silently unset the sink.
	pub fn set_sink(sink: Option<Arc<dyn LogSink>>) {
		if let Some(sink) = sink {
			*STATE.sink.write() = Some(sink);
		}
	}

	/// Install an extended sink under the same rule as [`set_sink`].
	pub fn set_sink_ex(sink: Option<Arc<dyn LogSinkEx>>) {
		if let Some(sink) = sink {
			*STATE.sink_ex.write() = Some(sink);
		}
	}

	/// Filter, format bounded to [`MESSAGE_WIDTH`], dispatch.
	pub fn log(level: LogLevel, args: fmt::Arguments<'_>) {
		if !would_log(level) {
			return;
		}
		let message = format_bounded(MESSAGE_WIDTH, args);
		dispatch(level, &message);
	}

	/// Filter, format bounded to [`MESSAGE_WIDTH`], dispatch with a
	/// domain tag.
	pub fn log_ex(level: LogLevel, domain: LogDomain, args: fmt::Arguments<'_>) {
		if !would_log(level) {
			return;
		}
		let message = format_bounded(MESSAGE_WIDTH, args);
		dispatch_ex(level, domain, &message);
	}

	/// Filter and dispatch a preformatted message.
	pub fn log_raw(level: LogLevel, message: &str) {
		if !would_log(level) {
			return;
		}
		dispatch(level, message);
	}

	/// Filter and dispatch a preformatted message with a domain tag.
	pub fn log_ex_raw(level: LogLevel, domain: LogDomain, message: &str) {
		if !would_log(level) {
			return;
		}
		dispatch_ex(level, domain, message);
	}

	fn dispatch(level: LogLevel, message: &str) {
		// Clone the handle out of the lock so a slow sink never holds
		// it.
		let sink = STATE.sink.read().clone();
		if let Some(sink) = sink {
			sink.emit(level, message);
		}
	}

	fn dispatch_ex(level: LogLevel, domain: LogDomain, message: &str) {
		let sink = STATE.sink_ex.read().clone();
		if let Some(sink) = sink {
			sink.emit(level, domain, message);
		}
	}
}

#[cfg(not(feature = "logging"))]
mod facade {
	use crate::domain::LogDomain;
	use crate::level::LogLevel;
	use crate::sink::{LogSink, LogSinkEx};
	use std::fmt;
	use std::sync::Arc;

	pub fn enable() {}

	pub fn disable() {}

	pub fn is_enabled() -> bool {
		false
	}

	pub fn set_level(_level: LogLevel) {}

	pub fn level() -> LogLevel {
		LogLevel::DEFAULT
	}

	pub fn would_log(_level: LogLevel) -> bool {
		false
	}

	pub fn set_sink(_sink: Option<Arc<dyn LogSink>>) {}

	pub fn set_sink_ex(_sink: Option<Arc<dyn LogSinkEx>>) {}

	pub fn log(_level: LogLevel, _args: fmt::Arguments<'_>) {}

	pub fn log_ex(
		_level: LogLevel,
		_domain: LogDomain,
		_args: fmt::Arguments<'_>,
	) {
	}

	pub fn log_raw(_level: LogLevel, _message: &str) {}

	pub fn log_ex_raw(
		_level: LogLevel,
		_domain: LogDomain,
		_message: &str,
	) {
	}
}
