// Copyright (c) ferrossh 2025
// This file is licensed under the Apache-2.0 license, see license.md file

//! Logging macros, the variadic layer over the raw entry points

/// Formatted log without a domain tag.
///
/// The filter runs before the arguments are formatted, so a filtered
/// record costs a single atomic load.
#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {{
        let level = $level;
        if $crate::would_log(level) {
            $crate::log(level, format_args!($($arg)+));
        }
    }};
}

/// Formatted log carrying a domain tag.
#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_ex {
    ($level:expr, $domain:expr, $($arg:tt)+) => {{
        let level = $level;
        if $crate::would_log(level) {
            $crate::log_ex(level, $domain, format_args!($($arg)+));
        }
    }};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_ex {
    ($($arg:tt)*) => {
        ()
    };
}
