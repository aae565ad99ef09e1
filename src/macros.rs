//! Logging macros for ergonomic call construction.
//!
//! [`args!`] builds the variadic argument list of a level call from
//! heterogeneous expressions; the level macros provide `println!`-style
//! formatting on top of the facade.
//!
//! # Examples
//!
//! ```
//! use console_logger_system::prelude::*;
//! use console_logger_system::{args, info};
//! use serde_json::json;
//!
//! let logger = Logger::new();
//!
//! // Interpolation arguments, structured-path style
//! logger.info(args!["listening on port %d", 8080]);
//!
//! // Leading object plus message
//! logger.info(args![json!({"module": "http"}), "started"]);
//!
//! // println!-style formatting
//! info!(logger, "processed {} items", 100);
//! ```

/// Build [`CallArguments`](crate::core::CallArguments) from a list of
/// expressions, each convertible into a
/// [`LogArgument`](crate::core::LogArgument).
#[macro_export]
macro_rules! args {
    () => {
        $crate::core::CallArguments::new()
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::core::CallArguments::from_vec(
            vec![$($crate::core::LogArgument::from($arg)),+]
        )
    };
}

/// Log a formatted message at an explicit level.
///
/// # Examples
///
/// ```
/// # use console_logger_system::prelude::*;
/// # let logger = Logger::new();
/// use console_logger_system::log;
/// log!(logger, LogLevel::Info, "simple message");
/// log!(logger, LogLevel::Error, "error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a trace-level formatted message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level formatted message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level formatted message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level formatted message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level formatted message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level formatted message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::Fatal, $($arg)+)
    };
}
