//! # Console Logger System
//!
//! A lightweight structured-logging facade for host environments without a
//! native standard-output stream. Log calls keep a JSON logger's calling
//! contract (numeric levels, message plus interpolation arguments, inherited
//! bindings, capture-time timestamps) while output is redirected to an
//! injected console-style object or to custom write functions.
//!
//! ## Features
//!
//! - **Six fixed levels** with stable numeric values and a silent sentinel
//! - **Child loggers** whose bindings accumulate across derivations and are
//!   delivered with every record
//! - **Pluggable sinks**: a single write function, a per-level map, or
//!   console routing with method-existence probing and documented fallbacks
//! - **No hidden globals**: the console-like object is injected, never read
//!   from process-wide state
//!
//! ## Example
//!
//! ```
//! use console_logger_system::prelude::*;
//! use serde_json::json;
//!
//! let logger = Logger::builder().level(LogLevel::Debug).build();
//! let child = logger.child(json!({"module": "auth"})).unwrap();
//! child.debug("session opened");
//! ```

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        BindingChain, BrowserOptions, CallArguments, ConsoleFn, ConsoleMethod, ConsoleObject,
        ErrSerializerFn, ErrorArgument, LogArgument, LogLevel, LogRecord, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, Result, Serializers, Sink, SinkKind, Threshold, WriteFn,
        WriteTarget, LEVELS, LEVEL_LABELS, LEVEL_VALUES, LOG_VERSION, MAX_BINDING_DEPTH,
    };
}

pub use crate::core::serializers as std_serializers;
pub use crate::core::{
    BindingChain, BrowserOptions, CallArguments, ConsoleFn, ConsoleMethod, ConsoleObject,
    ErrSerializerFn, ErrorArgument, LogArgument, LogLevel, LogRecord, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, Result, Serializers, Sink, SinkKind, Threshold, WriteFn,
    WriteTarget, LEVELS, LEVEL_LABELS, LEVEL_VALUES, LOG_VERSION, MAX_BINDING_DEPTH,
};
