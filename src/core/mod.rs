//! Core facade types and dispatch engine

pub mod argument;
pub mod bindings;
pub mod config;
pub mod console;
pub mod error;
pub mod format;
pub mod log_level;
pub mod logger;
pub mod record;
pub mod resolver;
pub mod serializers;

pub use argument::{CallArguments, ErrorArgument, LogArgument};
pub use bindings::{BindingChain, MAX_BINDING_DEPTH};
pub use config::{BrowserOptions, ErrSerializerFn, LoggerConfig, Serializers};
pub use console::{ConsoleFn, ConsoleMethod, ConsoleObject};
pub use error::{LoggerError, Result};
pub use format::{format_record, has_placeholder, interpolate};
pub use log_level::{LogLevel, Threshold, LEVELS, LEVEL_LABELS, LEVEL_VALUES};
pub use logger::{Logger, LoggerBuilder};
pub use record::LogRecord;
pub use resolver::{ResolvedTargets, Sink, SinkKind, WriteFn, WriteTarget};
pub use serializers::LOG_VERSION;
