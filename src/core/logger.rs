//! Logger facade
//!
//! The object callers interact with: one variadic method per level, child
//! derivation, threshold management, sink introspection, and the
//! event-emitter/stream stubs required for drop-in compatibility with the
//! fuller logging interface.

use super::argument::{CallArguments, LogArgument};
use super::bindings::BindingChain;
use super::config::{ErrSerializerFn, LoggerConfig, Serializers};
use super::console::ConsoleObject;
use super::error::{LoggerError, Result};
use super::format::format_record;
use super::log_level::{LogLevel, Threshold};
use super::resolver::{ResolvedTargets, Sink, SinkKind, WriteFn, WriteTarget};
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// A logger instance.
///
/// Roots own their write-target resolution; children share it by reference
/// and add one binding each. Instances are immutable after construction
/// except for the threshold, which the facade exposes a setter for.
#[derive(Debug)]
pub struct Logger {
    threshold: RwLock<Threshold>,
    targets: Arc<ResolvedTargets>,
    chain: BindingChain,
    serializers: Serializers,
}

impl Logger {
    /// Root logger with default configuration and the stdio console.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for Logger.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Active threshold.
    pub fn level(&self) -> Threshold {
        *self.threshold.read()
    }

    /// Numeric value of the active threshold.
    pub fn level_value(&self) -> u8 {
        self.level().value()
    }

    /// Set the threshold from a typed level or `Threshold::Silent`.
    pub fn set_level(&self, level: impl Into<Threshold>) {
        *self.threshold.write() = level.into();
    }

    /// Set the threshold by name, validated against the level registry.
    pub fn set_level_name(&self, name: &str) -> Result<()> {
        let threshold: Threshold = name.parse()?;
        self.set_level(threshold);
        Ok(())
    }

    /// Whether a call at `level` would currently produce output.
    pub fn is_level_enabled(&self, level: LogLevel) -> bool {
        self.level().enables(level) && !self.targets.sink(level).is_noop()
    }

    /// Shape of the resolved sink for `level`.
    ///
    /// `SinkKind::Noop` is the explicit marker for a level with no usable
    /// write target.
    pub fn sink_kind(&self, level: LogLevel) -> SinkKind {
        self.targets.sink(level).kind()
    }

    /// Serializer hooks this instance was configured with. The `err` hook is
    /// carried but never applied.
    pub fn serializers(&self) -> &Serializers {
        &self.serializers
    }

    /// Derive a child logger carrying `bindings`.
    ///
    /// `bindings` must be a JSON object; anything else (including `Null`)
    /// fails with [`LoggerError::InvalidChildBindings`]. The child copies
    /// this logger's threshold and shares its resolved sinks.
    pub fn child(&self, bindings: impl Into<Value>) -> Result<Logger> {
        match bindings.into() {
            Value::Object(map) => Ok(Logger {
                threshold: RwLock::new(self.level()),
                targets: Arc::clone(&self.targets),
                chain: self.chain.child(map),
                serializers: self.serializers.clone(),
            }),
            _ => Err(LoggerError::InvalidChildBindings),
        }
    }

    /// Log at an explicit level.
    ///
    /// Below-threshold and no-op calls return without formatting anything.
    pub fn log<A: Into<CallArguments>>(&self, level: LogLevel, args: A) {
        if !self.level().enables(level) {
            return;
        }
        match self.targets.sink(level) {
            Sink::Noop => {}
            Sink::Write(_) | Sink::Console { as_object: true, .. } => {
                let args = args.into();
                let record = format_record(level, &self.chain, args.as_slice());
                self.targets.dispatch_record(level, record);
            }
            Sink::Console { as_object: false, .. } => {
                // raw mode: ancestor bindings precede the call's own
                // arguments, oldest binding first, all untouched
                let args = args.into();
                let bindings = self.chain.collect();
                let mut out = Vec::with_capacity(bindings.len() + args.len());
                for binding in bindings {
                    out.push(LogArgument::Object(binding.clone()));
                }
                out.extend(args.into_vec());
                self.targets.dispatch_raw(level, &out);
            }
        }
    }

    #[inline]
    pub fn trace<A: Into<CallArguments>>(&self, args: A) {
        self.log(LogLevel::Trace, args);
    }

    #[inline]
    pub fn debug<A: Into<CallArguments>>(&self, args: A) {
        self.log(LogLevel::Debug, args);
    }

    #[inline]
    pub fn info<A: Into<CallArguments>>(&self, args: A) {
        self.log(LogLevel::Info, args);
    }

    #[inline]
    pub fn warn<A: Into<CallArguments>>(&self, args: A) {
        self.log(LogLevel::Warn, args);
    }

    #[inline]
    pub fn error<A: Into<CallArguments>>(&self, args: A) {
        self.log(LogLevel::Error, args);
    }

    #[inline]
    pub fn fatal<A: Into<CallArguments>>(&self, args: A) {
        self.log(LogLevel::Fatal, args);
    }
}

/// Event-emitter and stream stubs.
///
/// The fuller interface is an event emitter and a writable stream; this
/// facade is neither, but callers written against that surface must still be
/// able to invoke it. Every method here is a callable no-op.
impl Logger {
    pub fn on(&self, _event: &str) {}

    pub fn once(&self, _event: &str) {}

    /// Always reports that no listener handled the event.
    pub fn emit(&self, _event: &str) -> bool {
        false
    }

    pub fn add_listener(&self, _event: &str) {}

    pub fn prepend_listener(&self, _event: &str) {}

    pub fn prepend_once_listener(&self, _event: &str) {}

    pub fn remove_listener(&self, _event: &str) {}

    pub fn remove_all_listeners(&self) {}

    pub fn listeners(&self, _event: &str) -> Vec<()> {
        Vec::new()
    }

    pub fn listener_count(&self, _event: &str) -> usize {
        0
    }

    pub fn event_names(&self) -> Vec<&'static str> {
        Vec::new()
    }

    pub fn set_max_listeners(&self, _limit: usize) {}

    pub fn get_max_listeners(&self) -> usize {
        0
    }

    /// Stream-style write stub; arguments are discarded.
    pub fn write<A: Into<CallArguments>>(&self, _args: A) {}

    pub fn flush(&self) {}
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Which console-like object the builder hands to the resolver.
#[derive(Debug, Clone, Default)]
enum ConsoleHost {
    /// The stdio-backed default console
    #[default]
    Stdio,
    /// A caller-injected console
    Injected(ConsoleObject),
    /// The host has no console at all
    Absent,
}

/// Builder for constructing a root Logger with a fluent API
///
/// # Example
/// ```
/// use console_logger_system::prelude::*;
///
/// let logger = Logger::builder()
///     .level(LogLevel::Debug)
///     .as_object(true)
///     .build();
/// logger.debug("ready");
/// ```
#[derive(Debug, Default)]
pub struct LoggerBuilder {
    config: LoggerConfig,
    console: ConsoleHost,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: impl Into<Threshold>) -> Self {
        self.config.level = level.into();
        self
    }

    /// Disable or enable every sink; disabled loggers resolve to no-ops
    #[must_use = "builder methods return a new value"]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.config.enabled = enabled;
        self
    }

    /// Install a sink override
    #[must_use = "builder methods return a new value"]
    pub fn write(mut self, target: WriteTarget) -> Self {
        self.config.browser.write = Some(target);
        self
    }

    /// Route every level's record through one function
    #[must_use = "builder methods return a new value"]
    pub fn write_fn<F>(self, func: F) -> Self
    where
        F: Fn(&super::record::LogRecord) + Send + Sync + 'static,
    {
        self.write(WriteTarget::Single(Arc::new(func)))
    }

    /// Route mapped levels to their own functions
    #[must_use = "builder methods return a new value"]
    pub fn write_map(self, map: HashMap<LogLevel, WriteFn>) -> Self {
        self.write(WriteTarget::PerLevel(map))
    }

    /// Deliver structured records, not raw arguments, to console methods
    #[must_use = "builder methods return a new value"]
    pub fn as_object(mut self, as_object: bool) -> Self {
        self.config.browser.as_object = as_object;
        self
    }

    /// Inject the console-like host object
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, console: ConsoleObject) -> Self {
        self.console = ConsoleHost::Injected(console);
        self
    }

    /// Build as if the host had no console-like object at all
    #[must_use = "builder methods return a new value"]
    pub fn without_console(mut self) -> Self {
        self.console = ConsoleHost::Absent;
        self
    }

    /// Accept an error serializer hook (stored, never applied)
    #[must_use = "builder methods return a new value"]
    pub fn err_serializer(mut self, func: ErrSerializerFn) -> Self {
        self.config.serializers.err = Some(func);
        self
    }

    /// Build the Logger, resolving write targets once.
    pub fn build(self) -> Logger {
        let stdio;
        let console = match &self.console {
            ConsoleHost::Stdio => {
                stdio = ConsoleObject::stdio();
                Some(&stdio)
            }
            ConsoleHost::Injected(console) => Some(console),
            ConsoleHost::Absent => None,
        };
        let targets =
            ResolvedTargets::resolve(&self.config.browser, self.config.enabled, console);

        Logger {
            threshold: RwLock::new(self.config.level),
            targets: Arc::new(targets),
            chain: BindingChain::new(),
            serializers: self.config.serializers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_logger() {
        let logger = Logger::new();
        assert_eq!(logger.level(), Threshold::Level(LogLevel::Info));
        assert!(logger.is_level_enabled(LogLevel::Info));
        assert!(!logger.is_level_enabled(LogLevel::Debug));
    }

    #[test]
    fn test_set_level_by_name() {
        let logger = Logger::new();
        logger.set_level_name("trace").unwrap();
        assert_eq!(logger.level_value(), 10);

        let err = logger.set_level_name("loud").unwrap_err();
        assert!(matches!(err, LoggerError::UnknownLevel { .. }));
        // a failed set leaves the threshold untouched
        assert_eq!(logger.level_value(), 10);
    }

    #[test]
    fn test_child_requires_object_bindings() {
        let logger = Logger::new();
        assert!(matches!(
            logger.child(Value::Null),
            Err(LoggerError::InvalidChildBindings)
        ));
        assert!(matches!(
            logger.child(json!("not-an-object")),
            Err(LoggerError::InvalidChildBindings)
        ));
        assert!(logger.child(json!({"module": "auth"})).is_ok());
    }

    #[test]
    fn test_child_copies_threshold() {
        let logger = Logger::builder().level(LogLevel::Warn).build();
        let child = logger.child(json!({"a": 1})).unwrap();
        assert_eq!(child.level(), Threshold::Level(LogLevel::Warn));

        child.set_level(LogLevel::Trace);
        assert_eq!(logger.level(), Threshold::Level(LogLevel::Warn));
    }

    #[test]
    fn test_stubs_are_callable() {
        let logger = Logger::new();
        logger.on("error");
        logger.once("data");
        assert!(!logger.emit("error"));
        logger.add_listener("error");
        logger.prepend_listener("error");
        logger.prepend_once_listener("error");
        logger.remove_listener("error");
        logger.remove_all_listeners();
        assert!(logger.listeners("error").is_empty());
        assert_eq!(logger.listener_count("error"), 0);
        assert!(logger.event_names().is_empty());
        logger.set_max_listeners(10);
        assert_eq!(logger.get_max_listeners(), 0);
        logger.write("discarded");
        logger.flush();
    }

    #[test]
    fn test_without_console_nothing_panics() {
        let logger = Logger::builder().without_console().build();
        for level in crate::core::log_level::LEVELS {
            assert_eq!(logger.sink_kind(level), SinkKind::Noop);
        }
        logger.info("test");
        logger.fatal(json!({"oops": true}));
    }
}
