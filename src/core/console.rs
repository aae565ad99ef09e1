//! Injected console-like host object
//!
//! The facade never reads a process-wide console singleton. Callers inject a
//! [`ConsoleObject`] whose methods may be individually absent, matching hosts
//! that ship a partial console, and the resolver probes for method presence
//! once at root construction.

use super::argument::LogArgument;
use super::log_level::LogLevel;
use std::fmt;
use std::sync::Arc;

/// A console method: receives the positional arguments of one log call.
pub type ConsoleFn = Arc<dyn Fn(&[LogArgument]) + Send + Sync>;

/// The method slots a console-like object may provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleMethod {
    Log,
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl ConsoleMethod {
    /// The method a level targets first. `fatal` has no slot of its own and
    /// targets the error method.
    pub const fn for_level(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => ConsoleMethod::Trace,
            LogLevel::Debug => ConsoleMethod::Debug,
            LogLevel::Info => ConsoleMethod::Info,
            LogLevel::Warn => ConsoleMethod::Warn,
            LogLevel::Error | LogLevel::Fatal => ConsoleMethod::Error,
        }
    }

    /// The documented substitute consulted when this method is absent.
    /// `warn` degrades through `error`; `log` is the end of every chain.
    pub const fn fallback(self) -> Option<Self> {
        match self {
            ConsoleMethod::Warn => Some(ConsoleMethod::Error),
            ConsoleMethod::Trace
            | ConsoleMethod::Debug
            | ConsoleMethod::Info
            | ConsoleMethod::Error => Some(ConsoleMethod::Log),
            ConsoleMethod::Log => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ConsoleMethod::Log => "log",
            ConsoleMethod::Trace => "trace",
            ConsoleMethod::Debug => "debug",
            ConsoleMethod::Info => "info",
            ConsoleMethod::Warn => "warn",
            ConsoleMethod::Error => "error",
        }
    }
}

/// A console-style host object with possibly-missing methods.
#[derive(Clone, Default)]
pub struct ConsoleObject {
    log: Option<ConsoleFn>,
    trace: Option<ConsoleFn>,
    debug: Option<ConsoleFn>,
    info: Option<ConsoleFn>,
    warn: Option<ConsoleFn>,
    error: Option<ConsoleFn>,
}

impl ConsoleObject {
    /// An object with every method absent.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A full console backed by the process streams: the error method writes
    /// to stderr, everything else to stdout. Arguments are space-joined the
    /// same way message joining works.
    pub fn stdio() -> Self {
        fn line(args: &[LogArgument]) -> String {
            args.iter()
                .map(LogArgument::join_text)
                .collect::<Vec<_>>()
                .join(" ")
        }
        let out: ConsoleFn = Arc::new(|args| println!("{}", line(args)));
        let err: ConsoleFn = Arc::new(|args| eprintln!("{}", line(args)));
        Self {
            log: Some(out.clone()),
            trace: Some(out.clone()),
            debug: Some(out.clone()),
            info: Some(out.clone()),
            warn: Some(out),
            error: Some(err),
        }
    }

    /// Install a method implementation.
    #[must_use = "builder methods return a new value"]
    pub fn with_method(mut self, method: ConsoleMethod, func: ConsoleFn) -> Self {
        *self.slot_mut(method) = Some(func);
        self
    }

    /// Remove a method, as on a host whose console lacks it.
    #[must_use = "builder methods return a new value"]
    pub fn without_method(mut self, method: ConsoleMethod) -> Self {
        *self.slot_mut(method) = None;
        self
    }

    /// Probe for a method's presence.
    pub fn method(&self, method: ConsoleMethod) -> Option<ConsoleFn> {
        match method {
            ConsoleMethod::Log => self.log.clone(),
            ConsoleMethod::Trace => self.trace.clone(),
            ConsoleMethod::Debug => self.debug.clone(),
            ConsoleMethod::Info => self.info.clone(),
            ConsoleMethod::Warn => self.warn.clone(),
            ConsoleMethod::Error => self.error.clone(),
        }
    }

    /// Resolve the method servicing `level`, walking the substitution chain.
    ///
    /// The chain is a static table, so resolution is O(1) and cannot recurse
    /// regardless of how the caller's level bookkeeping was corrupted.
    pub fn resolve(&self, level: LogLevel) -> Option<(ConsoleMethod, ConsoleFn)> {
        let mut candidate = Some(ConsoleMethod::for_level(level));
        while let Some(method) = candidate {
            if let Some(func) = self.method(method) {
                return Some((method, func));
            }
            candidate = method.fallback();
        }
        None
    }

    fn slot_mut(&mut self, method: ConsoleMethod) -> &mut Option<ConsoleFn> {
        match method {
            ConsoleMethod::Log => &mut self.log,
            ConsoleMethod::Trace => &mut self.trace,
            ConsoleMethod::Debug => &mut self.debug,
            ConsoleMethod::Info => &mut self.info,
            ConsoleMethod::Warn => &mut self.warn,
            ConsoleMethod::Error => &mut self.error,
        }
    }
}

impl fmt::Debug for ConsoleObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleObject")
            .field("log", &self.log.is_some())
            .field("trace", &self.trace.is_some())
            .field("debug", &self.debug.is_some())
            .field("info", &self.info.is_some())
            .field("warn", &self.warn.is_some())
            .field("error", &self.error.is_some())
            .finish()
    }
}
