//! Write-target resolver
//!
//! Decides, once per root logger construction, which sink services each
//! severity level. The decision table, in precedence order: a single custom
//! write function, a per-level write map with object-mode console fallback,
//! plain console routing, and finally an explicit no-op.

use super::argument::LogArgument;
use super::config::BrowserOptions;
use super::console::{ConsoleFn, ConsoleMethod, ConsoleObject};
use super::log_level::{LogLevel, LEVELS};
use super::record::LogRecord;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A custom sink function: always receives the structured record.
pub type WriteFn = Arc<dyn Fn(&LogRecord) + Send + Sync>;

/// The `write` configuration option.
#[derive(Clone)]
pub enum WriteTarget {
    /// One function services every level
    Single(WriteFn),
    /// Each mapped level gets its own function; unmapped levels fall back to
    /// the console in object mode
    PerLevel(HashMap<LogLevel, WriteFn>),
}

impl fmt::Debug for WriteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteTarget::Single(_) => f.write_str("WriteTarget::Single"),
            WriteTarget::PerLevel(map) => {
                let mut levels: Vec<_> = map.keys().map(|l| l.label()).collect();
                levels.sort_unstable();
                f.debug_tuple("WriteTarget::PerLevel").field(&levels).finish()
            }
        }
    }
}

/// The resolved sink for one level.
#[derive(Clone)]
pub enum Sink {
    /// Custom write function, fed the structured record
    Write(WriteFn),
    /// Console method, fed raw arguments or (in object mode) the record
    Console {
        method: ConsoleMethod,
        func: ConsoleFn,
        as_object: bool,
    },
    /// Deterministic no-op, identifiable at runtime
    Noop,
}

/// Introspectable shape of a resolved sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Write,
    Console(ConsoleMethod),
    Noop,
}

impl Sink {
    pub fn kind(&self) -> SinkKind {
        match self {
            Sink::Write(_) => SinkKind::Write,
            Sink::Console { method, .. } => SinkKind::Console(*method),
            Sink::Noop => SinkKind::Noop,
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Sink::Noop)
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind())
    }
}

/// Per-level sinks, resolved once and shared by reference from the root
/// logger to every descendant.
#[derive(Debug, Clone)]
pub struct ResolvedTargets {
    sinks: [Sink; 6],
}

impl ResolvedTargets {
    /// Run the resolution policy.
    ///
    /// `console` is `None` when the host has no console-like object at all,
    /// in which case unrouted levels become no-ops.
    pub fn resolve(browser: &BrowserOptions, enabled: bool, console: Option<&ConsoleObject>) -> Self {
        if !enabled {
            return Self {
                sinks: std::array::from_fn(|_| Sink::Noop),
            };
        }

        let sinks = std::array::from_fn(|i| {
            let level = LEVELS[i];
            match &browser.write {
                Some(WriteTarget::Single(func)) => Sink::Write(func.clone()),
                Some(WriteTarget::PerLevel(map)) => match map.get(&level) {
                    Some(func) => Sink::Write(func.clone()),
                    // a write override implies structured output, so the
                    // console fallback delivers the record as an object
                    None => console_sink(console, level, true),
                },
                None => console_sink(console, level, browser.as_object),
            }
        });

        Self { sinks }
    }

    pub fn sink(&self, level: LogLevel) -> &Sink {
        &self.sinks[level.index()]
    }

    /// Dispatch raw positional arguments to the sink for `level`.
    ///
    /// Custom write functions never see raw arguments; they receive the
    /// record built by the caller through [`dispatch_record`].
    pub fn dispatch_raw(&self, level: LogLevel, args: &[LogArgument]) {
        if let Sink::Console { func, .. } = self.sink(level) {
            func(args);
        }
    }

    /// Dispatch a structured record to the sink for `level`.
    pub fn dispatch_record(&self, level: LogLevel, record: LogRecord) {
        match self.sink(level) {
            Sink::Write(func) => func(&record),
            Sink::Console { func, .. } => func(&[record.into_argument()]),
            Sink::Noop => {}
        }
    }
}

fn console_sink(console: Option<&ConsoleObject>, level: LogLevel, as_object: bool) -> Sink {
    match console.and_then(|c| c.resolve(level)) {
        Some((method, func)) => Sink::Console {
            method,
            func,
            as_object,
        },
        None => Sink::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn capture_write() -> (WriteFn, Arc<Mutex<Vec<LogRecord>>>) {
        let store: Arc<Mutex<Vec<LogRecord>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = store.clone();
        let func: WriteFn = Arc::new(move |record| sink.lock().push(record.clone()));
        (func, store)
    }

    #[test]
    fn test_single_write_routes_every_level() {
        let (func, _) = capture_write();
        let browser = BrowserOptions {
            write: Some(WriteTarget::Single(func)),
            as_object: false,
        };
        let targets = ResolvedTargets::resolve(&browser, true, None);
        for level in LEVELS {
            assert_eq!(targets.sink(level).kind(), SinkKind::Write);
        }
    }

    #[test]
    fn test_per_level_map_with_console_fallback() {
        let (func, _) = capture_write();
        let mut map = HashMap::new();
        map.insert(LogLevel::Error, func);
        let browser = BrowserOptions {
            write: Some(WriteTarget::PerLevel(map)),
            as_object: false,
        };
        let console = ConsoleObject::stdio();
        let targets = ResolvedTargets::resolve(&browser, true, Some(&console));

        assert_eq!(targets.sink(LogLevel::Error).kind(), SinkKind::Write);
        match targets.sink(LogLevel::Info) {
            Sink::Console { method, as_object, .. } => {
                assert_eq!(*method, ConsoleMethod::Info);
                assert!(*as_object, "map fallback must deliver structured records");
            }
            other => panic!("expected console sink, got {:?}", other),
        }
    }

    #[test]
    fn test_absent_console_yields_noops() {
        let targets = ResolvedTargets::resolve(&BrowserOptions::default(), true, None);
        for level in LEVELS {
            assert!(targets.sink(level).is_noop());
        }
        // dispatching through a no-op must not panic
        targets.dispatch_raw(LogLevel::Info, &[LogArgument::from("test")]);
        targets.dispatch_record(LogLevel::Info, LogRecord::new(LogLevel::Info));
    }

    #[test]
    fn test_disabled_overrides_everything() {
        let (func, store) = capture_write();
        let browser = BrowserOptions {
            write: Some(WriteTarget::Single(func)),
            as_object: false,
        };
        let targets = ResolvedTargets::resolve(&browser, false, Some(&ConsoleObject::stdio()));
        for level in LEVELS {
            assert!(targets.sink(level).is_noop());
        }
        targets.dispatch_record(LogLevel::Fatal, LogRecord::new(LogLevel::Fatal));
        assert!(store.lock().is_empty());
    }
}
