//! Level registry: fixed severity levels and the silent threshold sentinel

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six recognized severity levels.
///
/// Numeric values are strictly increasing with severity and are part of the
/// wire contract: a structured record carries the numeric value, not the
/// label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace = 10,
    Debug = 20,
    #[default]
    Info = 30,
    Warn = 40,
    Error = 50,
    Fatal = 60,
}

/// All levels, lowest severity first.
pub const LEVELS: [LogLevel; 6] = [
    LogLevel::Trace,
    LogLevel::Debug,
    LogLevel::Info,
    LogLevel::Warn,
    LogLevel::Error,
    LogLevel::Fatal,
];

/// Forward registry map: level label to numeric value.
pub const LEVEL_VALUES: [(&str, u8); 6] = [
    ("trace", 10),
    ("debug", 20),
    ("info", 30),
    ("warn", 40),
    ("error", 50),
    ("fatal", 60),
];

/// Reverse registry map: numeric value to canonical label.
pub const LEVEL_LABELS: [(u8, &str); 6] = [
    (10, "trace"),
    (20, "debug"),
    (30, "info"),
    (40, "warn"),
    (50, "error"),
    (60, "fatal"),
];

impl LogLevel {
    /// Numeric severity value of this level.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Canonical lowercase label of this level.
    pub const fn label(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
        }
    }

    /// Look up a level by its exact numeric value.
    ///
    /// Used for diagnostics and introspection, not on the hot path.
    pub fn from_value(value: u8) -> Option<Self> {
        LEVELS.iter().copied().find(|l| l.value() == value)
    }

    /// Index of this level within [`LEVELS`].
    pub(crate) const fn index(self) -> usize {
        match self {
            LogLevel::Trace => 0,
            LogLevel::Debug => 1,
            LogLevel::Info => 2,
            LogLevel::Warn => 3,
            LogLevel::Error => 4,
            LogLevel::Fatal => 5,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            other => Err(LoggerError::unknown_level(other)),
        }
    }
}

/// A logger's active threshold: one of the six levels, or silent.
///
/// `Silent` compares above every level and disables all output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Threshold {
    Level(LogLevel),
    Silent,
}

impl Threshold {
    /// Sentinel value for silent, greater than every level value.
    pub const SILENT_VALUE: u8 = u8::MAX;

    /// Numeric value of this threshold.
    pub const fn value(self) -> u8 {
        match self {
            Threshold::Level(level) => level.value(),
            Threshold::Silent => Self::SILENT_VALUE,
        }
    }

    /// Whether a call at `level` passes this threshold.
    pub const fn enables(self, level: LogLevel) -> bool {
        level.value() >= self.value()
    }

    /// Canonical label, `"silent"` for the sentinel.
    pub const fn label(self) -> &'static str {
        match self {
            Threshold::Level(level) => level.label(),
            Threshold::Silent => "silent",
        }
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::Level(LogLevel::Info)
    }
}

impl From<LogLevel> for Threshold {
    fn from(level: LogLevel) -> Self {
        Threshold::Level(level)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Threshold {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "silent" {
            Ok(Threshold::Silent)
        } else {
            s.parse::<LogLevel>().map(Threshold::Level)
        }
    }
}
