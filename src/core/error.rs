//! Error types for the logger facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A level name not present in the level registry
    #[error("unknown log level: '{name}'")]
    UnknownLevel { name: String },

    /// `child()` was called without an actual binding object
    #[error("child logger bindings must be a non-null object")]
    InvalidChildBindings,
}

impl LoggerError {
    /// Create an unknown-level error for the given name
    pub fn unknown_level(name: impl Into<String>) -> Self {
        LoggerError::UnknownLevel { name: name.into() }
    }
}
