//! Construction-time configuration
//!
//! Mirrors the option object of the fuller logging interface this facade
//! stands in for. Unrecognized concerns (transports, rotation) have no
//! options here by design.

use super::argument::ErrorArgument;
use super::log_level::Threshold;
use super::resolver::WriteTarget;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Consumer-supplied error serializer hook.
///
/// Accepted for API parity with the non-console counterpart; stored but
/// never applied in this environment.
pub type ErrSerializerFn = Arc<dyn Fn(&ErrorArgument) -> Value + Send + Sync>;

/// Recognized construction options.
#[derive(Clone)]
pub struct LoggerConfig {
    /// Initial threshold, `info` by default
    pub level: Threshold,
    /// `false` turns every sink into a no-op at resolution time
    pub enabled: bool,
    /// Console-environment routing options
    pub browser: BrowserOptions,
    /// Serializer hooks, kept as documented no-ops
    pub serializers: Serializers,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Threshold::default(),
            enabled: true,
            browser: BrowserOptions::default(),
            serializers: Serializers::default(),
        }
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("level", &self.level)
            .field("enabled", &self.enabled)
            .field("browser", &self.browser)
            .field("err_serializer", &self.serializers.err.is_some())
            .finish()
    }
}

/// Routing options for the console-style environment.
#[derive(Debug, Clone, Default)]
pub struct BrowserOptions {
    /// Sink override: a single function or a per-level map
    pub write: Option<WriteTarget>,
    /// Route the structured record, not raw arguments, to console methods
    pub as_object: bool,
}

/// Serializer hooks accepted at configuration time.
#[derive(Clone, Default)]
pub struct Serializers {
    pub err: Option<ErrSerializerFn>,
}

impl fmt::Debug for Serializers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Serializers")
            .field("err", &self.err.is_some())
            .finish()
    }
}
