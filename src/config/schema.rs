//! Configuration schema definitions.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct HarnessConfig {
    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Presentation of harness lines.
    pub display: DisplayConfig,

    /// Artificial settlement delays for scenario tasks.
    pub timing: TimingConfig,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Display configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Prefix for lines logged by nested harness invocations.
    pub nested_indent: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            nested_indent: "  ".to_string(),
        }
    }
}

/// Timing configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    /// Fixed delay before each scenario task settles, in milliseconds.
    pub settle_delay_ms: u64,

    /// Upper bound of a random extra delay, in milliseconds.
    pub jitter_ms: u64,
}

impl TimingConfig {
    /// Delay for the next task: the fixed part plus `0..=jitter_ms`.
    pub fn next_delay(&self) -> Duration {
        let jitter = if self.jitter_ms > 0 {
            fastrand::u64(0..=self.jitter_ms)
        } else {
            0
        };
        Duration::from_millis(self.settle_delay_ms + jitter)
    }
}
