//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML), path from OUTCOME_HARNESS_CONFIG
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → HarnessConfig (validated, immutable)
//!     → logging init, scenario runner
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; no file at all means defaults
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, CONFIG_ENV};
pub use schema::{DisplayConfig, HarnessConfig, ObservabilityConfig, TimingConfig};
