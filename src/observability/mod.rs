//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Harness observers and the scenario runner produce:
//!     → sink.rs (one styled line per outcome: Resolved, Rejected, Exception, Info)
//!         → TracingSink → tracing events → fmt layer (timestamped stdout)
//!         → MemorySink  → in-memory buffer (tests)
//!     → logging.rs (subscriber setup, crate diagnostics)
//! ```
//!
//! # Design Decisions
//! - The harness depends only on the narrow `Sink` contract
//! - Timestamps belong to the subscriber, never to the harness
//! - Log level configurable via config and environment

pub mod logging;
pub mod sink;

pub use sink::{LogLine, MemorySink, Sink, Style, TracingSink};
