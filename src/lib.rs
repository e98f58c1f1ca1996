//! Outcome harness: observe how synchronous throws, task rejections and plain
//! return values propagate under different observer policies.

pub mod config;
pub mod harness;
pub mod observability;
pub mod scenarios;

pub use config::HarnessConfig;
pub use harness::{Harness, HarnessError, Input, Outcome, Policy, Produced, Settlement, Task};
pub use observability::{MemorySink, Sink, Style, TracingSink};
