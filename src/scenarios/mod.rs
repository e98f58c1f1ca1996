//! Demonstration scenarios.
//!
//! # Data Flow
//! ```text
//! producers.rs (toy producers: plain value, throw, resolve, reject, throw-in-executor)
//!     → catalog.rs (named scenarios wiring producers into harness invocations)
//!     → runner.rs (announce each scenario, await it, report unhandled failures)
//! ```
//!
//! # Design Decisions
//! - Scenarios are plain values passed into the runner; no process-wide state
//! - Scenarios run one after another; harness calls inside a scenario run concurrently

pub mod catalog;
pub mod producers;
pub mod runner;

pub use catalog::{catalog, Scenario, ScenarioContext};
pub use runner::Runner;
