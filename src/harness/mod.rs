//! Outcome harness subsystem.
//!
//! # Data Flow
//! ```text
//! Input::Producer(f) ──▶ f() ──┬─▶ Err(thrown)          → (Ex) logged, re-raised
//!                              ├─▶ Produced::Value(v)   → (Rs) logged, ready settlement
//!                              └─▶ Produced::Task(t) ─┐
//! Input::Task(t) ─────────────────────────────────────┴─▶ Settlement
//!                                                          ├─ Ok(v)  → (Rs) logged
//!                                                          └─ Err(r) → Policy::Recover:   (Rj) logged, Ok(Rejected(r))
//!                                                                      Policy::Propagate: Err(Unobserved(r))
//! ```
//!
//! # Design Decisions
//! - Producers never suspend; only task settlement does
//! - Exactly one outcome per invocation, logged before any propagation decision
//! - Recovery of rejections is an explicit policy, not a side effect of which observer is attached

pub mod outcome;
pub mod runner;
pub mod task;

pub use outcome::{render, HarnessError, Outcome, Value};
pub use runner::{Harness, Input, Policy, Produced, Producer, Settlement};
pub use task::{Resolver, Task};
