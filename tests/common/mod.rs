//! Shared utilities for integration tests.

use std::time::Duration;

use outcome_harness::harness::{Input, Task, Value};
use outcome_harness::{Harness, MemorySink};

/// A harness writing into a fresh in-memory sink.
pub fn capture() -> (Harness, MemorySink) {
    let sink = MemorySink::new();
    (Harness::new(sink.clone()), sink)
}

/// A producer whose task resolves with `value` after `delay_ms`.
#[allow(dead_code)]
pub fn resolves_after(value: Value, delay_ms: u64) -> Input {
    Input::producer(move || Ok(Task::resolved(value).after(Duration::from_millis(delay_ms)).into()))
}

/// A producer whose task rejects with `reason` after `delay_ms`.
#[allow(dead_code)]
pub fn rejects_after(reason: Value, delay_ms: u64) -> Input {
    Input::producer(move || Ok(Task::rejected(reason).after(Duration::from_millis(delay_ms)).into()))
}
