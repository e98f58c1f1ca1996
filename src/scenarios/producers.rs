//! Toy producers exercised by the scenarios.

use serde_json::json;

use crate::harness::{Produced, Task, Value};

/// Returns a plain value.
pub fn not_a_promise() -> Result<Value, Value> {
    Ok(json!("foo"))
}

/// Throws before any task exists.
pub fn always_throw() -> Result<Value, Value> {
    Err(json!("irrecoverable error outside a promise"))
}

/// Returns a task that resolves with `42`.
pub fn always_resolve_in_promise() -> Result<Produced, Value> {
    Ok(Task::resolved(42).into())
}

/// Returns a task whose executor rejects and then keeps going.
pub fn always_reject_in_promise() -> Result<Produced, Value> {
    Ok(Task::with_executor(|resolver| {
        resolver.reject("could not complete");
        tracing::trace!("executor still running after reject");
        Ok(())
    })
    .into())
}

/// Returns a task whose executor bails out with an error.
pub fn always_throw_in_promise() -> Result<Produced, Value> {
    Ok(Task::with_executor(|_resolver| Err(json!("irrecoverable error inside a promise"))).into())
}
