//! Outcome and error types shared by every harness variant.

use thiserror::Error;

pub use serde_json::Value;

/// Terminal outcome of one harness invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The producer returned a value or its task resolved.
    Resolved(Value),
    /// The task rejected and the rejection was observed.
    Rejected(Value),
    /// The producer threw before any task existed.
    Thrown(Value),
}

impl Outcome {
    /// Value handed to any downstream continuation.
    ///
    /// A recovered rejection continues with its reason. A thrown error has no
    /// downstream value.
    pub fn settled_value(&self) -> Option<&Value> {
        match self {
            Outcome::Resolved(value) | Outcome::Rejected(value) => Some(value),
            Outcome::Thrown(_) => None,
        }
    }

    pub fn into_settled_value(self) -> Option<Value> {
        match self {
            Outcome::Resolved(value) | Outcome::Rejected(value) => Some(value),
            Outcome::Thrown(_) => None,
        }
    }
}

/// Failures a harness hands back to its caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HarnessError {
    /// Synchronous throw from the producer, re-raised after logging.
    #[error("thrown: {}", render(.0))]
    Thrown(Value),

    /// Task failure with no failure observer attached.
    #[error("unobserved rejection: {}", render(.0))]
    Unobserved(Value),
}

impl HarnessError {
    /// The thrown error or rejection reason carried by this failure.
    pub fn reason(&self) -> &Value {
        match self {
            HarnessError::Thrown(reason) | HarnessError::Unobserved(reason) => reason,
        }
    }

    pub fn into_reason(self) -> Value {
        match self {
            HarnessError::Thrown(reason) | HarnessError::Unobserved(reason) => reason,
        }
    }
}

/// Render a value the way it reads in a log line.
///
/// Strings print without quotes and arrays print as their elements joined
/// with `,`. Everything else prints in JSON form.
pub fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(render).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_coerces_like_log_text() {
        assert_eq!(render(&json!("could not complete")), "could not complete");
        assert_eq!(render(&json!(42)), "42");
        assert_eq!(render(&json!([42, "foo", "could not complete", 42])), "42,foo,could not complete,42");
        assert_eq!(render(&json!(null)), "null");
        assert_eq!(render(&json!([[1, 2], "x"])), "1,2,x");
    }

    #[test]
    fn test_settled_value() {
        assert_eq!(Outcome::Resolved(json!(42)).settled_value(), Some(&json!(42)));
        assert_eq!(Outcome::Rejected(json!("nope")).into_settled_value(), Some(json!("nope")));
        assert_eq!(Outcome::Thrown(json!("boom")).settled_value(), None);
    }

    #[test]
    fn test_error_display() {
        let err = HarnessError::Thrown(json!("irrecoverable error"));
        assert_eq!(err.to_string(), "thrown: irrecoverable error");
        assert_eq!(err.reason(), &json!("irrecoverable error"));

        let err = HarnessError::Unobserved(json!("could not complete"));
        assert!(err.to_string().contains("could not complete"));
        assert_eq!(err.into_reason(), json!("could not complete"));
    }
}
