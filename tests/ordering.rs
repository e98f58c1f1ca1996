//! Completion order of concurrently started harness invocations.

use futures_util::future::join_all;
use outcome_harness::config::{HarnessConfig, TimingConfig};
use outcome_harness::scenarios::{catalog, Runner, ScenarioContext};
use outcome_harness::Style;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_completion_order_is_not_invocation_order() {
    let (harness, sink) = common::capture();

    let slow = harness.observe(common::resolves_after(json!("slow"), 60), "").unwrap();
    let fast = harness.observe(common::resolves_after(json!("fast"), 0), "").unwrap();
    let settled = join_all([slow, fast]).await;

    // Results come back in invocation order...
    assert!(settled.iter().all(Result::is_ok));
    // ...but lines are logged in completion order.
    let lines: Vec<_> = sink.lines().into_iter().map(|l| l.message).collect();
    assert_eq!(lines, ["(Rs) recover: fast", "(Rs) recover: slow"]);
}

#[tokio::test]
async fn test_rejection_can_finish_first() {
    let (harness, sink) = common::capture();

    let settled = join_all([
        harness.observe(common::resolves_after(json!(1), 50), "").unwrap(),
        harness.observe(common::rejects_after(json!("early"), 0), "").unwrap(),
    ])
    .await;

    assert_eq!(settled.len(), 2);
    let lines = sink.lines();
    assert_eq!(lines[0].style, Style::Rejected);
    assert_eq!(lines[1].style, Style::Resolved);
}

#[tokio::test]
async fn test_jittered_scenario_keeps_values_in_order() {
    let (harness, sink) = common::capture();
    let config = HarnessConfig {
        timing: TimingConfig {
            settle_delay_ms: 1,
            jitter_ms: 20,
        },
        ..HarnessConfig::default()
    };

    let reports = Runner::new(harness, ScenarioContext::new(config))
        .run_all(&catalog())
        .await;

    // Nested lines may arrive in any order; the aggregate keeps input order.
    assert_eq!(
        reports[0].outcome.as_ref().and_then(|o| o.settled_value()),
        Some(&json!([42, "foo", "could not complete", 42]))
    );
    let last = sink.lines().pop().unwrap();
    assert_eq!(last.message, "(Rs) recover: 42,foo,could not complete,42");
}
