//! Named scenarios.

use futures_util::future::{BoxFuture, FutureExt};

use crate::config::HarnessConfig;
use crate::harness::{Harness, HarnessError, Input, Outcome, Produced, Task, Value};
use crate::scenarios::producers;

/// Settings a scenario needs beyond the harness itself.
#[derive(Debug, Clone, Default)]
pub struct ScenarioContext {
    pub config: HarnessConfig,
}

impl ScenarioContext {
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    pub fn nested_indent(&self) -> &str {
        &self.config.display.nested_indent
    }

    /// Wrap a producer so any task it returns settles after the configured delay.
    pub fn paced(&self, producer: fn() -> Result<Produced, Value>) -> Input {
        let delay = self.config.timing.next_delay();
        Input::producer(move || producer().map(|produced| produced.after(delay)))
    }
}

pub type ScenarioFn = fn(Harness, ScenarioContext) -> BoxFuture<'static, Result<Outcome, HarnessError>>;

/// A named demonstration.
#[derive(Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub run: ScenarioFn,
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario").field("name", &self.name).finish()
    }
}

/// Scenarios run by the binary.
pub fn catalog() -> Vec<Scenario> {
    vec![Scenario {
        name: "all swallowing a rejection",
        run: all_swallowing_a_rejection,
    }]
}

/// An outer harness over `Task::all` of nested harness results, one of which
/// is a recovered rejection. The outer harness resolves because the nested
/// rejection was already recovered.
pub fn all_swallowing_a_rejection(
    harness: Harness,
    ctx: ScenarioContext,
) -> BoxFuture<'static, Result<Outcome, HarnessError>> {
    async move {
        let indent = ctx.nested_indent();

        let plain = harness
            .observe_sync(producers::not_a_promise, indent)
            .into_settled_value()
            .unwrap_or(Value::Null);

        let nested = vec![
            harness.observe(ctx.paced(producers::always_resolve_in_promise), indent)?.into_task(),
            Task::resolved(plain),
            harness.observe(ctx.paced(producers::always_reject_in_promise), indent)?.into_task(),
            harness.observe(ctx.paced(producers::always_resolve_in_promise), indent)?.into_task(),
        ];

        harness.observe(Task::all(nested), "")?.await
    }
    .boxed()
}
