//! Sequential scenario runner.

use std::time::Instant;

use crate::harness::{render, Harness, Outcome};
use crate::scenarios::catalog::{Scenario, ScenarioContext};

/// Result of one scenario run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub name: &'static str,
    pub outcome: Option<Outcome>,
}

/// Announces and runs scenarios one after another.
pub struct Runner {
    harness: Harness,
    ctx: ScenarioContext,
}

impl Runner {
    pub fn new(harness: Harness, ctx: ScenarioContext) -> Self {
        Self { harness, ctx }
    }

    /// Run every scenario in order.
    ///
    /// A scenario ending in a harness error is reported as an unhandled
    /// failure and the next scenario still runs.
    pub async fn run_all(&self, scenarios: &[Scenario]) -> Vec<Report> {
        let mut reports = Vec::with_capacity(scenarios.len());

        for scenario in scenarios {
            self.harness.announce(scenario.name);
            let started = Instant::now();

            let outcome = match (scenario.run)(self.harness.clone(), self.ctx.clone()).await {
                Ok(outcome) => {
                    tracing::debug!(
                        scenario = scenario.name,
                        elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                        "Scenario finished"
                    );
                    Some(outcome)
                }
                Err(err) => {
                    tracing::error!(
                        scenario = scenario.name,
                        reason = %render(err.reason()),
                        "Unhandled failure: {}",
                        err
                    );
                    None
                }
            };

            reports.push(Report {
                name: scenario.name,
                outcome,
            });
        }

        reports
    }
}
