//! Outcome harness demo.
//!
//! Runs the scenario catalogue on a single-threaded runtime and prints one
//! timestamped line per observed outcome:
//!
//! ```text
//! (Rs) resolved   task resolved, or a plain value was returned
//! (Rj) rejected   task rejected and the rejection was recovered
//! (Ex) exception  producer threw before returning anything
//! ```
//!
//! Configuration is read from the TOML file named by `OUTCOME_HARNESS_CONFIG`
//! when set.

use outcome_harness::config::loader::load_from_env;
use outcome_harness::observability::{logging, TracingSink};
use outcome_harness::scenarios::{self, Runner, ScenarioContext};
use outcome_harness::Harness;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_from_env()?;
    logging::init(&config.observability);

    tracing::debug!(
        log_level = %config.observability.log_level,
        settle_delay_ms = config.timing.settle_delay_ms,
        jitter_ms = config.timing.jitter_ms,
        "Configuration loaded"
    );

    let runner = Runner::new(Harness::new(TracingSink), ScenarioContext::new(config));
    runner.run_all(&scenarios::catalog()).await;

    Ok(())
}
