//! The outcome harness and its three entry points.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::future::{self, BoxFuture, FutureExt};

use crate::harness::outcome::{render, HarnessError, Outcome, Value};
use crate::harness::task::Task;
use crate::observability::{Sink, Style};

/// A zero-argument callable; `Err` is a synchronous throw.
pub type Producer = Box<dyn FnOnce() -> Result<Produced, Value> + Send>;

/// What a producer returned.
#[derive(Debug)]
pub enum Produced {
    Value(Value),
    Task(Task),
}

impl Produced {
    /// Delay settlement of a returned task. Plain values are left alone.
    pub fn after(self, delay: std::time::Duration) -> Self {
        match self {
            Produced::Task(task) => Produced::Task(task.after(delay)),
            plain => plain,
        }
    }
}

impl From<Task> for Produced {
    fn from(task: Task) -> Self {
        Produced::Task(task)
    }
}

impl From<Value> for Produced {
    fn from(value: Value) -> Self {
        Produced::Value(value)
    }
}

/// Harness input, decided by the caller.
pub enum Input {
    Producer(Producer),
    Task(Task),
}

impl Input {
    pub fn producer<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<Produced, Value> + Send + 'static,
    {
        Input::Producer(Box::new(f))
    }
}

impl From<Task> for Input {
    fn from(task: Task) -> Self {
        Input::Task(task)
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Producer(_) => f.write_str("Input::Producer(..)"),
            Input::Task(task) => f.debug_tuple("Input::Task").field(task).finish(),
        }
    }
}

/// What happens to a task failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Log the rejection and continue downstream with its reason as a value.
    Recover,
    /// Attach no failure observer; the rejection goes back to the caller unlogged.
    Propagate,
}

impl Policy {
    fn variant(self) -> &'static str {
        match self {
            Policy::Recover => "recover",
            Policy::Propagate => "success-only",
        }
    }
}

const SYNC_VARIANT: &str = "sync";

/// Observation of a task, settling once its outcome is known.
///
/// Observers run on a spawned task, so the outcome is logged whether or not
/// the settlement is awaited.
pub struct Settlement {
    inner: BoxFuture<'static, Result<Outcome, HarnessError>>,
}

impl Settlement {
    fn new<F>(future: F) -> Self
    where
        F: Future<Output = Result<Outcome, HarnessError>> + Send + 'static,
    {
        Self { inner: future.boxed() }
    }

    fn ready(outcome: Outcome) -> Self {
        Self::new(future::ready(Ok(outcome)))
    }

    fn spawned<F>(observation: F) -> Self
    where
        F: Future<Output = Result<Outcome, HarnessError>> + Send + 'static,
    {
        let handle = tokio::spawn(observation);
        Self::new(async move {
            match handle.await {
                Ok(result) => result,
                Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
                // Cancelled by runtime shutdown; nothing will settle.
                Err(_) => future::pending::<Result<Outcome, HarnessError>>().await,
            }
        })
    }

    /// Continue as a task carrying the downstream value.
    ///
    /// A recovered rejection resolves with its reason; an unobserved one rejects.
    pub fn into_task(self) -> Task {
        Task::new(async move {
            match self.await {
                Ok(outcome) => Ok(outcome.into_settled_value().unwrap_or(Value::Null)),
                Err(err) => Err(err.into_reason()),
            }
        })
    }
}

impl Future for Settlement {
    type Output = Result<Outcome, HarnessError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.as_mut().poll(cx)
    }
}

impl fmt::Debug for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settlement").finish_non_exhaustive()
    }
}

/// Runs producers and tasks, reporting each outcome to a sink.
#[derive(Clone)]
pub struct Harness {
    sink: Arc<dyn Sink>,
}

impl Harness {
    pub fn new<S: Sink + 'static>(sink: S) -> Self {
        Self { sink: Arc::new(sink) }
    }

    /// Observe success and failure; rejections are logged and recovered.
    pub fn observe(&self, input: impl Into<Input>, indent: &str) -> Result<Settlement, HarnessError> {
        self.run(input.into(), indent, Policy::Recover)
    }

    /// Observe success only; rejections reach the caller unlogged.
    pub fn observe_success_only(
        &self,
        input: impl Into<Input>,
        indent: &str,
    ) -> Result<Settlement, HarnessError> {
        self.run(input.into(), indent, Policy::Propagate)
    }

    /// Invoke `input` and attach observers according to `policy`.
    ///
    /// A producer that throws is logged and its error returned here, before
    /// anything suspends. Plain values are logged right away. Task observers
    /// start immediately on the current tokio runtime, which must exist.
    pub fn run(&self, input: Input, indent: &str, policy: Policy) -> Result<Settlement, HarnessError> {
        let variant = policy.variant();

        let produced = match input {
            Input::Task(task) => Produced::Task(task),
            Input::Producer(producer) => match producer() {
                Ok(produced) => produced,
                Err(thrown) => {
                    self.report(Style::Exception, indent, variant, &thrown);
                    return Err(HarnessError::Thrown(thrown));
                }
            },
        };

        let task = match produced {
            Produced::Value(value) => {
                self.report(Style::Resolved, indent, variant, &value);
                return Ok(Settlement::ready(Outcome::Resolved(value)));
            }
            Produced::Task(task) => task,
        };

        let harness = self.clone();
        let indent = indent.to_string();
        Ok(Settlement::spawned(async move {
            match task.await {
                Ok(value) => {
                    harness.report(Style::Resolved, &indent, variant, &value);
                    Ok(Outcome::Resolved(value))
                }
                Err(reason) => match policy {
                    Policy::Recover => {
                        harness.report(Style::Rejected, &indent, variant, &reason);
                        Ok(Outcome::Rejected(reason))
                    }
                    Policy::Propagate => Err(HarnessError::Unobserved(reason)),
                },
            }
        }))
    }

    /// Invoke a producer that returns plain values; a throw is logged and absorbed.
    pub fn observe_sync<F>(&self, producer: F, indent: &str) -> Outcome
    where
        F: FnOnce() -> Result<Value, Value>,
    {
        match producer() {
            Ok(value) => {
                self.report(Style::Resolved, indent, SYNC_VARIANT, &value);
                Outcome::Resolved(value)
            }
            Err(thrown) => {
                self.report(Style::Exception, indent, SYNC_VARIANT, &thrown);
                Outcome::Thrown(thrown)
            }
        }
    }

    /// Log a scenario heading.
    pub fn announce(&self, message: &str) {
        self.sink.log(message, Style::Info);
    }

    fn report(&self, style: Style, indent: &str, variant: &str, value: &Value) {
        self.sink.log(&format_line(style, indent, variant, value), style);
    }
}

impl fmt::Debug for Harness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Harness").finish_non_exhaustive()
    }
}

fn format_line(style: Style, indent: &str, variant: &str, value: &Value) -> String {
    match style.marker() {
        Some(marker) => format!("{indent}{marker} {variant}: {}", render(value)),
        None => format!("{indent}{variant}: {}", render(value)),
    }
}
