//! Asynchronous computations that settle exactly once.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;

use futures_util::future::{self, BoxFuture, FutureExt};
use futures_util::stream::{FuturesUnordered, StreamExt};
use tokio::sync::oneshot;

use crate::harness::outcome::Value;

type Settle = oneshot::Sender<Result<Value, Value>>;

/// An asynchronous computation that settles to a value or a failure reason.
#[must_use = "a task does nothing unless awaited or observed by a harness"]
pub struct Task {
    inner: BoxFuture<'static, Result<Value, Value>>,
}

impl Task {
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Result<Value, Value>> + Send + 'static,
    {
        Self { inner: future.boxed() }
    }

    /// A task that is already resolved with `value`.
    pub fn resolved(value: impl Into<Value>) -> Self {
        Self::new(future::ready(Ok(value.into())))
    }

    /// A task that is already rejected with `reason`.
    pub fn rejected(reason: impl Into<Value>) -> Self {
        Self::new(future::ready(Err(reason.into())))
    }

    /// Build a task from an executor that is run immediately.
    ///
    /// The first call to [`Resolver::resolve`] or [`Resolver::reject`] settles
    /// the task. Statements after that call still run. Returning `Err` from the
    /// executor rejects the task unless it has already settled, and nothing
    /// after the early return runs. A task whose executor never settles stays
    /// pending.
    pub fn with_executor<E>(executor: E) -> Self
    where
        E: FnOnce(Resolver) -> Result<(), Value>,
    {
        let (tx, rx) = oneshot::channel();
        let resolver = Resolver {
            slot: Arc::new(Mutex::new(Some(tx))),
        };

        if let Err(reason) = executor(resolver.clone()) {
            resolver.reject(reason);
        }

        Self::new(async move {
            match rx.await {
                Ok(result) => result,
                // Every resolver dropped without settling.
                Err(_) => future::pending::<Result<Value, Value>>().await,
            }
        })
    }

    /// Resolve with every value, in input order, once all tasks resolve.
    ///
    /// Every input is driven until it settles, even after a rejection, so
    /// observers attached to siblings still run. Rejects with the first
    /// rejection in completion order.
    pub fn all<I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = Task>,
    {
        let mut pending: FuturesUnordered<_> = tasks
            .into_iter()
            .enumerate()
            .map(|(index, task)| task.map(move |result| (index, result)))
            .collect();
        let len = pending.len();

        Self::new(async move {
            let mut values = vec![Value::Null; len];
            let mut first_rejection = None;

            while let Some((index, result)) = pending.next().await {
                match result {
                    Ok(value) => values[index] = value,
                    Err(reason) => {
                        first_rejection.get_or_insert(reason);
                    }
                }
            }

            match first_rejection {
                Some(reason) => Err(reason),
                None => Ok(Value::Array(values)),
            }
        })
    }

    /// Settle with the same result, but only after `delay` has passed.
    pub fn after(self, delay: Duration) -> Self {
        if delay.is_zero() {
            return self;
        }
        Self::new(async move {
            tokio::time::sleep(delay).await;
            self.await
        })
    }
}

impl Future for Task {
    type Output = Result<Value, Value>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.as_mut().poll(cx)
    }
}

impl std::fmt::Debug for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Task").finish_non_exhaustive()
    }
}

/// Settles the task created by [`Task::with_executor`].
#[derive(Clone)]
pub struct Resolver {
    slot: Arc<Mutex<Option<Settle>>>,
}

impl Resolver {
    /// Resolve the task. Returns `false` if it had already settled.
    pub fn resolve(&self, value: impl Into<Value>) -> bool {
        self.settle(Ok(value.into()))
    }

    /// Reject the task. Returns `false` if it had already settled.
    pub fn reject(&self, reason: impl Into<Value>) -> bool {
        self.settle(Err(reason.into()))
    }

    fn settle(&self, result: Result<Value, Value>) -> bool {
        let tx = match self.slot.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        match tx {
            // The receiver may already be gone if the task was dropped.
            Some(tx) => {
                let _ = tx.send(result);
                true
            }
            None => false,
        }
    }
}
