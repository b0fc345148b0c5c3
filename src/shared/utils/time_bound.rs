//! Deadline-bounded execution
//!
//! Every remote call in the crate goes through [`TimeBoundedExecutor::run`],
//! which races the call against a timer and turns any failure into the
//! caller's default value. The losing branch is dropped and its cancellation
//! token is cancelled, so a timed-out request does not keep its socket alive.

use super::logger::LogContext;
use crate::shared::errors::{AppError, AppResult};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Receives every failure the executor absorbs.
pub trait DegradationObserver: Send + Sync {
    fn on_degraded(&self, operation: &str, cause: &AppError);
}

/// Default observer: logs a warning per degraded call.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl DegradationObserver for LoggingObserver {
    fn on_degraded(&self, operation: &str, cause: &AppError) {
        LogContext::degraded_call(operation, &cause.to_string());
    }
}

/// Races operations against a deadline and never lets an error escape.
#[derive(Clone)]
pub struct TimeBoundedExecutor {
    observer: Arc<dyn DegradationObserver>,
    root: CancellationToken,
}

impl TimeBoundedExecutor {
    pub fn new() -> Self {
        Self::with_observer(Arc::new(LoggingObserver))
    }

    pub fn with_observer(observer: Arc<dyn DegradationObserver>) -> Self {
        Self {
            observer,
            root: CancellationToken::new(),
        }
    }

    /// Token that parents every operation started by this executor.
    pub fn root_token(&self) -> CancellationToken {
        self.root.clone()
    }

    /// Cancel every in-flight operation. Later calls return their default at once.
    pub fn cancel_all(&self) {
        self.root.cancel();
    }

    /// Run `operation` with `deadline`, returning `default` on timeout, error or cancellation.
    ///
    /// A zero deadline is an immediate timeout: the operation is never started.
    pub async fn run<T, F, Fut>(&self, operation: &str, deadline: Duration, default: T, op: F) -> T
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        if deadline.is_zero() {
            self.observer.on_degraded(
                operation,
                &AppError::TimeoutExceeded(format!("{} has a zero deadline", operation)),
            );
            return default;
        }

        let token = self.root.child_token();
        let work = op(token.clone());

        tokio::select! {
            biased;
            result = work => match result {
                Ok(value) => value,
                Err(err) => {
                    self.observer.on_degraded(operation, &err);
                    default
                }
            },
            _ = token.cancelled() => {
                self.observer.on_degraded(
                    operation,
                    &AppError::Cancelled(format!("{} was cancelled", operation)),
                );
                default
            }
            _ = tokio::time::sleep(deadline) => {
                token.cancel();
                self.observer.on_degraded(
                    operation,
                    &AppError::TimeoutExceeded(format!(
                        "{} exceeded {}ms",
                        operation,
                        deadline.as_millis()
                    )),
                );
                default
            }
        }
    }
}

impl Default for TimeBoundedExecutor {
    fn default() -> Self {
        Self::new()
    }
}
