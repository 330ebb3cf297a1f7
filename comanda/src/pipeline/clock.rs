//! Clock abstraction for stage delays
//!
//! Stages never call the timer directly; the clock is injected so tests
//! run the pipeline without wall-clock waits.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

/// Suspends the caller for a stage's simulated work
#[async_trait]
pub trait Clock: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Real clock backed by the tokio timer
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Clock that completes immediately, recording each requested duration
///
/// Test-side stand-in: the pipeline keeps its blocking semantics while a
/// test observes which delays were requested. Clones share the record.
#[derive(Debug, Default, Clone)]
pub struct InstantClock {
    slept: Arc<Mutex<Vec<Duration>>>,
}

impl InstantClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Durations requested so far, in call order
    pub fn slept(&self) -> Vec<Duration> {
        self.slept.lock().expect("clock mutex poisoned").clone()
    }
}

#[async_trait]
impl Clock for InstantClock {
    async fn sleep(&self, duration: Duration) {
        self.slept.lock().expect("clock mutex poisoned").push(duration);
    }
}
