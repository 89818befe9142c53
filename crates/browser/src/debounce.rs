//! Search input debouncing.
//!
//! Every keystroke restarts the quiet period; the query is only applied once
//! no new input arrived for the whole delay. Uses `tokio::time::Instant` so
//! tests can drive it with paused time.

use std::time::Duration;
use tokio::time::{Instant, sleep_until};
use tracing::debug;

#[derive(Debug, Clone)]
struct Pending {
    query: String,
    deadline: Instant,
}

/// Delays search queries until input has been quiet for `delay`
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    delay: Duration,
    applied: String,
    pending: Option<Pending>,
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            applied: String::new(),
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The query filtering currently runs with
    pub fn applied(&self) -> &str {
        &self.applied
    }

    /// Input still waiting out the quiet period
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.query.as_str())
    }

    /// Record new input and restart the quiet period
    pub fn submit(&mut self, query: impl Into<String>) {
        let query = query.into();
        debug!("Search input {:?}, applying in {:?}", query, self.delay);
        self.pending = Some(Pending {
            query,
            deadline: Instant::now() + self.delay,
        });
    }

    /// Apply pending input if its quiet period has elapsed.
    ///
    /// Returns true when the applied query changed.
    pub fn poll(&mut self) -> bool {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|p| p.deadline <= Instant::now());
        if due { self.flush() } else { false }
    }

    /// Wait out the quiet period, then apply.
    pub async fn settle(&mut self) -> bool {
        if let Some(pending) = &self.pending {
            sleep_until(pending.deadline).await;
        }
        self.flush()
    }

    /// Apply pending input now
    pub fn flush(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        if pending.query == self.applied {
            return false;
        }
        debug!("Applying search query {:?}", pending.query);
        self.applied = pending.query;
        true
    }

    /// Drop pending input and the applied query
    pub fn reset(&mut self) {
        self.pending = None;
        self.applied.clear();
    }
}
