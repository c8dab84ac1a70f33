// ABOUTME: Polling cadence and deadline for watch loops.
// ABOUTME: Watchers check the deadline every iteration so a stuck release terminates.

use std::time::Duration;
use tokio::time::Instant;

/// How a watch loop paces itself and when it gives up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Fixed backoff between polls.
    pub interval: Duration,
    /// Overall deadline for the watch; `None` polls without bound.
    pub max_wait: Option<Duration>,
}

impl PollPolicy {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            max_wait: None,
        }
    }

    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = Some(max_wait);
        self
    }

    pub fn expired(&self, started: Instant) -> bool {
        self.max_wait.is_some_and(|limit| started.elapsed() >= limit)
    }
}
