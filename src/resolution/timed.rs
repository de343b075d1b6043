//! Timed resolution system.
//!
//! Keeps a virtual clock advanced by the caller (typically once per
//! rendered frame). A resolution scheduled at time `t` with delay `d` is
//! due once the clock reaches `t + d`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{PendingResolution, ResolutionSystem};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Scheduled {
    due_at: Duration,
    pending: PendingResolution,
}

/// Virtual-clock resolution system.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TimedResolution {
    now: Duration,
    /// Sorted by `due_at`; ties keep scheduling order.
    queue: Vec<Scheduled>,
}

impl TimedResolution {
    /// Create a new timed resolution system at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Time until the earliest scheduled resolution is due.
    ///
    /// `None` when nothing is scheduled.
    #[must_use]
    pub fn time_until_next(&self) -> Option<Duration> {
        self.queue
            .first()
            .map(|s| s.due_at.saturating_sub(self.now))
    }
}

impl ResolutionSystem for TimedResolution {
    fn schedule(&mut self, pending: PendingResolution) {
        let due_at = self.now.saturating_add(pending.delay);
        let position = self.queue.partition_point(|s| s.due_at <= due_at);
        self.queue.insert(position, Scheduled { due_at, pending });
    }

    fn advance(&mut self, elapsed: Duration) -> Vec<PendingResolution> {
        self.now = self.now.saturating_add(elapsed);
        let ready = self.queue.partition_point(|s| s.due_at <= self.now);
        self.queue.drain(..ready).map(|s| s.pending).collect()
    }

    fn pending_count(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }
}
