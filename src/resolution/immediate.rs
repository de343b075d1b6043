//! Immediate resolution system.
//!
//! Resolutions are due as soon as they are scheduled. No delay, no clock.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{PendingResolution, ResolutionSystem};

/// Immediate resolution system.
///
/// ## Behavior
///
/// - `schedule()`: Adds the resolution to the queue
/// - `advance()`: Returns every queued resolution in scheduling order,
///   ignoring `elapsed`
/// - `clear()`: Drops the queue
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ImmediateResolution {
    pending: Vec<PendingResolution>,
}

impl ImmediateResolution {
    /// Create a new immediate resolution system.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResolutionSystem for ImmediateResolution {
    fn schedule(&mut self, pending: PendingResolution) {
        self.pending.push(pending);
    }

    fn advance(&mut self, _elapsed: Duration) -> Vec<PendingResolution> {
        std::mem::take(&mut self.pending)
    }

    fn pending_count(&self) -> usize {
        self.pending.len()
    }

    fn clear(&mut self) {
        self.pending.clear();
    }
}
