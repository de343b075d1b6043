//! Delayed pair resolution.
//!
//! Flipping the second card of a pair does not settle it. The engine
//! records a [`PendingResolution`] on the state and refuses further flips
//! until it is applied: a match moves both cards to the solved set, a
//! mismatch turns them back over. The delay between the two is a
//! presentation concern, so the scheduling lives behind
//! [`ResolutionSystem`]:
//!
//! - [`ImmediateResolution`]: every scheduled resolution is due on the next
//!   `advance`, whatever the elapsed time. For headless play and tests.
//! - [`TimedResolution`]: a virtual clock. A resolution is due once its
//!   delay has elapsed.
//!
//! Resetting a game clears the system; abandoned resolutions never run.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_maze::cards::CardIndex;
//! use memory_maze::resolution::{
//!     PendingResolution, ResolutionKind, ResolutionSystem, ResolutionTicket, TimedResolution,
//! };
//!
//! let mut timer = TimedResolution::new();
//! timer.schedule(PendingResolution {
//!     ticket: ResolutionTicket { deal: 1, step: 2 },
//!     kind: ResolutionKind::Mismatch,
//!     cards: [CardIndex::new(0), CardIndex::new(3)],
//!     delay: Duration::from_millis(550),
//! });
//!
//! assert!(timer.advance(Duration::from_millis(500)).is_empty());
//! assert_eq!(timer.advance(Duration::from_millis(50)).len(), 1);
//! ```

mod immediate;
mod timed;

pub use immediate::ImmediateResolution;
pub use timed::TimedResolution;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::CardIndex;

/// Outcome of comparing two flipped cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionKind {
    /// Same pair: both cards become solved.
    Match,
    /// Different pairs: both cards are hidden again.
    Mismatch,
}

/// Identifies one resolution within one deal.
///
/// `deal` is the random tag of the deal that produced it and `step` the
/// step count when the second card was flipped. A ticket from a previous
/// deal never matches the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolutionTicket {
    pub deal: u64,
    pub step: u32,
}

/// A resolution waiting for its delay to elapse.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingResolution {
    pub ticket: ResolutionTicket,
    pub kind: ResolutionKind,
    /// First and second flipped card.
    pub cards: [CardIndex; 2],
    /// How long the presentation should show both cards before resolving.
    pub delay: Duration,
}

/// Trait for resolution schedulers.
///
/// The session schedules every pending resolution the engine produces and
/// applies whatever `advance` reports as due.
pub trait ResolutionSystem {
    /// Schedule a resolution.
    fn schedule(&mut self, pending: PendingResolution);

    /// Advance time by `elapsed` and take every resolution now due,
    /// earliest first.
    fn advance(&mut self, elapsed: Duration) -> Vec<PendingResolution>;

    /// Number of scheduled resolutions not yet due.
    fn pending_count(&self) -> usize;

    /// True when nothing is scheduled.
    fn is_idle(&self) -> bool {
        self.pending_count() == 0
    }

    /// Drop everything scheduled without running it.
    fn clear(&mut self);
}
