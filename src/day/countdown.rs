//! Discussion countdown driven by an external one-second tick.
//!
//! The engine owns no timer. Whatever schedules the game (a UI loop, a
//! tokio interval, a test) calls `tick` once per elapsed second.

use serde::{Deserialize, Serialize};

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still counting; seconds left after this tick.
    Running(u32),
    /// This tick reached zero. Reported exactly once.
    Expired,
    /// Already at zero; the tick was ignored.
    Idle,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscussionCountdown {
    remaining: u32,
}

impl DiscussionCountdown {
    #[must_use]
    pub fn new(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.remaining > 0
    }

    pub fn tick(&mut self) -> TickOutcome {
        match self.remaining {
            0 => TickOutcome::Idle,
            1 => {
                self.remaining = 0;
                TickOutcome::Expired
            }
            n => {
                self.remaining = n - 1;
                TickOutcome::Running(self.remaining)
            }
        }
    }

    /// Zero the countdown without reporting expiry.
    pub fn stop(&mut self) {
        self.remaining = 0;
    }
}
