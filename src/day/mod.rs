//! Day phase: timed discussion followed by a vote.
//!
//! Discussion ends either when the moderator calls it or when the countdown
//! reaches zero; both land in the same `Vote` sub-phase. The vote resolves
//! either by tally or by the moderator naming the eliminated player.

mod countdown;
mod vote;

use serde::{Deserialize, Serialize};

pub use countdown::{DiscussionCountdown, TickOutcome};
pub use vote::{VoteOutcome, VoteTally};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayPhase {
    #[default]
    Discussion,
    Vote,
}

impl std::fmt::Display for DayPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayPhase::Discussion => f.write_str("discussion"),
            DayPhase::Vote => f.write_str("vote"),
        }
    }
}
