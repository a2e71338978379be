//! The single authoritative game state.
//!
//! Owned by `GameController` and mutated only through its operations.
//! Everything else gets `&GameState` and reads.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Roster};
use crate::day::{DayPhase, DiscussionCountdown, VoteTally};
use crate::history::HistoryLog;
use crate::night::{NightResolution, NightSubPhase, WitchPotions};
use crate::rules::Winner;

/// Top-level stage. Moves Setup → Assign → Night ⇄ Day → End.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    #[default]
    Setup,
    Assign,
    Night,
    Day,
    End,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Setup => "setup",
            Stage::Assign => "assign",
            Stage::Night => "night",
            Stage::Day => "day",
            Stage::End => "end",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(super) stage: Stage,
    pub(super) round: u32,
    pub(super) day_phase: DayPhase,
    pub(super) night: NightResolution,
    pub(super) potions: WitchPotions,
    pub(super) votes: VoteTally,
    pub(super) countdown: DiscussionCountdown,
    pub(super) roster: Roster,
    pub(super) history: HistoryLog,
    pub(super) winner: Option<Winner>,
}

impl GameState {
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Current round, starting at 1. Zero before the game is initialized.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Day sub-phase; `None` outside the day.
    #[must_use]
    pub fn day_phase(&self) -> Option<DayPhase> {
        (self.stage == Stage::Day).then_some(self.day_phase)
    }

    /// Night sub-phase; `None` outside the night.
    #[must_use]
    pub fn night_sub_phase(&self) -> Option<NightSubPhase> {
        (self.stage == Stage::Night).then(|| self.night.sub_phase())
    }

    #[must_use]
    pub fn night(&self) -> &NightResolution {
        &self.night
    }

    #[must_use]
    pub fn pending_death(&self) -> Option<PlayerId> {
        self.night.pending_death()
    }

    #[must_use]
    pub fn potions(&self) -> WitchPotions {
        self.potions
    }

    #[must_use]
    pub fn votes(&self) -> &VoteTally {
        &self.votes
    }

    /// Seconds left in the discussion; zero outside it.
    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.countdown.remaining()
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    /// Human-readable position, used in out-of-phase errors.
    #[must_use]
    pub fn phase_label(&self) -> String {
        match self.stage {
            Stage::Night => format!("night ({})", self.night.sub_phase()),
            Stage::Day => format!("day ({})", self.day_phase),
            other => other.to_string(),
        }
    }
}
