//! Read-only view of the game for presentation layers.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId};
use crate::day::DayPhase;
use crate::history::HistoryLog;
use crate::night::{NightSubPhase, WitchPotions};
use crate::rules::Winner;

use super::state::{GameState, Stage};

/// Everything a screen needs to render the current moment.
///
/// Cheap to take after every input: the history shares structure with the
/// live log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub stage: Stage,
    pub round: u32,
    pub day_phase: Option<DayPhase>,
    pub night_sub_phase: Option<NightSubPhase>,
    pub players: Vec<Player>,
    pub potions: WitchPotions,
    pub pending_death: Option<PlayerId>,
    pub staged_target: Option<PlayerId>,
    /// `(voter, target)` pairs ordered by voter.
    pub ballots: Vec<(PlayerId, PlayerId)>,
    pub remaining_seconds: u32,
    pub winner: Option<Winner>,
    pub history: HistoryLog,
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        Self {
            stage: state.stage(),
            round: state.round(),
            day_phase: state.day_phase(),
            night_sub_phase: state.night_sub_phase(),
            players: state.roster().iter().cloned().collect(),
            potions: state.potions(),
            pending_death: state.pending_death(),
            staged_target: state.night().staged_target(),
            ballots: state.votes().ballots().into_iter().collect(),
            remaining_seconds: state.remaining_seconds(),
            winner: state.winner(),
            history: state.history().clone(),
        }
    }
}

impl GameSnapshot {
    /// Living players, in seat order.
    pub fn alive(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_alive())
    }
}
