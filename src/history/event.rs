//! History event types.
//!
//! Every meaningful transition produces one `Event`. The `kind` is a closed
//! enum so presentation layers can match on it; `description` is the
//! moderator-facing line derived from the kind when the event is recorded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::night::NightSubPhase;
use crate::rules::Winner;

/// What happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// Table created, roles not yet dealt.
    GameStarted { player_count: usize },
    /// Last seat received a role.
    RolesAssigned,
    /// A new round began after a day with no winner.
    RoundStarted,
    NightFell,
    /// The moderator called a role to open their eyes or act.
    NightPrompt(NightSubPhase),
    /// The called role has no living player; the step still runs.
    RoleAbsent(NightSubPhase),
    WerewolvesActed,
    WitchActed,
    SeerActed,
    /// Killed during the night.
    Death(PlayerId),
    PeacefulNight,
    DayBroke,
    /// Discussion closed, by the moderator or by the countdown.
    DiscussionEnded { expired: bool },
    /// Voted out during the day.
    Elimination(PlayerId),
    NoElimination,
    GameOver(Winner),
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::GameStarted { player_count } => {
                write!(f, "Game started with {player_count} players, round 1")
            }
            EventKind::RolesAssigned => f.write_str("Roles assigned, everyone close your eyes"),
            EventKind::RoundStarted => f.write_str("A new round begins"),
            EventKind::NightFell => f.write_str("Night falls, werewolves open your eyes"),
            EventKind::NightPrompt(phase) => match phase {
                NightSubPhase::WerewolfAction => f.write_str("Werewolves, choose your victim"),
                NightSubPhase::WitchConfirm => f.write_str("Witch, open your eyes"),
                NightSubPhase::WitchAction => f.write_str("Witch, choose whether to use a potion"),
                NightSubPhase::SeerConfirm => f.write_str("Seer, open your eyes"),
                NightSubPhase::SeerAction => f.write_str("Seer, choose a player to check"),
                other => write!(f, "Moderator prompt: {other}"),
            },
            EventKind::RoleAbsent(phase) => {
                write!(f, "The {} is out, skipping their turn", phase.role_name())
            }
            EventKind::WerewolvesActed => f.write_str("The werewolves have acted"),
            EventKind::WitchActed => f.write_str("The witch has acted"),
            EventKind::SeerActed => f.write_str("The seer has checked a player"),
            EventKind::Death(id) => write!(f, "{id} died in the night"),
            EventKind::PeacefulNight => f.write_str("A peaceful night, nobody died"),
            EventKind::DayBroke => f.write_str("Day breaks, discussion begins"),
            EventKind::DiscussionEnded { expired: true } => {
                f.write_str("Discussion time is up, voting begins")
            }
            EventKind::DiscussionEnded { expired: false } => {
                f.write_str("Discussion ended, voting begins")
            }
            EventKind::Elimination(id) => write!(f, "{id} was voted out"),
            EventKind::NoElimination => f.write_str("No votes were cast, nobody is eliminated"),
            EventKind::GameOver(winner) => write!(f, "Game over, {winner}"),
        }
    }
}

/// Result only one role is meant to see.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrivateInfo {
    SeerReveal { target: PlayerId, is_werewolf: bool },
}

impl std::fmt::Display for PrivateInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrivateInfo::SeerReveal { target, is_werewolf: true } => {
                write!(f, "{target} is a werewolf")
            }
            PrivateInfo::SeerReveal { target, is_werewolf: false } => {
                write!(f, "{target} is not a werewolf")
            }
        }
    }
}

/// One history entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Position in the log, contiguous from 0.
    pub sequence: u32,

    /// Round the event happened in.
    pub round: u32,

    pub timestamp: DateTime<Utc>,

    pub kind: EventKind,

    pub description: String,

    /// Role-restricted payload. Recorded unconditionally.
    pub private_info: Option<PrivateInfo>,
}

impl Event {
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.private_info.is_some()
    }

    /// Copy of this event with the private payload removed.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            private_info: None,
            ..self.clone()
        }
    }
}
