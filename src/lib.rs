//! # werewolf-moderator
//!
//! Game engine for a moderator-run werewolf table of 6 to 12 players.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: A single `GameState` lives inside `GameController` and
//!    changes only through its operations, one input at a time.
//!
//! 2. **Fail Before Mutating**: Every operation validates first. A returned
//!    `GameError` means nothing changed.
//!
//! 3. **Closed Sets**: Roles, stages and sub-phases are enums, so every
//!    `match` over them is checked for exhaustiveness.
//!
//! 4. **External Clock**: The discussion countdown advances only when the
//!    caller invokes `tick`, which keeps timing deterministic in tests.
//!
//! ## Example
//!
//! ```
//! use werewolf_moderator::{GameController, PlayerId, Stage};
//!
//! let mut game = GameController::default();
//! game.initialize_game(8)?;
//! game.deal_roles(42)?;
//! assert_eq!(game.state().stage(), Stage::Night);
//!
//! // Werewolves attack seat 3; witch and seer stay asleep
//! game.confirm_night_action(true)?;
//! game.night_target(PlayerId::new(3))?;
//! game.confirm_night_action(false)?;
//! game.confirm_night_action(false)?;
//! assert_eq!(game.state().stage(), Stage::Day);
//! # Ok::<(), werewolf_moderator::GameError>(())
//! ```
//!
//! ## Modules
//!
//! - `core`: Players, roles, roster, configuration, errors, role dealing
//! - `history`: Append-only event log
//! - `rules`: Win-condition evaluation
//! - `night`: Ordered night actions and death collection
//! - `day`: Discussion countdown and vote tallying
//! - `game`: The controller state machine and snapshots

pub mod core;
pub mod history;
pub mod rules;
pub mod night;
pub mod day;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameError, GameRng, Player, PlayerId, Role, RoleDeck, Roster,
};

pub use crate::history::{Event, EventKind, HistoryLog, PrivateInfo};

pub use crate::rules::{AliveCounts, StandardWinCondition, WinCondition, Winner};

pub use crate::night::{NightProgress, NightResolution, NightSubPhase, WitchPotions};

pub use crate::day::{DayPhase, DiscussionCountdown, TickOutcome, VoteOutcome, VoteTally};

pub use crate::game::{GameController, GameSnapshot, GameState, Stage};
