//! Core types: players, roles, roster, configuration, errors, RNG.
//!
//! Everything the phase machinery builds on. Nothing here knows about
//! nights, days or votes.

pub mod player;
pub mod roster;
pub mod config;
pub mod error;
pub mod rng;
pub mod deal;

pub use player::{Player, PlayerId, Role};
pub use roster::Roster;
pub use config::{GameConfig, DEFAULT_DISCUSSION_SECONDS, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{ConfigError, GameError};
pub use rng::GameRng;
pub use deal::RoleDeck;
