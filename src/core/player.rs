//! Player identification, roles and per-player data.
//!
//! ## PlayerId
//!
//! Type-safe seat number. Seats are 1-based: the first player is `PlayerId(1)`,
//! matching the numbers a moderator calls out at the table.
//!
//! ## Role
//!
//! Closed set of the four supported roles. Anything else is rejected at the
//! parsing boundary with `GameError::InvalidRole`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::GameError;

/// Seat number of a player (1-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the 0-based index into the roster.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 as usize).wrapping_sub(1)
    }

    /// Iterate over all seat numbers for a table of `player_count` players.
    ///
    /// ```
    /// use werewolf_moderator::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(6).collect();
    /// assert_eq!(seats.len(), 6);
    /// assert_eq!(seats[0], PlayerId::new(1));
    /// assert_eq!(seats[5], PlayerId::new(6));
    /// ```
    ///
    /// Seats are `u8`; a count above 255 is a caller bug.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        debug_assert!(
            player_count <= usize::from(u8::MAX),
            "player count {player_count} does not fit a seat number"
        );
        let last = u8::try_from(player_count).unwrap_or(u8::MAX);
        (1..=last).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player's secret identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Werewolf,
    Villager,
    /// Holds one save potion and one poison potion for the whole game.
    Witch,
    /// Learns one player's alignment per night.
    Seer,
}

impl Role {
    /// Every recognized role, in night-order-agnostic listing order.
    pub const ALL: [Role; 4] = [Role::Werewolf, Role::Villager, Role::Witch, Role::Seer];

    /// Is this role on the werewolf side?
    #[must_use]
    pub const fn is_werewolf(self) -> bool {
        matches!(self, Role::Werewolf)
    }

    /// Lowercase name used for parsing and display.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::Werewolf => "werewolf",
            Role::Villager => "villager",
            Role::Witch => "witch",
            Role::Seer => "seer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Role::ALL
            .into_iter()
            .find(|role| role.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| GameError::InvalidRole(s.to_string()))
    }
}

/// One seat at the table.
///
/// `role` is `None` until the moderator assigns it. `alive` only ever goes
/// from `true` to `false`; the roster enforces that through [`Player::kill`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub role: Option<Role>,
    alive: bool,
}

impl Player {
    /// Create an unassigned, living player.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            role: None,
            alive: true,
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Is this player a werewolf? Unassigned players are not.
    #[must_use]
    pub fn is_werewolf(&self) -> bool {
        self.role.is_some_and(Role::is_werewolf)
    }

    /// Mark the player dead. Returns `true` if they were alive before.
    pub(crate) fn kill(&mut self) -> bool {
        std::mem::replace(&mut self.alive, false)
    }
}
