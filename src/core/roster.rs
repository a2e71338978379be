//! Fixed-size table of players.
//!
//! Backed by a `Vec<Player>` where seat `n` lives at index `n - 1`, giving
//! O(1) lookup by `PlayerId`. Size and membership are fixed at creation;
//! only roles and the alive flag change afterwards.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::{Player, PlayerId, Role};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Create `player_count` unassigned, living players with ids `1..=player_count`.
    ///
    /// Range checking is the controller's job; this only builds the table.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            players: PlayerId::all(player_count).map(Player::new).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Look up a player by seat.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index()).filter(|p| p.id == id)
    }

    /// Look up a player, failing with `UnknownPlayer`.
    pub fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.get(id).ok_or(GameError::UnknownPlayer(id))
    }

    /// Look up a player who must still be alive.
    ///
    /// Unknown seats fail with `UnknownPlayer`, dead ones with `TargetNotAlive`.
    pub fn living(&self, id: PlayerId) -> Result<&Player, GameError> {
        let player = self.player(id)?;
        if player.is_alive() {
            Ok(player)
        } else {
            Err(GameError::TargetNotAlive(id))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn alive(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_alive())
    }

    /// Does any living player hold `role`?
    #[must_use]
    pub fn has_living(&self, role: Role) -> bool {
        self.alive().any(|p| p.role == Some(role))
    }

    /// Has every seat been given a role?
    #[must_use]
    pub fn fully_assigned(&self) -> bool {
        !self.players.is_empty() && self.players.iter().all(|p| p.role.is_some())
    }

    /// Set (or overwrite) a player's role.
    pub(crate) fn set_role(&mut self, id: PlayerId, role: Role) -> Result<(), GameError> {
        let player = self
            .players
            .get_mut(id.index())
            .filter(|p| p.id == id)
            .ok_or(GameError::UnknownPlayer(id))?;
        player.role = Some(role);
        Ok(())
    }

    /// Mark a player dead. Returns `true` if this call killed them.
    pub(crate) fn kill(&mut self, id: PlayerId) -> bool {
        self.players
            .get_mut(id.index())
            .filter(|p| p.id == id)
            .is_some_and(Player::kill)
    }
}
