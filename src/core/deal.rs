//! Standard role composition and random dealing.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, Role};
use super::rng::GameRng;

/// The multiset of roles handed out at a table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDeck {
    roles: Vec<Role>,
}

impl RoleDeck {
    /// Build a deck from explicit roles.
    #[must_use]
    pub fn new(roles: Vec<Role>) -> Self {
        Self { roles }
    }

    /// The usual composition for `player_count` seats.
    ///
    /// One werewolf per three players (rounded down), one witch, one seer,
    /// villagers for the rest. Eight players get 2 / 1 / 1 / 4.
    #[must_use]
    pub fn standard(player_count: usize) -> Self {
        let werewolves = player_count / 3;
        let villagers = player_count.saturating_sub(werewolves + 2);

        let mut roles = Vec::with_capacity(player_count);
        roles.extend(std::iter::repeat(Role::Werewolf).take(werewolves));
        roles.push(Role::Witch);
        roles.push(Role::Seer);
        roles.extend(std::iter::repeat(Role::Villager).take(villagers));
        Self { roles }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// How many copies of `role` the deck holds.
    #[must_use]
    pub fn count(&self, role: Role) -> usize {
        self.roles.iter().filter(|&&r| r == role).count()
    }

    /// Shuffle the deck and hand one role to each seat, in seat order.
    #[must_use]
    pub fn deal(&self, rng: &mut GameRng) -> Vec<(PlayerId, Role)> {
        let mut shuffled = self.roles.clone();
        rng.shuffle(&mut shuffled);
        PlayerId::all(shuffled.len()).zip(shuffled).collect()
    }
}
