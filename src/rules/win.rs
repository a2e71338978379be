//! Win-condition evaluation.
//!
//! Tables implement `WinCondition` to decide when the game is over. The
//! controller calls it after every death and never interprets the roster
//! itself.

use serde::{Deserialize, Serialize};

use crate::core::Roster;

/// Side that won a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Villagers,
    Werewolves,
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Villagers => f.write_str("the villagers win"),
            Winner::Werewolves => f.write_str("the werewolves win"),
        }
    }
}

/// Living head count per side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AliveCounts {
    pub werewolves: usize,
    pub others: usize,
}

impl AliveCounts {
    #[must_use]
    pub fn of(roster: &Roster) -> Self {
        roster.alive().fold(Self::default(), |mut counts, player| {
            if player.is_werewolf() {
                counts.werewolves += 1;
            } else {
                counts.others += 1;
            }
            counts
        })
    }
}

/// Win-condition trait.
///
/// ## Implementation Notes
///
/// - Must be a pure function of the roster: no state, no side effects
/// - Return `None` while the game continues
pub trait WinCondition {
    fn evaluate(&self, roster: &Roster) -> Option<Winner>;
}

/// Werewolves win at parity, villagers win when the last werewolf dies.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardWinCondition;

impl StandardWinCondition {
    /// Decide from head counts alone.
    #[must_use]
    pub fn from_counts(counts: AliveCounts) -> Option<Winner> {
        if counts.werewolves == 0 {
            Some(Winner::Villagers)
        } else if counts.werewolves >= counts.others {
            Some(Winner::Werewolves)
        } else {
            None
        }
    }
}

impl WinCondition for StandardWinCondition {
    fn evaluate(&self, roster: &Roster) -> Option<Winner> {
        Self::from_counts(AliveCounts::of(roster))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerId, Role};

    fn roster_with(roles: &[Role]) -> Roster {
        let mut roster = Roster::new(roles.len());
        for (id, role) in PlayerId::all(roles.len()).zip(roles) {
            roster.set_role(id, *role).unwrap();
        }
        roster
    }

    #[test]
    fn test_counts() {
        let mut roster = roster_with(&[
            Role::Werewolf,
            Role::Werewolf,
            Role::Villager,
            Role::Witch,
            Role::Seer,
            Role::Villager,
        ]);
        roster.kill(PlayerId::new(3));

        let counts = AliveCounts::of(&roster);
        assert_eq!(counts, AliveCounts { werewolves: 2, others: 3 });
    }

    #[test]
    fn test_game_continues() {
        let roster = roster_with(&[
            Role::Werewolf,
            Role::Werewolf,
            Role::Villager,
            Role::Villager,
            Role::Witch,
            Role::Seer,
        ]);
        assert_eq!(StandardWinCondition.evaluate(&roster), None);
    }

    #[test]
    fn test_villagers_win() {
        let mut roster = roster_with(&[
            Role::Werewolf,
            Role::Villager,
            Role::Villager,
            Role::Villager,
            Role::Witch,
            Role::Seer,
        ]);
        roster.kill(PlayerId::new(1));
        assert_eq!(StandardWinCondition.evaluate(&roster), Some(Winner::Villagers));
    }

    #[test]
    fn test_werewolves_win_at_parity() {
        let mut roster = roster_with(&[
            Role::Werewolf,
            Role::Werewolf,
            Role::Villager,
            Role::Villager,
            Role::Witch,
            Role::Seer,
        ]);
        roster.kill(PlayerId::new(3));
        assert_eq!(StandardWinCondition.evaluate(&roster), None);

        roster.kill(PlayerId::new(4));
        assert_eq!(StandardWinCondition.evaluate(&roster), Some(Winner::Werewolves));
    }

    #[test]
    fn test_evaluate_is_pure() {
        let roster = roster_with(&[Role::Werewolf; 6]);
        let before = roster.clone();
        for _ in 0..3 {
            assert_eq!(StandardWinCondition.evaluate(&roster), Some(Winner::Werewolves));
        }
        assert_eq!(roster, before);
    }
}
