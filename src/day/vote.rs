//! Day vote tallying.
//!
//! One vote per living voter, last vote wins. Resolution picks the player
//! with the most votes; ties go to the lowest seat number, and an empty
//! ballot box means nobody is eliminated.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{GameError, PlayerId, Roster};

/// Result of a resolved vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteOutcome {
    Eliminated { player: PlayerId, votes: usize },
    NoElimination,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    votes: FxHashMap<PlayerId, PlayerId>,
}

impl VoteTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `voter`'s vote for `target`, replacing any earlier vote.
    pub fn cast(&mut self, voter: PlayerId, target: PlayerId, roster: &Roster) -> Result<(), GameError> {
        if !roster.player(voter)?.is_alive() {
            return Err(GameError::VoterNotAlive(voter));
        }
        roster.living(target)?;

        if let Some(previous) = self.votes.insert(voter, target) {
            tracing::debug!(%voter, %previous, %target, "vote changed");
        }
        Ok(())
    }

    #[must_use]
    pub fn vote_of(&self, voter: PlayerId) -> Option<PlayerId> {
        self.votes.get(&voter).copied()
    }

    /// Number of voters who have voted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.votes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    /// Votes received per candidate, ordered by seat.
    #[must_use]
    pub fn counts(&self) -> BTreeMap<PlayerId, usize> {
        let mut counts = BTreeMap::new();
        for &target in self.votes.values() {
            *counts.entry(target).or_insert(0) += 1;
        }
        counts
    }

    /// Votes as `(voter, target)` pairs ordered by voter.
    #[must_use]
    pub fn ballots(&self) -> BTreeMap<PlayerId, PlayerId> {
        self.votes.iter().map(|(&voter, &target)| (voter, target)).collect()
    }

    /// Pick the elimination. Does not clear the tally.
    #[must_use]
    pub fn resolve(&self) -> VoteOutcome {
        // Ascending iteration plus strict `>` keeps the lowest seat on ties
        let mut best: Option<(PlayerId, usize)> = None;
        for (candidate, count) in self.counts() {
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((candidate, count));
            }
        }

        match best {
            Some((player, votes)) => VoteOutcome::Eliminated { player, votes },
            None => VoteOutcome::NoElimination,
        }
    }

    pub fn clear(&mut self) {
        self.votes.clear();
    }
}
