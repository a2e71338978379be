//! Night action resolution.
//!
//! Drives the fixed calling order werewolf → witch → seer. Actions never
//! touch the roster: the werewolf kill stays tentative in `pending_death`,
//! poison goes to `extra_deaths`, and the death set is handed back to the
//! caller when the last step completes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameError, PlayerId, Roster};
use crate::history::{EventKind, HistoryLog, PrivateInfo};

use super::phase::{NightSubPhase, WitchPotions};

/// Players who die when the night ends, in announcement order.
pub type NightDeaths = SmallVec<[PlayerId; 2]>;

/// Borrowed game state a night step may read or write.
pub struct NightContext<'a> {
    /// Read-only: night steps validate against it but never kill.
    pub roster: &'a Roster,
    /// Game-wide potion stock.
    pub potions: &'a mut WitchPotions,
    pub log: &'a mut HistoryLog,
    pub round: u32,
}

/// Where the night stands after an accepted step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NightProgress {
    /// Waiting on the given sub-phase.
    Continue(NightSubPhase),
    /// Every role has been called. Apply these deaths.
    Ended(NightDeaths),
}

/// Transient state of one night.
///
/// A fresh value is created at nightfall; nothing here survives into the
/// next night. Potions live outside in [`NightContext::potions`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightResolution {
    sub_phase: NightSubPhase,
    pending_death: Option<PlayerId>,
    extra_deaths: NightDeaths,
    staged_target: Option<PlayerId>,
}

impl Default for NightResolution {
    fn default() -> Self {
        Self::new()
    }
}

impl NightResolution {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sub_phase: NightSubPhase::FIRST,
            pending_death: None,
            extra_deaths: SmallVec::new(),
            staged_target: None,
        }
    }

    #[must_use]
    pub fn sub_phase(&self) -> NightSubPhase {
        self.sub_phase
    }

    /// The werewolves' tentative victim, if any survives the witch so far.
    #[must_use]
    pub fn pending_death(&self) -> Option<PlayerId> {
        self.pending_death
    }

    #[must_use]
    pub fn extra_deaths(&self) -> &[PlayerId] {
        &self.extra_deaths
    }

    /// Target chosen but not yet confirmed.
    #[must_use]
    pub fn staged_target(&self) -> Option<PlayerId> {
        self.staged_target
    }

    /// `pending_death` followed by `extra_deaths`, without duplicates.
    #[must_use]
    pub fn deaths(&self) -> NightDeaths {
        let mut deaths: NightDeaths = self.pending_death.into_iter().collect();
        for &id in &self.extra_deaths {
            if !deaths.contains(&id) {
                deaths.push(id);
            }
        }
        deaths
    }

    fn expect_phase(&self, expected: NightSubPhase, action: &'static str) -> Result<(), GameError> {
        if self.sub_phase == expected {
            Ok(())
        } else {
            Err(self.out_of_phase(action))
        }
    }

    fn out_of_phase(&self, action: &'static str) -> GameError {
        GameError::ActionOutOfPhase {
            action,
            phase: format!("night ({})", self.sub_phase),
        }
    }

    /// Answer the moderator's call for the current role.
    ///
    /// `true` enters the paired action step; `false` skips the role entirely.
    pub fn confirm(
        &mut self,
        confirmed: bool,
        ctx: &mut NightContext<'_>,
    ) -> Result<NightProgress, GameError> {
        let action = self
            .sub_phase
            .action()
            .ok_or_else(|| self.out_of_phase("confirm a night role"))?;

        if confirmed {
            tracing::debug!(from = %self.sub_phase, to = %action, "night role confirmed");
            self.sub_phase = action;
            ctx.log.record(ctx.round, EventKind::NightPrompt(action));
            Ok(NightProgress::Continue(action))
        } else {
            tracing::debug!(phase = %self.sub_phase, "night role skipped");
            Ok(self.advance(ctx))
        }
    }

    /// Commit a werewolf kill or a seer check on `target`.
    pub fn select_target(
        &mut self,
        target: PlayerId,
        ctx: &mut NightContext<'_>,
    ) -> Result<NightProgress, GameError> {
        match self.sub_phase {
            NightSubPhase::WerewolfAction => {
                ctx.roster.living(target)?;
                tracing::debug!(%target, "werewolves chose a victim");
                self.pending_death = Some(target);
                ctx.log.record(ctx.round, EventKind::WerewolvesActed);
            }
            NightSubPhase::SeerAction => {
                let player = ctx.roster.living(target)?;
                let reveal = PrivateInfo::SeerReveal {
                    target,
                    is_werewolf: player.is_werewolf(),
                };
                ctx.log.record_private(ctx.round, EventKind::SeerActed, reveal);
            }
            _ => return Err(self.out_of_phase("select a night target")),
        }
        Ok(self.advance(ctx))
    }

    /// Remember a target without acting on it. Re-staging overwrites.
    pub fn stage_target(&mut self, target: PlayerId, roster: &Roster) -> Result<(), GameError> {
        if !matches!(
            self.sub_phase,
            NightSubPhase::WerewolfAction | NightSubPhase::SeerAction
        ) {
            return Err(self.out_of_phase("select a night target"));
        }
        roster.living(target)?;
        self.staged_target = Some(target);
        Ok(())
    }

    /// Commit the staged target.
    pub fn confirm_staged(&mut self, ctx: &mut NightContext<'_>) -> Result<NightProgress, GameError> {
        if !matches!(
            self.sub_phase,
            NightSubPhase::WerewolfAction | NightSubPhase::SeerAction
        ) {
            return Err(self.out_of_phase("confirm a night target"));
        }
        let target = self.staged_target.ok_or(GameError::NoTargetSelected)?;
        self.select_target(target, ctx)
    }

    /// Cancel tonight's werewolf kill with the save potion.
    pub fn use_save(&mut self, ctx: &mut NightContext<'_>) -> Result<NightProgress, GameError> {
        self.expect_phase(NightSubPhase::WitchAction, "use the save potion")?;
        if !ctx.potions.save {
            return Err(GameError::PotionUnavailable("save"));
        }
        let saved = self.pending_death.ok_or(GameError::NoTargetToSave)?;

        tracing::debug!(%saved, "witch used the save potion");
        self.pending_death = None;
        ctx.potions.save = false;
        ctx.log.record(ctx.round, EventKind::WitchActed);
        Ok(self.advance(ctx))
    }

    /// Add an independent death with the poison potion.
    pub fn use_poison(
        &mut self,
        target: PlayerId,
        ctx: &mut NightContext<'_>,
    ) -> Result<NightProgress, GameError> {
        self.expect_phase(NightSubPhase::WitchAction, "use the poison potion")?;
        if !ctx.potions.poison {
            return Err(GameError::PotionUnavailable("poison"));
        }
        ctx.roster.living(target)?;

        tracing::debug!(%target, "witch used the poison potion");
        if !self.extra_deaths.contains(&target) {
            self.extra_deaths.push(target);
        }
        ctx.potions.poison = false;
        ctx.log.record(ctx.round, EventKind::WitchActed);
        Ok(self.advance(ctx))
    }

    /// Witch declines to use a potion tonight.
    pub fn skip_witch(&mut self, ctx: &mut NightContext<'_>) -> Result<NightProgress, GameError> {
        self.expect_phase(NightSubPhase::WitchAction, "skip the witch's action")?;
        ctx.log.record(ctx.round, EventKind::WitchActed);
        Ok(self.advance(ctx))
    }

    fn advance(&mut self, ctx: &mut NightContext<'_>) -> NightProgress {
        self.staged_target = None;
        match self.sub_phase.next_role() {
            Some(next) => {
                self.sub_phase = next;
                let kind = if ctx.roster.has_living(next.role()) {
                    EventKind::NightPrompt(next)
                } else {
                    EventKind::RoleAbsent(next)
                };
                ctx.log.record(ctx.round, kind);
                NightProgress::Continue(next)
            }
            None => NightProgress::Ended(self.deaths()),
        }
    }
}
