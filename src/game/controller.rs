//! Top-level phase state machine.
//!
//! ## Flow
//!
//! ```text
//! Setup ─initialize_game→ Assign ─last role→ Night ─night end→ Day
//!                                              ↑                 │
//!                                              └── new round ────┘
//! any death ─winner→ End
//! ```
//!
//! Every operation validates against the current state first and returns
//! a `GameError` without touching anything when it fails. On success the
//! change is applied in full, the history is appended, and after any death
//! the win condition is checked before the phase moves on.
//!
//! ## Threading
//!
//! The controller is a plain owned value with `&mut self` operations, which
//! serializes input by construction. Share it across threads behind a
//! `Mutex` so each operation's validation and write form one critical
//! section.

use crate::core::{ConfigError, GameConfig, GameError, GameRng, PlayerId, Role, RoleDeck, Roster};
use crate::day::{DayPhase, DiscussionCountdown, TickOutcome, VoteOutcome};
use crate::history::EventKind;
use crate::night::{NightContext, NightDeaths, NightProgress, NightResolution};
use crate::rules::{StandardWinCondition, WinCondition};

use super::snapshot::GameSnapshot;
use super::state::{GameState, Stage};

/// Drives one game from setup to a winner.
pub struct GameController<W: WinCondition = StandardWinCondition> {
    config: GameConfig,
    rules: W,
    state: GameState,
}

impl Default for GameController {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            rules: StandardWinCondition,
            state: GameState::default(),
        }
    }
}

impl GameController {
    /// Controller with the standard win condition.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rules(config, StandardWinCondition)
    }
}

impl<W: WinCondition> GameController<W> {
    /// Controller with custom rules. Rejects configs that fail
    /// [`GameConfig::validate`].
    pub fn with_rules(config: GameConfig, rules: W) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rules,
            state: GameState::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(&self.state)
    }

    fn out_of_phase(&self, action: &'static str) -> GameError {
        let phase = self.state.phase_label();
        tracing::debug!(action, %phase, "rejected out-of-phase input");
        GameError::ActionOutOfPhase { action, phase }
    }

    fn expect_stage(&self, stage: Stage, action: &'static str) -> Result<(), GameError> {
        if self.state.stage == stage {
            Ok(())
        } else {
            Err(self.out_of_phase(action))
        }
    }

    fn expect_vote(&self, action: &'static str) -> Result<(), GameError> {
        if self.state.stage == Stage::Day && self.state.day_phase == DayPhase::Vote {
            Ok(())
        } else {
            Err(self.out_of_phase(action))
        }
    }

    // === Setup and Assignment ===

    /// Create a table of `count` unassigned players and open role assignment.
    pub fn initialize_game(&mut self, count: usize) -> Result<(), GameError> {
        self.expect_stage(Stage::Setup, "initialize a game")?;
        if !self.config.accepts_player_count(count) {
            return Err(GameError::InvalidPlayerCount {
                count,
                min: self.config.min_players,
                max: self.config.max_players,
            });
        }

        let state = &mut self.state;
        state.roster = Roster::new(count);
        state.round = 1;
        state.stage = Stage::Assign;
        state.night = NightResolution::new();
        state.votes.clear();
        state.countdown = DiscussionCountdown::default();
        state.history.record(1, EventKind::GameStarted { player_count: count });
        tracing::info!(players = count, "game initialized");
        Ok(())
    }

    /// Give `id` a role. Overwrites are fine until night falls.
    ///
    /// The call that fills the last empty seat starts the first night.
    pub fn assign_role(&mut self, id: PlayerId, role: Role) -> Result<(), GameError> {
        match self.state.stage {
            Stage::Assign => {}
            Stage::Night | Stage::Day | Stage::End => {
                self.state.roster.player(id)?;
                return Err(GameError::DuplicateRoleAssignmentAfterNightStart(id));
            }
            Stage::Setup => return Err(self.out_of_phase("assign a role")),
        }

        self.state.roster.set_role(id, role)?;
        tracing::debug!(%id, %role, "role assigned");

        if self.state.roster.fully_assigned() {
            self.state.history.record(self.state.round, EventKind::RolesAssigned);
            self.start_night();
        }
        Ok(())
    }

    /// `assign_role` for string input from a form or command line.
    pub fn assign_role_named(&mut self, id: PlayerId, role: &str) -> Result<(), GameError> {
        let role = role.parse::<Role>()?;
        self.assign_role(id, role)
    }

    /// Deal the standard deck to every seat from `seed`, starting the night.
    pub fn deal_roles(&mut self, seed: u64) -> Result<Vec<(PlayerId, Role)>, GameError> {
        self.expect_stage(Stage::Assign, "deal roles")?;

        let deck = RoleDeck::standard(self.state.roster.len());
        let dealt = deck.deal(&mut GameRng::new(seed));
        for &(id, role) in &dealt {
            self.assign_role(id, role)?;
        }
        Ok(dealt)
    }

    // === Night ===

    fn start_night(&mut self) {
        let state = &mut self.state;
        state.stage = Stage::Night;
        state.night = NightResolution::new();
        state.votes.clear();
        state.history.record(state.round, EventKind::NightFell);
        tracing::info!(round = state.round, "night falls");
    }

    fn night_step(
        &mut self,
        action: &'static str,
        step: impl FnOnce(&mut NightResolution, &mut NightContext<'_>) -> Result<NightProgress, GameError>,
    ) -> Result<(), GameError> {
        self.expect_stage(Stage::Night, action)?;

        let state = &mut self.state;
        let mut ctx = NightContext {
            roster: &state.roster,
            potions: &mut state.potions,
            log: &mut state.history,
            round: state.round,
        };
        let progress = step(&mut state.night, &mut ctx)?;

        if let NightProgress::Ended(deaths) = progress {
            self.end_night(deaths);
        }
        Ok(())
    }

    /// Accept (`true`) or skip (`false`) the current role's turn.
    pub fn confirm_night_action(&mut self, confirmed: bool) -> Result<(), GameError> {
        self.night_step("confirm a night role", |night, ctx| night.confirm(confirmed, ctx))
    }

    /// Stage a werewolf or seer target. Nothing happens until confirmed.
    pub fn select_night_target(&mut self, target: PlayerId) -> Result<(), GameError> {
        self.expect_stage(Stage::Night, "select a night target")?;
        let state = &mut self.state;
        state.night.stage_target(target, &state.roster)
    }

    /// Commit the staged werewolf or seer target.
    pub fn confirm_night_target(&mut self) -> Result<(), GameError> {
        self.night_step("confirm a night target", |night, ctx| night.confirm_staged(ctx))
    }

    /// Stage and commit a werewolf or seer target in one step.
    pub fn night_target(&mut self, target: PlayerId) -> Result<(), GameError> {
        self.night_step("select a night target", |night, ctx| night.select_target(target, ctx))
    }

    pub fn use_witch_save(&mut self) -> Result<(), GameError> {
        self.night_step("use the save potion", |night, ctx| night.use_save(ctx))
    }

    pub fn use_witch_poison(&mut self, target: PlayerId) -> Result<(), GameError> {
        self.night_step("use the poison potion", |night, ctx| night.use_poison(target, ctx))
    }

    pub fn skip_witch_action(&mut self) -> Result<(), GameError> {
        self.night_step("skip the witch's action", |night, ctx| night.skip_witch(ctx))
    }

    fn end_night(&mut self, deaths: NightDeaths) {
        let state = &mut self.state;
        if deaths.is_empty() {
            state.history.record(state.round, EventKind::PeacefulNight);
            tracing::info!(round = state.round, "peaceful night");
        }
        for id in deaths {
            if state.roster.kill(id) {
                state.history.record(state.round, EventKind::Death(id));
                tracing::info!(round = state.round, %id, "player died in the night");
            }
        }

        if self.check_winner() {
            return;
        }
        self.start_day();
    }

    // === Day ===

    fn start_day(&mut self) {
        let state = &mut self.state;
        state.stage = Stage::Day;
        state.day_phase = DayPhase::Discussion;
        state.night = NightResolution::new();
        state.countdown = DiscussionCountdown::new(self.config.discussion_seconds);
        state.history.record(state.round, EventKind::DayBroke);
        tracing::info!(
            round = state.round,
            seconds = self.config.discussion_seconds,
            "day breaks"
        );
    }

    fn enter_vote(&mut self, expired: bool) {
        let state = &mut self.state;
        state.countdown.stop();
        state.day_phase = DayPhase::Vote;
        state.votes.clear();
        state.history.record(state.round, EventKind::DiscussionEnded { expired });
        tracing::info!(round = state.round, expired, "voting begins");
    }

    /// One second of discussion has elapsed.
    ///
    /// Outside the discussion this is ignored, so a scheduler may keep
    /// ticking without tracking the phase.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.stage != Stage::Day || self.state.day_phase != DayPhase::Discussion {
            return TickOutcome::Idle;
        }
        let outcome = self.state.countdown.tick();
        if outcome == TickOutcome::Expired {
            self.enter_vote(true);
        }
        outcome
    }

    /// Close the discussion early. A no-op once voting has begun.
    pub fn end_discussion(&mut self) -> Result<(), GameError> {
        self.expect_stage(Stage::Day, "end the discussion")?;
        if self.state.day_phase == DayPhase::Discussion {
            self.enter_vote(false);
        }
        Ok(())
    }

    /// Record one vote. A second vote from the same voter replaces the first.
    pub fn cast_vote(&mut self, voter: PlayerId, target: PlayerId) -> Result<(), GameError> {
        self.expect_vote("cast a vote")?;
        let state = &mut self.state;
        state.votes.cast(voter, target, &state.roster)
    }

    /// Moderator names the eliminated player directly.
    pub fn select_eliminated(&mut self, id: PlayerId) -> Result<(), GameError> {
        self.expect_vote("select the eliminated player")?;
        self.state.roster.living(id)?;
        self.eliminate(id);
        Ok(())
    }

    /// Tally the votes and carry out the result.
    pub fn resolve_votes(&mut self) -> Result<VoteOutcome, GameError> {
        self.expect_vote("resolve the votes")?;

        let outcome = self.state.votes.resolve();
        match outcome {
            VoteOutcome::Eliminated { player, votes } => {
                tracing::debug!(%player, votes, "vote resolved");
                self.eliminate(player);
            }
            VoteOutcome::NoElimination => {
                let state = &mut self.state;
                state.history.record(state.round, EventKind::NoElimination);
                tracing::info!(round = state.round, "no elimination");
                self.start_new_round();
            }
        }
        Ok(outcome)
    }

    fn eliminate(&mut self, id: PlayerId) {
        let state = &mut self.state;
        if state.roster.kill(id) {
            state.history.record(state.round, EventKind::Elimination(id));
            tracing::info!(round = state.round, %id, "player voted out");
        }
        if !self.check_winner() {
            self.start_new_round();
        }
    }

    fn start_new_round(&mut self) {
        let state = &mut self.state;
        state.round += 1;
        state.votes.clear();
        state.countdown.stop();
        state.history.record(state.round, EventKind::RoundStarted);
        self.start_night();
    }

    // === Win Check ===

    /// End the game if the rules name a winner. Returns `true` if it ended.
    fn check_winner(&mut self) -> bool {
        let Some(winner) = self.rules.evaluate(&self.state.roster) else {
            return false;
        };
        let state = &mut self.state;
        state.stage = Stage::End;
        state.winner = Some(winner);
        state.countdown.stop();
        state.history.record(state.round, EventKind::GameOver(winner));
        tracing::info!(round = state.round, %winner, "game over");
        true
    }
}
