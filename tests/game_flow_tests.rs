//! End-to-end game flow tests.
//!
//! These drive `GameController` through full rounds the way a moderator
//! would and check stage transitions, round counting and the history log.

use werewolf_moderator::{
    ConfigError, DayPhase, EventKind, GameConfig, GameController, GameError, NightSubPhase, PlayerId,
    PrivateInfo, Role, Stage, TickOutcome, Winner,
};

fn p(id: u8) -> PlayerId {
    PlayerId::new(id)
}

/// Eight seats: wolves at 1 and 2, witch at 6, seer at 8, villagers elsewhere.
fn eight_player_game() -> GameController {
    let mut game = GameController::default();
    game.initialize_game(8).unwrap();
    let roles = [
        Role::Werewolf,
        Role::Werewolf,
        Role::Villager,
        Role::Villager,
        Role::Villager,
        Role::Witch,
        Role::Villager,
        Role::Seer,
    ];
    for (id, role) in PlayerId::all(8).zip(roles) {
        game.assign_role(id, role).unwrap();
    }
    game
}

// =============================================================================
// Setup
// =============================================================================

#[test]
fn test_initialize_valid_counts() {
    for count in 6..=12 {
        let mut game = GameController::default();
        game.initialize_game(count).unwrap();

        let roster = game.state().roster();
        assert_eq!(roster.len(), count);
        let ids: Vec<_> = roster.iter().map(|p| p.id.0 as usize).collect();
        assert_eq!(ids, (1..=count).collect::<Vec<_>>());
        assert!(roster.iter().all(|p| p.role.is_none() && p.is_alive()));
        assert_eq!(game.state().stage(), Stage::Assign);
        assert_eq!(game.state().round(), 1);
    }
}

#[test]
fn test_initialize_invalid_counts() {
    for count in [0, 1, 5, 13, 40] {
        let mut game = GameController::default();
        let err = game.initialize_game(count).unwrap_err();

        assert_eq!(err, GameError::InvalidPlayerCount { count, min: 6, max: 12 });
        assert!(game.state().roster().is_empty());
        assert_eq!(game.state().stage(), Stage::Setup);
        assert!(game.state().history().is_empty());
    }
}

#[test]
fn test_config_cannot_widen_table_range() {
    for (min, max) in [(2, 3), (6, 300), (1, 12), (6, 13)] {
        let err = GameController::new(GameConfig::new().with_player_range(min, max))
            .err()
            .unwrap();
        assert!(matches!(err, ConfigError::Validation(_)), "{min}..={max}");
    }

    // A narrower range inside 6..=12 is fine
    let mut game = GameController::new(GameConfig::new().with_player_range(8, 10)).unwrap();
    assert_eq!(
        game.initialize_game(7).unwrap_err(),
        GameError::InvalidPlayerCount { count: 7, min: 8, max: 10 }
    );
    game.initialize_game(10).unwrap();
    assert_eq!(game.state().roster().len(), 10);
}

#[test]
fn test_config_requires_a_discussion() {
    let err = GameController::new(GameConfig::new().with_discussion_seconds(0))
        .err()
        .unwrap();
    assert!(matches!(err, ConfigError::Validation(_)));

    // The shortest legal discussion still expires into the vote
    let mut game = GameController::new(GameConfig::new().with_discussion_seconds(1)).unwrap();
    game.initialize_game(6).unwrap();
    game.deal_roles(3).unwrap();
    for _ in 0..3 {
        game.confirm_night_action(false).unwrap();
    }
    assert_eq!(game.tick(), TickOutcome::Expired);
    assert_eq!(game.state().day_phase(), Some(DayPhase::Vote));
}

#[test]
fn test_night_starts_exactly_at_last_assignment() {
    let mut game = GameController::default();
    game.initialize_game(6).unwrap();

    // Overwrites before night are allowed and do not start it
    game.assign_role(p(1), Role::Villager).unwrap();
    game.assign_role(p(1), Role::Werewolf).unwrap();
    for id in 2..=5 {
        game.assign_role(p(id), Role::Villager).unwrap();
        assert_eq!(game.state().stage(), Stage::Assign);
    }

    game.assign_role(p(6), Role::Seer).unwrap();
    assert_eq!(game.state().stage(), Stage::Night);
    assert_eq!(game.state().night_sub_phase(), Some(NightSubPhase::WerewolfConfirm));

    let kinds: Vec<_> = game.state().history().iter().map(|e| e.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            EventKind::GameStarted { player_count: 6 },
            EventKind::RolesAssigned,
            EventKind::NightFell,
        ]
    );
}

// =============================================================================
// Full rounds
// =============================================================================

#[test]
fn test_eight_player_first_round() {
    let mut game = eight_player_game();

    // Werewolves kill 7
    game.confirm_night_action(true).unwrap();
    game.select_night_target(p(7)).unwrap();
    game.confirm_night_target().unwrap();
    // Witch wakes but does nothing
    game.confirm_night_action(true).unwrap();
    game.skip_witch_action().unwrap();
    // Seer checks 7
    game.confirm_night_action(true).unwrap();
    game.night_target(p(7)).unwrap();

    let state = game.state();
    assert_eq!(state.stage(), Stage::Day);
    assert!(!state.roster().get(p(7)).unwrap().is_alive());

    let reveal = state
        .history()
        .iter()
        .find_map(|e| e.private_info)
        .unwrap();
    assert_eq!(
        reveal,
        PrivateInfo::SeerReveal {
            target: p(7),
            is_werewolf: false,
        }
    );

    // Day: the table votes out werewolf 1
    game.end_discussion().unwrap();
    game.select_eliminated(p(1)).unwrap();

    let state = game.state();
    assert_eq!(state.round(), 2);
    assert_eq!(state.stage(), Stage::Night);

    let outcomes: Vec<_> = state
        .history()
        .filter_kind(|k| matches!(k, EventKind::Death(_) | EventKind::Elimination(_)))
        .map(|e| e.kind.clone())
        .collect();
    assert_eq!(outcomes, vec![EventKind::Death(p(7)), EventKind::Elimination(p(1))]);
}

#[test]
fn test_villagers_win_by_voting_out_last_wolf() {
    let mut game = eight_player_game();

    // Round 1: peaceful night, vote out wolf 1
    for _ in 0..3 {
        game.confirm_night_action(false).unwrap();
    }
    game.end_discussion().unwrap();
    game.select_eliminated(p(1)).unwrap();
    assert_eq!(game.state().round(), 2);

    // Round 2: peaceful night, vote out wolf 2
    for _ in 0..3 {
        game.confirm_night_action(false).unwrap();
    }
    game.end_discussion().unwrap();
    game.select_eliminated(p(2)).unwrap();

    let state = game.state();
    assert_eq!(state.stage(), Stage::End);
    assert_eq!(state.winner(), Some(Winner::Villagers));
    assert_eq!(state.round(), 2);
    assert_eq!(
        state.history().last().unwrap().kind,
        EventKind::GameOver(Winner::Villagers)
    );
}

#[test]
fn test_werewolves_win_at_night() {
    let mut game = GameController::default();
    game.initialize_game(6).unwrap();
    let roles = [
        Role::Werewolf,
        Role::Werewolf,
        Role::Villager,
        Role::Villager,
        Role::Witch,
        Role::Seer,
    ];
    for (id, role) in PlayerId::all(6).zip(roles) {
        game.assign_role(id, role).unwrap();
    }

    // Wolves kill 3, witch poisons 4: 2 wolves vs 2 others
    game.confirm_night_action(true).unwrap();
    game.night_target(p(3)).unwrap();
    game.confirm_night_action(true).unwrap();
    game.use_witch_poison(p(4)).unwrap();
    game.confirm_night_action(false).unwrap();

    let state = game.state();
    assert_eq!(state.stage(), Stage::End);
    assert_eq!(state.winner(), Some(Winner::Werewolves));
    assert_eq!(state.round(), 1);
    // Never reached the day
    assert!(state
        .history()
        .filter_kind(|k| *k == EventKind::DayBroke)
        .next()
        .is_none());
}

// =============================================================================
// Discussion countdown
// =============================================================================

#[test]
fn test_countdown_expiry_enters_vote_once() {
    let mut game = GameController::new(GameConfig::new().with_discussion_seconds(3)).unwrap();
    game.initialize_game(6).unwrap();
    game.deal_roles(7).unwrap();
    for _ in 0..3 {
        game.confirm_night_action(false).unwrap();
    }

    assert_eq!(game.tick(), TickOutcome::Running(2));
    assert_eq!(game.tick(), TickOutcome::Running(1));
    assert_eq!(game.tick(), TickOutcome::Expired);
    assert_eq!(game.state().day_phase(), Some(DayPhase::Vote));

    for _ in 0..5 {
        assert_eq!(game.tick(), TickOutcome::Idle);
    }
    // end_discussion after expiry is a no-op too
    game.end_discussion().unwrap();

    let ended = game
        .state()
        .history()
        .filter_kind(|k| matches!(k, EventKind::DiscussionEnded { .. }))
        .map(|e| e.kind.clone())
        .collect::<Vec<_>>();
    assert_eq!(ended, vec![EventKind::DiscussionEnded { expired: true }]);
}

#[test]
fn test_end_discussion_zeroes_countdown() {
    let mut game = eight_player_game();
    for _ in 0..3 {
        game.confirm_night_action(false).unwrap();
    }
    assert_eq!(game.state().remaining_seconds(), 600);
    game.tick();
    assert_eq!(game.state().remaining_seconds(), 599);

    game.end_discussion().unwrap();
    assert_eq!(game.state().remaining_seconds(), 0);
    assert_eq!(game.state().day_phase(), Some(DayPhase::Vote));

    let len = game.state().history().len();
    game.end_discussion().unwrap();
    assert_eq!(game.tick(), TickOutcome::Idle);
    assert_eq!(game.state().history().len(), len);
}

#[test]
fn test_end_discussion_at_night_is_rejected() {
    let mut game = eight_player_game();
    let err = game.end_discussion().unwrap_err();
    assert!(matches!(err, GameError::ActionOutOfPhase { .. }));
}

// =============================================================================
// History
// =============================================================================

#[test]
fn test_history_only_grows() {
    let mut game = eight_player_game();
    let mut previous = game.state().history().clone();

    let mut check = |game: &GameController| {
        let current = game.state().history();
        assert!(current.len() >= previous.len());
        for (old, new) in previous.iter().zip(current.iter()) {
            assert_eq!(old, new);
        }
        previous = current.clone();
    };

    game.confirm_night_action(true).unwrap();
    check(&game);
    let _ = game.use_witch_save();
    check(&game);
    game.night_target(p(3)).unwrap();
    check(&game);
    game.confirm_night_action(true).unwrap();
    check(&game);
    game.use_witch_save().unwrap();
    check(&game);
    game.confirm_night_action(false).unwrap();
    check(&game);
    game.end_discussion().unwrap();
    check(&game);
    let _ = game.resolve_votes();
    check(&game);
}

#[test]
fn test_snapshot_serializes() {
    let mut game = eight_player_game();
    game.confirm_night_action(true).unwrap();

    let snapshot = game.snapshot();
    let json = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(json["stage"], "Night");
    assert_eq!(json["round"], 1);
    assert_eq!(json["night_sub_phase"], "WerewolfAction");
    assert_eq!(json["players"].as_array().unwrap().len(), 8);
}
