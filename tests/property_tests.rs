//! Property-based tests for outcome rules and session operations.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use stonepaper::builder::SessionBuilder;
use stonepaper::core::{Choice, ChoiceCatalog, Outcome, OutcomeRule, RoundPhase};
use stonepaper::effects::{FixedClock, ScriptedMoves};
use stonepaper::SessionController;

const IDS: [&str; 3] = ["stone", "paper", "scissors"];

prop_compose! {
    fn arbitrary_id()(index in 0..3usize) -> &'static str {
        IDS[index]
    }
}

prop_compose! {
    fn odd_catalog()(half in 0..6usize) -> ChoiceCatalog {
        let size = 2 * half + 1;
        let choices = (0..size)
            .map(|i| Choice::new(format!("m{i}"), format!("Move {i}"), "*"))
            .collect();
        ChoiceCatalog::new(choices).unwrap()
    }
}

fn scripted_session(computer: &[&'static str]) -> SessionController {
    let catalog = ChoiceCatalog::classic();
    let moves = ScriptedMoves::from_ids(&catalog, computer.iter().copied()).unwrap();
    SessionBuilder::new()
        .catalog(catalog)
        .move_source(moves)
        .clock(FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()))
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn identical_moves_draw(id in arbitrary_id()) {
        let catalog = ChoiceCatalog::classic();
        let rule = OutcomeRule::classic();
        let mv = catalog.resolve(id).unwrap();
        prop_assert_eq!(rule.decide(&mv, &mv), Outcome::Draw);
    }

    #[test]
    fn decide_is_antisymmetric(a in arbitrary_id(), b in arbitrary_id()) {
        let catalog = ChoiceCatalog::classic();
        let rule = OutcomeRule::classic();
        let (a, b) = (catalog.resolve(a).unwrap(), catalog.resolve(b).unwrap());
        prop_assume!(a != b);

        let forward = rule.decide(&a, &b);
        prop_assert_ne!(forward, Outcome::Draw);
        prop_assert_eq!(rule.decide(&b, &a), forward.reversed());
    }

    #[test]
    fn decide_is_deterministic(a in arbitrary_id(), b in arbitrary_id()) {
        let catalog = ChoiceCatalog::classic();
        let rule = OutcomeRule::classic();
        let (a, b) = (catalog.resolve(a).unwrap(), catalog.resolve(b).unwrap());
        prop_assert_eq!(rule.decide(&a, &b), rule.decide(&a, &b));
    }

    #[test]
    fn cyclic_rules_are_balanced_for_odd_catalogs(catalog in odd_catalog()) {
        let rule = OutcomeRule::cyclic(&catalog).unwrap();
        let half = (catalog.len() - 1) / 2;

        for a in catalog.moves() {
            prop_assert_eq!(rule.defeated_by(a).count(), half);
            for b in catalog.moves() {
                let outcome = rule.decide(a, b);
                if a == b {
                    prop_assert_eq!(outcome, Outcome::Draw);
                } else {
                    prop_assert_eq!(rule.decide(b, a), outcome.reversed());
                }
            }
        }
    }

    #[test]
    fn score_matches_outcome_counts(
        rounds in prop::collection::vec((arbitrary_id(), arbitrary_id()), 1..30)
    ) {
        let computer: Vec<&'static str> = rounds.iter().map(|(_, c)| *c).collect();
        let mut session = scripted_session(&computer);

        let mut player_wins = 0;
        let mut computer_wins = 0;
        for (player, _) in &rounds {
            match session.play(player).unwrap().outcome {
                Outcome::PlayerWin => player_wins += 1,
                Outcome::ComputerWin => computer_wins += 1,
                Outcome::Draw => {}
            }
        }

        let score = session.state().score();
        prop_assert_eq!(score.player, player_wins);
        prop_assert_eq!(score.computer, computer_wins);
        prop_assert!(score.decided() as usize <= rounds.len());
    }

    #[test]
    fn history_keeps_the_latest_five(
        rounds in prop::collection::vec((arbitrary_id(), arbitrary_id()), 0..20)
    ) {
        let computer: Vec<&'static str> = rounds.iter().map(|(_, c)| *c).collect();
        let mut session = scripted_session(&computer);
        for (player, _) in &rounds {
            session.play(player).unwrap();
        }

        let history = session.state().history();
        prop_assert_eq!(history.len(), rounds.len().min(5));

        let skip = rounds.len().saturating_sub(5);
        for (record, (player, computer)) in history.records().zip(rounds.iter().skip(skip)) {
            prop_assert_eq!(record.player_move.id(), *player);
            prop_assert_eq!(record.computer_move.id(), *computer);
        }
    }

    #[test]
    fn reset_round_always_idles(
        rounds in prop::collection::vec(arbitrary_id(), 0..8)
    ) {
        let mut session = scripted_session(&["paper", "stone", "scissors"]);
        for player in &rounds {
            session.play(player).unwrap();
        }
        let score = session.state().score();
        let history_len = session.state().history().len();

        session.reset_round();

        let state = session.state();
        prop_assert_eq!(state.phase(), RoundPhase::Idle);
        prop_assert!(state.current_player_move().is_none());
        prop_assert!(state.current_computer_move().is_none());
        prop_assert!(state.current_outcome().is_none());
        prop_assert_eq!(state.score(), score);
        prop_assert_eq!(state.history().len(), history_len);
    }

    #[test]
    fn reset_score_always_zeroes(
        rounds in prop::collection::vec(arbitrary_id(), 0..8)
    ) {
        let mut session = scripted_session(&["scissors", "scissors", "paper"]);
        for player in &rounds {
            session.play(player).unwrap();
        }
        let phase = session.state().phase();

        session.reset_score();

        let state = session.state();
        prop_assert_eq!(state.score().player, 0);
        prop_assert_eq!(state.score().computer, 0);
        prop_assert!(state.history().is_empty());
        prop_assert_eq!(state.phase(), phase);
    }

    #[test]
    fn unknown_ids_never_change_state(
        id in "[a-z]{1,10}",
        rounds in prop::collection::vec(arbitrary_id(), 0..4)
    ) {
        prop_assume!(!IDS.contains(&id.as_str()));

        let mut session = scripted_session(&["stone"]);
        for player in &rounds {
            session.play(player).unwrap();
        }
        let before = session.state().clone();

        prop_assert!(session.play(&id).is_err());
        prop_assert_eq!(session.state(), &before);
    }
}
