//! Property tests for the transition engine.
//!
//! Random levels are played with random legal moves, then unwound. The
//! properties checked are the ones a presentation layer depends on:
//! undo is an exact inverse, rejected moves are no-ops, and every card
//! is always in exactly one zone.

use proptest::prelude::*;
use tripeaks_engine::cards::Rank;
use tripeaks_engine::core::{CardId, Coordinate, GameState, Move, TableConfig};
use tripeaks_engine::level::{CardPlacement, LevelDescriptor};
use tripeaks_engine::rules::UndoOutcome;
use tripeaks_engine::zones::Zone;

fn placement() -> impl Strategy<Value = CardPlacement> {
    (0i32..13, 0i32..4, 0u16..1080, 0u16..1920).prop_map(|(face, suit, x, y)| CardPlacement {
        face,
        suit,
        position: Coordinate::new(f32::from(x), f32::from(y)),
    })
}

fn level() -> impl Strategy<Value = LevelDescriptor> {
    (
        prop::collection::vec(placement(), 0..12),
        prop::collection::vec(placement(), 1..10),
    )
        .prop_map(|(playfield, stack)| LevelDescriptor::new(playfield, stack))
}

/// Any move on a small id range, mostly ones that will be rejected.
fn arbitrary_move() -> impl Strategy<Value = Move> {
    (0u32..32, any::<bool>()).prop_map(|(raw, from_reserve)| {
        if from_reserve {
            Move::ReplaceFromReserve(CardId(raw))
        } else {
            Move::MatchPlayfield(CardId(raw))
        }
    })
}

fn start(level: &LevelDescriptor) -> GameState {
    GameState::from_level(level, TableConfig::default()).expect("generated levels are in range")
}

/// Every registered card is in exactly one zone.
fn assert_partitioned(state: &GameState) -> Result<(), TestCaseError> {
    let ids = state.registry().ids();
    prop_assert_eq!(ids.len(), state.zones().total_cards());
    for id in ids {
        let zone = state.zone_of(id);
        prop_assert!(zone.is_some(), "{} has no zone", id);
        let in_playfield = state.playfield().contains(&id);
        let in_reserve = state.reserve().contains(&id);
        let in_base = state.base().contains(&id);
        prop_assert_eq!(
            [in_playfield, in_reserve, in_base].iter().filter(|&&b| b).count(),
            1
        );
        let expected = if in_playfield {
            Zone::Playfield
        } else if in_reserve {
            Zone::Reserve
        } else {
            Zone::Base
        };
        prop_assert_eq!(zone, Some(expected));
    }
    Ok(())
}

fn is_subsequence(short: &[CardId], long: &[CardId]) -> bool {
    let mut rest = long.iter();
    short.iter().all(|id| rest.any(|other| other == id))
}

proptest! {
    #[test]
    fn adjacency_is_symmetric(a in 1u8..=13, b in 1u8..=13) {
        let (a, b) = (Rank::from_value(a).unwrap(), Rank::from_value(b).unwrap());
        prop_assert_eq!(a.is_adjacent(b), b.is_adjacent(a));
        prop_assert_eq!(a.is_adjacent(b), matches!(a.value().abs_diff(b.value()), 1 | 12));
    }

    #[test]
    fn generation_partitions_cards(level in level()) {
        let state = start(&level);

        prop_assert_eq!(state.registry().len(), level.card_count());
        prop_assert_eq!(state.playfield().len(), level.playfield.len());
        prop_assert_eq!(state.reserve().len(), level.stack.len() - 1);
        prop_assert_eq!(state.base().len(), 1);
        prop_assert!(!state.can_undo());
        assert_partitioned(&state)?;
    }

    #[test]
    fn moves_then_undos_restore_state(level in level(), picks in prop::collection::vec(any::<prop::sample::Index>(), 0..24)) {
        let mut state = start(&level);
        let initial = state.clone();

        let mut applied = 0;
        for pick in &picks {
            let legal = state.legal_moves();
            if legal.is_empty() {
                break;
            }
            let mv = legal[pick.index(legal.len())];
            prop_assert_eq!(state.apply(mv), Ok(mv.card()));
            prop_assert_eq!(state.base_top(), Some(mv.card()));
            prop_assert_eq!(state.card(mv.card()).unwrap().coordinate, state.config().base_slot);
            assert_partitioned(&state)?;
            applied += 1;
        }
        prop_assert_eq!(state.history_len(), applied);

        for _ in 0..applied {
            let outcome = state.undo();
            prop_assert!(matches!(outcome, Ok(UndoOutcome::Undone(_))));
            assert_partitioned(&state)?;
        }

        prop_assert_eq!(state.undo(), Ok(UndoOutcome::NothingToUndo));
        prop_assert_eq!(state, initial);
    }

    #[test]
    fn rejected_moves_are_no_ops(
        level in level(),
        steps in prop::collection::vec((any::<prop::sample::Index>(), arbitrary_move()), 1..24),
    ) {
        let mut state = start(&level);

        for (pick, attempt) in &steps {
            let attempt = *attempt;
            let before = state.clone();

            match state.apply(attempt) {
                Ok(top) => {
                    prop_assert_eq!(top, attempt.card());
                    prop_assert_eq!(state.history_len(), before.history_len() + 1);
                    prop_assert!(before.check(attempt).is_ok());
                    prop_assert!(state.check(attempt).is_err());
                }
                Err(err) => {
                    prop_assert!(!err.is_fatal());
                    prop_assert_eq!(state.history_len(), before.history_len());
                    prop_assert_eq!(&state, &before);
                    prop_assert_eq!(before.check(attempt), Err(err));
                }
            }

            // Advance so later attempts see history and buried Base cards
            let legal = state.legal_moves();
            if legal.is_empty() {
                break;
            }
            let mv = legal[pick.index(legal.len())];
            prop_assert!(state.apply(mv).is_ok());
        }
    }

    #[test]
    fn reserve_order_is_preserved(level in level(), picks in prop::collection::vec(any::<prop::sample::Index>(), 1..10)) {
        let mut state = start(&level);
        let original = state.reserve().to_vec();

        for pick in &picks {
            if state.reserve().is_empty() {
                break;
            }
            let card = state.reserve()[pick.index(state.reserve().len())];
            state.replace_from_reserve(card).unwrap();
            prop_assert!(is_subsequence(state.reserve(), &original));
        }
    }
}
