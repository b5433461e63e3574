//! Properties that must hold for every reachable corner state.

use proptest::prelude::*;

use cornerdrill::explore::explore;
use cornerdrill::geometry::Coord;
use cornerdrill::pieces::derive_twist;
use cornerdrill::{CubeState, Frame, Move, Slot, Twist};

fn arb_move() -> impl Strategy<Value = Move> {
    (0..Move::ALL.len()).prop_map(|index| Move::ALL[index])
}

fn arb_start() -> impl Strategy<Value = CubeState> {
    (0..8usize, 0..3u8).prop_map(|(slot, twist)| {
        CubeState::twisted_at(Slot::ALL[slot], Twist::ALL[twist as usize])
    })
}

fn dot(a: Coord, b: Coord) -> i32 {
    a.0 * b.0 + a.1 * b.1 + a.2 * b.2
}

fn assert_well_formed(state: &CubeState) -> Result<(), TestCaseError> {
    prop_assert!(state.is_permutation(), "slots are not a permutation:\n{state}");
    for slot in Slot::ALL {
        prop_assert!(state.piece_at_slot(slot).is_some(), "{slot} is empty");
    }
    for piece in state.pieces() {
        // the frame must agree with the label it was classified into
        prop_assert_eq!(derive_twist(piece.frame.up, piece.slot), Some(piece.twist));
        let Frame { up, right, front } = piece.frame;
        for axis in [up, right, front] {
            prop_assert_eq!(dot(axis, axis), 1);
        }
        prop_assert_eq!(dot(up, right), 0);
        prop_assert_eq!(dot(up, front), 0);
        prop_assert_eq!(dot(right, front), 0);
    }
    Ok(())
}

proptest! {
    #[test]
    fn reachable_states_are_well_formed(
        start in arb_start(),
        moves in prop::collection::vec(arb_move(), 0..40),
    ) {
        let mut state = start;
        for mv in moves {
            state = state.apply_move(mv);
            assert_well_formed(&state)?;
        }
    }

    #[test]
    fn inverse_cancels(
        start in arb_start(),
        prefix in prop::collection::vec(arb_move(), 0..20),
        mv in arb_move(),
    ) {
        let state = start.apply_moves(&prefix);
        prop_assert_eq!(state.apply_move(mv).apply_move(mv.inverse()), state);
    }

    #[test]
    fn move_order_returns_to_start(
        start in arb_start(),
        prefix in prop::collection::vec(arb_move(), 0..20),
        mv in arb_move(),
    ) {
        let state = start.apply_moves(&prefix);
        let repeated = (0..mv.order()).fold(state, |acc, _| acc.apply_move(mv));
        prop_assert_eq!(repeated, state);
    }

    #[test]
    fn sequence_is_undone_by_reversed_inverses(
        moves in prop::collection::vec(arb_move(), 0..30),
    ) {
        let undo: Vec<Move> = moves.iter().rev().map(|mv| mv.inverse()).collect();
        let state = CubeState::new().apply_moves(&moves).apply_moves(&undo);
        prop_assert_eq!(state, CubeState::new());
    }

    #[test]
    fn moves_outside_the_layer_leave_pieces_alone(
        prefix in prop::collection::vec(arb_move(), 0..20),
        mv in arb_move(),
    ) {
        let before = CubeState::new().apply_moves(&prefix);
        let after = before.apply_move(mv);
        for (old, new) in before.pieces().iter().zip(after.pieces()) {
            if !mv.face.moves_slot(old.slot) {
                prop_assert_eq!(old, new);
            } else {
                prop_assert!(mv.face.moves_slot(new.slot));
            }
        }
    }
}

#[test]
fn every_state_within_four_moves_is_well_formed() {
    let exploration = explore(CubeState::new(), 4);
    assert_eq!(exploration.counts_per_depth, vec![1, 18, 243, 2874, 28000]);
    for state in &exploration.visited {
        assert!(state.is_permutation());
        for piece in state.pieces() {
            assert_eq!(derive_twist(piece.frame.up, piece.slot), Some(piece.twist));
        }
    }
}
