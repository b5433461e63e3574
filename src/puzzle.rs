//! Look-ahead drill generation.
//!
//! A drill shows one top-layer corner with a twist and a short move
//! sequence; the answer is where that corner ends up and how it is twisted.
//! Sequences are sampled at random, restricted so that every move turns the
//! tracked corner and no face is turned twice in a row, and kept only if the
//! corner finishes back in the top layer.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::cube::CubeState;
use crate::moves::{format_sequence, Face, Move, Turn};
use crate::pieces::{Placement, Twist};
use crate::slots::Slot;

/// Limits for puzzle sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Sampling attempts before falling back to a U-only drill.
    pub max_attempts: usize,
    /// Shortest sequence to sample.
    pub min_moves: usize,
    /// Longest sequence to sample.
    pub max_moves: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            max_attempts: 500,
            min_moves: 2,
            max_moves: 5,
        }
    }
}

/// A generated drill with its expected answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Where the tracked corner starts, and its starting twist.
    pub start: Placement,
    pub moves: Vec<Move>,
    /// Where the tracked corner finishes.
    pub solution: Placement,
}

impl Puzzle {
    /// Grades an answer.
    pub fn check(&self, answer: Placement) -> bool {
        answer == self.solution
    }
}

/// Follows the corner that starts at `start` through `moves`.
///
/// Every other corner begins solved. Returns the tracked corner's final slot
/// and twist.
pub fn track_corner(start: Placement, moves: &[Move]) -> Placement {
    let piece = start.slot.index();
    let mut state = CubeState::twisted_at(start.slot, start.twist);

    for &mv in moves {
        state = state.apply_move(mv);
        let corner = state.pieces()[piece];
        debug!(%mv, slot = %corner.slot, twist = %corner.twist, "tracked corner moved");
    }

    let corner = state.pieces()[piece];
    Placement {
        slot: corner.slot,
        twist: corner.twist,
    }
}

/// Whether the tracked corner ends up in the top layer.
pub fn is_legal_sequence(start: Placement, moves: &[Move]) -> bool {
    track_corner(start, moves).slot.is_upper()
}

fn random_start<R: Rng + ?Sized>(rng: &mut R) -> Placement {
    Placement {
        slot: Slot::UPPER[rng.gen_range(0..Slot::UPPER.len())],
        twist: Twist::ALL[rng.gen_range(0..Twist::ALL.len())],
    }
}

fn random_turn<R: Rng + ?Sized>(rng: &mut R) -> Turn {
    Turn::ALL[rng.gen_range(0..Turn::ALL.len())]
}

/// Samples one candidate sequence, or `None` if the walk gets stuck.
fn sample_sequence<R: Rng + ?Sized>(
    rng: &mut R,
    start: Placement,
    length: usize,
) -> Option<Vec<Move>> {
    let piece = start.slot.index();
    let mut state = CubeState::twisted_at(start.slot, start.twist);
    let mut previous_face = None;
    let mut moves = Vec::with_capacity(length);

    for _ in 0..length {
        let current_slot = state.pieces()[piece].slot;
        let candidates: Vec<Face> = Face::ALL
            .into_iter()
            .filter(|&face| Some(face) != previous_face && face.moves_slot(current_slot))
            .collect();

        let &face = candidates.choose(rng)?;
        let mv = Move::new(face, random_turn(rng));
        moves.push(mv);
        state = state.apply_move(mv);
        previous_face = Some(face);
    }

    Some(moves)
}

/// Generates a drill whose tracked corner finishes in the top layer.
///
/// Tries up to `config.max_attempts` random sequences. If none qualifies,
/// falls back to two random U-face turns, which can never leave the top
/// layer.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, config: &PuzzleConfig) -> Puzzle {
    for attempt in 0..config.max_attempts {
        let start = random_start(rng);
        let length = rng.gen_range(config.min_moves..=config.max_moves.max(config.min_moves));

        let Some(moves) = sample_sequence(rng, start, length) else {
            debug!(attempt, "no face turns the tracked corner");
            continue;
        };

        let solution = track_corner(start, &moves);
        if !solution.slot.is_upper() {
            debug!(attempt, moves = %format_sequence(&moves), "corner left the top layer");
            continue;
        }

        info!(
            start = %start,
            moves = %format_sequence(&moves),
            solution = %solution,
            attempts = attempt + 1,
            "generated puzzle"
        );
        return Puzzle {
            start,
            moves,
            solution,
        };
    }

    warn!(
        max_attempts = config.max_attempts,
        "no legal sequence found, falling back to U turns"
    );
    let start = random_start(rng);
    let moves = vec![
        Move::new(Face::U, random_turn(rng)),
        Move::new(Face::U, random_turn(rng)),
    ];
    let solution = track_corner(start, &moves);
    info!(
        start = %start,
        moves = %format_sequence(&moves),
        solution = %solution,
        "generated fallback puzzle"
    );

    Puzzle {
        start,
        moves,
        solution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::parse_sequence;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_track_corner_through_b_prime_u_prime() {
        let start = Placement { slot: Slot::Ulb, twist: Twist::Two };
        let moves = parse_sequence("B' U'").unwrap();
        assert_eq!(track_corner(start, &moves), Placement { slot: Slot::Ulb, twist: Twist::Zero });
        assert!(is_legal_sequence(start, &moves));
    }

    #[test]
    fn test_track_corner_leaving_the_top() {
        let start = Placement { slot: Slot::Ulb, twist: Twist::One };
        assert_eq!(
            track_corner(start, &parse_sequence("B").unwrap()),
            Placement { slot: Slot::Dlb, twist: Twist::One }
        );
        assert_eq!(
            track_corner(start, &parse_sequence("R U").unwrap()),
            Placement { slot: Slot::Urb, twist: Twist::Two }
        );
        assert!(!is_legal_sequence(start, &parse_sequence("B").unwrap()));
        assert!(is_legal_sequence(start, &parse_sequence("L").unwrap()));
    }

    #[test]
    fn test_empty_sequence_keeps_start() {
        let start = Placement { slot: Slot::Urf, twist: Twist::One };
        assert_eq!(track_corner(start, &[]), start);
    }

    #[test]
    fn test_generated_puzzles_follow_the_rules() {
        let config = PuzzleConfig::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let puzzle = generate(&mut rng, &config);
            assert!(puzzle.start.slot.is_upper());
            assert!(puzzle.solution.slot.is_upper());
            assert_eq!(track_corner(puzzle.start, &puzzle.moves), puzzle.solution);
            assert!(puzzle.check(puzzle.solution));

            // sampled sequences never repeat a face, so two U turns can only be the fallback
            let is_fallback =
                puzzle.moves.len() == 2 && puzzle.moves.iter().all(|m| m.face == Face::U);
            if is_fallback {
                continue;
            }
            assert!((config.min_moves..=config.max_moves).contains(&puzzle.moves.len()));
            for pair in puzzle.moves.windows(2) {
                assert_ne!(pair[0].face, pair[1].face, "{}", format_sequence(&puzzle.moves));
            }
        }
    }

    #[test]
    fn test_every_move_turns_the_tracked_corner() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let puzzle = generate(&mut rng, &PuzzleConfig::default());
            let mut state = CubeState::twisted_at(puzzle.start.slot, puzzle.start.twist);
            for &mv in &puzzle.moves {
                let before = state.pieces()[puzzle.start.slot.index()].slot;
                assert!(mv.face.moves_slot(before), "{mv} does not turn {before}");
                state = state.apply_move(mv);
            }
        }
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let config = PuzzleConfig::default();
        let first = generate(&mut StdRng::seed_from_u64(42), &config);
        let second = generate(&mut StdRng::seed_from_u64(42), &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_fallback_uses_u_turns() {
        let config = PuzzleConfig {
            max_attempts: 0,
            ..PuzzleConfig::default()
        };
        let puzzle = generate(&mut StdRng::seed_from_u64(3), &config);
        assert_eq!(puzzle.moves.len(), 2);
        assert!(puzzle.moves.iter().all(|m| m.face == Face::U));
        assert!(puzzle.solution.slot.is_upper());
        assert_eq!(track_corner(puzzle.start, &puzzle.moves), puzzle.solution);
    }

    #[test]
    fn test_check_rejects_wrong_answer() {
        let puzzle = Puzzle {
            start: Placement { slot: Slot::Ulb, twist: Twist::Two },
            moves: parse_sequence("B' U'").unwrap(),
            solution: Placement { slot: Slot::Ulb, twist: Twist::Zero },
        };
        assert!(puzzle.check(Placement { slot: Slot::Ulb, twist: Twist::Zero }));
        assert!(!puzzle.check(Placement { slot: Slot::Ulb, twist: Twist::Two }));
        assert!(!puzzle.check(Placement { slot: Slot::Urb, twist: Twist::Zero }));
    }
}
