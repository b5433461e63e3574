//! Breadth-first exploration of states reachable by face turns.
//!
//! Key points:
//! - States are `Copy` values, so each frontier entry is an independent branch
//! - FxHashSet for fast deduplication of visited states
//! - Frontier-by-frontier expansion so counts come out per depth

use rustc_hash::FxHashSet;

use crate::cube::CubeState;
use crate::moves::Move;

/// Result of a bounded breadth-first exploration.
#[derive(Debug, Clone)]
pub struct Exploration {
    /// Number of states first reached at each depth; index 0 is the start.
    pub counts_per_depth: Vec<usize>,
    /// Every distinct state seen, including the start.
    pub visited: FxHashSet<CubeState>,
}

impl Exploration {
    /// Total distinct states reached.
    pub fn total(&self) -> usize {
        self.visited.len()
    }
}

/// Enumerates every state reachable from `start` in at most `depth` moves.
///
/// Uses all 18 moves at every step; a state is counted at the smallest
/// depth it appears at.
pub fn explore(start: CubeState, depth: usize) -> Exploration {
    let mut visited: FxHashSet<CubeState> = FxHashSet::default();
    visited.insert(start);

    let mut counts_per_depth = vec![1];
    let mut frontier = vec![start];

    for _ in 0..depth {
        let mut next_frontier = Vec::new();

        for state in &frontier {
            for mv in Move::ALL {
                let next = state.apply_move(mv);
                if visited.insert(next) {
                    next_frontier.push(next);
                }
            }
        }

        counts_per_depth.push(next_frontier.len());
        if next_frontier.is_empty() {
            break;
        }
        frontier = next_frontier;
    }

    Exploration {
        counts_per_depth,
        visited,
    }
}
