//! Corner Look-Ahead Trainer
//!
//! Command-line front end for the corner simulator: apply move sequences,
//! follow a single corner, inspect what each face turn does, and generate
//! look-ahead drills.

use std::fmt::Write as _;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use cornerdrill::explore::explore;
use cornerdrill::grid::format_layers;
use cornerdrill::moves::{format_sequence, parse_sequence, Face, Move, Turn};
use cornerdrill::puzzle::{self, PuzzleConfig};
use cornerdrill::{CubeState, Error, Placement, Result, Slot, Twist};

/// Simulates cube corners and generates look-ahead drills.
#[derive(Parser)]
#[command(name = "cornerdrill")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log every tracked move (same as RUST_LOG=cornerdrill=debug).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Apply moves to the solved cube and print the result.
    Apply {
        /// Moves such as R U R' U2, as separate or quoted arguments.
        #[arg(required = true, allow_hyphen_values = true)]
        moves: Vec<String>,
        /// Piece to place before applying moves (0-7).
        #[arg(long, requires = "slot")]
        piece: Option<usize>,
        /// Slot for --piece, as a label (URF) or index (2).
        #[arg(long, requires = "piece")]
        slot: Option<Slot>,
        /// Twist for --piece.
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
        twist: u8,
    },
    /// Follow one corner through a move sequence.
    Track {
        #[arg(required = true, allow_hyphen_values = true)]
        moves: Vec<String>,
        /// Slot the tracked corner starts in.
        #[arg(long)]
        slot: Slot,
        /// Starting twist of the tracked corner.
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
        twist: u8,
    },
    /// Show the slot cycle and resulting twists of each plain face turn.
    Cycles {
        /// Twist every piece starts with.
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
        twist: u8,
    },
    /// Generate a look-ahead drill.
    Puzzle {
        /// Seed for reproducible drills.
        #[arg(long)]
        seed: Option<u64>,
        /// Answer to grade, as SLOT:TWIST (e.g. URF:1).
        #[arg(long)]
        answer: Option<Placement>,
        /// Sampling attempts before the U-turn fallback.
        #[arg(long, default_value_t = PuzzleConfig::default().max_attempts)]
        max_attempts: usize,
    },
    /// Count distinct states reachable within a number of moves.
    Explore {
        #[arg(long, default_value_t = 4)]
        depth: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Some(Command::Apply {
            moves,
            piece,
            slot,
            twist,
        }) => run_apply(&moves, piece.zip(slot), twist),
        Some(Command::Track { moves, slot, twist }) => run_track(&moves, slot, twist),
        Some(Command::Cycles { twist }) => run_cycles(twist),
        Some(Command::Puzzle {
            seed,
            answer,
            max_attempts,
        }) => run_puzzle(seed, answer, max_attempts),
        Some(Command::Explore { depth }) => {
            print!("{}", render_exploration(depth));
            Ok(())
        }
        // default: one drill with the answer shown
        None => run_puzzle(None, None, PuzzleConfig::default().max_attempts),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays parseable.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "cornerdrill=debug"
    } else {
        "cornerdrill=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Parses move arguments, which may each hold one or several tokens.
fn parse_moves(args: &[String]) -> Result<Vec<Move>> {
    let moves = parse_sequence(&args.join(" "))?;
    if moves.is_empty() {
        return Err(Error::EmptySequence);
    }
    Ok(moves)
}

/// Applies moves, optionally after placing one piece, and prints the result.
fn run_apply(args: &[String], placement: Option<(usize, Slot)>, twist: u8) -> Result<()> {
    let moves = parse_moves(args)?;
    let mut start = CubeState::new();
    if let Some((piece, slot)) = placement {
        start = start.with_piece(piece, slot, Twist::try_from(twist)?)?;
    }

    let end = start.apply_moves(&moves);
    println!("{}", format_sequence(&moves));
    println!();
    print!("{}", format_layers(&end));
    println!();
    print!("{end}");
    Ok(())
}

/// Prints where a single corner ends up.
fn run_track(args: &[String], slot: Slot, twist: u8) -> Result<()> {
    let moves = parse_moves(args)?;
    let start = Placement {
        slot,
        twist: Twist::try_from(twist)?,
    };
    let end = puzzle::track_corner(start, &moves);
    println!("{start} {} -> {end}", format_sequence(&moves));
    Ok(())
}

fn run_cycles(twist: u8) -> Result<()> {
    print!("{}", render_cycles(Twist::try_from(twist)?));
    Ok(())
}

/// One line per face: where each moved slot's piece lands and its new twist.
fn render_cycles(twist: Twist) -> String {
    let base = CubeState::uniform(twist);
    let mut output = String::new();

    for face in Face::ALL {
        let after = base.apply_move(Move::new(face, Turn::Clockwise));
        let _ = write!(output, "{face:?}");
        for slot in face.slots() {
            // with every piece at home, the piece id equals its starting slot
            let moved = after.pieces()[slot.index()];
            let _ = write!(output, " {slot}->{}:{}", moved.slot, moved.twist);
        }
        output.push('\n');
    }

    output
}

/// Generates a drill and either grades an answer or reveals the solution.
fn run_puzzle(seed: Option<u64>, answer: Option<Placement>, max_attempts: usize) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let config = PuzzleConfig {
        max_attempts,
        ..PuzzleConfig::default()
    };
    let drill = puzzle::generate(&mut rng, &config);

    println!("start: {}", drill.start);
    println!("moves: {}", format_sequence(&drill.moves));
    match answer {
        Some(answer) if drill.check(answer) => println!("correct: {answer}"),
        Some(answer) => println!("incorrect: {answer} (expected {})", drill.solution),
        None => println!("solution: {}", drill.solution),
    }
    Ok(())
}

fn render_exploration(depth: usize) -> String {
    let exploration = explore(CubeState::new(), depth);
    let mut output = String::new();
    for (level, count) in exploration.counts_per_depth.iter().enumerate() {
        let _ = writeln!(output, "depth {level}: {count}");
    }
    let _ = writeln!(output, "total: {}", exploration.total());
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_snapshot() {
        insta::assert_snapshot!(render_cycles(Twist::Zero), @r"
        U ULB->URB:0 URB->URF:0 URF->ULF:0 ULF->ULB:0
        D DLF->DRF:0 DRF->DRB:0 DRB->DLB:0 DLB->DLF:0
        R URF->URB:1 URB->DRB:1 DRB->DRF:1 DRF->URF:1
        L ULB->ULF:1 ULF->DLF:1 DLF->DLB:1 DLB->ULB:1
        F ULF->URF:2 URF->DRF:2 DRF->DLF:2 DLF->ULF:2
        B URB->ULB:2 ULB->DLB:2 DLB->DRB:2 DRB->URB:2
        ");
    }

    #[test]
    fn test_cycles_from_twist_one() {
        insta::assert_snapshot!(render_cycles(Twist::One), @r"
        U ULB->URB:2 URB->URF:2 URF->ULF:2 ULF->ULB:2
        D DLF->DRF:2 DRF->DRB:2 DRB->DLB:2 DLB->DLF:2
        R URF->URB:0 URB->DRB:0 DRB->DRF:0 DRF->URF:0
        L ULB->ULF:0 ULF->DLF:0 DLF->DLB:0 DLB->ULB:0
        F ULF->URF:1 URF->DRF:1 DRF->DLF:1 DLF->ULF:1
        B URB->ULB:1 ULB->DLB:1 DLB->DRB:1 DRB->URB:1
        ");
    }

    #[test]
    fn test_exploration_counts() {
        insta::assert_snapshot!(render_exploration(2), @r"
        depth 0: 1
        depth 1: 18
        depth 2: 243
        total: 262
        ");
    }

    #[test]
    fn test_parse_moves_accepts_mixed_arguments() {
        let args = vec!["R U".to_string(), "R'".to_string(), "U'".to_string()];
        assert_eq!(format_sequence(&parse_moves(&args).unwrap()), "R U R' U'");
    }

    #[test]
    fn test_parse_moves_rejects_empty_and_invalid() {
        assert_eq!(parse_moves(&[" ".to_string()]), Err(Error::EmptySequence));
        assert_eq!(
            parse_moves(&["R".to_string(), "Q".to_string()]),
            Err(Error::InvalidMove("Q".to_string()))
        );
    }

    #[test]
    fn test_cli_parses_track() {
        let cli = Cli::try_parse_from(["cornerdrill", "track", "--slot", "ULB", "--twist", "2", "B'", "U'"]).unwrap();
        match cli.command {
            Some(Command::Track { moves, slot, twist }) => {
                assert_eq!(moves, vec!["B'", "U'"]);
                assert_eq!(slot, Slot::Ulb);
                assert_eq!(twist, 2);
            }
            _ => panic!("expected track command"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_twist() {
        assert!(Cli::try_parse_from(["cornerdrill", "cycles", "--twist", "3"]).is_err());
    }
}
