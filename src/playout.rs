//! Random playouts (seeded random games).
//!
//! A playout picks uniformly among the legal cells of the side to move until
//! the game is over. It does no evaluation at all; it exists to drive the
//! engine through many reachable positions for the demo and for tests.

use crate::board::Point;
use crate::engine::{GameEngine, GameStatus, MoveResult, Score, Winner};
use crate::error::EngineError;

/// Everything that happened in one playout.
#[derive(Debug, Clone)]
pub struct Playout {
    pub moves: Vec<MoveResult>,
    pub score: Score,
    pub winner: Winner,
}

impl Playout {
    pub fn passes(&self) -> usize {
        self.moves.iter().filter(|m| m.passed).count()
    }
}

/// Play random legal moves from the engine's current position to the end.
///
/// With `verbose` set, every move is reported on stderr.
pub fn random_playout(
    engine: &mut GameEngine,
    rng: &mut fastrand::Rng,
    verbose: bool,
) -> Result<Playout, EngineError> {
    let mut moves = Vec::new();

    let winner = loop {
        if let GameStatus::Terminal(w) = engine.status() {
            break w;
        }
        let pt = choose_random_move(engine, rng).ok_or(EngineError::GameOver)?;
        let result = engine.apply_move(pt)?;
        if verbose {
            for line in move_report(&result) {
                eprintln!("{line}");
            }
        }
        moves.push(result);
    };

    Ok(Playout {
        moves,
        score: engine.compute_score(),
        winner,
    })
}

/// Diagnostic lines for an applied move: the placement, then any pass and the result.
pub(crate) fn move_report(result: &MoveResult) -> Vec<String> {
    let flipped: Vec<String> = result.flipped.iter().map(Point::to_string).collect();
    let mut lines = vec![format!(
        "{} {} flips [{}]",
        result.mover,
        result.placed,
        flipped.join(" ")
    )];
    if let Some(skipped) = result.skipped() {
        lines.push(format!("{skipped} passes"));
    }
    if let Some(winner) = result.winner {
        lines.push(format!("game over: {winner}"));
    }
    lines
}

fn choose_random_move(engine: &GameEngine, rng: &mut fastrand::Rng) -> Option<Point> {
    rng.choice(engine.legal_moves(engine.current_player()))
}
