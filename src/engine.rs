//! The game-rule engine: legality, captures, turn alternation, passes and scoring.
//!
//! A [`GameEngine`] exclusively owns one game's board and side to move. The
//! only mutating operations are [`GameEngine::initialize`] and
//! [`GameEngine::apply_move`]; everything else is a read of the current state.
//!
//! While a game is in progress the side to move always has at least one legal
//! move. After a placement the opponent moves next unless they have no legal
//! cell, in which case they pass and the turn returns to the mover. If the
//! mover is then stuck as well, the game is over.

use std::fmt;

use crate::board::{Board, Color, Point};
use crate::constants::{CELLS, DIRECTIONS};
use crate::error::EngineError;

/// Result of a finished game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Winner {
    Black,
    White,
    Draw,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Black => write!(f, "Black wins"),
            Winner::White => write!(f, "White wins"),
            Winner::Draw => write!(f, "Draw"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Neither side can move. Absorbing until the engine is re-initialized.
    Terminal(Winner),
}

/// Piece counts per color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    /// Number of empty cells.
    pub fn empty(&self) -> usize {
        CELLS - self.black - self.white
    }

    /// Winner if the game ended on these counts.
    pub fn winner(&self) -> Winner {
        determine_winner(self.black, self.white)
    }
}

/// Outcome of a successfully applied move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveResult {
    /// Cell the piece was placed on.
    pub placed: Point,
    /// Side that made the placement.
    pub mover: Color,
    /// Cells turned to the mover's color, grouped by direction.
    pub flipped: Vec<Point>,
    /// Side to move after the move (and any pass) resolved.
    pub current_player: Color,
    /// The opponent had no legal move and the turn came back to the mover.
    pub passed: bool,
    pub terminal: bool,
    /// Set only when `terminal`.
    pub winner: Option<Winner>,
}

impl MoveResult {
    /// The side whose turn was skipped, if a pass happened.
    pub fn skipped(&self) -> Option<Color> {
        self.passed.then(|| self.mover.opponent())
    }
}

/// Owns the board and turn state of a single game session.
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: Board,
    current_player: Color,
    status: GameStatus,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// A new game in the starting position with Black to move.
    pub fn new() -> Self {
        GameEngine {
            board: Board::initial(),
            current_player: Color::Black,
            status: GameStatus::InProgress,
        }
    }

    /// An engine over an arbitrary position.
    ///
    /// If `to_move` has no legal cell but the opponent does, the opponent is
    /// put on move (a pass at setup). If neither side can move the engine
    /// starts out terminal. Callers must read [`GameEngine::current_player`]
    /// afterwards rather than assume `to_move` is on move.
    pub fn from_position(board: Board, to_move: Color) -> Self {
        let mut engine = GameEngine {
            board,
            current_player: to_move,
            status: GameStatus::InProgress,
        };
        if !engine.has_any_legal_move(to_move) {
            if engine.has_any_legal_move(to_move.opponent()) {
                engine.current_player = to_move.opponent();
            } else {
                engine.status = GameStatus::Terminal(engine.compute_score().winner());
            }
        }
        engine
    }

    /// Reset to the starting position with Black to move.
    pub fn initialize(&mut self) -> &Self {
        *self = GameEngine::new();
        self
    }

    /// Current board contents.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Whether the game is still running, or its result.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once neither side can move.
    pub fn is_terminal(&self) -> bool {
        matches!(self.status, GameStatus::Terminal(_))
    }

    /// Cells `player` would flip by placing at `pt`. Does not require `pt` to be empty.
    pub fn compute_captures(&self, pt: Point, player: Color) -> Vec<Point> {
        compute_captures(&self.board, pt, player)
    }

    /// `pt` is empty and placing there flips at least one piece.
    pub fn is_legal_move(&self, pt: Point, player: Color) -> bool {
        is_legal_move(&self.board, pt, player)
    }

    /// True if `player` has at least one legal cell anywhere on the board.
    pub fn has_any_legal_move(&self, player: Color) -> bool {
        Point::all().any(|pt| self.is_legal_move(pt, player))
    }

    /// Legal cells for `player` in row-major order.
    pub fn legal_moves(&self, player: Color) -> Vec<Point> {
        Point::all()
            .filter(|&pt| self.is_legal_move(pt, player))
            .collect()
    }

    /// Count the pieces of each color.
    pub fn compute_score(&self) -> Score {
        Score {
            black: self.board.count(Color::Black),
            white: self.board.count(Color::White),
        }
    }

    /// Place a piece for the side to move at `pt`, flip captures, and pass the
    /// turn on, resolving a pass or the end of the game.
    ///
    /// # Errors
    /// - [`EngineError::GameOver`] if the game has already ended
    /// - [`EngineError::Occupied`] if `pt` is not empty
    /// - [`EngineError::NoCaptures`] if the placement would flip nothing
    ///
    /// On error the engine is unchanged.
    pub fn apply_move(&mut self, pt: Point) -> Result<MoveResult, EngineError> {
        if self.is_terminal() {
            return Err(EngineError::GameOver);
        }
        if !self.board.is_empty_at(pt) {
            return Err(EngineError::Occupied(pt));
        }

        let mover = self.current_player;
        let flipped = self.compute_captures(pt, mover);
        if flipped.is_empty() {
            return Err(EngineError::NoCaptures(pt));
        }

        self.board.set(pt, Some(mover));
        for &p in &flipped {
            self.board.set(p, Some(mover));
        }
        self.current_player = mover.opponent();

        let mut passed = false;
        let mut winner = None;
        if !self.has_any_legal_move(self.current_player) {
            passed = true;
            self.current_player = mover;
            if !self.has_any_legal_move(mover) {
                let w = self.compute_score().winner();
                self.status = GameStatus::Terminal(w);
                winner = Some(w);
            }
        }

        Ok(MoveResult {
            placed: pt,
            mover,
            flipped,
            current_player: self.current_player,
            passed,
            terminal: winner.is_some(),
            winner,
        })
    }
}

/// Collect the opponent pieces flanked between `pt` and another `player` piece,
/// walking each of the 8 directions in [`DIRECTIONS`] order.
pub fn compute_captures(board: &Board, pt: Point, player: Color) -> Vec<Point> {
    let opponent = player.opponent();
    let mut captures = Vec::new();

    for (d_row, d_col) in DIRECTIONS {
        let mut path = Vec::new();
        let mut cur = pt.offset(d_row, d_col);
        while let Some(p) = cur {
            if board.get(p) != Some(opponent) {
                break;
            }
            path.push(p);
            cur = p.offset(d_row, d_col);
        }
        // The run only counts when it ends on one of the mover's own pieces.
        if cur.is_some_and(|p| board.get(p) == Some(player)) {
            captures.extend(path);
        }
    }
    captures
}

/// `pt` is empty on `board` and placing there for `player` flips something.
pub fn is_legal_move(board: &Board, pt: Point, player: Color) -> bool {
    board.is_empty_at(pt) && !compute_captures(board, pt, player).is_empty()
}

/// Majority of pieces wins; equal counts are a draw.
pub fn determine_winner(black: usize, white: usize) -> Winner {
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => Winner::Black,
        std::cmp::Ordering::Less => Winner::White,
        std::cmp::Ordering::Equal => Winner::Draw,
    }
}
