//! Othello4: the rules engine for Othello/Reversi on a fixed 4x4 board.
//!
//! The engine owns the board and the side to move, answers legality and
//! capture queries, applies moves (placement, flips, passes) and scores the
//! final position. Everything presentation-related sits outside it.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, direction offsets, initial layout
//! - [`board`] - Colors, bounds-checked points, the 4x4 grid
//! - [`engine`] - Game state, move application, pass/end detection, scoring
//! - [`error`] - Engine error types
//! - [`playout`] - Seeded random games for demos and testing
//! - [`protocol`] - Text command front end
//!
//! ## Example
//!
//! ```
//! use othello4::board::{Color, Point};
//! use othello4::engine::GameEngine;
//!
//! let mut engine = GameEngine::new();
//! let result = engine.apply_move(Point::new(1, 0)?)?;
//! assert_eq!(result.flipped, vec![Point::new(1, 1)?]);
//! assert_eq!(engine.current_player(), Color::White);
//! # Ok::<(), othello4::error::EngineError>(())
//! ```

pub mod board;
pub mod constants;
pub mod engine;
pub mod error;
pub mod playout;
pub mod protocol;
