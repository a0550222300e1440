use crate::board::Point;
use crate::constants::N;

/// Errors reported by the rules engine.
///
/// All of them are local and synchronous: the engine state is left untouched
/// whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("coordinate ({row}, {col}) is outside the {n}x{n} board", n = N)]
    OutOfBounds { row: usize, col: usize },

    #[error("illegal move {0}: cell is not empty")]
    Occupied(Point),

    #[error("illegal move {0}: nothing to capture")]
    NoCaptures(Point),

    #[error("game is over")]
    GameOver,

    #[error("parse error: {0}")]
    Parse(String),
}

impl EngineError {
    /// True for the rejections a caller should answer by re-prompting.
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, EngineError::Occupied(_) | EngineError::NoCaptures(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = EngineError::OutOfBounds { row: 4, col: 0 };
        assert_eq!(err.to_string(), "coordinate (4, 0) is outside the 4x4 board");
    }

    #[test]
    fn test_illegal_move_display() {
        let pt = Point::new(0, 1).unwrap();
        assert_eq!(
            EngineError::NoCaptures(pt).to_string(),
            "illegal move b1: nothing to capture"
        );
        assert_eq!(
            EngineError::Occupied(pt).to_string(),
            "illegal move b1: cell is not empty"
        );
    }

    #[test]
    fn test_is_illegal_move() {
        let pt = Point::new(2, 2).unwrap();
        assert!(EngineError::Occupied(pt).is_illegal_move());
        assert!(EngineError::NoCaptures(pt).is_illegal_move());
        assert!(!EngineError::GameOver.is_illegal_move());
        assert!(!EngineError::OutOfBounds { row: 9, col: 9 }.is_illegal_move());
    }
}
