//! Fixed geometry and glyphs for the 4x4 board.
//!
//! The board size is not configurable; every table here assumes `N == 4`.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 4;

/// Total number of cells on the board.
pub const CELLS: usize = N * N;

/// Offsets `(d_row, d_col)` of the 8 compass directions, excluding `(0, 0)`.
/// Order: NW, N, NE, W, E, SW, S, SE
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

// =============================================================================
// Initial Layout
// =============================================================================

/// Starting White pieces (row, col).
pub const INITIAL_WHITE: [(usize, usize); 2] = [(1, 1), (2, 2)];

/// Starting Black pieces (row, col).
pub const INITIAL_BLACK: [(usize, usize); 2] = [(1, 2), (2, 1)];

// =============================================================================
// Cell Glyphs
// =============================================================================

/// Black piece.
pub const GLYPH_BLACK: char = 'X';

/// White piece.
pub const GLYPH_WHITE: char = 'O';

/// Empty cell.
pub const GLYPH_EMPTY: char = '.';
