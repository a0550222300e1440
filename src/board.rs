//! The 4x4 grid: piece colors, bounds-checked coordinates and board storage.

use std::fmt;
use std::str::FromStr;

use crate::constants::{
    CELLS, GLYPH_BLACK, GLYPH_EMPTY, GLYPH_WHITE, INITIAL_BLACK, INITIAL_WHITE, N,
};
use crate::error::EngineError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other side.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Character used for this color in board text.
    pub fn glyph(self) -> char {
        match self {
            Color::Black => GLYPH_BLACK,
            Color::White => GLYPH_WHITE,
        }
    }

    /// Color name for display.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::White => "White",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A cell coordinate, guaranteed to lie on the board.
///
/// The only way to build one is [`Point::new`] (or parsing), which rejects
/// anything outside `[0, N) x [0, N)` instead of clamping it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    row: usize,
    col: usize,
}

impl Point {
    /// Create a point, rejecting coordinates off the board.
    pub fn new(row: usize, col: usize) -> Result<Self, EngineError> {
        if row >= N || col >= N {
            return Err(EngineError::OutOfBounds { row, col });
        }
        Ok(Point { row, col })
    }

    /// Row index, 0 at the top.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index, 0 at the left.
    pub fn col(self) -> usize {
        self.col
    }

    fn idx(self) -> usize {
        self.row * N + self.col
    }

    /// The neighbouring point one step along `(d_row, d_col)`, or `None` past the edge.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Point> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Point::new(row, col).ok()
    }

    /// All points in row-major order.
    pub fn all() -> impl Iterator<Item = Point> {
        (0..CELLS).map(|i| Point { row: i / N, col: i % N })
    }
}

/// Algebraic form: column letter `a`.. then row number `1`.. (`(1, 0)` is `a2`).
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'a' + self.col as u8) as char;
        write!(f, "{col}{}", self.row + 1)
    }
}

impl FromStr for Point {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.trim().as_bytes();
        let bad = || EngineError::Parse(format!("invalid coordinate '{s}'"));
        if bytes.len() != 2 {
            return Err(bad());
        }
        let col_char = bytes[0].to_ascii_lowercase();
        if !col_char.is_ascii_lowercase() || !bytes[1].is_ascii_digit() || bytes[1] == b'0' {
            return Err(bad());
        }
        let col = (col_char - b'a') as usize;
        let row = (bytes[1] - b'1') as usize;
        Point::new(row, col)
    }
}

/// A 4x4 grid where each cell is empty (`None`) or holds a piece.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Color>; CELLS],
}

impl Board {
    /// A board with no pieces at all.
    pub fn empty() -> Self {
        Board { cells: [None; CELLS] }
    }

    /// The fixed starting layout: the centre 2x2 block, White on the main diagonal.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for (row, col) in INITIAL_WHITE {
            board.cells[row * N + col] = Some(Color::White);
        }
        for (row, col) in INITIAL_BLACK {
            board.cells[row * N + col] = Some(Color::Black);
        }
        board
    }

    /// Piece at `pt`, if any.
    pub fn get(&self, pt: Point) -> Option<Color> {
        self.cells[pt.idx()]
    }

    /// Put a piece on `pt`, or clear it with `None`.
    pub fn set(&mut self, pt: Point, cell: Option<Color>) {
        self.cells[pt.idx()] = cell;
    }

    pub fn is_empty_at(&self, pt: Point) -> bool {
        self.get(pt).is_none()
    }

    /// Number of pieces of `color`.
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }

    /// Number of empty cells.
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Copy of this board with every piece's color inverted.
    pub fn swapped(&self) -> Board {
        let mut cells = self.cells;
        for c in &mut cells {
            *c = c.map(Color::opponent);
        }
        Board { cells }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            for col in 0..N {
                let ch = match self.cells[row * N + col] {
                    Some(color) => color.glyph(),
                    None => GLYPH_EMPTY,
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses `N` non-blank lines of `N` glyphs each (`X`, `O`, `.`); spaces are ignored.
impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if rows.len() != N {
            return Err(EngineError::Parse(format!(
                "expected {N} rows, got {}",
                rows.len()
            )));
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let glyphs: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if glyphs.len() != N {
                return Err(EngineError::Parse(format!(
                    "row {} has {} cells, expected {N}",
                    row + 1,
                    glyphs.len()
                )));
            }
            for (col, ch) in glyphs.into_iter().enumerate() {
                let cell = match ch.to_ascii_uppercase() {
                    GLYPH_BLACK => Some(Color::Black),
                    GLYPH_WHITE => Some(Color::White),
                    GLYPH_EMPTY => None,
                    other => {
                        return Err(EngineError::Parse(format!("unknown cell glyph '{other}'")));
                    }
                };
                board.cells[row * N + col] = cell;
            }
        }
        Ok(board)
    }
}
