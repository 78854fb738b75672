//! Grid coordinates and the Chebyshev movement metric.

use serde::{Deserialize, Serialize};

/// A cell on the battle grid.
///
/// Rows grow southward, columns grow eastward; `(0, 0)` is the
/// north-west corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index, 0-based from the north edge.
    pub row: u8,
    /// Column index, 0-based from the west edge.
    pub col: u8,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Chebyshev distance to `other`.
    ///
    /// This is the movement cost between two cells: the number of king
    /// steps separating them. Symmetric, and zero exactly when the cells
    /// coincide.
    #[must_use]
    pub fn distance(self, other: Position) -> u32 {
        let rows = (i32::from(self.row) - i32::from(other.row)).unsigned_abs();
        let cols = (i32::from(self.col) - i32::from(other.col)).unsigned_abs();
        rows.max(cols)
    }

    /// Build a position from signed coordinates, clamping both axes into
    /// `[0, size - 1]`.
    ///
    /// Used after wind deflection, which may push a target off the board.
    #[must_use]
    pub fn clamped(row: i32, col: i32, size: u8) -> Self {
        let max = i32::from(size) - 1;
        Self {
            row: row.clamp(0, max) as u8,
            col: col.clamp(0, max) as u8,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
