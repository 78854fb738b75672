//! The battle grid: a monotonic cell-availability map.
//!
//! Cells start available and are destroyed by missed shots. Destruction
//! never reverts; a destroyed cell rejects movement for the rest of the
//! duel.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Square availability map, row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: u8,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a fully available grid of `size` × `size` cells.
    #[must_use]
    pub fn new(size: u8) -> Self {
        assert!(size > 0, "Grid size must be at least 1");
        Self {
            size,
            cells: vec![true; usize::from(size) * usize::from(size)],
        }
    }

    /// Edge length of the grid.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the cell at `position` can still be entered.
    #[must_use]
    pub fn is_available(&self, position: Position) -> bool {
        self.cells[self.offset(position)]
    }

    /// Destroy the cell at `position`. Idempotent.
    pub fn destroy(&mut self, position: Position) {
        let offset = self.offset(position);
        self.cells[offset] = false;
    }

    /// Number of cells still available.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Iterate over every available cell.
    pub fn available_cells(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(i, &open)| {
            open.then(|| Position::new((i / usize::from(size)) as u8, (i % usize::from(size)) as u8))
        })
    }

    fn offset(&self, position: Position) -> usize {
        debug_assert!(position.row < self.size && position.col < self.size);
        usize::from(position.row) * usize::from(self.size) + usize::from(position.col)
    }
}
