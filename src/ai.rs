//! The scripted opponent.
//!
//! Targeting is blind: a uniformly random cell, whatever the wind is
//! doing. Movement samples uniformly from the destinations that are
//! valid right now (available on the grid and affordable on remaining
//! fuel) rather than blindly retrying random cells, so an opponent with
//! any legal move always takes one, and the whole policy replays under a
//! seeded [`GameRng`].

use crate::core::{GameRng, Grid, PlayerState, Position};

/// Pick a cell to shell: uniform over the whole board.
#[must_use]
pub fn pick_target(rng: &mut GameRng, grid_size: u8) -> Position {
    let row = rng.gen_range(0..i32::from(grid_size)) as u8;
    let col = rng.gen_range(0..i32::from(grid_size)) as u8;
    Position::new(row, col)
}

/// Pick a movement destination: uniform over the valid choices.
///
/// A destination is valid when the cell is still available and the
/// Chebyshev distance from the mover's cell fits in its fuel. The
/// mover's own cell is excluded; `None` means the opponent has nowhere
/// to go and holds position.
#[must_use]
pub fn pick_destination(mover: &PlayerState, grid: &Grid, rng: &mut GameRng) -> Option<Position> {
    let reachable: Vec<Position> = grid
        .available_cells()
        .filter(|&cell| cell != mover.position && mover.position.distance(cell) <= mover.fuel)
        .collect();

    let choice = rng.choose(&reachable).copied();
    log::debug!(
        "opponent movement: {} reachable cells, chose {:?}",
        reachable.len(),
        choice
    );
    choice
}
