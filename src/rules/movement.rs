//! Movement validation and application.
//!
//! A move either succeeds atomically (position updated, fuel spent) or
//! fails without touching the mover. The two failure causes are distinct
//! values so the UI can tell a cratered destination from an empty tank.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Grid, PlayerState, Position};

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveError {
    /// The destination cell has been destroyed.
    DestinationDestroyed(Position),
    /// The Chebyshev distance to the destination exceeds remaining fuel.
    OutOfFuel {
        /// Fuel the move would cost.
        required: u32,
        /// Fuel the mover actually has.
        available: u32,
    },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::DestinationDestroyed(position) => {
                write!(f, "Cell {position} is destroyed")
            }
            MoveError::OutOfFuel { required, available } => {
                write!(f, "Not enough fuel: need {required}, have {available}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Try to move `mover` to `destination`.
///
/// The cost is the Chebyshev distance from the mover's current cell. On
/// success the position updates, exactly that cost is deducted from fuel
/// and the spent amount is returned. On failure nothing is mutated.
///
/// A zero-distance move to the mover's own cell is legal and free, so a
/// duellist always has at least one legal move.
pub fn resolve_move(
    destination: Position,
    mover: &mut PlayerState,
    grid: &Grid,
) -> Result<u32, MoveError> {
    if !grid.is_available(destination) {
        return Err(MoveError::DestinationDestroyed(destination));
    }

    let cost = mover.position.distance(destination);
    if cost > mover.fuel {
        return Err(MoveError::OutOfFuel {
            required: cost,
            available: mover.fuel,
        });
    }

    mover.position = destination;
    mover.fuel -= cost;
    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    fn mover_at(position: Position, fuel: u32) -> PlayerState {
        let config = GameConfig::default().with_max_fuel(fuel);
        PlayerState::fresh(&config, position)
    }

    #[test]
    fn test_successful_move_spends_distance() {
        let mut mover = mover_at(Position::new(5, 5), 10);
        let grid = Grid::new(10);

        let spent = resolve_move(Position::new(2, 4), &mut mover, &grid).unwrap();

        assert_eq!(spent, 3);
        assert_eq!(mover.position, Position::new(2, 4));
        assert_eq!(mover.fuel, 7);
    }

    #[test]
    fn test_destroyed_destination_rejected() {
        let mut mover = mover_at(Position::new(5, 5), 10);
        let mut grid = Grid::new(10);
        grid.destroy(Position::new(2, 2));

        let err = resolve_move(Position::new(2, 2), &mut mover, &grid).unwrap_err();

        assert_eq!(err, MoveError::DestinationDestroyed(Position::new(2, 2)));
        assert_eq!(mover.position, Position::new(5, 5));
        assert_eq!(mover.fuel, 10);
    }

    #[test]
    fn test_fuel_gate_is_exact() {
        let mut mover = mover_at(Position::new(5, 5), 2);
        let grid = Grid::new(10);

        // Distance 3 with 2 fuel: rejected, nothing spent.
        let err = resolve_move(Position::new(8, 5), &mut mover, &grid).unwrap_err();
        assert_eq!(err, MoveError::OutOfFuel { required: 3, available: 2 });
        assert_eq!(mover.fuel, 2);
        assert_eq!(mover.position, Position::new(5, 5));

        // Distance 2 with 2 fuel: succeeds, tank empty.
        let spent = resolve_move(Position::new(7, 5), &mut mover, &grid).unwrap();
        assert_eq!(spent, 2);
        assert_eq!(mover.fuel, 0);
        assert_eq!(mover.position, Position::new(7, 5));
    }

    #[test]
    fn test_staying_put_is_free() {
        let mut mover = mover_at(Position::new(3, 3), 0);
        let grid = Grid::new(10);

        let spent = resolve_move(Position::new(3, 3), &mut mover, &grid).unwrap();

        assert_eq!(spent, 0);
        assert_eq!(mover.fuel, 0);
    }

    #[test]
    fn test_error_messages_are_distinct() {
        let destroyed = MoveError::DestinationDestroyed(Position::new(2, 2));
        let dry = MoveError::OutOfFuel { required: 3, available: 2 };

        assert_eq!(format!("{destroyed}"), "Cell (2, 2) is destroyed");
        assert_eq!(format!("{dry}"), "Not enough fuel: need 3, have 2");
    }
}
