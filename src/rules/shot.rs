//! Shot resolution: wind deflection, then damage or demolition.
//!
//! A shot never misses the board. The aimed cell is displaced by the
//! wind, clamped back inside the grid, and resolved in priority order:
//! the shooter's own cell first (self-hit), then the victim's cell, and
//! otherwise the impact cell is destroyed.

use serde::{Deserialize, Serialize};

use crate::core::{Grid, PlayerState, Position, Wind};

/// Where a shot landed and what it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    /// The wind carried the round back onto the shooter.
    ShooterHit {
        /// The resolved impact cell (the shooter's position).
        impact: Position,
    },
    /// The round landed on the victim.
    VictimHit {
        /// The resolved impact cell (the victim's position).
        impact: Position,
    },
    /// The round landed on open ground; that cell is now destroyed.
    Miss {
        /// The destroyed cell.
        impact: Position,
    },
}

impl ShotOutcome {
    /// The cell the round actually struck.
    #[must_use]
    pub const fn impact(self) -> Position {
        match self {
            ShotOutcome::ShooterHit { impact }
            | ShotOutcome::VictimHit { impact }
            | ShotOutcome::Miss { impact } => impact,
        }
    }
}

/// Deflect `target` by the current wind and clamp into the grid.
#[must_use]
pub fn impact_cell(target: Position, wind: Wind, grid_size: u8) -> Position {
    let (row_drift, col_drift) = wind.displacement();
    Position::clamped(
        i32::from(target.row) + row_drift,
        i32::from(target.col) + col_drift,
        grid_size,
    )
}

/// Resolve one shot from `shooter` aimed at `target`.
///
/// Applies exactly one mutation: 1 damage to the shooter on a self-hit,
/// 1 damage to the victim on a hit, or the destruction of the impact
/// cell on a miss. Damage saturates at zero hit points.
pub fn resolve_shot(
    target: Position,
    wind: Wind,
    shooter: &mut PlayerState,
    victim: &mut PlayerState,
    grid: &mut Grid,
) -> ShotOutcome {
    let impact = impact_cell(target, wind, grid.size());

    if impact == shooter.position {
        shooter.apply_damage(1);
        ShotOutcome::ShooterHit { impact }
    } else if impact == victim.position {
        victim.apply_damage(1);
        ShotOutcome::VictimHit { impact }
    } else {
        grid.destroy(impact);
        ShotOutcome::Miss { impact }
    }
}
