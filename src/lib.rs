//! # cannon-duel
//!
//! A two-player turn-based artillery duel on a wind-swept grid.
//!
//! Each duellist holds a cell on a 10×10 board and alternates between
//! firing at the opponent (rounds drift with the wind before they land)
//! and repositioning (bounded by fuel, costed by Chebyshev distance).
//! Missed rounds permanently crater the board.
//!
//! ## Design Principles
//!
//! 1. **Session-Owned State**: A [`GameSession`] owns both player states,
//!    the grid, the wind and the RNG. Presentation layers keep read-only
//!    accessors and drive the game through a single entry point,
//!    [`GameSession::advance`].
//!
//! 2. **Deterministic**: All randomness (wind drift, the scripted
//!    opponent) flows through a seeded [`GameRng`]. The same seed and the
//!    same inputs replay the same duel.
//!
//! 3. **Failures Are Values**: Rejected moves, empty magazines and
//!    missing selections surface as typed events in a [`TurnReport`],
//!    never as panics.
//!
//! ## Modules
//!
//! - `core`: positions, players, grid, wind, RNG, configuration
//! - `rules`: shot and movement resolution, match outcome
//! - `session`: the phase machine driving a full duel
//! - `ai`: the scripted opponent

pub mod ai;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Direction, GameConfig, GameRng, Grid, PlayerId, PlayerState, Position, Wind,
};

pub use crate::rules::{impact_cell, resolve_move, resolve_shot, GameOutcome, MoveError, ShotOutcome};

pub use crate::session::{
    Action, ActionRecord, EventList, GameSession, Phase, TurnEvent, TurnReport,
};
