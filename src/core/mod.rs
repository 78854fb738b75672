//! Core duel types: positions, players, grid, wind, RNG, configuration.
//!
//! These are the building blocks the session orchestrates. None of them
//! carries turn logic of its own.

pub mod config;
pub mod grid;
pub mod player;
pub mod position;
pub mod rng;
pub mod wind;

pub use config::GameConfig;
pub use grid::Grid;
pub use player::{PlayerId, PlayerState};
pub use position::Position;
pub use rng::GameRng;
pub use wind::{Direction, Wind};
