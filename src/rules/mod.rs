//! Pure duel rules: shot resolution, movement validation, match outcome.
//!
//! The resolvers here know nothing about phases or turn order; they take
//! the state they act on explicitly and perform at most one mutation.
//! The session sequences them.

pub mod movement;
pub mod shot;

pub use movement::{resolve_move, MoveError};
pub use shot::{impact_cell, resolve_shot, ShotOutcome};

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of a finished duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// The surviving duellist.
    pub winner: PlayerId,
    /// The turn on which the duel ended.
    pub turn: u32,
}

impl GameOutcome {
    /// Check whether `player` won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wins on turn {}", self.winner, self.turn)
    }
}
