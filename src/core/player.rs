//! Player identity and per-player combat state.
//!
//! ## PlayerId
//!
//! The duel has exactly two seats: `One` (the human) and `Two` (the
//! scripted opponent). `opponent()` maps each seat to the other.
//!
//! ## PlayerState
//!
//! Hit points, ammunition, fuel and position for one duellist. Owned by
//! the session and mutated in place by the resolvers. All decrements
//! saturate at zero; none of the resources can go negative.

use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::position::Position;

/// One of the two duellists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// The human seat.
    One,
    /// The scripted opponent seat.
    Two,
}

impl PlayerId {
    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Index into per-player storage (0 for `One`, 1 for `Two`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// Both seats, in storage order.
    #[must_use]
    pub const fn both() -> [PlayerId; 2] {
        [PlayerId::One, PlayerId::Two]
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::One => write!(f, "Player 1"),
            PlayerId::Two => write!(f, "Player 2"),
        }
    }
}

/// Combat state for a single duellist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Remaining hit points.
    pub hp: u32,
    /// Remaining rounds of ammunition.
    pub ammo: u32,
    /// Remaining movement fuel.
    pub fuel: u32,
    /// Current cell.
    pub position: Position,
}

impl PlayerState {
    /// A duellist at full resources, standing on `position`.
    #[must_use]
    pub fn fresh(config: &GameConfig, position: Position) -> Self {
        Self {
            hp: config.max_hp,
            ammo: config.max_ammo,
            fuel: config.max_fuel,
            position,
        }
    }

    /// Whether this duellist still has hit points.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Reduce hit points, saturating at zero.
    pub fn apply_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Consume one round of ammunition.
    ///
    /// Returns `false` (and spends nothing) when the magazine is empty.
    pub fn spend_round(&mut self) -> bool {
        if self.ammo == 0 {
            return false;
        }
        self.ammo -= 1;
        true
    }
}
