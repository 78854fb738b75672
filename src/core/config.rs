//! Duel configuration: grid geometry, resource maxima, starting layout.
//!
//! Defaults reproduce the classic setup: a 10×10 board, 10 hit points,
//! 30 rounds, 100 fuel, wind capped at strength 4, player one in the
//! south-east corner facing player two in the north-west corner under a
//! calm northerly.

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::wind::{Direction, Wind};

/// Complete configuration for one duel.
///
/// Build with [`GameConfig::default`] and customize through the `with_*`
/// methods:
///
/// ```
/// use cannon_duel::core::{GameConfig, Position};
///
/// let config = GameConfig::default()
///     .with_max_fuel(40)
///     .with_starting_positions(Position::new(8, 8), Position::new(1, 1));
/// assert_eq!(config.max_fuel, 40);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Edge length of the square grid.
    pub grid_size: u8,
    /// Hit points each duellist starts with.
    pub max_hp: u32,
    /// Rounds of ammunition each duellist starts with.
    pub max_ammo: u32,
    /// Movement fuel each duellist starts with.
    pub max_fuel: u32,
    /// Upper bound for wind strength.
    pub max_wind_strength: u8,
    /// Starting cells for player one and player two.
    pub starting_positions: [Position; 2],
    /// Wind at the start of the duel.
    pub initial_wind: Wind,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            max_hp: 10,
            max_ammo: 30,
            max_fuel: 100,
            max_wind_strength: 4,
            starting_positions: [Position::new(9, 9), Position::new(0, 0)],
            initial_wind: Wind::new(Direction::North, 0),
        }
    }
}

impl GameConfig {
    /// Set the grid edge length.
    #[must_use]
    pub fn with_grid_size(mut self, size: u8) -> Self {
        assert!(size > 0, "Grid size must be at least 1");
        self.grid_size = size;
        self
    }

    /// Set the starting hit points.
    #[must_use]
    pub fn with_max_hp(mut self, hp: u32) -> Self {
        assert!(hp > 0, "Duellists need at least 1 hit point");
        self.max_hp = hp;
        self
    }

    /// Set the starting ammunition.
    #[must_use]
    pub fn with_max_ammo(mut self, ammo: u32) -> Self {
        self.max_ammo = ammo;
        self
    }

    /// Set the starting fuel.
    #[must_use]
    pub fn with_max_fuel(mut self, fuel: u32) -> Self {
        self.max_fuel = fuel;
        self
    }

    /// Set the wind strength cap.
    #[must_use]
    pub fn with_max_wind_strength(mut self, strength: u8) -> Self {
        self.max_wind_strength = strength;
        self
    }

    /// Set both starting cells.
    #[must_use]
    pub fn with_starting_positions(mut self, one: Position, two: Position) -> Self {
        self.starting_positions = [one, two];
        self
    }

    /// Set the opening wind.
    #[must_use]
    pub fn with_initial_wind(mut self, wind: Wind) -> Self {
        self.initial_wind = wind;
        self
    }

    /// Check internal consistency.
    ///
    /// Starting cells must lie on the grid and the opening wind must
    /// respect the strength cap. Called by the session at construction.
    pub(crate) fn assert_valid(&self) {
        for position in self.starting_positions {
            assert!(
                position.row < self.grid_size && position.col < self.grid_size,
                "Starting position {position} is outside the {0}x{0} grid",
                self.grid_size
            );
        }
        assert!(
            self.initial_wind.strength <= self.max_wind_strength,
            "Initial wind exceeds the strength cap"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_setup() {
        let config = GameConfig::default();

        assert_eq!(config.grid_size, 10);
        assert_eq!(config.max_hp, 10);
        assert_eq!(config.max_ammo, 30);
        assert_eq!(config.max_fuel, 100);
        assert_eq!(config.max_wind_strength, 4);
        assert_eq!(config.starting_positions, [Position::new(9, 9), Position::new(0, 0)]);
        assert_eq!(config.initial_wind, Wind::new(Direction::North, 0));
        config.assert_valid();
    }

    #[test]
    fn test_builder_chain() {
        let config = GameConfig::default()
            .with_grid_size(6)
            .with_max_hp(3)
            .with_max_ammo(5)
            .with_max_fuel(12)
            .with_max_wind_strength(2)
            .with_starting_positions(Position::new(5, 5), Position::new(0, 0))
            .with_initial_wind(Wind::new(Direction::East, 1));

        assert_eq!(config.grid_size, 6);
        assert_eq!(config.max_hp, 3);
        assert_eq!(config.max_wind_strength, 2);
        config.assert_valid();
    }

    #[test]
    #[should_panic(expected = "outside the 5x5 grid")]
    fn test_starting_position_outside_grid() {
        GameConfig::default()
            .with_grid_size(5)
            .with_starting_positions(Position::new(9, 9), Position::new(0, 0))
            .assert_valid();
    }

    #[test]
    #[should_panic(expected = "Grid size must be at least 1")]
    fn test_zero_grid_rejected() {
        let _ = GameConfig::default().with_grid_size(0);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_max_fuel(7);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
