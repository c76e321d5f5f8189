use serde::{Deserialize, Serialize};

use crate::config::Validate;

pub const DEFAULT_BOARD_WIDTH: i32 = 600;
pub const DEFAULT_BOARD_HEIGHT: i32 = 600;
pub const DEFAULT_UNIT_SIZE: i32 = 25;
pub const DEFAULT_INITIAL_BODY_LENGTH: usize = 6;
pub const DEFAULT_BASE_TICK_INTERVAL_MS: u64 = 200;

// Fixed at construction; the game never mutates its settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub board_width: i32,
    pub board_height: i32,
    pub unit_size: i32,
    pub initial_body_length: usize,
    pub base_tick_interval_ms: u64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            unit_size: DEFAULT_UNIT_SIZE,
            initial_body_length: DEFAULT_INITIAL_BODY_LENGTH,
            base_tick_interval_ms: DEFAULT_BASE_TICK_INTERVAL_MS,
        }
    }
}

impl GameSettings {
    pub fn cells_x(&self) -> i32 {
        self.board_width / self.unit_size
    }

    pub fn cells_y(&self) -> i32 {
        self.board_height / self.unit_size
    }

    pub fn cell_count(&self) -> usize {
        (self.cells_x() * self.cells_y()) as usize
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.unit_size < 1 {
            return Err("Unit size must be positive".to_string());
        }
        if self.board_width < self.unit_size * 2 || self.board_height < self.unit_size * 2 {
            return Err("Board must be at least 2x2 cells".to_string());
        }
        if self.board_width % self.unit_size != 0 || self.board_height % self.unit_size != 0 {
            return Err("Board dimensions must be multiples of the unit size".to_string());
        }
        if self.initial_body_length < 1 {
            return Err("Initial body length must be at least 1".to_string());
        }
        if self.initial_body_length > self.cell_count() {
            return Err(format!(
                "Initial body length must not exceed the {} board cells",
                self.cell_count()
            ));
        }
        if self.base_tick_interval_ms < 1 || self.base_tick_interval_ms > 5000 {
            return Err("Base tick interval must be between 1ms and 5000ms".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(GameSettings::default().validate().is_ok());
    }

    #[test]
    fn test_zero_unit_size_rejected() {
        let settings = GameSettings {
            unit_size: 0,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_board_not_multiple_of_unit_rejected() {
        let settings = GameSettings {
            board_width: 610,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_body_longer_than_board_rejected() {
        let settings = GameSettings {
            board_width: 50,
            board_height: 50,
            initial_body_length: 5,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_tick_interval_out_of_range_rejected() {
        for base_tick_interval_ms in [0, 5001] {
            let settings = GameSettings {
                base_tick_interval_ms,
                ..GameSettings::default()
            };
            assert!(settings.validate().is_err());
        }
    }

    #[test]
    fn test_cell_count() {
        assert_eq!(GameSettings::default().cell_count(), 576);
    }
}
