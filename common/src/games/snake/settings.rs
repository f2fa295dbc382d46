use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::grid::Grid;

pub const MIN_SPEED_MS: u64 = 20;
pub const MAX_SPEED_MS: u64 = 5000;

/// Startup constants for one game, as stored in the YAML config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub game_width: i32,
    pub game_height: i32,
    pub space_size: i32,
    pub speed_ms: u64,
    pub body_parts: usize,
    pub snake_color: String,
    pub food_color: String,
    pub background_color: String,
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.space_size < 1 {
            return Err("space_size must be at least 1".to_string());
        }
        if self.game_width < self.space_size || self.game_height < self.space_size {
            return Err("game_width and game_height must fit at least one cell".to_string());
        }
        if self.game_width % self.space_size != 0 || self.game_height % self.space_size != 0 {
            return Err(format!(
                "game_width and game_height must be multiples of space_size ({})",
                self.space_size
            ));
        }
        if !(MIN_SPEED_MS..=MAX_SPEED_MS).contains(&self.speed_ms) {
            return Err(format!(
                "speed_ms must be between {} and {}",
                MIN_SPEED_MS, MAX_SPEED_MS
            ));
        }
        if self.body_parts < 1 {
            return Err("body_parts must be at least 1".to_string());
        }
        if self.body_parts >= self.grid().cell_count() {
            return Err("body_parts must leave room on the grid for food".to_string());
        }
        Rgb::parse_hex(&self.snake_color).map_err(|e| format!("snake_color: {}", e))?;
        Rgb::parse_hex(&self.food_color).map_err(|e| format!("food_color: {}", e))?;
        Rgb::parse_hex(&self.background_color)
            .map_err(|e| format!("background_color: {}", e))?;
        Ok(())
    }
}

impl GameSettings {
    pub fn grid(&self) -> Grid {
        Grid::new(self.game_width, self.game_height, self.space_size)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }

    pub fn palette(&self) -> Result<Palette, String> {
        Ok(Palette {
            snake: Rgb::parse_hex(&self.snake_color)?,
            food: Rgb::parse_hex(&self.food_color)?,
            background: Rgb::parse_hex(&self.background_color)?,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Accepts `#RRGGBB`.
    pub fn parse_hex(value: &str) -> Result<Rgb, String> {
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| format!("'{}' must start with '#'", value))?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("'{}' is not a #RRGGBB color", value));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| format!("'{}': {}", value, e))
        };
        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub snake: Rgb,
    pub food: Rgb,
    pub background: Rgb,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = GameSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.grid().columns(), 28);
        assert_eq!(settings.grid().rows(), 28);
        assert_eq!(settings.tick_interval(), Duration::from_millis(200));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let base = GameSettings::default();

        let zero_cell = GameSettings { space_size: 0, ..base.clone() };
        assert!(zero_cell.validate().is_err());

        let ragged_width = GameSettings { game_width: 710, ..base.clone() };
        assert!(ragged_width.validate().is_err());

        let ragged_height = GameSettings { game_height: 690, ..base.clone() };
        assert!(ragged_height.validate().is_err());

        let too_fast = GameSettings { speed_ms: 5, ..base.clone() };
        assert!(too_fast.validate().is_err());

        let too_long = GameSettings {
            game_width: 50,
            game_height: 50,
            body_parts: 4,
            ..base.clone()
        };
        assert!(too_long.validate().is_err());

        let bad_color = GameSettings { food_color: "red".to_string(), ..base };
        assert!(bad_color.validate().is_err());
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgb::parse_hex("#00FF00"), Ok(Rgb { r: 0, g: 255, b: 0 }));
        assert_eq!(Rgb::parse_hex("#1e90ff"), Ok(Rgb { r: 30, g: 144, b: 255 }));
        assert!(Rgb::parse_hex("00FF00").is_err());
        assert!(Rgb::parse_hex("#00FF0").is_err());
        assert!(Rgb::parse_hex("#GGFF00").is_err());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let settings: GameSettings = serde_yaml_ng::from_str("speed_ms: 120\n").unwrap();
        assert_eq!(settings.speed_ms, 120);
        assert_eq!(settings.space_size, 25);
        assert_eq!(settings.snake_color, "#00FF00");
    }
}
