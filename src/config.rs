use std::{
    fmt::{self, Display, Formatter},
    time::Duration,
};

use static_assertions::const_assert;

use crate::{app::palette::Palette, basic::GridDim};

const GRID_WIDTH: i32 = 40;
const GRID_HEIGHT: i32 = 40;
const CELL_SIZE: f32 = 10.;
const MOVE_PERIOD_MILLIS: u64 = 300;
const REWARD: u32 = 100;
const BODY_LEN: usize = 8;
const COLLECTIBLE_COUNT: usize = 3;

const_assert!(GRID_WIDTH > 0 && GRID_HEIGHT > 0);
const_assert!(MOVE_PERIOD_MILLIS > 0);
const_assert!(COLLECTIBLE_COUNT > 0);

/// Build-time game constants
#[derive(Clone, Debug)]
pub struct Config {
    pub grid_dim: GridDim,
    /// Side of a cell in pixels
    pub cell_size: f32,
    /// Period of autonomous movement
    pub move_period: Duration,
    /// Score added per collision with a collectible
    pub reward: u32,
    pub body_len: usize,
    pub collectible_count: usize,
    pub score_font_size: f32,
    pub palette: Palette,
}

impl Config {
    pub const DEFAULT: Self = Self {
        grid_dim: GridDim { x: GRID_WIDTH, y: GRID_HEIGHT },
        cell_size: CELL_SIZE,
        move_period: Duration::from_millis(MOVE_PERIOD_MILLIS),
        reward: REWARD,
        body_len: BODY_LEN,
        collectible_count: COLLECTIBLE_COUNT,
        score_font_size: 14.,
        palette: Palette::DEFAULT,
    };

    /// Size of the drawing surface in pixels
    pub fn window_size(&self) -> (f32, f32) {
        (
            self.grid_dim.x as f32 * self.cell_size,
            self.grid_dim.y as f32 * self.cell_size,
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_dim.x <= 0 || self.grid_dim.y <= 0 {
            return Err(ConfigError::EmptyGrid(self.grid_dim));
        }
        if !(self.cell_size > 0.) {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if self.move_period.is_zero() {
            return Err(ConfigError::ZeroMovePeriod);
        }
        if self.collectible_count == 0 {
            return Err(ConfigError::NoCollectibles);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    EmptyGrid(GridDim),
    CellSize(f32),
    ZeroMovePeriod,
    NoCollectibles,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use ConfigError::*;
        match self {
            EmptyGrid(dim) => write!(f, "grid must have at least one cell, got {}", dim),
            CellSize(size) => write!(f, "cell size must be positive, got {}", size),
            ZeroMovePeriod => write!(f, "movement period must be non-zero"),
            NoCollectibles => write!(f, "at least one collectible is required"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::DEFAULT;
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.window_size(), (400., 400.));
        assert_eq!(config.move_period, Duration::from_millis(300));
    }

    #[test]
    fn test_rejects_degenerate_values() {
        let mut config = Config::DEFAULT;
        config.grid_dim.y = 0;
        assert!(matches!(config.validate(), Err(ConfigError::EmptyGrid(_))));

        let mut config = Config::DEFAULT;
        config.cell_size = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::CellSize(_))));

        let mut config = Config::DEFAULT;
        config.move_period = Duration::ZERO;
        assert_eq!(config.validate(), Err(ConfigError::ZeroMovePeriod));

        let mut config = Config::DEFAULT;
        config.collectible_count = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoCollectibles));
    }
}
