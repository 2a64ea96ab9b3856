use std::time::Duration;

use crate::error::ConfigError;
use crate::{GridInt, Position};

pub const MIN_GRID_SIZE: GridInt = 5;
pub const MIN_SNAKE_LENGTH: usize = 3;

const GRID_SIZE: GridInt = 20;
const INITIAL_HEAD: Position = Position::new(10, 10);
const INITIAL_SNAKE_LENGTH: usize = 3;
const TICKS_PER_UPDATE: u32 = 30;
const FRAME_INTERVAL_MS: u64 = 32;

/// Tunables for one game session. The initial snake body trails to the
/// right of `initial_head`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_size: GridInt,
    pub initial_head: Position,
    pub initial_length: usize,
    /// Frames rendered between two gameplay ticks.
    pub ticks_per_update: u32,
    pub frame_interval: Duration,
    pub debug_overlay: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_size: GRID_SIZE,
            initial_head: INITIAL_HEAD,
            initial_length: INITIAL_SNAKE_LENGTH,
            ticks_per_update: TICKS_PER_UPDATE,
            frame_interval: Duration::from_millis(FRAME_INTERVAL_MS),
            debug_overlay: cfg!(debug_assertions),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall { min: MIN_GRID_SIZE, got: self.grid_size });
        }
        if self.initial_length < MIN_SNAKE_LENGTH {
            return Err(ConfigError::SnakeTooShort {
                min: MIN_SNAKE_LENGTH,
                got: self.initial_length,
            });
        }
        if self.ticks_per_update == 0 {
            return Err(ConfigError::ZeroTickRate);
        }

        let head = self.initial_head;
        let last_x = head.x as i64 + self.initial_length as i64 - 1;
        let inner_max = self.grid_size as i64 - 2;
        if head.x < 1 || head.y < 1 || head.y as i64 > inner_max || last_x > inner_max {
            return Err(ConfigError::SnakeOutOfBounds);
        }

        Ok(())
    }
}
