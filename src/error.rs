use std::io;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Spawn(#[from] SpawnError),

    #[error("failed to set up logging: {0}")]
    Logging(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size must be at least {min}, got {got}")]
    GridTooSmall { min: i16, got: i16 },

    #[error("initial snake length must be at least {min}, got {got}")]
    SnakeTooShort { min: usize, got: usize },

    #[error("initial snake does not fit inside the board interior")]
    SnakeOutOfBounds,

    #[error("ticks per update must be greater than zero")]
    ZeroTickRate,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpawnError {
    #[error("no empty interior cell left for food")]
    BoardFull,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot place food at {pos:?}: not an empty interior cell")]
pub struct OccupiedCell {
    pub pos: Position,
}

pub type Result<T> = std::result::Result<T, GameError>;
