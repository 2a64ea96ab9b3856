pub mod board;
pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod logging;
pub mod snake;
pub mod term;

pub type GridInt = i16;

/// A cell coordinate on the board. `x` grows to the right, `y` grows down.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: GridInt,
    pub y: GridInt,
}

impl Position {
    pub const fn new(x: GridInt, y: GridInt) -> Self {
        Position { x, y }
    }

    pub fn offset(self, (dx, dy): (GridInt, GridInt)) -> Self {
        Position::new(self.x + dx, self.y + dy)
    }
}
