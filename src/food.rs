use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Cell};
use crate::error::SpawnError;
use crate::Position;

/// Picks food positions by rejection sampling over the board interior.
pub struct FoodSpawner {
    rng: StdRng,
}

impl FoodSpawner {
    pub fn new() -> Self {
        FoodSpawner { rng: StdRng::from_entropy() }
    }

    pub fn with_seed(seed: u64) -> Self {
        FoodSpawner { rng: StdRng::seed_from_u64(seed) }
    }

    /// Returns a uniformly random interior cell that is currently empty on
    /// `board`. The caller is responsible for painting it.
    pub fn spawn(&mut self, board: &Board) -> Result<Position, SpawnError> {
        if board.free_interior_cells() == 0 {
            return Err(SpawnError::BoardFull);
        }

        let max = board.size() - 2;
        loop {
            let pos = Position::new(self.rng.gen_range(1..=max), self.rng.gen_range(1..=max));
            if board.get(pos) == Some(Cell::Empty) {
                return Ok(pos);
            }
        }
    }
}

impl Default for FoodSpawner {
    fn default() -> Self {
        Self::new()
    }
}
