use crate::snake::{Direction, Snake};
use crate::{GridInt, Position};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Collision {
    #[default]
    NoCollision,
    FoodCollision,
    BodyCollision,
    BorderCollision,
}

/// Classifies the move the snake is about to make, without making it.
///
/// Checks run in a fixed order: own body (pre-move segments, head excluded),
/// then the border ring, then the food.
pub fn resolve(snake: &Snake, food: Position, direction: Direction, grid_size: GridInt) -> Collision {
    let next_head = snake.head().offset(direction.unit_vector());

    if snake.body()[1..].contains(&next_head) {
        return Collision::BodyCollision;
    }

    if next_head.x <= 0 || next_head.y <= 0 || next_head.x >= grid_size - 1 || next_head.y >= grid_size - 1 {
        return Collision::BorderCollision;
    }

    if next_head == food {
        Collision::FoodCollision
    } else {
        Collision::NoCollision
    }
}
