use crate::board::{Board, Cell};
use crate::{GridInt, Position};
use Direction::{Down, Left, Right, Up};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn unit_vector(self) -> (GridInt, GridInt) {
        match self {
            Direction::None => (0, 0),
            Left => (-1, 0),
            Right => (1, 0),
            Up => (0, -1),
            Down => (0, 1),
        }
    }
}

/// Ordered snake segments, head first.
#[derive(Clone, Debug)]
pub struct Snake {
    body: Vec<Position>,
    tail: Position,
}

impl Snake {
    /// Builds a straight snake with its head at `head` and the rest of the
    /// body trailing off in the `extends` direction.
    pub fn new(head: Position, length: usize, extends: Direction) -> Self {
        let diff = extends.unit_vector();

        let body: Vec<Position> = (0..length.max(1) as GridInt)
            .map(|i| head.offset((diff.0 * i, diff.1 * i)))
            .collect();
        let tail = body[body.len() - 1];
        Snake { body, tail }
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Where the last segment sat before the most recent advance.
    pub fn tail(&self) -> Position {
        self.tail
    }

    // Never empty: construction guarantees at least the head
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn advance(&mut self, direction: Direction) {
        if direction == Direction::None {
            return;
        }

        // Each segment steps into the cell its leader held before this tick
        let mut prev = self.body[0];
        self.body[0] = prev.offset(direction.unit_vector());

        for segment in self.body.iter_mut().skip(1) {
            std::mem::swap(segment, &mut prev);
        }
        self.tail = prev;
    }

    /// Appends a segment on the cell vacated by the last advance.
    pub fn grow_by_one_at_tail(&mut self) {
        self.body.push(self.tail);
    }

    pub fn paint_onto(&self, board: &mut Board) {
        for (i, pos) in self.body.iter().enumerate() {
            let cell = if i == 0 { Cell::SnakeHead } else { Cell::SnakeBody };
            board.paint(*pos, cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight() -> Snake {
        Snake::new(Position::new(10, 10), 3, Right)
    }

    #[test]
    fn new_snake_extends_from_head() {
        let snake = straight();
        assert_eq!(
            snake.body(),
            &[Position::new(10, 10), Position::new(11, 10), Position::new(12, 10)]
        );
        assert_eq!(snake.head(), Position::new(10, 10));
    }

    #[test]
    fn advance_with_none_keeps_shape() {
        let mut snake = straight();
        let before = snake.body().to_vec();

        snake.advance(Direction::None);

        assert_eq!(snake.body(), before.as_slice());
    }

    #[test]
    fn advance_follows_the_leader() {
        let mut snake = straight();

        snake.advance(Up);

        assert_eq!(
            snake.body(),
            &[Position::new(10, 9), Position::new(10, 10), Position::new(11, 10)]
        );
        assert_eq!(snake.tail(), Position::new(12, 10));
    }

    #[test]
    fn grow_fills_vacated_tail_cell() {
        let mut snake = straight();

        snake.advance(Left);
        snake.grow_by_one_at_tail();

        assert_eq!(
            snake.body(),
            &[
                Position::new(9, 10),
                Position::new(10, 10),
                Position::new(11, 10),
                Position::new(12, 10),
            ]
        );
    }

    #[test]
    fn paint_marks_head_and_body() {
        let mut board = Board::new(20);
        straight().paint_onto(&mut board);

        assert_eq!(board.get(Position::new(10, 10)), Some(Cell::SnakeHead));
        assert_eq!(board.get(Position::new(11, 10)), Some(Cell::SnakeBody));
        assert_eq!(board.get(Position::new(12, 10)), Some(Cell::SnakeBody));
    }

    #[test]
    fn unit_vectors() {
        assert_eq!(Left.unit_vector(), (-1, 0));
        assert_eq!(Right.unit_vector(), (1, 0));
        assert_eq!(Up.unit_vector(), (0, -1));
        assert_eq!(Down.unit_vector(), (0, 1));
        assert_eq!(Direction::None.unit_vector(), (0, 0));
    }
}
