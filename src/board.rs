use crate::{GridInt, Position};

use tracing::warn;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Border,
    Food,
    SnakeHead,
    SnakeBody,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Border => '*',
            Cell::Food => 'O',
            Cell::SnakeHead => 'X',
            Cell::SnakeBody => '#',
        }
    }
}

/// Square grid of cell tags with a fixed border ring.
///
/// The interior is rebuilt from scratch every tick: [`Board::clear_interior`]
/// wipes it and the controller repaints the snake and the food on top.
#[derive(Clone, Debug)]
pub struct Board {
    size: GridInt,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(size: GridInt) -> Self {
        let side = size.max(0) as usize;
        let mut board = Board { size, cells: vec![Cell::Empty; side * side] };
        board.generate_border();
        board
    }

    pub fn size(&self) -> GridInt {
        self.size
    }

    pub fn generate_border(&mut self) {
        for y in 0..self.size {
            for x in 0..self.size {
                let pos = Position::new(x, y);
                let cell = if self.is_interior(pos) { Cell::Empty } else { Cell::Border };
                self.paint(pos, cell);
            }
        }
    }

    pub fn clear_interior(&mut self) {
        for y in 1..self.size - 1 {
            for x in 1..self.size - 1 {
                self.paint(Position::new(x, y), Cell::Empty);
            }
        }
    }

    /// Overwrites a single cell. Positions outside the grid are dropped.
    pub fn paint(&mut self, pos: Position, cell: Cell) {
        match self.index(pos) {
            Some(i) => self.cells[i] = cell,
            None => warn!(x = pos.x, y = pos.y, ?cell, "ignoring paint outside the board"),
        }
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    pub fn is_interior(&self, pos: Position) -> bool {
        pos.x > 0 && pos.y > 0 && pos.x < self.size - 1 && pos.y < self.size - 1
    }

    pub fn free_interior_cells(&self) -> usize {
        (1..self.size - 1)
            .flat_map(|y| (1..self.size - 1).map(move |x| Position::new(x, y)))
            .filter(|pos| self.get(*pos) == Some(Cell::Empty))
            .count()
    }

    /// One string per grid row, every glyph followed by a space.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size.max(1) as usize)
            .map(|row| row.iter().flat_map(|cell| [cell.glyph(), ' ']).collect())
            .collect()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn index(&self, pos: Position) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.size || pos.y >= self.size {
            return None;
        }

        Some(pos.y as usize * self.size as usize + pos.x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_has_border_ring_and_empty_interior() {
        let board = Board::new(5);

        for y in 0..5 {
            for x in 0..5 {
                let pos = Position::new(x, y);
                let expected = if board.is_interior(pos) { Cell::Empty } else { Cell::Border };
                assert_eq!(board.get(pos), Some(expected), "at {:?}", pos);
            }
        }
        assert_eq!(board.free_interior_cells(), 9);
    }

    #[test]
    fn clear_interior_keeps_border() {
        let mut board = Board::new(6);
        board.paint(Position::new(2, 2), Cell::SnakeHead);
        board.paint(Position::new(3, 2), Cell::Food);

        board.clear_interior();

        assert_eq!(board.get(Position::new(2, 2)), Some(Cell::Empty));
        assert_eq!(board.get(Position::new(3, 2)), Some(Cell::Empty));
        assert_eq!(board.get(Position::new(0, 2)), Some(Cell::Border));
        assert_eq!(board.get(Position::new(5, 5)), Some(Cell::Border));
    }

    #[test]
    fn paint_out_of_bounds_is_ignored() {
        let mut board = Board::new(4);
        let before = board.rows();

        board.paint(Position::new(-1, 0), Cell::Food);
        board.paint(Position::new(4, 1), Cell::Food);

        assert_eq!(board.rows(), before);
        assert_eq!(board.get(Position::new(4, 1)), None);
    }

    #[test]
    fn rows_use_glyph_and_space_per_cell() {
        let mut board = Board::new(4);
        board.paint(Position::new(1, 1), Cell::SnakeHead);
        board.paint(Position::new(2, 1), Cell::SnakeBody);
        board.paint(Position::new(1, 2), Cell::Food);

        assert_eq!(board.rows(), vec!["* * * * ", "* X # * ", "* O   * ", "* * * * "]);
    }
}
