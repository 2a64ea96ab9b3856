use std::thread::sleep;

use tracing::{debug, info};

use crate::board::{Board, Cell};
use crate::collision::{self, Collision};
use crate::config::GameConfig;
use crate::error::{OccupiedCell, Result, SpawnError};
use crate::food::FoodSpawner;
use crate::snake::{Direction, Snake};
use crate::term::{Key, Screen};
use crate::Position;

pub const WELCOME: &str = "Welcome to SNAKE! (Press any key to start)";

const SCORE_COL: u16 = 15;
const CONTROLS: &[&str] = &["Controls:", "   Movements - Arrow keys", "   Quit - q"];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver { won: bool },
}

pub struct SnakeGame {
    config: GameConfig,
    board: Board,
    snake: Snake,
    food: Position,
    spawner: FoodSpawner,
    direction: Direction,
    collision: Collision,
    score: u32,
    tick_counter: u32,
    running: bool,
    phase: Phase,
}

impl SnakeGame {
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_spawner(config, FoodSpawner::new())
    }

    /// Builds the initial state: border, starting snake and first food.
    pub fn with_spawner(config: GameConfig, mut spawner: FoodSpawner) -> Result<Self> {
        config.validate()?;

        let mut board = Board::new(config.grid_size);
        let snake = Snake::new(config.initial_head, config.initial_length, Direction::Right);
        snake.paint_onto(&mut board);

        let food = spawner.spawn(&board)?;
        board.paint(food, Cell::Food);

        info!(grid = config.grid_size, length = snake.len(), ?food, "new game");

        Ok(SnakeGame {
            config,
            board,
            snake,
            food,
            spawner,
            direction: Direction::None,
            collision: Collision::NoCollision,
            score: 0,
            tick_counter: 0,
            running: true,
            phase: Phase::Playing,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn collision(&self) -> Collision {
        self.collision
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Moves the food to `pos`, replacing the current item. The target must
    /// be an empty interior cell (or the current food cell).
    pub fn place_food(&mut self, pos: Position) -> std::result::Result<(), OccupiedCell> {
        let free = pos == self.food || self.board.get(pos) == Some(Cell::Empty);
        if !self.board.is_interior(pos) || !free {
            return Err(OccupiedCell { pos });
        }

        self.board.paint(self.food, Cell::Empty);
        self.food = pos;
        self.board.paint(pos, Cell::Food);
        Ok(())
    }

    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::Up => self.direction = Direction::Up,
            Key::Down => self.direction = Direction::Down,
            Key::Left => self.direction = Direction::Left,
            Key::Right => self.direction = Direction::Right,
            Key::Quit => self.running = false,
            Key::Other => {}
        }
    }

    /// Counts one rendered frame. Every `ticks_per_update` frames the game
    /// state advances by one tick and the outcome is returned.
    pub fn count_frame(&mut self) -> Option<Collision> {
        self.tick_counter += 1;
        if self.tick_counter < self.config.ticks_per_update {
            return None;
        }

        self.tick_counter = 0;
        Some(self.tick())
    }

    /// One gameplay update, regardless of the frame counter.
    pub fn tick(&mut self) -> Collision {
        if self.phase != Phase::Playing {
            return self.collision;
        }

        self.collision = collision::resolve(&self.snake, self.food, self.direction, self.config.grid_size);
        debug!(direction = ?self.direction, outcome = ?self.collision, "tick");

        match self.collision {
            Collision::NoCollision => {
                self.board.clear_interior();
                self.snake.advance(self.direction);
                self.repaint();
                Collision::NoCollision
            }
            Collision::FoodCollision => {
                self.collision = Collision::NoCollision;
                self.score += 1;
                self.board.clear_interior();
                self.snake.advance(self.direction);
                self.snake.grow_by_one_at_tail();
                self.snake.paint_onto(&mut self.board);

                match self.spawner.spawn(&self.board) {
                    Ok(food) => {
                        self.food = food;
                        self.board.paint(food, Cell::Food);
                    }
                    Err(SpawnError::BoardFull) => {
                        info!(score = self.score, "board filled");
                        self.phase = Phase::GameOver { won: true };
                    }
                }
                Collision::FoodCollision
            }
            outcome => {
                info!(score = self.score, ?outcome, "game over");
                self.phase = Phase::GameOver { won: false };
                outcome
            }
        }
    }

    /// One pass of the frame loop: input, render, then the tick check.
    /// A finished game shows its banner, waits for a key and stops running.
    pub fn frame<S: Screen>(&mut self, screen: &mut S) -> Result<()> {
        if let Some(key) = screen.poll_key()? {
            self.handle_key(key);
        }

        self.draw(screen)?;
        self.count_frame();

        if let Phase::GameOver { won } = self.phase {
            self.draw_game_over(screen, won)?;
            screen.wait_key()?;
            self.running = false;
        }

        Ok(())
    }

    /// Runs frames until the game ends or the player quits. Returns the
    /// final score.
    pub fn run<S: Screen>(mut self, screen: &mut S) -> Result<u32> {
        while self.running {
            self.frame(screen)?;
            if self.running {
                sleep(self.config.frame_interval);
            }
        }

        info!(score = self.score, "session over");
        Ok(self.score)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn repaint(&mut self) {
        self.snake.paint_onto(&mut self.board);
        self.board.paint(self.food, Cell::Food);
    }

    fn footer_row(&self) -> u16 {
        self.config.grid_size as u16
    }

    fn draw<S: Screen>(&self, screen: &mut S) -> Result<()> {
        screen.clear()?;

        for (y, row) in self.board.rows().iter().enumerate() {
            screen.print_at(0, y as u16, row)?;
        }

        self.draw_footer(screen)?;

        if self.config.debug_overlay {
            let col = self.footer_row() * 2;
            screen.print_at(col, 2, &format!("dir:{:?}", self.direction))?;
            screen.print_at(col, 3, &format!("Collision: {:?}", self.collision))?;
        }

        screen.flush()?;
        Ok(())
    }

    fn draw_game_over<S: Screen>(&self, screen: &mut S, won: bool) -> Result<()> {
        let banner = if won { "YOU WON!" } else { "GAME OVER!" };

        screen.clear()?;
        screen.print_at(self.footer_row(), self.footer_row() / 2, banner)?;
        self.draw_footer(screen)?;
        screen.flush()?;
        Ok(())
    }

    fn draw_footer<S: Screen>(&self, screen: &mut S) -> Result<()> {
        let row = self.footer_row();
        screen.print_at(SCORE_COL, row, &format!("Score:{}", self.score))?;

        for (i, line) in CONTROLS.iter().enumerate() {
            screen.print_at(0, row + 1 + i as u16, line)?;
        }
        Ok(())
    }
}

/// Shows the welcome splash and blocks until any key is pressed.
pub fn show_welcome<S: Screen>(screen: &mut S) -> Result<()> {
    let (_, height) = screen.size();

    screen.clear()?;
    screen.print_centered(height / 2, WELCOME)?;
    screen.flush()?;

    screen.wait_key()?;
    Ok(())
}
