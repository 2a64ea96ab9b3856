#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use snake::term::{Key, Screen};

/// In-memory terminal: scripted keys in, character grid out.
pub struct MemoryScreen {
    width: u16,
    height: u16,
    cells: Vec<Vec<char>>,
    polled: VecDeque<Option<Key>>,
    waited: VecDeque<Key>,
    pub flushes: usize,
    pub waits: usize,
}

impl MemoryScreen {
    pub fn new(width: u16, height: u16) -> Self {
        MemoryScreen {
            width,
            height,
            cells: vec![vec![' '; width as usize]; height as usize],
            polled: VecDeque::new(),
            waited: VecDeque::new(),
            flushes: 0,
            waits: 0,
        }
    }

    /// Queues the result of one `poll_key` call.
    pub fn push_poll(&mut self, key: Option<Key>) {
        self.polled.push_back(key);
    }

    pub fn push_wait(&mut self, key: Key) {
        self.waited.push_back(key);
    }

    pub fn row(&self, row: u16) -> String {
        self.cells[row as usize].iter().collect::<String>().trim_end().to_string()
    }

    pub fn contains(&self, text: &str) -> bool {
        (0..self.height).any(|r| self.row(r).contains(text))
    }
}

impl Screen for MemoryScreen {
    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        Ok(self.polled.pop_front().flatten())
    }

    fn wait_key(&mut self) -> io::Result<Key> {
        self.waits += 1;
        Ok(self.waited.pop_front().unwrap_or(Key::Other))
    }

    fn clear(&mut self) -> io::Result<()> {
        for row in &mut self.cells {
            row.iter_mut().for_each(|c| *c = ' ');
        }
        Ok(())
    }

    fn print_at(&mut self, col: u16, row: u16, text: &str) -> io::Result<()> {
        let Some(line) = self.cells.get_mut(row as usize) else {
            return Ok(());
        };
        for (i, ch) in text.chars().enumerate() {
            if let Some(cell) = line.get_mut(col as usize + i) {
                *cell = ch;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}
