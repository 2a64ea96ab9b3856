use std::io::{self, Stdout, Write, stdout};
use std::time::Duration;

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use tracing::warn;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Quit,
    Other,
}

impl From<&KeyEvent> for Key {
    fn from(ev: &KeyEvent) -> Self {
        match ev {
            KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL, .. } => Key::Quit,
            KeyEvent { code, .. } => match code {
                KeyCode::Char('w') | KeyCode::Up => Key::Up,
                KeyCode::Char('a') | KeyCode::Left => Key::Left,
                KeyCode::Char('s') | KeyCode::Down => Key::Down,
                KeyCode::Char('d') | KeyCode::Right => Key::Right,
                KeyCode::Char('q') => Key::Quit,
                _ => Key::Other,
            },
        }
    }
}

/// What the game needs from a terminal: key input and positioned text.
pub trait Screen {
    /// Returns the next pending key without blocking, if there is one.
    fn poll_key(&mut self) -> io::Result<Option<Key>>;

    fn wait_key(&mut self) -> io::Result<Key>;

    fn clear(&mut self) -> io::Result<()>;

    fn print_at(&mut self, col: u16, row: u16, text: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;

    /// Terminal size as (columns, rows).
    fn size(&self) -> (u16, u16);

    fn print_centered(&mut self, row: u16, text: &str) -> io::Result<()> {
        let (width, _) = self.size();
        let col = width.saturating_sub(text.chars().count() as u16) / 2;
        self.print_at(col, row, text)
    }
}

/// Owns the real terminal for the length of a game session. Raw mode, the
/// alternate screen and the hidden cursor are undone on drop.
pub struct TermSession {
    stdout: Stdout,
    width: u16,
    height: u16,
}

impl TermSession {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let mut session = TermSession { stdout: stdout(), width, height };

        execute!(session.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(session.stdout, cursor::Hide, cursor::DisableBlinking)?;
        Ok(session)
    }

    fn restore(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
    }
}

impl Screen for TermSession {
    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(ev) = event::read()? {
                if ev.kind == KeyEventKind::Press {
                    return Ok(Some(Key::from(&ev)));
                }
            }
        }

        Ok(None)
    }

    fn wait_key(&mut self) -> io::Result<Key> {
        loop {
            if let Event::Key(ev) = event::read()? {
                if ev.kind == KeyEventKind::Press {
                    return Ok(Key::from(&ev));
                }
            }
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All))
    }

    fn print_at(&mut self, col: u16, row: u16, text: &str) -> io::Result<()> {
        queue!(self.stdout, cursor::MoveTo(col, row), style::Print(text))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }

    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}

impl Drop for TermSession {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(%err, "failed to restore the terminal");
        }
    }
}
