use anyhow::{Context, Result};
use tracing::info;

use snake::config::GameConfig;
use snake::game::{self, SnakeGame};
use snake::logging;
use snake::term::TermSession;

fn main() -> Result<()> {
    logging::init().context("failed to set up logging")?;

    // Dropping the session restores the terminal on every path below
    let mut screen = TermSession::new().context("failed to set up the terminal")?;

    game::show_welcome(&mut screen)?;

    let game = SnakeGame::new(GameConfig::default()).context("failed to create the game")?;
    let score = game.run(&mut screen)?;

    drop(screen);
    info!(score, "exiting");
    Ok(())
}
