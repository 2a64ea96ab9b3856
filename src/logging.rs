//! Diagnostics go to a file, never to the terminal the game draws on.
//!
//! Nothing is installed unless `SNAKE_LOG` names a log file. The level filter
//! is read from `RUST_LOG` and defaults to `info`.

use std::fs::File;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{GameError, Result};

pub const LOG_FILE_VAR: &str = "SNAKE_LOG";

/// Installs the global subscriber. Returns `false` when logging is disabled.
pub fn init() -> Result<bool> {
    let Some(path) = std::env::var_os(LOG_FILE_VAR) else {
        return Ok(false);
    };

    let file = File::create(&path).map_err(|err| {
        GameError::Logging(format!("cannot create {}: {err}", path.to_string_lossy()))
    })?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| GameError::Logging(err.to_string()))?;

    Ok(true)
}
