use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::config::{CONFIG_FILE, Config};
use crate::pad::Fill;

/// Width written into a fresh config.
pub const INIT_COLS: i64 = 10;

/// What `init` did.
#[derive(Debug, PartialEq)]
pub enum InitOutcome {
    Created,
    Overwritten,
    AlreadyExists,
}

/// Writes a default config into `dir`.
pub fn run(dir: &Path, force: bool) -> Result<InitOutcome> {
    let path = dir.join(CONFIG_FILE);
    let existed = path.exists();

    if existed && !force {
        return Ok(InitOutcome::AlreadyExists);
    }

    starter_config().write_file(&path)?;
    info!(path = %path.display(), "wrote default config");

    Ok(if existed {
        InitOutcome::Overwritten
    } else {
        InitOutcome::Created
    })
}

/// The config `init` writes: a usable width and a space fill.
pub fn starter_config() -> Config {
    Config {
        cols: Some(INIT_COLS),
        fill: Fill::default(),
    }
}
