use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::pad::{Fill, width};

pub const CONFIG_FILE: &str = ".leftpad.toml";

/// Defaults read from `.leftpad.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cols: Option<i64>,
    #[serde(default)]
    pub fill: Fill,
}

/// Width and fill after command-line flags have been applied over the config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadOptions {
    pub cols: usize,
    pub fill: Fill,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Loads `explicit` if given, otherwise the nearest `.leftpad.toml` above
    /// the current directory, otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config from --config");
            return Self::from_file(path);
        }

        match find_config_file() {
            Some(path) => {
                debug!(path = %path.display(), "loading discovered config");
                Self::from_file(&path)
            }
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn resolve(&self, cols: Option<i64>, fill: Option<Fill>) -> Result<PadOptions> {
        let cols = cols.or(self.cols).ok_or_else(|| {
            anyhow!("No width given. Pass --cols or set `cols` in {CONFIG_FILE}.")
        })?;

        Ok(PadOptions {
            cols: width(cols),
            fill: fill.unwrap_or(self.fill),
        })
    }

    pub fn write_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string(self).context("Failed to serialize config")?;
        atomic_write(path, content.as_bytes())
    }
}

/// Walks up from `start` looking for a `.leftpad.toml`.
pub fn find_config_file_from(start: &Path) -> Option<PathBuf> {
    let mut dir = start;

    loop {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }

        dir = dir.parent()?;
    }
}

pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Atomically write content to a file using a temporary file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let temp = path.with_extension("toml.tmp");
    let written = write_locked(&temp, content).and_then(|()| {
        fs::rename(&temp, path).with_context(|| format!("Failed to rename to {}", path.display()))
    });

    if written.is_err() {
        // The temp file may not exist if creating it failed.
        let _ = fs::remove_file(&temp);
    }
    written
}

fn write_locked(temp: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(temp)
        .with_context(|| format!("Failed to create temporary file: {}", temp.display()))?;
    file.lock_exclusive().context("Failed to lock config file")?;
    file.write_all(content).context("Failed to write config")?;
    file.sync_all().context("Failed to sync config")?;
    FileExt::unlock(&file).context("Failed to unlock config file")
}
