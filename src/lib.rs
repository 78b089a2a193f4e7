#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod pad;
pub mod value;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use cli::{Cli, Commands, PadArgs};
use config::{CONFIG_FILE, Config, PadOptions};
use output::Output;

pub use error::PadError;
pub use pad::{Fill, pad, pad_default, width};
pub use value::{Value, ValueKind};

fn resolve_options(config_path: Option<&Path>, args: &PadArgs) -> Result<PadOptions> {
    let config = Config::load(config_path)?;
    config.resolve(args.cols, args.fill)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { force } => {
            let dir = std::env::current_dir().context("Failed to read current directory")?;
            let outcome = commands::init::run(&dir, force)?;
            Output::new(false).init(&outcome, &PathBuf::from(CONFIG_FILE))
        }
        Commands::Pad { values, args } => {
            let options = resolve_options(cli.config.as_deref(), &args)?;
            let padded = commands::pad::run(&values, args.kind, options)?;
            Output::new(args.json).padded(&padded)
        }
        Commands::Lines { args } => {
            let options = resolve_options(cli.config.as_deref(), &args)?;
            let padded = commands::lines::run(io::stdin().lock(), args.kind, options)?;
            Output::new(args.json).padded(&padded)
        }
    }
}
