use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::pad::Fill;
use crate::value::ValueKind;

#[derive(Parser)]
#[command(name = "leftpad", version)]
#[command(about = "Left-pad values to a minimum width", long_about = None)]
pub struct Cli {
    /// Read defaults from this file instead of the nearest .leftpad.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that pads.
#[derive(Args, Debug, Clone)]
pub struct PadArgs {
    /// Minimum width in characters (negative means no padding)
    #[arg(long, allow_negative_numbers = true)]
    pub cols: Option<i64>,

    /// Single padding character [default: space]
    #[arg(long)]
    pub fill: Option<Fill>,

    /// How to interpret each value
    #[arg(long, default_value = "text")]
    pub kind: ValueKind,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .leftpad.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Pad each value given on the command line
    Pad {
        /// Values to pad
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,

        #[command(flatten)]
        args: PadArgs,
    },

    /// Pad each line read from stdin
    Lines {
        #[command(flatten)]
        args: PadArgs,
    },
}
