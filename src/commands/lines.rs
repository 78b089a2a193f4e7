use std::io::BufRead;

use anyhow::{Context, Result};

use crate::config::PadOptions;
use crate::value::ValueKind;

use super::pad::{self, Padded};

/// Pads every line of `reader`. Line terminators are stripped before padding.
pub fn run<R: BufRead>(reader: R, kind: ValueKind, options: PadOptions) -> Result<Vec<Padded>> {
    let lines = reader
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .context("Failed to read input")?;

    pad::run(&lines, kind, options)
}
