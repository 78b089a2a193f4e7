use std::path::Path;

use anyhow::Result;
use console::{Term, style};
use serde::Serialize;

use crate::commands::init::InitOutcome;
use crate::commands::pad::Padded;

pub struct Output {
    term: Term,
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self {
            term: Term::stdout(),
            json,
        }
    }

    fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let output = serde_json::to_string_pretty(value)?;
        self.term.write_line(&output)?;
        Ok(())
    }

    /// Padded values go out unstyled, one per line, so they can be piped.
    pub fn padded(&self, padded: &[Padded]) -> Result<()> {
        if self.json {
            return self.print_json(padded);
        }

        for record in padded {
            self.term.write_line(&record.padded)?;
        }
        Ok(())
    }

    pub fn init(&self, outcome: &InitOutcome, path: &Path) -> Result<()> {
        let line = match outcome {
            InitOutcome::Created => format!(
                "{} {}",
                style("Created").green(),
                style(path.display()).cyan().bold()
            ),
            InitOutcome::Overwritten => format!(
                "{} {}",
                style("Overwrote").yellow(),
                style(path.display()).cyan().bold()
            ),
            InitOutcome::AlreadyExists => format!(
                "{} already exists {}",
                style(path.display()).cyan().bold(),
                style("(use --force to overwrite)").dim()
            ),
        };
        self.term.write_line(&line)?;
        Ok(())
    }
}
