use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::config::PadOptions;
use crate::pad::{Fill, pad};
use crate::value::{Value, ValueKind};

/// One padded value, as reported by `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct Padded {
    pub value: Value,
    pub kind: ValueKind,
    pub cols: usize,
    pub fill: Fill,
    pub padded: String,
}

impl Padded {
    pub fn new(value: Value, options: PadOptions) -> Self {
        let padded = pad(&value, options.cols, options.fill);
        Self {
            kind: value.kind(),
            value,
            cols: options.cols,
            fill: options.fill,
            padded,
        }
    }
}

pub fn run<S: AsRef<str>>(values: &[S], kind: ValueKind, options: PadOptions) -> Result<Vec<Padded>> {
    debug!(count = values.len(), cols = options.cols, fill = %options.fill, kind = kind.as_ref(), "padding values");

    values
        .iter()
        .map(|raw| {
            let raw = raw.as_ref();
            let value = Value::parse(raw, kind)
                .with_context(|| format!("Invalid {} value: {raw}", kind.as_ref()))?;
            Ok(Padded::new(value, options))
        })
        .collect()
}
