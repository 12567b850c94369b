//! Range command implementation.

use anyhow::{Context, Result};
use stepwise::{RangeIterable, RangeSource};

use super::{SettingsSource, emit};
use crate::settings::OutputFormat;

/// Flags given on the command line. Unset flags fall back to settings.
#[derive(Debug, Default)]
pub struct Overrides {
    pub first: Option<i64>,
    pub last: Option<i64>,
    pub step: Option<i64>,
    pub format: Option<OutputFormat>,
}

pub fn run(overrides: Overrides, source: &SettingsSource) -> Result<()> {
    let settings = source.load()?;

    let mut config = settings.range;
    if let Some(first) = overrides.first {
        config = config.with_first(first);
    }
    if let Some(last) = overrides.last {
        config = config.with_last(last);
    }
    if let Some(step) = overrides.step {
        config = config.with_step(step);
    }

    let cursor = RangeIterable::new()
        .range(Some(config))
        .context("Failed to create range cursor")?;
    tracing::info!(
        first = config.first,
        last = config.last,
        step = config.step,
        count = cursor.remaining(),
        "printing range"
    );

    emit(cursor, overrides.format.unwrap_or(settings.output.format))
}
