//! Count command implementation.

use anyhow::Result;
use stepwise::Counter;

use super::emit;
use crate::settings::OutputFormat;

pub fn run(take: u64, start: i64, format: OutputFormat) -> Result<()> {
    let take = usize::try_from(take).unwrap_or(usize::MAX);
    emit(Counter::starting_at(start).take(take), format)
}
