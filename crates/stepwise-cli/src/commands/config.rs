//! Config command implementation.

use anyhow::{Context, Result};

use super::SettingsSource;

pub fn run(source: &SettingsSource) -> Result<()> {
    let settings = source.load()?;
    let rendered =
        serde_json::to_string_pretty(&settings).context("Failed to render settings")?;
    println!("{rendered}");
    Ok(())
}
