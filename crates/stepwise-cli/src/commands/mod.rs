//! CLI command implementations.

pub mod config;
pub mod count;
pub mod range;
pub mod version;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::settings::{OutputFormat, Settings, SettingsLoader};

/// Where settings come from, as chosen on the command line.
#[derive(Debug, Clone, Default)]
pub struct SettingsSource {
    pub config_dir: Option<PathBuf>,
    pub skip_user_config: bool,
}

impl SettingsSource {
    pub(crate) fn load(&self) -> Result<Settings> {
        let mut loader = SettingsLoader::new();
        if let Some(dir) = &self.config_dir {
            loader = loader.with_project_dir(dir);
        }
        if self.skip_user_config {
            loader = loader.without_user_config();
        }
        loader.load()
    }
}

/// Writes values to stdout in the requested format.
///
/// A reader that hangs up early (`stepwise count | head`) ends the output
/// without an error.
pub(crate) fn emit(values: impl Iterator<Item = i64>, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    finish(write_values(BufWriter::new(stdout.lock()), values, format))
}

fn write_values<W: Write>(
    mut out: W,
    values: impl Iterator<Item = i64>,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Lines => {
            for value in values {
                writeln!(out, "{value}")?;
            }
        }
        OutputFormat::Json => {
            let collected: Vec<i64> = values.collect();
            serde_json::to_writer(&mut out, &collected).map_err(io::Error::from)?;
            writeln!(out)?;
        }
    }
    out.flush()
}

fn finish(written: io::Result<()>) -> Result<()> {
    match written {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.context("Failed to write values"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts `capacity` bytes, then reports a closed pipe.
    struct ClosedAfter {
        written: Vec<u8>,
        capacity: usize,
    }

    impl ClosedAfter {
        fn new(capacity: usize) -> Self {
            Self {
                written: Vec::new(),
                capacity,
            }
        }
    }

    impl Write for ClosedAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let room = self.capacity - self.written.len();
            if room == 0 {
                return Err(io::ErrorKind::BrokenPipe.into());
            }
            let n = room.min(buf.len());
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn lines_are_newline_separated() {
        let mut out = Vec::new();
        write_values(&mut out, [3, 4, 5].into_iter(), OutputFormat::Lines).unwrap();
        assert_eq!(out, b"3\n4\n5\n");
    }

    #[test]
    fn json_is_a_single_array() {
        let mut out = Vec::new();
        write_values(&mut out, [3, 4, 5].into_iter(), OutputFormat::Json).unwrap();
        assert_eq!(out, b"[3,4,5]\n");
    }

    #[test]
    fn closed_reader_ends_line_output_quietly() {
        let mut out = ClosedAfter::new(4);
        let written = write_values(&mut out, 0..1_000_000, OutputFormat::Lines);

        assert_eq!(
            written.as_ref().map_err(io::Error::kind),
            Err(io::ErrorKind::BrokenPipe)
        );
        assert_eq!(out.written, b"0\n1\n");
        assert!(finish(written).is_ok());
    }

    #[test]
    fn closed_reader_ends_json_output_quietly() {
        let mut out = ClosedAfter::new(2);
        let written = write_values(&mut out, 0..1_000, OutputFormat::Json);
        assert!(finish(written).is_ok());
    }

    #[test]
    fn other_write_errors_still_fail() {
        let written: io::Result<()> = Err(io::ErrorKind::PermissionDenied.into());
        let error = finish(written).unwrap_err();
        assert!(error.to_string().contains("Failed to write values"));
    }
}
