//! stepwise CLI.
//!
//! Prints lazy integer ranges from the command line.
//!
//! # Quick Start
//!
//! ```bash
//! # 0 through 99
//! stepwise range
//!
//! # 10, 13, 16, 19 as a JSON array
//! stepwise range --first 10 --last 20 --step 3 --format json
//!
//! # First five values of an unbounded counter
//! stepwise count --take 5
//! ```

mod commands;
mod settings;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::settings::OutputFormat;

/// stepwise - lazy, restartable integer ranges.
#[derive(Parser)]
#[command(name = "stepwise")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SettingsArgs {
    /// Directory holding stepwise.toml (defaults to the current directory).
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Ignore ~/.config/stepwise/config.toml.
    #[arg(long)]
    no_user_config: bool,
}

impl From<SettingsArgs> for commands::SettingsSource {
    fn from(args: SettingsArgs) -> Self {
        Self {
            config_dir: args.config_dir,
            skip_user_config: args.no_user_config,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Print a range, stopping before `last`.
    Range {
        /// Starting value (default 0).
        #[arg(long, allow_negative_numbers = true)]
        first: Option<i64>,

        /// Exclusive end bound (default 100).
        #[arg(long, allow_negative_numbers = true)]
        last: Option<i64>,

        /// Amount added per step (default 1).
        #[arg(long, allow_negative_numbers = true)]
        step: Option<i64>,

        /// Output format.
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Print the first values of an unbounded counter.
    Count {
        /// How many values to print.
        #[arg(short, long)]
        take: u64,

        /// Starting value.
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        start: i64,

        /// Output format.
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show the effective settings after all sources are merged.
    Config {
        #[command(flatten)]
        settings: SettingsArgs,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays parseable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Range {
            first,
            last,
            step,
            format,
            settings,
        } => commands::range::run(
            commands::range::Overrides {
                first,
                last,
                step,
                format,
            },
            &settings.into(),
        ),
        Commands::Count {
            take,
            start,
            format,
        } => commands::count::run(take, start, format.unwrap_or_default()),
        Commands::Config { settings } => commands::config::run(&settings.into()),
    }
}
