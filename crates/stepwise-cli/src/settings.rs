//! Layered settings for the CLI.
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults
//! 2. ~/.config/stepwise/config.toml (user defaults)
//! 3. stepwise.toml (project config)
//! 4. stepwise.local.toml (local overrides)
//! 5. Environment variables (STEPWISE_* prefix)
//!
//! Command-line flags are applied on top by the commands themselves.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use stepwise::RangeConfig;

/// Project config file name.
pub const PROJECT_FILE: &str = "stepwise.toml";

/// Local override file name.
pub const LOCAL_FILE: &str = "stepwise.local.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub range: RangeConfig,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

/// How values are written to stdout.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One value per line.
    #[default]
    Lines,
    /// A single JSON array.
    Json,
}

/// Settings loader with builder pattern
pub struct SettingsLoader {
    project_dir: PathBuf,
    env_prefix: String,
    user_config: Option<PathBuf>,
}

impl SettingsLoader {
    /// Create a loader rooted at the current directory
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "STEPWISE".to_string(),
            user_config: ProjectDirs::from("rs", "stepwise", "stepwise")
                .map(|dirs| dirs.config_dir().join("config.toml")),
        }
    }

    /// Set the directory searched for project and local config files
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Skip the per-user config file
    pub fn without_user_config(mut self) -> Self {
        self.user_config = None;
        self
    }

    /// Load settings from all sources with proper precedence
    pub fn load(self) -> Result<Settings> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&Settings::default())?);

        let files = self
            .user_config
            .into_iter()
            .chain([
                self.project_dir.join(PROJECT_FILE),
                self.project_dir.join(LOCAL_FILE),
            ]);
        for file in files {
            if file.exists() {
                tracing::debug!(path = %file.display(), "loading settings file");
                builder = builder.add_source(
                    config::File::from(file)
                        .required(false)
                        .format(config::FileFormat::Toml),
                );
            }
        }

        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build settings")?;
        config
            .try_deserialize()
            .context("Failed to deserialize settings")
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}
