//! Global confmate configuration.

use std::path::{Path, PathBuf};

use ::config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{CompanionError, CompanionResult};

static DEFAULT_DATA_PATH: &str = "~/.local/share/confmate";

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn is_default_data_path(p: &PathBuf) -> bool {
    *p == default_data_path()
}

/// Global configuration at ~/.config/confmate/config.toml
///
/// Everything else the app persists (snapshots, reminder state) lives under
/// `data_dir` and is managed by the feed and store modules.
#[derive(Serialize, Deserialize, Clone)]
pub struct CompanionConfig {
    #[serde(default = "default_data_path", skip_serializing_if = "is_default_data_path")]
    pub data_dir: PathBuf,

    /// Base URL of the conference feed (serves agenda.json, speakers.json,
    /// locations.json, notifications.json).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_url: Option<String>,

    /// Display name of the event, used in notification headings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
}

impl CompanionConfig {
    pub fn load() -> CompanionResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: CompanionConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| CompanionError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CompanionError::Config(e.to_string()))?;

        Ok(config)
    }

    pub fn config_path() -> CompanionResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CompanionError::Config("Could not determine config directory".into()))?
            .join("confmate");

        Ok(config_dir.join("config.toml"))
    }

    /// Save the current config to ~/.config/confmate/config.toml
    pub fn save(&self) -> CompanionResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| CompanionError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| CompanionError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CompanionResult<()> {
        let contents = format!(
            "\
# confmate configuration

# Where snapshots and reminder state live:
# data_dir = \"{}\"

# Conference feed to pull snapshots from:
# feed_url = \"https://example.org/conference\"

# Event name shown in notification headings:
# event_name = \"My Conference 2026\"
",
            DEFAULT_DATA_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CompanionError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CompanionError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Where pulled feed snapshots are written.
    pub fn snapshot_dir(&self) -> PathBuf {
        self.data_path().join("data")
    }

    /// Where device-local preference state is persisted.
    pub fn state_dir(&self) -> PathBuf {
        self.data_path().join("state")
    }
}
