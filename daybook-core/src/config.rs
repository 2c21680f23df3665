//! Global daybook configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{DaybookError, DaybookResult};
use crate::notify::DEFAULT_POLL_INTERVAL_SECS;

/// Namespace names inside the persisted store.
pub const NOTES_NAMESPACE: &str = "notes";
pub const MEMORIES_NAMESPACE: &str = "memories";

/// Roughly what one browser origin gets for local storage.
const DEFAULT_QUOTA_BYTES: u64 = 5 * 1024 * 1024;

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("daybook"))
        .unwrap_or_else(|| PathBuf::from(".daybook"))
}

fn default_quota_bytes() -> u64 {
    DEFAULT_QUOTA_BYTES
}

fn default_poll_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

/// Global configuration at ~/.config/daybook/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct DaybookConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Total byte budget shared by all store namespaces.
    #[serde(default = "default_quota_bytes")]
    pub storage_quota_bytes: u64,

    /// Event seed document; defaults to events.json inside the data dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_file: Option<PathBuf>,

    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

impl Default for DaybookConfig {
    fn default() -> Self {
        DaybookConfig {
            data_dir: default_data_dir(),
            storage_quota_bytes: DEFAULT_QUOTA_BYTES,
            events_file: None,
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
        }
    }
}

impl DaybookConfig {
    pub fn config_path() -> DaybookResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DaybookError::Config("Could not determine config directory".into()))?
            .join("daybook");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, writing a commented default on first run.
    pub fn load() -> DaybookResult<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            Self::create_default_config(&path)?;
            return Ok(DaybookConfig::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| DaybookError::Config(format!("Could not read config file: {e}")))?;
        toml::from_str(&content).map_err(|e| DaybookError::Config(e.to_string()))
    }

    pub fn save(&self) -> DaybookResult<()> {
        let path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| DaybookError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DaybookError::Config(format!("Could not create config dir: {e}")))?;
        }
        std::fs::write(&path, content)
            .map_err(|e| DaybookError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> DaybookResult<()> {
        let contents = "\
# daybook configuration

# Where notes, memories and the event seed file live:
# data_dir = \"~/.local/share/daybook\"

# Total byte budget for stored notes and pictures:
# storage_quota_bytes = 5242880

# Event seed document (defaults to events.json inside data_dir):
# events_file = \"~/calendar/events.json\"

# How often the watch command rescans events, in seconds:
# poll_interval_secs = 60
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DaybookError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DaybookError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn events_path(&self) -> PathBuf {
        self.events_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join("events.json"))
    }

    /// Directory holding the store's namespace files.
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.join("store")
    }
}
