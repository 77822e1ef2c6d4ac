use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use zoommap_editor::EditorOptions;

pub const DEFAULT_CONFIG_NAME: &str = "zoommap.config.json";

/// ZoomMap configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Settings JSON holding icons and collections
    #[serde(default = "default_settings_path")]
    pub settings_path: String,

    /// Vault root scanned for link suggestions
    #[serde(default = "default_vault_dir")]
    pub vault_dir: String,

    #[serde(default = "default_hide_delay_ms")]
    pub suggestion_hide_delay_ms: u64,

    #[serde(default = "default_sticker_size")]
    pub default_sticker_size: u32,
}

fn default_settings_path() -> String {
    "zoommap-settings.json".to_string()
}

fn default_vault_dir() -> String {
    ".".to_string()
}

fn default_hide_delay_ms() -> u64 {
    150
}

fn default_sticker_size() -> u32 {
    zoommap_model::DEFAULT_STICKER_SIZE
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn settings_path(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.settings_path)
    }

    pub fn vault_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.vault_dir)
    }

    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            default_sticker_size: self.default_sticker_size,
            suggestion_hide_delay_ms: self.suggestion_hide_delay_ms,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings_path: default_settings_path(),
            vault_dir: default_vault_dir(),
            suggestion_hide_delay_ms: default_hide_delay_ms(),
            default_sticker_size: default_sticker_size(),
        }
    }
}
