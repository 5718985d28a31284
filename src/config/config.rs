use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Options recognised by the reorder/resize core
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReorderConfig {
    /// Leading columns immune to drag and resize targeting
    pub fixed_column_count: usize,

    /// Allow drag-and-drop column reordering
    pub allow_reorder: bool,

    /// Allow interactive column resizing
    pub allow_resize: bool,

    /// Column order (original indices, slot by slot) applied once at attach;
    /// a restored persisted order takes precedence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_order: Option<Vec<usize>>,

    /// Width strings applied once at attach, indexed by original column
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_widths: Option<Vec<String>>,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            fixed_column_count: 0,
            allow_reorder: true,
            allow_resize: true,
            initial_order: None,
            initial_widths: None,
        }
    }
}

impl ReorderConfig {
    /// Load config from the default location, creating it with defaults on
    /// first run
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: ReorderConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the default config file path
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("col-reorder").join("config.toml"))
    }
}
