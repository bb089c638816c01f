use crate::error::{KanbanError, Result};
use crate::time_format::Locale;
use serde::Deserialize;
use std::path::Path;

/// Storage keys and display settings for a board
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Key holding the serialized column list
    pub board_key: String,
    /// Key holding the board-level editing flag
    pub editing_disabled_key: String,
    pub locale: Locale,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            board_key: "kanban-board".to_string(),
            editing_disabled_key: "editing-disabled".to_string(),
            locale: Locale::English,
        }
    }
}

impl StoreConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|err| KanbanError::ConfigError(err.to_string()))?;

        if config.board_key == config.editing_disabled_key {
            return Err(KanbanError::ConfigError(format!(
                "board_key and editing_disabled_key must differ (both are {:?})",
                config.board_key
            )));
        }

        Ok(config)
    }

    /// Loads the config at `path`, falling back to defaults when the file is absent
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
