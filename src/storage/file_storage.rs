use crate::{
    error::{KanbanError, Result},
    storage::Storage,
};
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based storage implementation, one JSON file per key
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const STORAGE_DIR: &'static str = ".kanban";

    /// Creates a new FileStorage instance for the given project root
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: project_root.as_ref().join(Self::STORAGE_DIR),
        }
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    fn value_file(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

        if !valid {
            return Err(KanbanError::StorageError(format!(
                "Invalid storage key: {:?}",
                key
            )));
        }

        Ok(self.root_path.join(format!("{}.json", key)))
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        let file_path = self.value_file(key)?;

        if !file_path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&file_path).await?;
        let value: Value = serde_json::from_str(&contents)?;

        Ok(Some(value))
    }

    async fn set(&self, key: &str, value: &Value) -> Result<()> {
        let file_path = self.value_file(key)?;
        self.ensure_directory_exists(&self.root_path).await?;

        let json = serde_json::to_string_pretty(value)?;
        fs::write(file_path, json).await?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let file_path = self.value_file(key)?;

        if file_path.exists() {
            fs::remove_file(file_path).await?;
        }
        Ok(())
    }
}
