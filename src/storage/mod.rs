use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

pub mod file_storage;
pub mod memory_storage;

#[cfg(feature = "sqlite-storage")]
pub mod sqlite_storage;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

/// Key-value storage holding one JSON value per key
///
/// Mirrors a browser local-storage origin: values are written whole and
/// read back whole, nothing is merged.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Reads the value stored under `key`, `None` when nothing is stored
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Stores `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &Value) -> Result<()>;

    /// Removes the value stored under `key`; removing a missing key is fine
    async fn remove(&self, key: &str) -> Result<()>;
}
