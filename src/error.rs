use crate::domain::card::CardId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, KanbanError>;

#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("Column not found: {0}")]
    ColumnNotFound(u64),

    #[error("Card not found: {0}")]
    CardNotFound(CardId),

    #[error("Duplicate column id: {0}")]
    DuplicateColumnId(u64),

    #[error("Duplicate card id: {0}")]
    DuplicateCardId(CardId),

    #[error("No {0} ids left to assign")]
    IdsExhausted(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
