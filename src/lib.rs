//! # Kanban State
//!
//! Client-side state for a kanban board UI: board columns mirrored to a
//! key-value storage backend, a shared modal slot, and relative-time labels
//! for "last edited" display.
//!
//! Nothing here renders anything. UI code owns a [`BoardStore`], one
//! [`ModalController`] context and a [`RelativeTimeFormatter`], and drives
//! them in response to user actions.

pub mod config;
pub mod domain;
pub mod error;
pub mod modal;
pub mod storage;
pub mod store;
pub mod time_format;

// Re-export commonly used types
pub use config::StoreConfig;
pub use domain::{
    board::{BoardState, Column},
    card::{Card, CardId},
    sorting::SortDirection,
};
pub use error::{KanbanError, Result};
pub use modal::{ModalComponent, ModalController, ModalState};
pub use storage::Storage;
pub use store::{BoardStore, SubscriptionId};
pub use time_format::{Locale, RelativeTimeFormatter};
