use crate::{
    config::StoreConfig,
    domain::{
        board::{default_columns, validate_columns, BoardState, Column},
        card::{Card, CardId},
        sorting::{sort_cards, SortDirection},
    },
    error::{KanbanError, Result},
    storage::Storage,
};
use serde_json::Value;
use tracing::{debug, info};

/// Handle returned by [`BoardStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&BoardState) + Send>;

/// Board state mirrored to a [`Storage`] backend
///
/// Every mutation writes the full column list back under the board key
/// (one write per call, nothing is batched) and then calls each subscriber
/// with the new state. Storage errors are returned as-is; the in-memory
/// state keeps the change even when the write fails.
pub struct BoardStore<S: Storage> {
    storage: S,
    config: StoreConfig,
    state: BoardState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

/// Mirrors how a browser treats a stored value in a boolean context
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |n| n == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

impl<S: Storage> BoardStore<S> {
    /// Loads the board from storage, or starts from the default columns
    pub async fn load(storage: S, config: StoreConfig) -> Result<Self> {
        let columns = match storage.get(&config.board_key).await? {
            Some(value) if !is_falsy(&value) => {
                let columns: Vec<Column> = serde_json::from_value(value)?;
                validate_columns(&columns)?;
                debug!(key = %config.board_key, columns = columns.len(), "loaded board");
                columns
            }
            _ => {
                info!(key = %config.board_key, "no stored board, using default columns");
                default_columns()
            }
        };

        let editing_disabled = storage
            .get(&config.editing_disabled_key)
            .await?
            .map_or(false, |value| !is_falsy(&value));

        Ok(Self {
            storage,
            config,
            state: BoardState {
                columns,
                editing_disabled,
            },
            subscribers: Vec::new(),
            next_subscription: 0,
        })
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn columns(&self) -> &[Column] {
        &self.state.columns
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Registers a callback run after every successful write
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&BoardState) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscription, returning whether it existed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&self.state);
        }
    }

    async fn persist_columns(&mut self) -> Result<()> {
        let value = serde_json::to_value(&self.state.columns)?;
        debug!(
            key = %self.config.board_key,
            columns = self.state.columns.len(),
            "persisting board"
        );
        self.storage.set(&self.config.board_key, &value).await?;
        self.notify();
        Ok(())
    }

    /// Applies an arbitrary edit to the columns and persists the result
    ///
    /// The edit runs on a copy; if it leaves duplicate column ids behind the
    /// copy is discarded and nothing is written.
    pub async fn update<F, T>(&mut self, edit: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<Column>) -> T,
    {
        let mut columns = self.state.columns.clone();
        let output = edit(&mut columns);
        validate_columns(&columns)?;

        self.state.columns = columns;
        self.persist_columns().await?;
        Ok(output)
    }

    /// Appends a column and returns its id
    pub async fn add_column(&mut self, title: String, color: Option<String>) -> Result<u64> {
        let id = self.state.next_column_id()?;
        let mut column = Column::new(id, title);
        column.color = color;

        self.state.columns.push(column);
        self.persist_columns().await?;
        Ok(id)
    }

    pub async fn remove_column(&mut self, id: u64) -> Result<Column> {
        let index = self.column_index(id)?;
        let column = self.state.columns.remove(index);
        self.persist_columns().await?;
        Ok(column)
    }

    /// Moves a column to `to_index`, clamped to the end of the board
    pub async fn move_column(&mut self, id: u64, to_index: usize) -> Result<()> {
        let index = self.column_index(id)?;
        let column = self.state.columns.remove(index);
        let to_index = to_index.min(self.state.columns.len());
        self.state.columns.insert(to_index, column);
        self.persist_columns().await
    }

    pub async fn rename_column(&mut self, id: u64, title: String) -> Result<()> {
        self.column_mut(id)?.title = title;
        self.persist_columns().await
    }

    pub async fn set_column_color(&mut self, id: u64, color: Option<String>) -> Result<()> {
        self.column_mut(id)?.color = color;
        self.persist_columns().await
    }

    pub async fn set_column_editing_disabled(&mut self, id: u64, disabled: bool) -> Result<()> {
        self.column_mut(id)?.editing_disabled = disabled;
        self.persist_columns().await
    }

    /// Sets a column's sort direction and re-sorts its cards
    pub async fn set_sort_direction(&mut self, id: u64, direction: SortDirection) -> Result<()> {
        let column = self.column_mut(id)?;
        column.sort_direction = direction;
        sort_cards(&mut column.cards, direction);
        self.persist_columns().await
    }

    /// Adds a card to a column, keeping the column's sort order
    ///
    /// Card ids must be unique across the board.
    pub async fn add_card(&mut self, column_id: u64, card: Card) -> Result<()> {
        self.column_index(column_id)?;
        if self.state.column_of_card(&card.id).is_some() {
            return Err(KanbanError::DuplicateCardId(card.id));
        }

        let column = self.column_mut(column_id)?;
        column.cards.push(card);
        sort_cards(&mut column.cards, column.sort_direction);
        self.persist_columns().await
    }

    /// Creates a card with the next free numeric id and returns that id
    pub async fn create_card(&mut self, column_id: u64, title: String) -> Result<CardId> {
        let id = CardId::Number(self.state.next_card_id()?);
        self.add_card(column_id, Card::with_id(id.clone(), title))
            .await?;
        Ok(id)
    }

    pub async fn remove_card(&mut self, column_id: u64, card_id: &CardId) -> Result<Card> {
        let column = self.column_mut(column_id)?;
        let index = column
            .card_index(card_id)
            .ok_or_else(|| KanbanError::CardNotFound(card_id.clone()))?;

        let card = column.cards.remove(index);
        self.persist_columns().await?;
        Ok(card)
    }

    /// Edits a card in place and stamps its edit time
    pub async fn update_card<F>(&mut self, column_id: u64, card_id: &CardId, edit: F) -> Result<()>
    where
        F: FnOnce(&mut Card),
    {
        let column = self.column_mut(column_id)?;
        let card = column
            .find_card_mut(card_id)
            .ok_or_else(|| KanbanError::CardNotFound(card_id.clone()))?;
        edit(card);
        card.touch();
        sort_cards(&mut column.cards, column.sort_direction);
        self.persist_columns().await
    }

    /// Moves a card to `to_index` of another (or the same) column
    ///
    /// The index is clamped to the end of the target column. Sorted target
    /// columns re-sort after the move.
    pub async fn move_card(&mut self, card_id: &CardId, to_column: u64, to_index: usize) -> Result<()> {
        let from_column = self
            .state
            .column_of_card(card_id)
            .ok_or_else(|| KanbanError::CardNotFound(card_id.clone()))?;
        self.column_index(to_column)?;

        let source = self.column_mut(from_column)?;
        let index = source
            .card_index(card_id)
            .ok_or_else(|| KanbanError::CardNotFound(card_id.clone()))?;
        let card = source.cards.remove(index);

        let target = self.column_mut(to_column)?;
        let to_index = to_index.min(target.cards.len());
        target.cards.insert(to_index, card);
        sort_cards(&mut target.cards, target.sort_direction);

        self.persist_columns().await
    }

    /// Sets the board-level editing flag, stored under its own key
    pub async fn set_editing_disabled(&mut self, disabled: bool) -> Result<()> {
        self.state.editing_disabled = disabled;
        debug!(key = %self.config.editing_disabled_key, disabled, "persisting editing flag");
        self.storage
            .set(&self.config.editing_disabled_key, &Value::Bool(disabled))
            .await?;
        self.notify();
        Ok(())
    }

    /// Replaces the board with the default columns
    pub async fn reset(&mut self) -> Result<()> {
        info!(key = %self.config.board_key, "resetting board to default columns");
        self.state.columns = default_columns();
        self.persist_columns().await
    }

    fn column_index(&self, id: u64) -> Result<usize> {
        self.state
            .column_index(id)
            .ok_or(KanbanError::ColumnNotFound(id))
    }

    fn column_mut(&mut self, id: u64) -> Result<&mut Column> {
        self.state
            .column_mut(id)
            .ok_or(KanbanError::ColumnNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, MemoryStorage};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    async fn fresh_store() -> BoardStore<MemoryStorage> {
        BoardStore::load(MemoryStorage::new(), StoreConfig::default())
            .await
            .unwrap()
    }

    async fn stored_columns(store: &BoardStore<MemoryStorage>) -> Vec<Column> {
        let value = store
            .storage()
            .get("kanban-board")
            .await
            .unwrap()
            .expect("board should be stored");
        serde_json::from_value(value).unwrap()
    }

    struct FailingStorage;

    #[async_trait]
    impl Storage for FailingStorage {
        async fn get(&self, _key: &str) -> Result<Option<Value>> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: &Value) -> Result<()> {
            Err(KanbanError::StorageError("quota exceeded".to_string()))
        }

        async fn remove(&self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_is_falsy() {
        assert!(is_falsy(&json!(null)));
        assert!(is_falsy(&json!(false)));
        assert!(is_falsy(&json!(0)));
        assert!(is_falsy(&json!("")));
        assert!(!is_falsy(&json!([])));
        assert!(!is_falsy(&json!({})));
        assert!(!is_falsy(&json!(true)));
        assert!(!is_falsy(&json!("no")));
    }

    #[tokio::test]
    async fn test_empty_storage_loads_defaults() {
        let store = fresh_store().await;

        assert_eq!(store.columns(), default_columns().as_slice());
        assert!(!store.state().editing_disabled);
        assert_eq!(store.storage().write_count().await, 0);
    }

    #[tokio::test]
    async fn test_falsy_value_loads_defaults() {
        let storage = MemoryStorage::new();
        storage.set("kanban-board", &json!(null)).await.unwrap();

        let store = BoardStore::load(storage, StoreConfig::default()).await.unwrap();
        assert_eq!(store.columns(), default_columns().as_slice());
    }

    #[tokio::test]
    async fn test_empty_list_is_kept() {
        let storage = MemoryStorage::new();
        storage.set("kanban-board", &json!([])).await.unwrap();

        let store = BoardStore::load(storage, StoreConfig::default()).await.unwrap();
        assert!(store.columns().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_board_is_an_error() {
        let storage = MemoryStorage::new();
        storage
            .set("kanban-board", &json!({ "not": "columns" }))
            .await
            .unwrap();

        let result = BoardStore::load(storage, StoreConfig::default()).await;
        assert!(matches!(result, Err(KanbanError::SerializationError(_))));
    }

    #[tokio::test]
    async fn test_duplicate_ids_rejected_on_load() {
        let storage = MemoryStorage::new();
        storage
            .set(
                "kanban-board",
                &json!([{ "id": 1, "title": "A" }, { "id": 1, "title": "B" }]),
            )
            .await
            .unwrap();

        let result = BoardStore::load(storage, StoreConfig::default()).await;
        assert!(matches!(result, Err(KanbanError::DuplicateColumnId(1))));
    }

    #[tokio::test]
    async fn test_add_card_writes_once_with_full_board() {
        let mut store = fresh_store().await;

        let card_id = store.create_card(0, "Write tests".to_string()).await.unwrap();

        assert_eq!(store.storage().write_count().await, 1);
        let stored = stored_columns(&store).await;
        assert_eq!(stored.len(), 3);
        assert_eq!(stored[0].cards.len(), 1);
        assert_eq!(stored[0].cards[0].id, card_id);
        assert_eq!(stored, store.columns());
    }

    #[tokio::test]
    async fn test_every_mutation_writes() {
        let mut store = fresh_store().await;

        let id = store.add_column("Review".to_string(), Some("#00aaff".to_string())).await.unwrap();
        store.rename_column(id, "QA".to_string()).await.unwrap();
        store.set_column_color(id, None).await.unwrap();
        store.set_column_editing_disabled(id, true).await.unwrap();
        store.move_column(id, 0).await.unwrap();
        store.remove_column(id).await.unwrap();

        assert_eq!(store.storage().write_count().await, 6);
        assert_eq!(stored_columns(&store).await, default_columns());
    }

    #[tokio::test]
    async fn test_update_persists_nested_edits() {
        let mut store = fresh_store().await;

        store
            .update(|columns| columns[1].cards.push(Card::new(42, "Nested".to_string())))
            .await
            .unwrap();

        assert_eq!(store.storage().write_count().await, 1);
        assert_eq!(stored_columns(&store).await[1].cards[0].id, CardId::Number(42));
    }

    #[tokio::test]
    async fn test_update_rejects_duplicate_ids_without_writing() {
        let mut store = fresh_store().await;

        let result = store
            .update(|columns| columns.push(Column::new(0, "Clash".to_string())))
            .await;

        assert!(matches!(result, Err(KanbanError::DuplicateColumnId(0))));
        assert_eq!(store.columns(), default_columns().as_slice());
        assert_eq!(store.storage().write_count().await, 0);
    }

    #[tokio::test]
    async fn test_add_column_assigns_next_id() {
        let mut store = fresh_store().await;

        assert_eq!(store.add_column("Blocked".to_string(), None).await.unwrap(), 3);
        store.remove_column(1).await.unwrap();
        assert_eq!(store.add_column("Later".to_string(), None).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_move_column_clamps_index() {
        let mut store = fresh_store().await;

        store.move_column(0, 99).await.unwrap();

        let ids: Vec<u64> = store.columns().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 0]);
    }

    #[tokio::test]
    async fn test_unknown_ids_do_not_write() {
        let mut store = fresh_store().await;

        assert!(matches!(
            store.rename_column(9, "X".to_string()).await,
            Err(KanbanError::ColumnNotFound(9))
        ));
        assert!(matches!(
            store.remove_card(0, &CardId::Number(5)).await,
            Err(KanbanError::CardNotFound(CardId::Number(5)))
        ));
        assert!(matches!(
            store.move_card(&CardId::from("c-5"), 0, 0).await,
            Err(KanbanError::CardNotFound(_))
        ));
        assert_eq!(store.storage().write_count().await, 0);
    }

    #[tokio::test]
    async fn test_move_card_between_columns() {
        let mut store = fresh_store().await;
        let a = store.create_card(0, "A".to_string()).await.unwrap();
        let b = store.create_card(2, "B".to_string()).await.unwrap();

        store.move_card(&a, 2, 0).await.unwrap();

        assert!(store.columns()[0].cards.is_empty());
        let ids: Vec<CardId> = store.columns()[2].cards.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(stored_columns(&store).await, store.columns());
    }

    #[tokio::test]
    async fn test_move_card_to_missing_column_keeps_card() {
        let mut store = fresh_store().await;
        let a = store.create_card(0, "A".to_string()).await.unwrap();

        let result = store.move_card(&a, 7, 0).await;

        assert!(matches!(result, Err(KanbanError::ColumnNotFound(7))));
        assert_eq!(store.columns()[0].cards.len(), 1);
    }

    #[tokio::test]
    async fn test_sorted_column_stays_sorted() {
        let mut store = fresh_store().await;
        store.create_card(0, "banana".to_string()).await.unwrap();
        store.create_card(0, "apple".to_string()).await.unwrap();

        store
            .set_sort_direction(0, SortDirection::Ascending)
            .await
            .unwrap();
        store.create_card(0, "Avocado".to_string()).await.unwrap();

        let titles: Vec<&str> = store.columns()[0]
            .cards
            .iter()
            .map(|c| c.title())
            .collect();
        assert_eq!(titles, vec!["apple", "Avocado", "banana"]);
        assert_eq!(store.columns()[0].sort_direction, SortDirection::Ascending);
    }

    #[tokio::test]
    async fn test_update_card_touches_timestamp() {
        let mut store = fresh_store().await;
        let id = store.create_card(1, "Draft".to_string()).await.unwrap();
        store
            .update(|columns| columns[1].cards[0].fields.remove("updatedAt"))
            .await
            .unwrap();
        assert!(store.columns()[1].cards[0].updated_at().is_none());

        store
            .update_card(1, &id, |card| card.set_title("Final".to_string()))
            .await
            .unwrap();

        let card = &store.columns()[1].cards[0];
        assert_eq!(card.title(), "Final");
        assert!(card.updated_at().is_some());
    }

    #[tokio::test]
    async fn test_remove_card_returns_it() {
        let mut store = fresh_store().await;
        let id = store.create_card(0, "Gone".to_string()).await.unwrap();

        let card = store.remove_card(0, &id).await.unwrap();

        assert_eq!(card.title(), "Gone");
        assert!(stored_columns(&store).await[0].cards.is_empty());
    }

    #[tokio::test]
    async fn test_subscribers_see_every_change() {
        let mut store = fresh_store().await;
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let id = store.subscribe(move |state| {
            let cards: usize = state.columns.iter().map(|c| c.cards.len()).sum();
            sink.lock().unwrap().push(cards);
        });

        store.create_card(0, "One".to_string()).await.unwrap();
        store.create_card(1, "Two".to_string()).await.unwrap();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.create_card(2, "Three".to_string()).await.unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_failed_write_propagates_and_skips_subscribers() {
        let mut store = BoardStore::load(FailingStorage, StoreConfig::default())
            .await
            .unwrap();
        let calls = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&calls);
        store.subscribe(move |_| *sink.lock().unwrap() += 1);

        let result = store.create_card(0, "Lost".to_string()).await;

        assert!(matches!(result, Err(KanbanError::StorageError(_))));
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_editing_flag_uses_own_key() {
        let mut store = fresh_store().await;

        store.set_editing_disabled(true).await.unwrap();

        assert!(store.state().editing_disabled);
        assert_eq!(
            store.storage().get("editing-disabled").await.unwrap(),
            Some(json!(true))
        );
        assert_eq!(store.storage().get("kanban-board").await.unwrap(), None);

        let reloaded = BoardStore::load(store.into_storage(), StoreConfig::default())
            .await
            .unwrap();
        assert!(reloaded.state().editing_disabled);
    }

    #[tokio::test]
    async fn test_reset_restores_defaults() {
        let mut store = fresh_store().await;
        store.add_column("Extra".to_string(), None).await.unwrap();

        store.reset().await.unwrap();

        assert_eq!(store.columns(), default_columns().as_slice());
        assert_eq!(stored_columns(&store).await, default_columns());
    }

    #[tokio::test]
    async fn test_custom_keys() {
        let config = StoreConfig {
            board_key: "team-board".to_string(),
            ..StoreConfig::default()
        };
        let mut store = BoardStore::load(MemoryStorage::new(), config).await.unwrap();

        store.create_card(0, "Keyed".to_string()).await.unwrap();

        assert!(store.storage().get("team-board").await.unwrap().is_some());
        assert_eq!(store.storage().get("kanban-board").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_round_trip_through_file_storage() {
        let temp_dir = TempDir::new().unwrap();

        let mut store = BoardStore::load(FileStorage::new(temp_dir.path()), StoreConfig::default())
            .await
            .unwrap();
        let review = store
            .add_column("Review".to_string(), Some("#ffcc00".to_string()))
            .await
            .unwrap();
        store.create_card(review, "Check PR".to_string()).await.unwrap();
        store
            .update(|columns| {
                columns[0].cards.push(
                    Card::new(100, "Imported".to_string())
                        .with_description("from CSV".to_string()),
                )
            })
            .await
            .unwrap();
        store
            .set_sort_direction(review, SortDirection::Descending)
            .await
            .unwrap();
        let saved = store.state().clone();

        let reloaded = BoardStore::load(FileStorage::new(temp_dir.path()), StoreConfig::default())
            .await
            .unwrap();

        assert_eq!(reloaded.state(), &saved);
    }

    #[tokio::test]
    async fn test_ui_owned_card_shapes_round_trip() {
        let stored = json!([
            {
                "id": 0,
                "title": "TODO",
                "cards": [
                    { "id": "c-1", "text": "hi" },
                    { "id": 7, "title": "Epoch", "updatedAt": 1718452800000u64 }
                ]
            },
            { "id": 1718452800000u64, "title": "Backlog", "cards": [] }
        ]);
        let storage = MemoryStorage::new();
        storage.set("kanban-board", &stored).await.unwrap();

        let mut store = BoardStore::load(storage, StoreConfig::default()).await.unwrap();
        assert_eq!(store.columns()[0].cards[0].id, CardId::from("c-1"));
        assert_eq!(store.columns()[1].id, 1_718_452_800_000);

        store
            .move_card(&CardId::from("c-1"), 1_718_452_800_000, 0)
            .await
            .unwrap();
        store.move_card(&CardId::from("c-1"), 0, 0).await.unwrap();

        let written = store
            .storage()
            .get("kanban-board")
            .await
            .unwrap()
            .expect("board should be stored");
        assert_eq!(written[0]["cards"], stored[0]["cards"]);
        assert_eq!(written[1]["id"], json!(1718452800000u64));
    }

    #[tokio::test]
    async fn test_add_column_after_max_id_is_an_error() {
        let storage = MemoryStorage::new();
        storage
            .set("kanban-board", &json!([{ "id": u64::MAX, "title": "A", "cards": [] }]))
            .await
            .unwrap();
        let mut store = BoardStore::load(storage, StoreConfig::default()).await.unwrap();

        let result = store.add_column("B".to_string(), None).await;

        assert!(matches!(result, Err(KanbanError::IdsExhausted(_))));
        assert_eq!(store.columns().len(), 1);
        assert_eq!(store.storage().write_count().await, 1);
    }

    #[tokio::test]
    async fn test_create_card_after_max_id_is_an_error() {
        let mut store = fresh_store().await;
        store
            .add_card(2, Card::new(u64::MAX, "Last".to_string()))
            .await
            .unwrap();

        let result = store.create_card(0, "Overflow".to_string()).await;

        assert!(matches!(result, Err(KanbanError::IdsExhausted(_))));
        assert!(store.columns()[0].cards.is_empty());
        assert_eq!(store.storage().write_count().await, 1);
    }

    #[tokio::test]
    async fn test_add_card_rejects_duplicate_id() {
        let mut store = fresh_store().await;
        store
            .add_card(0, Card::with_id(CardId::from("c-1"), "First".to_string()))
            .await
            .unwrap();

        let result = store
            .add_card(2, Card::with_id(CardId::from("c-1"), "Copy".to_string()))
            .await;

        assert!(matches!(
            result,
            Err(KanbanError::DuplicateCardId(CardId::Text(ref id))) if id == "c-1"
        ));
        assert!(store.columns()[2].cards.is_empty());
        assert_eq!(store.storage().write_count().await, 1);
    }
}
