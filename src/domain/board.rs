use crate::domain::{
    card::{Card, CardId},
    sorting::SortDirection,
};
use crate::error::{KanbanError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A kanban board column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub editing_disabled: bool,
    #[serde(default)]
    pub sort_direction: SortDirection,
}

impl Column {
    pub fn new(id: u64, title: String) -> Self {
        Self {
            id,
            title,
            color: None,
            cards: Vec::new(),
            editing_disabled: false,
            sort_direction: SortDirection::None,
        }
    }

    pub fn with_color(mut self, color: String) -> Self {
        self.color = Some(color);
        self
    }

    pub fn find_card(&self, card_id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == card_id)
    }

    pub fn find_card_mut(&mut self, card_id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| &card.id == card_id)
    }

    pub fn card_index(&self, card_id: &CardId) -> Option<usize> {
        self.cards.iter().position(|card| &card.id == card_id)
    }
}

/// The columns a fresh board starts with
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new(0, "TODO".to_string()),
        Column::new(1, "In progress".to_string()),
        Column::new(2, "Done".to_string()),
    ]
}

/// Checks that column ids are unique
pub fn validate_columns(columns: &[Column]) -> Result<()> {
    let mut seen = HashSet::with_capacity(columns.len());
    for column in columns {
        if !seen.insert(column.id) {
            return Err(KanbanError::DuplicateColumnId(column.id));
        }
    }
    Ok(())
}

/// Kanban board state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    pub columns: Vec<Column>,
    #[serde(default)]
    pub editing_disabled: bool,
}

impl BoardState {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            editing_disabled: false,
        }
    }

    /// Id for the next column: one past the highest id in use
    pub fn next_column_id(&self) -> Result<u64> {
        match self.columns.iter().map(|col| col.id).max() {
            None => Ok(0),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| KanbanError::IdsExhausted("column".to_string())),
        }
    }

    /// Id for the next card: one past the highest numeric card id on the board
    pub fn next_card_id(&self) -> Result<u64> {
        let highest = self
            .columns
            .iter()
            .flat_map(|col| col.cards.iter())
            .filter_map(|card| card.id.as_number())
            .max();

        match highest {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| KanbanError::IdsExhausted("card".to_string())),
        }
    }

    pub fn column(&self, id: u64) -> Option<&Column> {
        self.columns.iter().find(|col| col.id == id)
    }

    pub fn column_mut(&mut self, id: u64) -> Option<&mut Column> {
        self.columns.iter_mut().find(|col| col.id == id)
    }

    pub fn column_index(&self, id: u64) -> Option<usize> {
        self.columns.iter().position(|col| col.id == id)
    }

    /// Finds the column holding a card, returning the column id
    pub fn column_of_card(&self, card_id: &CardId) -> Option<u64> {
        self.columns
            .iter()
            .find(|col| col.find_card(card_id).is_some())
            .map(|col| col.id)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(default_columns())
    }
}
