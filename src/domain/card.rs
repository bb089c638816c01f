use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Identifier of a card, as the UI layer stored it
///
/// Ids created by this crate are numbers. Ids written by the UI may be
/// strings or any other JSON value and are kept as they are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardId {
    Number(u64),
    Text(String),
    Other(Value),
}

impl CardId {
    pub fn as_number(&self) -> Option<u64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<u64> for CardId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
            Self::Other(v) => write!(f, "{}", v),
        }
    }
}

/// A card on the board
///
/// The UI layer owns every field except `id`. They are kept as raw JSON and
/// written back untouched; the accessors below read the few this crate
/// needs without requiring any particular shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Card {
    const TITLE: &'static str = "title";
    const DESCRIPTION: &'static str = "description";
    const UPDATED_AT: &'static str = "updatedAt";

    /// Creates a new card with a numeric ID and title
    pub fn new(id: u64, title: String) -> Self {
        Self::with_id(CardId::Number(id), title)
    }

    /// Creates a new card with any kind of ID
    pub fn with_id(id: CardId, title: String) -> Self {
        let mut card = Self {
            id,
            fields: Map::new(),
        };
        card.set_title(title);
        card.touch();
        card
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.fields
            .insert(Self::DESCRIPTION.to_string(), Value::String(description));
        self
    }

    /// Title text, empty when the card has none or it is not a string
    pub fn title(&self) -> &str {
        self.fields
            .get(Self::TITLE)
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    pub fn set_title(&mut self, title: String) {
        self.fields
            .insert(Self::TITLE.to_string(), Value::String(title));
    }

    pub fn description(&self) -> Option<&str> {
        self.fields.get(Self::DESCRIPTION).and_then(Value::as_str)
    }

    /// Raw edit timestamp: an ISO string, epoch milliseconds, or whatever the UI stored
    pub fn updated_at(&self) -> Option<&Value> {
        self.fields.get(Self::UPDATED_AT)
    }

    /// Marks the card as edited now
    pub fn touch(&mut self) {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        self.fields
            .insert(Self::UPDATED_AT.to_string(), Value::String(now));
    }
}
