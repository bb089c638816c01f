use crate::domain::card::{Card, CardId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Sort direction applied to the cards of a column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    None,
    Ascending,
    Descending,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(SortDirection::None),
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(format!(
                "Invalid sort direction '{}'. Valid directions: none, asc, desc",
                s
            )),
        }
    }
}

/// Sorts cards in-place by title
///
/// Titles compare case-insensitively and ties fall back to the card id, so
/// the result is stable across reloads. `SortDirection::None` leaves the
/// manual order alone.
///
/// # Examples
/// ```
/// use kanban_state::domain::card::Card;
/// use kanban_state::domain::sorting::{sort_cards, SortDirection};
///
/// let mut cards = vec![
///     Card::new(1, "Charlie".to_string()),
///     Card::new(2, "alpha".to_string()),
/// ];
///
/// sort_cards(&mut cards, SortDirection::Ascending);
/// assert_eq!(cards[0].title(), "alpha");
/// ```
pub fn sort_cards(cards: &mut [Card], direction: SortDirection) {
    if direction == SortDirection::None {
        return;
    }

    cards.sort_by(|a, b| {
        let cmp = compare_titles(a, b);
        match direction {
            SortDirection::Descending => cmp.reverse(),
            _ => cmp,
        }
    });
}

fn compare_titles(a: &Card, b: &Card) -> Ordering {
    a.title()
        .to_lowercase()
        .cmp(&b.title().to_lowercase())
        .then_with(|| compare_ids(&a.id, &b.id))
}

/// Numeric ids first in numeric order, then everything else by its text
fn compare_ids(a: &CardId, b: &CardId) -> Ordering {
    match (a.as_number(), b.as_number()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.to_string().cmp(&b.to_string()),
    }
}
