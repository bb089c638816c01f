pub mod board;
pub mod card;
pub mod sorting;

pub use board::{default_columns, BoardState, Column};
pub use card::Card;
pub use sorting::{sort_cards, SortDirection};
