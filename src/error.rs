//! Error types for host-facing setup and I/O.
//!
//! Rule violations during play are never errors: the engine returns the
//! unchanged state. `TcgError` covers configuration, catalog and deck
//! problems, and snapshot encoding.

use thiserror::Error;

use crate::cards::CardId;

#[derive(Error, Debug)]
pub enum TcgError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown card: {0}")]
    UnknownCard(CardId),

    #[error("Card already registered: {0}")]
    DuplicateCard(CardId),

    #[error("Deck has {actual} cards, expected {expected}")]
    DeckSize { expected: usize, actual: usize },

    #[error("Deck contains no Basic Pokémon")]
    NoBasicPokemon,

    #[error("Deck contains {count} copies of {card}, at most {max} allowed")]
    TooManyCopies { card: CardId, count: usize, max: usize },

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TcgError>;
