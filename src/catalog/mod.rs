//! Card catalog, built-in decks, and deck construction.
//!
//! ## Key Types
//!
//! - `CardCatalog`: immutable card definitions and named deck lists
//! - `DeckFactory`: turns a deck name into fresh `Card` instances
//! - `validate_deck`: deck-building rules (size, Basic Pokémon, copy limit)

pub mod factory;
pub mod registry;
pub mod standard;
pub mod validate;

pub use factory::DeckFactory;
pub use registry::{CardCatalog, DeckList};
pub use validate::validate_deck;
