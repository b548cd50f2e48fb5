//! Card system: printed attributes, definitions, and instances.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for a printed card
//! - `CardKind`: Pokémon / Trainer / Energy, each with its own fields
//! - `CardDefinition`: Static card data held by the catalog
//! - `Card`: One copy in a match, with a unique `InstanceId`

pub mod attributes;
pub mod definition;
pub mod instance;

pub use attributes::{ElementType, Stage, TrainerKind};
pub use definition::{
    Ability, Attack, CardDefinition, CardId, CardKind, EnergyCard, PokemonCard, TrainerCard,
};
pub use instance::Card;
