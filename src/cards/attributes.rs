//! Printed card attributes.
//!
//! ## Types
//!
//! - `ElementType`: Pokémon and energy element (Fire, Water, ...)
//! - `Stage`: Evolution tier (`Basic`, `Stage 1`, `Stage 2`)
//! - `TrainerKind`: Trainer subtype (Item, Supporter, Stadium, Tool)
//!
//! Serialized names match the printed text, so `Stage::Stage1` is written
//! as `"Stage 1"`.

use serde::{Deserialize, Serialize};

/// Element of a Pokémon, attack cost, or energy card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    Fire,
    Water,
    Grass,
    Lightning,
    Psychic,
    Fighting,
    Darkness,
    Metal,
    Fairy,
    Dragon,
    Colorless,
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Evolution tier of a Pokémon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    Basic,
    #[serde(rename = "Stage 1")]
    Stage1,
    #[serde(rename = "Stage 2")]
    Stage2,
}

impl Stage {
    /// Check if this is the Basic tier.
    #[must_use]
    pub const fn is_basic(self) -> bool {
        matches!(self, Stage::Basic)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Basic => write!(f, "Basic"),
            Stage::Stage1 => write!(f, "Stage 1"),
            Stage::Stage2 => write!(f, "Stage 2"),
        }
    }
}

/// Trainer card subtype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainerKind {
    Item,
    Supporter,
    Stadium,
    Tool,
}
