//! Zones a card can occupy.
//!
//! Each side owns six zones: `Active` (at most one Pokémon), `Bench`
//! (ordered, capacity from `MatchConfig`), `Hand`, `Deck`, `Discard`, and
//! `Prize`. The zone contents themselves live on `PlayerState`.
//!
//! ## Key Types
//!
//! - `Zone`: Zone kind
//! - `ZoneTarget`: A zone plus an optional bench slot, used by play and
//!   attach operations to name where a card goes

pub mod target;

pub use target::{Zone, ZoneTarget};
