//! Zone kinds and play targets.

use serde::{Deserialize, Serialize};

/// A zone on one side of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Active,
    Bench,
    Hand,
    Deck,
    Discard,
    Prize,
}

impl Zone {
    /// Zones that hold Pokémon in play.
    #[must_use]
    pub const fn is_in_play(self) -> bool {
        matches!(self, Zone::Active | Zone::Bench)
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Active => "active",
            Zone::Bench => "bench",
            Zone::Hand => "hand",
            Zone::Deck => "deck",
            Zone::Discard => "discard",
            Zone::Prize => "prize",
        };
        f.write_str(name)
    }
}

/// Where a card from hand should go.
///
/// `bench_index` selects a bench slot for evolution and energy attachment.
/// Playing a Basic Pokémon to the bench always appends, so the index is
/// ignored there. A missing index on a bench target means slot 0.
///
/// ```
/// use rust_tcg::zones::{Zone, ZoneTarget};
///
/// let target = ZoneTarget::bench_slot(2);
/// assert_eq!(target.zone, Zone::Bench);
/// assert_eq!(target.slot(), 2);
/// assert_eq!(ZoneTarget::bench().slot(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneTarget {
    pub zone: Zone,
    pub bench_index: Option<usize>,
}

impl ZoneTarget {
    /// Target a zone with no slot.
    #[must_use]
    pub const fn new(zone: Zone) -> Self {
        Self {
            zone,
            bench_index: None,
        }
    }

    /// Target the active slot.
    #[must_use]
    pub const fn active() -> Self {
        Self::new(Zone::Active)
    }

    /// Target the bench without naming a slot.
    #[must_use]
    pub const fn bench() -> Self {
        Self::new(Zone::Bench)
    }

    /// Target a specific bench slot.
    #[must_use]
    pub const fn bench_slot(index: usize) -> Self {
        Self {
            zone: Zone::Bench,
            bench_index: Some(index),
        }
    }

    /// Bench slot addressed by this target (0 when unspecified).
    #[must_use]
    pub fn slot(&self) -> usize {
        self.bench_index.unwrap_or(0)
    }
}

impl std::fmt::Display for ZoneTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.bench_index {
            Some(index) => write!(f, "{}[{}]", self.zone, index),
            None => write!(f, "{}", self.zone),
        }
    }
}
