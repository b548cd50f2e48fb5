//! Match configuration.
//!
//! `MatchConfig` holds the numeric rules of a match: deck size, opening
//! hand, prize pile, bench capacity, and the opponent's setup. Hosts either
//! use the defaults, adjust them with the `with_*` builder methods, or load
//! them from JSON.
//!
//! ```
//! use rust_tcg::core::MatchConfig;
//!
//! let config = MatchConfig::default().with_prize_count(4);
//! assert_eq!(config.hand_size, 7);
//! assert_eq!(config.prize_count, 4);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, TcgError};

/// Deck used when a deck id is unknown and for the opponent by default.
pub const DEFAULT_DECK: &str = "starter";

/// Numeric rules for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Exact size of a legal deck.
    pub deck_size: usize,

    /// Cards dealt to each opening hand.
    pub hand_size: usize,

    /// Cards set aside as each player's prize pile.
    pub prize_count: usize,

    /// Maximum benched Pokémon per player.
    pub bench_capacity: usize,

    /// Basic Pokémon the opponent benches during setup (after its active).
    pub opponent_opening_bench: usize,

    /// Copies of one card allowed in a deck (basic energy exempt).
    pub max_copies: usize,

    /// Deck the opponent plays.
    pub opponent_deck: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            deck_size: 60,
            hand_size: 7,
            prize_count: 6,
            bench_capacity: 5,
            opponent_opening_bench: 3,
            max_copies: 4,
            opponent_deck: DEFAULT_DECK.to_string(),
        }
    }
}

impl MatchConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration can host a match.
    pub fn validate(&self) -> Result<()> {
        if self.bench_capacity == 0 {
            return Err(TcgError::InvalidConfig("bench_capacity must be at least 1".into()));
        }
        if self.prize_count == 0 {
            return Err(TcgError::InvalidConfig("prize_count must be at least 1".into()));
        }
        let dealt = self.hand_size.checked_add(self.prize_count);
        if dealt.map_or(true, |n| n > self.deck_size) {
            return Err(TcgError::InvalidConfig(format!(
                "hand_size ({}) + prize_count ({}) exceeds deck_size ({})",
                self.hand_size, self.prize_count, self.deck_size
            )));
        }
        if self.opponent_opening_bench > self.bench_capacity {
            return Err(TcgError::InvalidConfig(format!(
                "opponent_opening_bench ({}) exceeds bench_capacity ({})",
                self.opponent_opening_bench, self.bench_capacity
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_deck_size(mut self, size: usize) -> Self {
        self.deck_size = size;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_prize_count(mut self, count: usize) -> Self {
        self.prize_count = count;
        self
    }

    #[must_use]
    pub fn with_bench_capacity(mut self, capacity: usize) -> Self {
        self.bench_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_opponent_opening_bench(mut self, count: usize) -> Self {
        self.opponent_opening_bench = count;
        self
    }

    #[must_use]
    pub fn with_opponent_deck(mut self, deck_id: impl Into<String>) -> Self {
        self.opponent_deck = deck_id.into();
        self
    }
}
