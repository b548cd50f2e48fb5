//! # rust-tcg
//!
//! A rules engine for a two-player Pokémon-style trading card game, with a
//! scripted opponent.
//!
//! ## Design Principles
//!
//! 1. **Value Semantics**: Every operation takes a `MatchState` and returns
//!    a new one. Zones are `im` persistent vectors, so snapshots are cheap.
//!
//! 2. **Silent Rejection**: Illegal moves (wrong turn, bad index, too little
//!    energy) return the state unchanged. Only host-facing setup and I/O
//!    return `Result`.
//!
//! 3. **One Rulebook**: The player path and the opponent policy move cards
//!    through the same primitives, parameterised by `Side`.
//!
//! 4. **Injected Randomness**: Shuffling draws from a seeded `GameRng`
//!    passed in by the caller, so matches replay exactly.
//!
//! ## Modules
//!
//! - `core`: Sides, instance ids, state, actions, RNG, configuration
//! - `zones`: Zone names and slot targets
//! - `cards`: Card definitions and in-match card instances
//! - `catalog`: Card catalog, built-in decks, deck construction and validation
//! - `rules`: `TurnEngine`, win detection, and the `RulesEngine` trait
//! - `opponent`: The opponent policy and its scripted implementation
//!
//! ## Example
//!
//! ```
//! use rust_tcg::{GameRng, RulesEngine, Side, TurnEngine};
//!
//! let engine = TurnEngine::standard();
//! let mut state = engine.start_game("fire", &mut GameRng::new(1));
//!
//! // Play the first legal move each turn until the match ends or a cap is hit.
//! for _ in 0..200 {
//!     if state.game_over {
//!         break;
//!     }
//!     let side = state.current_turn;
//!     let action = engine.legal_actions(&state, side)[0];
//!     state = engine.apply(&state, &action);
//! }
//!
//! assert_eq!(state.player.card_count(), 60);
//! ```

pub mod core;
pub mod zones;
pub mod cards;
pub mod catalog;
pub mod rules;
pub mod opponent;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    InstanceId, Side,
    GameRng,
    MatchConfig, DEFAULT_DECK,
    Action, ActionRecord,
    MatchState, PlayerState,
};

pub use crate::zones::{Zone, ZoneTarget};

pub use crate::cards::{
    Card, CardId, CardDefinition, CardKind,
    PokemonCard, TrainerCard, EnergyCard, Attack, Ability,
    ElementType, Stage, TrainerKind,
};

pub use crate::catalog::{CardCatalog, DeckFactory, DeckList, validate_deck};

pub use crate::rules::{RulesEngine, TurnEngine, GameResult, WinReason, Rejection};

pub use crate::opponent::{OpponentPolicy, OpponentTurn, ScriptedOpponent};

pub use crate::error::{Result, TcgError};
