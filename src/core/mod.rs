//! Core engine types: sides, instance ids, state, actions, RNG, configuration.
//!
//! This module contains the value types every other module builds on.
//! `MatchState` is plain data; the rules that change it live in `rules`.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use entity::InstanceId;
pub use player::Side;
pub use rng::GameRng;
pub use config::{MatchConfig, DEFAULT_DECK};
pub use action::{Action, ActionRecord};
pub use state::{MatchState, PlayerState};
