//! Match rules.
//!
//! - `primitives`: the zone-moving operations shared by both sides
//! - `turn`: `TurnEngine`, the host-facing state machine
//! - `win`: terminal conditions and `GameResult`
//! - `engine`: the `RulesEngine` trait for action-driven hosts
//!
//! Every operation takes a `MatchState` and returns a new one. Illegal
//! moves return the input unchanged; they are never errors.

pub mod engine;
pub(crate) mod primitives;
pub mod turn;
pub mod win;

pub use engine::RulesEngine;
pub use primitives::{Outcome, Rejection};
pub use turn::TurnEngine;
pub use win::{GameResult, WinReason};
