//! The scripted opponent.
//!
//! `OpponentPolicy` decides the opponent's moves; `OpponentTurn` is the only
//! way a policy can change the match, and it routes every move through the
//! same rule primitives as the player path.

pub mod policy;
pub mod scripted;

pub use policy::{OpponentPolicy, OpponentTurn};
pub use scripted::ScriptedOpponent;
