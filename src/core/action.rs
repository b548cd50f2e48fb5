//! Action representation and match history.
//!
//! An `Action` is one player intent: draw, play a card, attach energy,
//! attack, or end the turn. Hosts can either call the `TurnEngine`
//! operations directly or queue `Action` values and hand them to
//! `TurnEngine::apply`.
//!
//! Every accepted action, including the opponent's scripted ones, is
//! appended to the match history as an `ActionRecord`.

use serde::{Deserialize, Serialize};

use super::player::Side;
use crate::zones::ZoneTarget;

/// A player intent.
///
/// ## Example
///
/// ```
/// use rust_tcg::core::Action;
/// use rust_tcg::zones::ZoneTarget;
///
/// let play = Action::PlayCard { hand_index: 0, target: ZoneTarget::active() };
/// let attack = Action::Attack { attack_index: 0 };
///
/// assert_ne!(play, attack);
/// assert_eq!(Action::EndTurn.to_string(), "end turn");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Draw the top card of the deck.
    Draw,

    /// Play the hand card at `hand_index` to `target`.
    PlayCard { hand_index: usize, target: ZoneTarget },

    /// Attach the energy card at `hand_index` to the Pokémon at `target`.
    AttachEnergy { hand_index: usize, target: ZoneTarget },

    /// Use the active Pokémon's attack at `attack_index`.
    Attack { attack_index: usize },

    /// Pass control to the other side.
    EndTurn,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Draw => write!(f, "draw"),
            Action::PlayCard { hand_index, target } => write!(f, "play hand[{}] to {}", hand_index, target),
            Action::AttachEnergy { hand_index, target } => {
                write!(f, "attach hand[{}] to {}", hand_index, target)
            }
            Action::Attack { attack_index } => write!(f, "attack #{}", attack_index),
            Action::EndTurn => write!(f, "end turn"),
        }
    }
}

/// An accepted action with metadata for history tracking.
///
/// Used for:
/// - Replay/debugging
/// - Showing the opponent's scripted turn to the player
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side that took this action.
    pub side: Side,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(side: Side, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            side,
            action,
            turn,
            sequence,
        }
    }
}
