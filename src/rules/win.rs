//! Win detection.
//!
//! There is no separate evaluation pass: the primitives call
//! `declare_winner` at the exact point a terminal condition arises
//! (empty deck on draw, last prize claimed, nothing left to promote after a
//! knockout). The first declared result is final.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{MatchState, Side};

/// How a match was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// The loser had to draw from an empty deck.
    DeckOut,
    /// The winner claimed their last prize card.
    PrizesTaken,
    /// The loser had no Pokémon left to promote after a knockout.
    NoPokemonLeft,
}

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Side,
    pub reason: WinReason,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        self.winner == side
    }
}

/// End the match in favour of `winner`.
///
/// Does nothing if the match is already over.
pub(crate) fn declare_winner(state: &mut MatchState, winner: Side, reason: WinReason) {
    if state.game_over {
        return;
    }
    state.game_over = true;
    state.winner = Some(winner);
    state.win_reason = Some(reason);
    info!(%winner, ?reason, turn = state.turn, "match over");
}
