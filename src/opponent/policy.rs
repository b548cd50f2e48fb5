//! Opponent policy trait and the move surface it plays through.
//!
//! A policy never touches `MatchState` zones directly. It receives an
//! `OpponentTurn`, which exposes the same primitives the player path uses,
//! bound to the opponent's side. Each move is all-or-nothing: a rejected
//! move leaves the state exactly as it was.

use crate::core::{MatchConfig, MatchState, PlayerState, Side};
use crate::rules::{primitives, Outcome};
use crate::zones::ZoneTarget;

// =============================================================================
// Opponent Policy
// =============================================================================

/// Policy that plays the opponent's turn.
///
/// Called once per opponent turn by `TurnEngine::end_turn`, after control
/// has passed to the opponent. The policy never ends its own turn.
pub trait OpponentPolicy: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Play one turn.
    fn take_turn(&self, turn: &mut OpponentTurn<'_>);
}

// =============================================================================
// Opponent Turn
// =============================================================================

/// Moves available to the opponent during its turn.
pub struct OpponentTurn<'a> {
    state: &'a mut MatchState,
    config: &'a MatchConfig,
}

impl<'a> OpponentTurn<'a> {
    pub(crate) fn new(state: &'a mut MatchState, config: &'a MatchConfig) -> Self {
        Self { state, config }
    }

    /// The whole match, read-only.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        self.config
    }

    /// The opponent's own zones.
    #[must_use]
    pub fn own(&self) -> &PlayerState {
        &self.state.opponent
    }

    /// The player's zones, as seen from across the table.
    #[must_use]
    pub fn defender(&self) -> &PlayerState {
        &self.state.player
    }

    /// Draw a card. An empty deck ends the match in the player's favour.
    pub fn draw(&mut self) -> Outcome {
        self.transact(primitives::draw)
    }

    /// Play a hand card to `target` (Basic placement, evolution, or trainer).
    pub fn play_card(&mut self, hand_index: usize, target: ZoneTarget) -> Outcome {
        let bench_capacity = self.config.bench_capacity;
        self.transact(|state, side| {
            primitives::play_from_hand(state, side, hand_index, target, bench_capacity)
        })
    }

    /// Attach a hand energy card to the Pokémon at `target`.
    pub fn attach_energy(&mut self, hand_index: usize, target: ZoneTarget) -> Outcome {
        self.transact(|state, side| primitives::attach_energy(state, side, hand_index, target))
    }

    /// Attack with the active Pokémon. Does not end the turn.
    pub fn attack(&mut self, attack_index: usize) -> Outcome {
        self.transact(|state, side| primitives::attack(state, side, attack_index))
    }

    fn transact(&mut self, op: impl FnOnce(&mut MatchState, Side) -> Outcome) -> Outcome {
        primitives::require_turn(self.state, Side::Opponent)?;
        let mut next = self.state.clone();
        op(&mut next, Side::Opponent)?;
        *self.state = next;
        Ok(())
    }
}
