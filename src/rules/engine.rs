//! Rules engine trait.
//!
//! Hosts that drive a match through `Action` values (a UI that greys out
//! illegal buttons, a replay tool, a search agent) talk to the engine
//! through `RulesEngine`:
//! - What actions are legal
//! - How actions modify state
//! - Whether the match is over

use tracing::debug;

use super::primitives::Rejection;
use super::win::GameResult;
use crate::core::{Action, MatchConfig, MatchState, Side};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `candidate_actions`: may over-approximate; `legal_actions` filters
///   candidates by dry-running them through `try_apply`
/// - `try_apply`: must leave `state` untouched and be deterministic
/// - `is_terminal`: return None while the match continues
pub trait RulesEngine {
    /// Get the match configuration.
    fn config(&self) -> &MatchConfig;

    /// Apply an action for the side holding the turn, or say why it is illegal.
    fn try_apply(&self, state: &MatchState, action: &Action) -> Result<MatchState, Rejection>;

    /// Actions worth trying for `side`. May include illegal ones.
    fn candidate_actions(&self, state: &MatchState, side: Side) -> Vec<Action>;

    /// Check if the match is over.
    fn is_terminal(&self, state: &MatchState) -> Option<GameResult> {
        state.result()
    }

    // === Convenience Methods ===

    /// Apply an action. Illegal actions return the state unchanged.
    fn apply(&self, state: &MatchState, action: &Action) -> MatchState {
        match self.try_apply(state, action) {
            Ok(next) => next,
            Err(reason) => {
                debug!(%action, %reason, "rejected");
                state.clone()
            }
        }
    }

    /// Enumerate every action the engine would accept from `side` right now.
    ///
    /// Empty if the match is over or `side` does not hold the turn.
    fn legal_actions(&self, state: &MatchState, side: Side) -> Vec<Action> {
        if !state.can_act(side) {
            return Vec::new();
        }
        self.candidate_actions(state, side)
            .into_iter()
            .filter(|action| self.try_apply(state, action).is_ok())
            .collect()
    }
}
