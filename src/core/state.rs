//! Match state: both players' zones plus turn bookkeeping.
//!
//! ## PlayerState
//!
//! One side's six zones. The top of the deck and of the prize pile is
//! index 0.
//!
//! ## MatchState
//!
//! Complete state of a match:
//! - Both `PlayerState`s
//! - Turn counter and whose turn it is
//! - Terminal flag, winner, and how the match was won
//! - History of accepted actions
//!
//! Uses `im` persistent vectors for every zone so that each engine
//! operation can return a new snapshot without deep-copying the old one.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::entity::InstanceId;
use super::player::Side;
use crate::cards::Card;
use crate::error::Result;
use crate::rules::{GameResult, WinReason};
use crate::zones::{Zone, ZoneTarget};

/// One side's zones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub active: Option<Card>,
    pub bench: Vector<Card>,
    pub hand: Vector<Card>,
    pub deck: Vector<Card>,
    pub discard: Vector<Card>,
    pub prize_cards: Vector<Card>,
}

impl PlayerState {
    /// Create a player with only a deck.
    #[must_use]
    pub fn with_deck(deck: impl IntoIterator<Item = Card>) -> Self {
        Self {
            deck: deck.into_iter().collect(),
            ..Self::default()
        }
    }

    // === Deck and Hand ===

    /// Move the top card of the deck to the hand.
    ///
    /// Returns the drawn card's instance, or None if the deck is empty.
    pub fn draw(&mut self) -> Option<InstanceId> {
        let card = self.deck.pop_front()?;
        let instance = card.instance;
        self.hand.push_back(card);
        Some(instance)
    }

    /// Deal up to `count` cards from the top of the deck.
    pub fn deal(&mut self, count: usize) -> Vector<Card> {
        let count = count.min(self.deck.len());
        let rest = self.deck.split_off(count);
        std::mem::replace(&mut self.deck, rest)
    }

    /// Remove and return the hand card at `index`.
    pub fn take_from_hand(&mut self, index: usize) -> Option<Card> {
        (index < self.hand.len()).then(|| self.hand.remove(index))
    }

    /// Index of the first hand card matching `predicate`.
    pub fn find_in_hand(&self, predicate: impl Fn(&Card) -> bool) -> Option<usize> {
        self.hand.iter().position(predicate)
    }

    // === In Play ===

    /// The Pokémon occupying `target`, if any.
    #[must_use]
    pub fn slot(&self, target: ZoneTarget) -> Option<&Card> {
        match target.zone {
            Zone::Active => self.active.as_ref(),
            Zone::Bench => self.bench.get(target.slot()),
            _ => None,
        }
    }

    /// Mutable access to the Pokémon occupying `target`.
    pub fn slot_mut(&mut self, target: ZoneTarget) -> Option<&mut Card> {
        match target.zone {
            Zone::Active => self.active.as_mut(),
            Zone::Bench => self.bench.get_mut(target.slot()),
            _ => None,
        }
    }

    /// Check if another Pokémon fits on the bench.
    #[must_use]
    pub fn has_bench_room(&self, capacity: usize) -> bool {
        self.bench.len() < capacity
    }

    /// Move the first benched Pokémon into the empty active slot.
    ///
    /// Returns false if the active slot is occupied or the bench is empty.
    pub fn promote_from_bench(&mut self) -> bool {
        if self.active.is_some() {
            return false;
        }
        match self.bench.pop_front() {
            Some(card) => {
                self.active = Some(card);
                true
            }
            None => false,
        }
    }

    /// Put a Pokémon leaving play into the discard pile, followed by
    /// everything that was attached to it.
    pub fn discard_from_play(&mut self, mut card: Card) {
        let detached = card.leave_play();
        self.discard.push_back(card);
        self.discard.extend(detached);
    }

    /// Move the top prize card to the hand.
    pub fn claim_prize(&mut self) -> Option<InstanceId> {
        let card = self.prize_cards.pop_front()?;
        let instance = card.instance;
        self.hand.push_back(card);
        Some(instance)
    }

    // === Accounting ===

    /// Every card this side holds, counting attachments.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.all_cards().map(Card::card_count).sum()
    }

    /// Instance ids of every card this side holds, counting attachments.
    #[must_use]
    pub fn instances(&self) -> Vec<InstanceId> {
        let mut out = Vec::with_capacity(self.card_count());
        for card in self.all_cards() {
            card.collect_instances(&mut out);
        }
        out
    }

    fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.active
            .iter()
            .chain(self.bench.iter())
            .chain(self.hand.iter())
            .chain(self.deck.iter())
            .chain(self.discard.iter())
            .chain(self.prize_cards.iter())
    }
}

/// Complete match state.
///
/// `MatchState` is a value: engine operations take `&MatchState` and
/// return a new one. Once `game_over` is set the engine returns it
/// unchanged from every operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub player: PlayerState,
    pub opponent: PlayerState,

    /// Round counter (starts at 1, increments when control returns to the player).
    pub turn: u32,

    /// Side whose zones the engine may currently change.
    pub current_turn: Side,

    pub game_over: bool,
    pub winner: Option<Side>,
    pub win_reason: Option<WinReason>,

    /// Action sequence within the current turn.
    pub action_sequence: u32,

    /// Accepted actions, oldest first.
    pub history: Vector<ActionRecord>,
}

impl MatchState {
    /// Create a match at turn 1 with the player to act.
    #[must_use]
    pub fn new(player: PlayerState, opponent: PlayerState) -> Self {
        Self {
            player,
            opponent,
            turn: 1,
            current_turn: Side::Player,
            game_over: false,
            winner: None,
            win_reason: None,
            action_sequence: 0,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn side(&self, side: Side) -> &PlayerState {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut PlayerState {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Check if `side` holds the turn and the match is still running.
    #[must_use]
    pub fn can_act(&self, side: Side) -> bool {
        !self.game_over && self.current_turn == side
    }

    /// The match result, once the match is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match (self.game_over, self.winner, self.win_reason) {
            (true, Some(winner), Some(reason)) => Some(GameResult { winner, reason }),
            _ => None,
        }
    }

    // === Turn Advancement ===

    /// Hand control to the other side. Returning to the player starts a new round.
    pub fn pass_turn(&mut self) {
        self.current_turn = self.current_turn.other();
        if self.current_turn == Side::Player {
            self.turn += 1;
        }
        self.action_sequence = 0;
    }

    // === Action History ===

    /// Record an accepted action.
    pub fn record(&mut self, side: Side, action: Action) {
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        self.history
            .push_back(ActionRecord::new(side, action, self.turn, sequence));
    }

    // === Checkpointing ===

    /// Encode the state as a binary checkpoint.
    pub fn snapshot(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a checkpoint produced by `snapshot`.
    pub fn restore(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
