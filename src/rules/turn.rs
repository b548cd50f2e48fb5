//! The turn state machine.
//!
//! `TurnEngine` is the host-facing surface of the engine. A match
//! alternates between the player's turn and the opponent's turn; the
//! `turn` counter increments once per full round.
//!
//! Every operation takes `&MatchState` and returns a new `MatchState`:
//! - Rejected moves return a clone of the input (logged at debug level)
//! - Once `game_over` is set, every operation returns the input unchanged
//! - Ending the player's turn runs the opponent policy to completion
//!   before returning
//!
//! ## Example
//!
//! ```
//! use rust_tcg::core::{GameRng, Side};
//! use rust_tcg::rules::TurnEngine;
//!
//! let engine = TurnEngine::standard();
//! let mut rng = GameRng::new(7);
//!
//! let state = engine.start_game("starter", &mut rng);
//! assert_eq!(state.player.hand.len(), 7);
//! assert_eq!(state.player.prize_cards.len(), 6);
//!
//! let state = engine.draw_card(&state);
//! assert_eq!(state.player.hand.len(), 8);
//!
//! let state = engine.end_turn(&state);
//! assert_eq!(state.current_turn, Side::Opponent);
//! ```

use std::sync::Arc;

use tracing::{debug, info};

use super::engine::RulesEngine;
use super::primitives::{self, Rejection};
use crate::cards::{Card, CardKind};
use crate::catalog::{CardCatalog, DeckFactory};
use crate::core::{Action, GameRng, MatchConfig, MatchState, PlayerState, Side};
use crate::error::Result;
use crate::opponent::{OpponentPolicy, OpponentTurn, ScriptedOpponent};
use crate::zones::{Zone, ZoneTarget};

/// Turn engine for one ruleset, catalog and opponent policy.
///
/// Holds no match state; one engine can drive any number of matches.
pub struct TurnEngine {
    config: MatchConfig,
    catalog: Arc<CardCatalog>,
    policy: Box<dyn OpponentPolicy>,
}

impl TurnEngine {
    /// Create an engine with the standard catalog and scripted opponent.
    pub fn new(config: MatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            catalog: CardCatalog::standard(),
            policy: Box::new(ScriptedOpponent),
        })
    }

    /// Create an engine with the default rules.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            config: MatchConfig::default(),
            catalog: CardCatalog::standard(),
            policy: Box::new(ScriptedOpponent),
        }
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: Arc<CardCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: impl OpponentPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn deck_factory(&self) -> DeckFactory<'_> {
        DeckFactory::new(&self.catalog)
    }

    // === Setup ===

    /// Uniformly shuffle a deck (Fisher–Yates).
    #[must_use]
    pub fn shuffle(mut deck: Vec<Card>, rng: &mut GameRng) -> Vec<Card> {
        rng.shuffle(&mut deck);
        deck
    }

    /// Start a match: the player plays `deck_id`, the opponent plays the
    /// configured opponent deck.
    #[must_use]
    pub fn start_game(&self, deck_id: &str, rng: &mut GameRng) -> MatchState {
        let factory = self.deck_factory();
        let player_deck = factory.build_deck(deck_id, Side::Player);
        let opponent_deck = factory.build_deck(&self.config.opponent_deck, Side::Opponent);
        self.start_game_with_decks(player_deck, opponent_deck, rng)
    }

    /// Start a match with caller-supplied decks.
    ///
    /// Both decks are shuffled, then each side is dealt its hand and prize
    /// pile from the top. The opponent fields its first Basic Pokémon in
    /// hand order as active and benches up to `opponent_opening_bench` more.
    /// Short decks deal as many cards as they have.
    #[must_use]
    pub fn start_game_with_decks(
        &self,
        player_deck: Vec<Card>,
        opponent_deck: Vec<Card>,
        rng: &mut GameRng,
    ) -> MatchState {
        let player_deck = Self::shuffle(player_deck, &mut rng.for_context("player-deck"));
        let opponent_deck = Self::shuffle(opponent_deck, &mut rng.for_context("opponent-deck"));

        let player = self.deal(player_deck);
        let mut opponent = self.deal(opponent_deck);
        self.seed_opponent(&mut opponent);

        info!(
            seed = rng.seed(),
            opponent_active = opponent.active.as_ref().map(|c| c.name.as_str()),
            opponent_bench = opponent.bench.len(),
            "match started"
        );
        MatchState::new(player, opponent)
    }

    fn deal(&self, deck: Vec<Card>) -> PlayerState {
        let mut side = PlayerState::with_deck(deck);
        side.hand = side.deal(self.config.hand_size);
        side.prize_cards = side.deal(self.config.prize_count);
        side
    }

    fn seed_opponent(&self, opponent: &mut PlayerState) {
        if let Some(index) = opponent.find_in_hand(Card::is_basic_pokemon) {
            if let Some(mut card) = opponent.take_from_hand(index) {
                primitives::enter_play(&mut card);
                opponent.active = Some(card);
            }
        }

        let bench_limit = self
            .config
            .opponent_opening_bench
            .min(self.config.bench_capacity);
        while opponent.bench.len() < bench_limit {
            let Some(index) = opponent.find_in_hand(Card::is_basic_pokemon) else {
                break;
            };
            if let Some(mut card) = opponent.take_from_hand(index) {
                primitives::enter_play(&mut card);
                opponent.bench.push_back(card);
            }
        }
    }

    // === Turn Operations ===

    /// Draw for the side holding the turn.
    ///
    /// Drawing from an empty deck ends the match in the other side's favour.
    #[must_use]
    pub fn draw_card(&self, state: &MatchState) -> MatchState {
        self.apply(state, &Action::Draw)
    }

    /// Play the player's hand card at `hand_index` to `target`.
    #[must_use]
    pub fn play_card(&self, state: &MatchState, hand_index: usize, target: ZoneTarget) -> MatchState {
        self.apply(state, &Action::PlayCard { hand_index, target })
    }

    /// Attach the player's hand energy at `hand_index` to the Pokémon at `target`.
    #[must_use]
    pub fn attach_energy(&self, state: &MatchState, hand_index: usize, target: ZoneTarget) -> MatchState {
        self.apply(state, &Action::AttachEnergy { hand_index, target })
    }

    /// Attack with the player's active Pokémon, then pass control to the
    /// opponent. The opponent policy does not run until the next `end_turn`.
    #[must_use]
    pub fn use_attack(&self, state: &MatchState, attack_index: usize) -> MatchState {
        self.apply(state, &Action::Attack { attack_index })
    }

    /// End the current turn.
    ///
    /// From the player's turn: control passes to the opponent and its
    /// policy plays one full turn. From the opponent's turn: control
    /// returns to the player and a new round begins.
    #[must_use]
    pub fn end_turn(&self, state: &MatchState) -> MatchState {
        self.apply(state, &Action::EndTurn)
    }

    fn run_opponent(&self, state: &mut MatchState) {
        debug!(policy = self.policy.name(), turn = state.turn, "opponent turn");
        let mut turn = OpponentTurn::new(state, &self.config);
        self.policy.take_turn(&mut turn);
    }

    fn player_targets(state: &MatchState) -> impl Iterator<Item = ZoneTarget> {
        std::iter::once(ZoneTarget::active()).chain((0..state.player.bench.len()).map(ZoneTarget::bench_slot))
    }
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl RulesEngine for TurnEngine {
    fn config(&self) -> &MatchConfig {
        &self.config
    }

    fn try_apply(&self, state: &MatchState, action: &Action) -> std::result::Result<MatchState, Rejection> {
        if state.game_over {
            return Err(Rejection::MatchOver);
        }

        let mut next = state.clone();
        let side = next.current_turn;
        match *action {
            Action::Draw => primitives::draw(&mut next, side)?,
            Action::PlayCard { hand_index, target } => {
                primitives::require_turn(&next, Side::Player)?;
                primitives::play_from_hand(&mut next, Side::Player, hand_index, target, self.config.bench_capacity)?;
            }
            Action::AttachEnergy { hand_index, target } => {
                primitives::require_turn(&next, Side::Player)?;
                primitives::attach_energy(&mut next, Side::Player, hand_index, target)?;
            }
            Action::Attack { attack_index } => {
                primitives::require_turn(&next, Side::Player)?;
                primitives::attack(&mut next, Side::Player, attack_index)?;
                next.pass_turn();
            }
            Action::EndTurn => {
                next.record(side, Action::EndTurn);
                next.pass_turn();
                if side == Side::Player {
                    self.run_opponent(&mut next);
                }
            }
        }
        Ok(next)
    }

    fn candidate_actions(&self, state: &MatchState, side: Side) -> Vec<Action> {
        let mut actions = vec![Action::Draw];
        if side == Side::Player {
            for (hand_index, card) in state.player.hand.iter().enumerate() {
                match &card.kind {
                    CardKind::Pokemon(pokemon) if pokemon.is_basic() => {
                        for target in [ZoneTarget::active(), ZoneTarget::bench()] {
                            actions.push(Action::PlayCard { hand_index, target });
                        }
                    }
                    CardKind::Pokemon(_) => {
                        for target in Self::player_targets(state) {
                            actions.push(Action::PlayCard { hand_index, target });
                        }
                    }
                    CardKind::Trainer(_) => {
                        let target = ZoneTarget::new(Zone::Discard);
                        actions.push(Action::PlayCard { hand_index, target });
                    }
                    CardKind::Energy(_) => {
                        for target in Self::player_targets(state) {
                            actions.push(Action::AttachEnergy { hand_index, target });
                        }
                    }
                }
            }
            let attacks = state
                .player
                .active
                .as_ref()
                .and_then(Card::as_pokemon)
                .map_or(0, |pokemon| pokemon.attacks.len());
            actions.extend((0..attacks).map(|attack_index| Action::Attack { attack_index }));
        }
        actions.push(Action::EndTurn);
        actions
    }
}
