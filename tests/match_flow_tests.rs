//! Match flow tests.
//!
//! These tests drive whole matches through `TurnEngine`:
//! - Opening deal and opponent setup
//! - Drawing, playing, evolving, attaching, attacking
//! - Knockouts, prizes, promotion, and every way a match can end

use std::sync::Arc;

use rust_tcg::cards::{Attack, Card, CardDefinition, ElementType, EnergyCard, PokemonCard, Stage, TrainerKind};
use rust_tcg::catalog::{CardCatalog, DeckList};
use rust_tcg::core::{Action, GameRng, InstanceId, MatchState, PlayerState, Side};
use rust_tcg::opponent::{OpponentPolicy, OpponentTurn};
use rust_tcg::rules::{RulesEngine, TurnEngine, WinReason};
use rust_tcg::zones::{Zone, ZoneTarget};

/// Opponent that does nothing, so tests control the board.
struct Passive;

impl OpponentPolicy for Passive {
    fn name(&self) -> &str {
        "passive"
    }

    fn take_turn(&self, _turn: &mut OpponentTurn<'_>) {}
}

fn tackle_def() -> CardDefinition {
    CardDefinition::pokemon(
        "rattata",
        "Rattata",
        PokemonCard::basic(60, ElementType::Colorless).with_attack(Attack::new("Tackle", 10)),
    )
}

fn pikachu_def() -> CardDefinition {
    CardDefinition::pokemon(
        "pikachu",
        "Pikachu",
        PokemonCard::basic(60, ElementType::Lightning)
            .with_attack(Attack::new("Gnaw", 10).with_cost(&[ElementType::Colorless]))
            .with_attack(Attack::new("Thunder Jolt", 30).with_cost(&[ElementType::Lightning, ElementType::Colorless])),
    )
}

fn raichu_def() -> CardDefinition {
    CardDefinition::pokemon(
        "raichu",
        "Raichu",
        PokemonCard::evolution(90, Stage::Stage1, ElementType::Lightning, "Pikachu")
            .with_attack(Attack::new("Agility", 20).with_cost(&[ElementType::Lightning, ElementType::Colorless])),
    )
}

fn ivysaur_def() -> CardDefinition {
    CardDefinition::pokemon(
        "ivysaur",
        "Ivysaur",
        PokemonCard::evolution(70, Stage::Stage1, ElementType::Grass, "Bulbasaur")
            .with_attack(Attack::new("Vine Whip", 30)),
    )
}

fn lightning_def() -> CardDefinition {
    CardDefinition::energy("lightning-energy", "Lightning Energy", EnergyCard::basic(ElementType::Lightning))
}

fn potion_def() -> CardDefinition {
    CardDefinition::trainer("potion", "Potion", TrainerKind::Item, "Heal 20 damage.")
}

fn card(def: &CardDefinition, side: Side, serial: u16) -> Card {
    def.instantiate(InstanceId::new(side, serial))
}

/// A catalog whose only deck is 60 copies of a 60 HP Basic with a free
/// 10-damage attack.
fn tackle_catalog() -> Arc<CardCatalog> {
    let mut catalog = CardCatalog::new();
    catalog.register(tackle_def()).unwrap();
    catalog
        .register_deck("starter", DeckList::new().with("rattata", 60))
        .unwrap();
    Arc::new(catalog)
}

fn passive_engine() -> TurnEngine {
    TurnEngine::standard().with_policy(Passive)
}

/// A hand-built match with the player to act.
fn board(player: PlayerState, opponent: PlayerState) -> MatchState {
    MatchState::new(player, opponent)
}

// =============================================================================
// Setup
// =============================================================================

#[test]
fn test_opening_deal_partitions_deck() {
    let engine = TurnEngine::standard();
    let state = engine.start_game("water", &mut GameRng::new(42));

    for side in Side::ALL {
        let zones = state.side(side);
        let mut ids = zones.instances();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total, "{} holds a card twice", side);
        assert_eq!(total, 60);
        assert!(ids.iter().all(|id| id.owner == side));
    }
    assert_eq!(state.player.hand.len(), 7);
    assert_eq!(state.player.prize_cards.len(), 6);
    assert_eq!(state.player.deck.len(), 47);
}

#[test]
fn test_unknown_deck_plays_starter() {
    let engine = TurnEngine::standard();
    let state = engine.start_game("no-such-deck", &mut GameRng::new(1));

    assert_eq!(state.player.card_count(), 60);
    assert!(state.player.deck.iter().all(|c| {
        ["pikachu", "raichu", "bulbasaur", "ivysaur", "venusaur", "bill", "professor-oak", "potion", "switch"]
            .contains(&c.id.as_str())
            || c.is_energy()
    }));
}

#[test]
fn test_opponent_opening_board() {
    let engine = TurnEngine::standard().with_catalog(tackle_catalog());
    let state = engine.start_game("starter", &mut GameRng::new(3));

    // All-Basic deck: active plus three benched, three left in hand.
    assert!(state.opponent.active.is_some());
    assert_eq!(state.opponent.bench.len(), 3);
    assert_eq!(state.opponent.hand.len(), 3);
    assert!(state.player.active.is_none());
}

#[test]
fn test_opponent_without_basics_leaves_active_empty() {
    let engine = passive_engine();
    let energy: Vec<Card> = (0..60).map(|i| card(&lightning_def(), Side::Opponent, i)).collect();
    let mine: Vec<Card> = (0..60).map(|i| card(&pikachu_def(), Side::Player, i)).collect();

    let state = engine.start_game_with_decks(mine, energy, &mut GameRng::new(0));

    assert!(state.opponent.active.is_none());
    assert!(state.opponent.bench.is_empty());
    assert_eq!(state.opponent.hand.len(), 7);
}

// =============================================================================
// Draw
// =============================================================================

#[test]
fn test_draw_moves_top_card() {
    let engine = passive_engine();
    let state = engine.start_game("starter", &mut GameRng::new(10));
    let top = state.player.deck[0].instance;

    let next = engine.draw_card(&state);

    assert_eq!(next.player.deck.len(), state.player.deck.len() - 1);
    assert_eq!(next.player.hand.len(), state.player.hand.len() + 1);
    assert_eq!(next.player.hand.last().unwrap().instance, top);
    assert!(!next.game_over);
}

#[test]
fn test_draw_from_empty_deck_loses() {
    let engine = passive_engine();
    let mut state = engine.start_game("starter", &mut GameRng::new(10));
    state.player.deck.clear();

    let next = engine.draw_card(&state);

    assert!(next.game_over);
    assert_eq!(next.winner, Some(Side::Opponent));
    assert_eq!(next.win_reason, Some(WinReason::DeckOut));
    assert_eq!(next.player.hand, state.player.hand);
}

// =============================================================================
// Playing Cards
// =============================================================================

#[test]
fn test_basic_to_active_then_occupied_is_noop() {
    let engine = passive_engine();
    let mut player = PlayerState::default();
    player.hand = (0..2).map(|i| card(&pikachu_def(), Side::Player, i)).collect();
    let state = board(player, PlayerState::default());

    let once = engine.play_card(&state, 0, ZoneTarget::active());
    assert_eq!(once.player.active.as_ref().unwrap().instance.serial, 0);

    let twice = engine.play_card(&once, 0, ZoneTarget::active());
    assert_eq!(twice, once);
}

#[test]
fn test_bench_capacity_five() {
    let engine = passive_engine();
    let mut player = PlayerState::default();
    player.hand = (0..6).map(|i| card(&pikachu_def(), Side::Player, i)).collect();
    let mut state = board(player, PlayerState::default());

    for _ in 0..5 {
        state = engine.play_card(&state, 0, ZoneTarget::bench());
    }
    assert_eq!(state.player.bench.len(), 5);

    let full = engine.play_card(&state, 0, ZoneTarget::bench());
    assert_eq!(full, state);
}

#[test]
fn test_evolution_preserves_energy_and_resets_hp() {
    let engine = passive_engine();
    let mut active = card(&pikachu_def(), Side::Player, 0);
    {
        let pokemon = active.as_pokemon_mut().unwrap();
        pokemon.attached_energy.push(card(&lightning_def(), Side::Player, 1));
        pokemon.attached_energy.push(card(&lightning_def(), Side::Player, 2));
        pokemon.take_damage(40);
    }
    let mut player = PlayerState::default();
    player.active = Some(active);
    player.hand.push_back(card(&raichu_def(), Side::Player, 3));
    let state = board(player, PlayerState::default());

    let next = engine.play_card(&state, 0, ZoneTarget::active());

    let evolved = next.player.active.as_ref().unwrap();
    let pokemon = evolved.as_pokemon().unwrap();
    assert_eq!(evolved.name, "Raichu");
    assert_eq!(pokemon.energy_count(), 2);
    assert_eq!(pokemon.hp, 90);
    assert_eq!(next.player.card_count(), state.player.card_count());
}

#[test]
fn test_evolution_on_bench_slot() {
    let engine = passive_engine();
    let mut player = PlayerState::default();
    player.active = Some(card(&tackle_def(), Side::Player, 0));
    player.bench.push_back(card(&tackle_def(), Side::Player, 1));
    player.bench.push_back(card(&pikachu_def(), Side::Player, 2));
    player.hand.push_back(card(&raichu_def(), Side::Player, 3));
    let state = board(player, PlayerState::default());

    let wrong = engine.play_card(&state, 0, ZoneTarget::bench_slot(0));
    assert_eq!(wrong, state);

    let next = engine.play_card(&state, 0, ZoneTarget::bench_slot(1));
    assert_eq!(next.player.bench[1].name, "Raichu");
    assert_eq!(next.player.bench[0].name, "Rattata");
    assert!(next.player.hand.is_empty());
}

#[test]
fn test_evolution_name_mismatch_is_noop() {
    let engine = passive_engine();
    let mut player = PlayerState::default();
    player.active = Some(card(&pikachu_def(), Side::Player, 0));
    player.hand.push_back(card(&ivysaur_def(), Side::Player, 1));
    let state = board(player, PlayerState::default());

    assert_eq!(engine.play_card(&state, 0, ZoneTarget::active()), state);
}

#[test]
fn test_trainer_goes_to_discard() {
    let engine = passive_engine();
    let mut player = PlayerState::default();
    player.hand.push_back(card(&potion_def(), Side::Player, 0));
    let state = board(player, PlayerState::default());

    let next = engine.play_card(&state, 0, ZoneTarget::new(Zone::Discard));

    assert!(next.player.hand.is_empty());
    assert_eq!(next.player.discard[0].name, "Potion");
    assert_eq!(next.history.len(), 1);
}

#[test]
fn test_energy_cannot_be_played() {
    let engine = passive_engine();
    let mut player = PlayerState::default();
    player.hand.push_back(card(&lightning_def(), Side::Player, 0));
    let state = board(player, PlayerState::default());

    assert_eq!(engine.play_card(&state, 0, ZoneTarget::active()), state);
    assert_eq!(engine.play_card(&state, 0, ZoneTarget::bench()), state);
}

#[test]
fn test_out_of_range_indices_are_noops() {
    let engine = passive_engine();
    let state = engine.start_game("starter", &mut GameRng::new(5));

    assert_eq!(engine.play_card(&state, 99, ZoneTarget::active()), state);
    assert_eq!(engine.attach_energy(&state, 99, ZoneTarget::active()), state);
    assert_eq!(engine.use_attack(&state, 99), state);
}

// =============================================================================
// Energy
// =============================================================================

#[test]
fn test_attach_energy_to_active_and_bench() {
    let engine = passive_engine();
    let mut player = PlayerState::default();
    player.active = Some(card(&pikachu_def(), Side::Player, 0));
    player.bench.push_back(card(&pikachu_def(), Side::Player, 1));
    player.hand = (2..5).map(|i| card(&lightning_def(), Side::Player, i)).collect();
    let state = board(player, PlayerState::default());

    let state = engine.attach_energy(&state, 0, ZoneTarget::active());
    let state = engine.attach_energy(&state, 0, ZoneTarget::active());
    let state = engine.attach_energy(&state, 0, ZoneTarget::bench_slot(0));

    let active = state.player.active.as_ref().unwrap().as_pokemon().unwrap();
    assert_eq!(active.energy_count(), 2);
    assert_eq!(state.player.bench[0].as_pokemon().unwrap().energy_count(), 1);
    assert!(state.player.hand.is_empty());
}

#[test]
fn test_attach_to_empty_slot_is_noop() {
    let engine = passive_engine();
    let mut player = PlayerState::default();
    player.active = Some(card(&pikachu_def(), Side::Player, 0));
    player.hand.push_back(card(&lightning_def(), Side::Player, 1));
    let state = board(player, PlayerState::default());

    assert_eq!(engine.attach_energy(&state, 0, ZoneTarget::bench_slot(0)), state);
    assert_eq!(engine.attach_energy(&state, 0, ZoneTarget::new(Zone::Hand)), state);
}

#[test]
fn test_attach_non_energy_is_noop() {
    let engine = passive_engine();
    let mut player = PlayerState::default();
    player.active = Some(card(&pikachu_def(), Side::Player, 0));
    player.hand.push_back(card(&potion_def(), Side::Player, 1));
    let state = board(player, PlayerState::default());

    assert_eq!(engine.attach_energy(&state, 0, ZoneTarget::active()), state);
}

// =============================================================================
// Attacks and Knockouts
// =============================================================================

#[test]
fn test_attack_needs_energy_count() {
    let engine = passive_engine();
    let mut player = PlayerState::default();
    player.active = Some(card(&pikachu_def(), Side::Player, 0));
    player.hand.push_back(card(&lightning_def(), Side::Player, 1));
    let mut opponent = PlayerState::default();
    opponent.active = Some(card(&pikachu_def(), Side::Opponent, 0));
    let state = board(player, opponent);

    assert_eq!(engine.use_attack(&state, 0), state);

    let charged = engine.attach_energy(&state, 0, ZoneTarget::active());
    assert_eq!(engine.use_attack(&charged, 1), charged);

    let hit = engine.use_attack(&charged, 0);
    assert_eq!(hit.opponent.active.as_ref().unwrap().as_pokemon().unwrap().hp, 50);
    assert_eq!(hit.current_turn, Side::Opponent);
}

#[test]
fn test_attack_without_defender_flips_turn() {
    let engine = passive_engine();
    let mut player = PlayerState::default();
    player.active = Some(card(&tackle_def(), Side::Player, 0));
    let state = board(player, PlayerState::default());

    let next = engine.use_attack(&state, 0);

    assert_eq!(next.current_turn, Side::Opponent);
    assert!(!next.game_over);
    assert_eq!(next.opponent, state.opponent);
}

#[test]
fn test_tackle_deck_knockout_scenario() {
    let engine = TurnEngine::standard()
        .with_catalog(tackle_catalog())
        .with_policy(Passive);
    let state = engine.start_game("starter", &mut GameRng::new(77));
    assert_eq!(state.player.hand.len(), 7);
    assert_eq!(state.player.prize_cards.len(), 6);

    let mut state = engine.play_card(&state, 0, ZoneTarget::active());
    state
        .opponent
        .active
        .as_mut()
        .and_then(Card::as_pokemon_mut)
        .unwrap()
        .hp = 10;
    let hand_before = state.player.hand.len();
    let prizes_before = state.player.prize_cards.len();
    let bench_head = state.opponent.bench[0].instance;

    let next = engine.use_attack(&state, 0);

    assert_eq!(next.player.hand.len(), hand_before + 1);
    assert_eq!(next.player.prize_cards.len(), prizes_before - 1);
    assert_eq!(next.opponent.active.as_ref().unwrap().instance, bench_head);
    assert_eq!(next.opponent.bench.len(), 2);
    assert_eq!(next.opponent.discard.len(), 1);
    assert_eq!(next.current_turn, Side::Opponent);
    assert!(!next.game_over);
}

#[test]
fn test_knockout_with_empty_bench_ends_match() {
    let engine = passive_engine();
    let mut player = PlayerState::default();
    player.active = Some(card(&tackle_def(), Side::Player, 0));
    player.prize_cards = (1..7).map(|i| card(&tackle_def(), Side::Player, i)).collect();
    let mut weak = card(&pikachu_def(), Side::Opponent, 0);
    weak.as_pokemon_mut().unwrap().hp = 10;
    weak.as_pokemon_mut()
        .unwrap()
        .attached_energy
        .push(card(&lightning_def(), Side::Opponent, 1));
    let mut opponent = PlayerState::default();
    opponent.active = Some(weak);
    let state = board(player, opponent);

    let next = engine.use_attack(&state, 0);

    assert!(next.game_over);
    assert_eq!(next.winner, Some(Side::Player));
    assert_eq!(next.win_reason, Some(WinReason::NoPokemonLeft));
    assert!(next.opponent.active.is_none());
    // Pokémon first, then its energy.
    assert_eq!(next.opponent.discard.len(), 2);
    assert_eq!(next.opponent.discard[0].name, "Pikachu");
    assert_eq!(next.opponent.card_count(), state.opponent.card_count());
}

#[test]
fn test_last_prize_wins() {
    let engine = passive_engine();
    let mut player = PlayerState::default();
    player.active = Some(card(&tackle_def(), Side::Player, 0));
    player.prize_cards.push_back(card(&tackle_def(), Side::Player, 1));
    let mut weak = card(&pikachu_def(), Side::Opponent, 0);
    weak.as_pokemon_mut().unwrap().hp = 10;
    let mut opponent = PlayerState::default();
    opponent.active = Some(weak);
    opponent.bench.push_back(card(&pikachu_def(), Side::Opponent, 1));
    let state = board(player, opponent);

    let next = engine.use_attack(&state, 0);

    assert!(next.game_over);
    assert_eq!(next.win_reason, Some(WinReason::PrizesTaken));
    assert!(next.player.prize_cards.is_empty());

    // Nothing moves after the match ends.
    assert_eq!(engine.end_turn(&next), next);
    assert_eq!(engine.draw_card(&next), next);
}

// =============================================================================
// Turn Flow
// =============================================================================

#[test]
fn test_full_round_increments_turn() {
    let engine = passive_engine();
    let state = engine.start_game("starter", &mut GameRng::new(12));

    let opponent_turn = engine.end_turn(&state);
    assert_eq!(opponent_turn.current_turn, Side::Opponent);
    assert_eq!(opponent_turn.turn, 1);

    let next_round = engine.end_turn(&opponent_turn);
    assert_eq!(next_round.current_turn, Side::Player);
    assert_eq!(next_round.turn, 2);
}

#[test]
fn test_history_records_accepted_actions_only() {
    let engine = passive_engine();
    let state = engine.start_game("starter", &mut GameRng::new(12));

    let state = engine.draw_card(&state);
    let state = engine.use_attack(&state, 0);
    let state = engine.end_turn(&state);

    let actions: Vec<Action> = state.history.iter().map(|r| r.action).collect();
    assert_eq!(actions, vec![Action::Draw, Action::EndTurn]);
    assert_eq!(state.history[1].side, Side::Player);
}

#[test]
fn test_scripted_opponent_plays_a_turn() {
    let engine = TurnEngine::standard().with_catalog(tackle_catalog());
    let state = engine.start_game("starter", &mut GameRng::new(31));
    let state = engine.play_card(&state, 0, ZoneTarget::active());
    let opponent_before = state.opponent.hand.len();

    let next = engine.end_turn(&state);

    assert_eq!(next.current_turn, Side::Opponent);
    // Drew one and benched one Basic.
    assert_eq!(next.opponent.hand.len(), opponent_before);
    assert_eq!(next.opponent.bench.len(), 4);
    // Free attack on the player's active.
    let defender = next.player.active.as_ref().unwrap().as_pokemon().unwrap();
    assert_eq!(defender.hp, 50);
    assert!(next.history.iter().any(|r| r.side == Side::Opponent
        && matches!(r.action, Action::Attack { attack_index: 0 })));
}

#[test]
fn test_legal_actions_drive_a_match() {
    let engine = TurnEngine::standard();
    let mut state = engine.start_game("fire", &mut GameRng::new(99));

    for _ in 0..500 {
        if state.game_over {
            break;
        }
        let side = state.current_turn;
        let legal = engine.legal_actions(&state, side);
        assert!(!legal.is_empty());
        // Prefer anything but draw and end turn, so the board develops.
        let action = legal
            .iter()
            .find(|a| !matches!(a, Action::Draw | Action::EndTurn))
            .or_else(|| legal.last())
            .copied()
            .unwrap();
        state = engine.apply(&state, &action);

        for side in Side::ALL {
            assert_eq!(state.side(side).card_count(), 60);
            assert!(state.side(side).bench.len() <= 5);
        }
    }
}

#[test]
fn test_snapshot_restores_mid_match() {
    let engine = TurnEngine::standard();
    let state = engine.start_game("water", &mut GameRng::new(4));
    let state = engine.draw_card(&state);
    let state = engine.end_turn(&state);

    let bytes = state.snapshot().unwrap();
    let restored = MatchState::restore(&bytes).unwrap();

    assert_eq!(restored, state);
    assert_eq!(engine.end_turn(&restored), engine.end_turn(&state));
}
