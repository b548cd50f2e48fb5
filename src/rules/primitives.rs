//! Side-parameterised rule primitives.
//!
//! These are the only functions that move cards between zones during play.
//! Both the player path (`TurnEngine`) and the opponent policy call them, so
//! the two sides play by exactly the same rules.
//!
//! Each primitive mutates a working copy of the state and returns
//! `Err(Rejection)` if the move is illegal. Callers discard the working copy
//! on rejection, so a primitive may bail out after a partial change.

use thiserror::Error;
use tracing::{debug, info};

use super::win::{declare_winner, WinReason};
use crate::cards::{Card, CardKind};
use crate::core::{Action, MatchState, Side};
use crate::zones::{Zone, ZoneTarget};

/// Why a move was not applied.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("the match is over")]
    MatchOver,

    #[error("it is not the {0}'s turn")]
    NotYourTurn(Side),

    #[error("no card at hand index {0}")]
    NoSuchCard(usize),

    #[error("card cannot be played to {0}")]
    NotPlayable(ZoneTarget),

    #[error("card at hand index {0} is not an energy card")]
    NotEnergy(usize),

    #[error("no Pokémon at {0}")]
    EmptySlot(ZoneTarget),

    #[error("{0} is already occupied")]
    SlotOccupied(ZoneTarget),

    #[error("bench is full")]
    BenchFull,

    #[error("{card} does not evolve from {occupant}")]
    EvolutionMismatch { card: String, occupant: String },

    #[error("no active Pokémon")]
    NoActivePokemon,

    #[error("no attack at index {0}")]
    NoSuchAttack(usize),

    #[error("attack needs {needed} energy, {attached} attached")]
    InsufficientEnergy { attached: usize, needed: usize },
}

pub type Outcome = std::result::Result<(), Rejection>;

/// Require that `side` holds the turn.
pub(crate) fn require_turn(state: &MatchState, side: Side) -> Outcome {
    if state.game_over {
        return Err(Rejection::MatchOver);
    }
    if state.current_turn != side {
        return Err(Rejection::NotYourTurn(side));
    }
    Ok(())
}

/// Reset a Pokémon entering play from the hand.
pub(crate) fn enter_play(card: &mut Card) {
    if let Some(pokemon) = card.as_pokemon_mut() {
        pokemon.hp = pokemon.max_hp;
        pokemon.attached_energy.clear();
    }
}

/// Draw for `side`. Drawing from an empty deck loses the match.
pub(crate) fn draw(state: &mut MatchState, side: Side) -> Outcome {
    match state.side_mut(side).draw() {
        Some(instance) => debug!(%side, %instance, "drew card"),
        None => {
            info!(%side, "cannot draw from empty deck");
            declare_winner(state, side.other(), WinReason::DeckOut);
        }
    }
    state.record(side, Action::Draw);
    Ok(())
}

enum Play {
    Basic,
    Evolution,
    Trainer,
}

/// Play the hand card at `hand_index` to `target`.
///
/// - Basic Pokémon: to an empty active slot, or appended to a bench with room
/// - Stage 1/2 Pokémon: evolves the Pokémon at `target` if its name matches
/// - Trainer: discarded (effect not resolved); `target` is ignored
/// - Energy: never playable this way
pub(crate) fn play_from_hand(
    state: &mut MatchState,
    side: Side,
    hand_index: usize,
    target: ZoneTarget,
    bench_capacity: usize,
) -> Outcome {
    let player = state.side_mut(side);
    let card = player
        .hand
        .get(hand_index)
        .ok_or(Rejection::NoSuchCard(hand_index))?;

    let play = match &card.kind {
        CardKind::Pokemon(pokemon) if pokemon.is_basic() => Play::Basic,
        CardKind::Pokemon(_) => Play::Evolution,
        CardKind::Trainer(_) => Play::Trainer,
        CardKind::Energy(_) => return Err(Rejection::NotPlayable(target)),
    };

    match play {
        Play::Basic => match target.zone {
            Zone::Active => {
                if player.active.is_some() {
                    return Err(Rejection::SlotOccupied(target));
                }
                let mut card = player
                    .take_from_hand(hand_index)
                    .ok_or(Rejection::NoSuchCard(hand_index))?;
                enter_play(&mut card);
                debug!(%side, card = %card, "played to active");
                player.active = Some(card);
            }
            Zone::Bench => {
                if !player.has_bench_room(bench_capacity) {
                    return Err(Rejection::BenchFull);
                }
                let mut card = player
                    .take_from_hand(hand_index)
                    .ok_or(Rejection::NoSuchCard(hand_index))?;
                enter_play(&mut card);
                debug!(%side, card = %card, "played to bench");
                player.bench.push_back(card);
            }
            _ => return Err(Rejection::NotPlayable(target)),
        },
        Play::Evolution => {
            if !target.zone.is_in_play() {
                return Err(Rejection::NotPlayable(target));
            }
            evolve(state, side, hand_index, target)?;
        }
        Play::Trainer => {
            let card = player
                .take_from_hand(hand_index)
                .ok_or(Rejection::NoSuchCard(hand_index))?;
            debug!(%side, card = %card, "played trainer");
            player.discard.push_back(card);
        }
    }

    state.record(side, Action::PlayCard { hand_index, target });
    Ok(())
}

/// Replace the Pokémon at `target` with the evolution card at `hand_index`.
///
/// The evolved Pokémon keeps the attached energy, starts at its own printed
/// HP, and carries the replaced card underneath it.
fn evolve(state: &mut MatchState, side: Side, hand_index: usize, target: ZoneTarget) -> Outcome {
    let player = state.side_mut(side);
    let occupant = player.slot(target).ok_or(Rejection::EmptySlot(target))?;
    let card = player
        .hand
        .get(hand_index)
        .ok_or(Rejection::NoSuchCard(hand_index))?;

    let matches = card
        .as_pokemon()
        .is_some_and(|p| p.evolves_from_name(&occupant.name));
    if !matches {
        return Err(Rejection::EvolutionMismatch {
            card: card.name.clone(),
            occupant: occupant.name.clone(),
        });
    }

    let evolved = player
        .take_from_hand(hand_index)
        .ok_or(Rejection::NoSuchCard(hand_index))?;
    let slot = player.slot_mut(target).ok_or(Rejection::EmptySlot(target))?;
    let mut previous = std::mem::replace(slot, evolved);

    let (energy, mut lower) = match previous.as_pokemon_mut() {
        Some(p) => {
            p.hp = p.max_hp;
            (
                std::mem::take(&mut p.attached_energy),
                std::mem::take(&mut p.evolved_from),
            )
        }
        None => (Vec::new(), Vec::new()),
    };
    debug!(%side, from = %previous, into = %slot, "evolved");
    lower.push(previous);

    if let Some(p) = slot.as_pokemon_mut() {
        p.hp = p.max_hp;
        p.attached_energy = energy;
        p.evolved_from = lower;
    }
    Ok(())
}

/// Attach the energy card at `hand_index` to the Pokémon at `target`.
pub(crate) fn attach_energy(
    state: &mut MatchState,
    side: Side,
    hand_index: usize,
    target: ZoneTarget,
) -> Outcome {
    let player = state.side_mut(side);
    let card = player
        .hand
        .get(hand_index)
        .ok_or(Rejection::NoSuchCard(hand_index))?;
    if !card.is_energy() {
        return Err(Rejection::NotEnergy(hand_index));
    }
    if !target.zone.is_in_play() {
        return Err(Rejection::NotPlayable(target));
    }
    if player.slot(target).is_none() {
        return Err(Rejection::EmptySlot(target));
    }

    let energy = player
        .take_from_hand(hand_index)
        .ok_or(Rejection::NoSuchCard(hand_index))?;
    let pokemon = player
        .slot_mut(target)
        .and_then(Card::as_pokemon_mut)
        .ok_or(Rejection::EmptySlot(target))?;
    debug!(%side, energy = %energy, %target, "attached energy");
    pokemon.attached_energy.push(energy);

    state.record(side, Action::AttachEnergy { hand_index, target });
    Ok(())
}

/// Use the active Pokémon's attack at `attack_index` against the other
/// side's active Pokémon, resolving any knockout.
///
/// Does not end the turn.
pub(crate) fn attack(state: &mut MatchState, side: Side, attack_index: usize) -> Outcome {
    let attacker = state
        .side(side)
        .active
        .as_ref()
        .and_then(Card::as_pokemon)
        .ok_or(Rejection::NoActivePokemon)?;
    let attack = attacker
        .attacks
        .get(attack_index)
        .ok_or(Rejection::NoSuchAttack(attack_index))?;
    if !attacker.can_pay(attack) {
        return Err(Rejection::InsufficientEnergy {
            attached: attacker.energy_count(),
            needed: attack.energy_required(),
        });
    }
    let damage = attack.damage;
    let attack_name = attack.name.clone();

    let defender = state.side_mut(side.other());
    let knocked_out = match defender.active.as_mut().and_then(Card::as_pokemon_mut) {
        Some(target) => {
            let knocked_out = target.take_damage(damage);
            debug!(%side, attack = %attack_name, damage, remaining_hp = target.hp, "attack hit");
            knocked_out
        }
        None => {
            debug!(%side, attack = %attack_name, "no defending Pokémon");
            false
        }
    };

    state.record(side, Action::Attack { attack_index });
    if knocked_out {
        knock_out(state, side);
    }
    Ok(())
}

/// Resolve a knockout of the defender's active Pokémon.
fn knock_out(state: &mut MatchState, attacker: Side) {
    let defender_side = attacker.other();
    let defender = state.side_mut(defender_side);
    if let Some(fainted) = defender.active.take() {
        info!(side = %defender_side, pokemon = %fainted, "knocked out");
        defender.discard_from_play(fainted);
    }

    let winner = state.side_mut(attacker);
    if let Some(prize) = winner.claim_prize() {
        debug!(side = %attacker, %prize, remaining = winner.prize_cards.len(), "took prize");
    }
    if winner.prize_cards.is_empty() {
        declare_winner(state, attacker, WinReason::PrizesTaken);
        return;
    }

    if !state.side_mut(defender_side).promote_from_bench() {
        declare_winner(state, attacker, WinReason::NoPokemonLeft);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Attack, CardDefinition, ElementType, EnergyCard, PokemonCard, Stage, TrainerKind};
    use crate::core::{InstanceId, PlayerState};

    fn make(def: &CardDefinition, side: Side, serial: u16) -> Card {
        def.instantiate(InstanceId::new(side, serial))
    }

    fn charmander() -> CardDefinition {
        CardDefinition::pokemon(
            "charmander",
            "Charmander",
            PokemonCard::basic(50, ElementType::Fire)
                .with_attack(Attack::new("Scratch", 10))
                .with_attack(Attack::new("Ember", 30).with_cost(&[ElementType::Fire, ElementType::Colorless])),
        )
    }

    fn charmeleon() -> CardDefinition {
        CardDefinition::pokemon(
            "charmeleon",
            "Charmeleon",
            PokemonCard::evolution(80, Stage::Stage1, ElementType::Fire, "Charmander"),
        )
    }

    fn fire() -> CardDefinition {
        CardDefinition::energy("fire-energy", "Fire Energy", EnergyCard::basic(ElementType::Fire))
    }

    fn state_with_hand(hand: Vec<Card>) -> MatchState {
        let mut player = PlayerState::default();
        player.hand = hand.into_iter().collect();
        MatchState::new(player, PlayerState::default())
    }

    #[test]
    fn test_require_turn() {
        let mut state = state_with_hand(vec![]);
        assert!(require_turn(&state, Side::Player).is_ok());
        assert_eq!(
            require_turn(&state, Side::Opponent),
            Err(Rejection::NotYourTurn(Side::Opponent))
        );

        state.game_over = true;
        assert_eq!(require_turn(&state, Side::Player), Err(Rejection::MatchOver));
    }

    #[test]
    fn test_draw_from_empty_deck_loses() {
        let mut state = state_with_hand(vec![]);
        draw(&mut state, Side::Player).unwrap();

        assert!(state.game_over);
        assert_eq!(state.winner, Some(Side::Opponent));
        assert_eq!(state.win_reason, Some(WinReason::DeckOut));
    }

    #[test]
    fn test_play_energy_is_rejected() {
        let mut state = state_with_hand(vec![make(&fire(), Side::Player, 0)]);
        assert_eq!(
            play_from_hand(&mut state, Side::Player, 0, ZoneTarget::active(), 5),
            Err(Rejection::NotPlayable(ZoneTarget::active()))
        );
    }

    #[test]
    fn test_basic_to_bench_respects_capacity() {
        let def = charmander();
        let mut state = state_with_hand((0..3).map(|i| make(&def, Side::Player, i)).collect());

        play_from_hand(&mut state, Side::Player, 0, ZoneTarget::bench(), 2).unwrap();
        play_from_hand(&mut state, Side::Player, 0, ZoneTarget::bench(), 2).unwrap();
        assert_eq!(
            play_from_hand(&mut state, Side::Player, 0, ZoneTarget::bench(), 2),
            Err(Rejection::BenchFull)
        );
        assert_eq!(state.player.bench.len(), 2);
    }

    #[test]
    fn test_basic_cannot_go_to_discard() {
        let mut state = state_with_hand(vec![make(&charmander(), Side::Player, 0)]);
        let target = ZoneTarget::new(Zone::Discard);
        assert_eq!(
            play_from_hand(&mut state, Side::Player, 0, target, 5),
            Err(Rejection::NotPlayable(target))
        );
    }

    #[test]
    fn test_trainer_goes_to_discard() {
        let bill = CardDefinition::trainer("bill", "Bill", TrainerKind::Supporter, "Draw 2 cards.");
        let mut state = state_with_hand(vec![make(&bill, Side::Player, 0)]);

        play_from_hand(&mut state, Side::Player, 0, ZoneTarget::active(), 5).unwrap();

        assert!(state.player.hand.is_empty());
        assert_eq!(state.player.discard.len(), 1);
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_evolution_keeps_energy_and_stacks_lower_stage() {
        let mut state = state_with_hand(vec![make(&charmeleon(), Side::Player, 1)]);
        let mut active = make(&charmander(), Side::Player, 0);
        {
            let pokemon = active.as_pokemon_mut().unwrap();
            pokemon.attached_energy.push(make(&fire(), Side::Player, 2));
            pokemon.take_damage(40);
        }
        state.player.active = Some(active);

        play_from_hand(&mut state, Side::Player, 0, ZoneTarget::active(), 5).unwrap();

        let evolved = state.player.active.as_ref().unwrap();
        let pokemon = evolved.as_pokemon().unwrap();
        assert_eq!(evolved.name, "Charmeleon");
        assert_eq!(pokemon.hp, 80);
        assert_eq!(pokemon.energy_count(), 1);
        assert_eq!(pokemon.evolved_from.len(), 1);
        assert_eq!(pokemon.evolved_from[0].name, "Charmander");
        assert_eq!(state.player.card_count(), 3);
    }

    #[test]
    fn test_evolution_on_empty_slot() {
        let mut state = state_with_hand(vec![make(&charmeleon(), Side::Player, 0)]);
        assert_eq!(
            play_from_hand(&mut state, Side::Player, 0, ZoneTarget::bench_slot(0), 5),
            Err(Rejection::EmptySlot(ZoneTarget::bench_slot(0)))
        );
    }

    #[test]
    fn test_attach_requires_energy_card() {
        let mut state = state_with_hand(vec![make(&charmander(), Side::Player, 0)]);
        state.player.active = Some(make(&charmander(), Side::Player, 1));

        assert_eq!(
            attach_energy(&mut state, Side::Player, 0, ZoneTarget::active()),
            Err(Rejection::NotEnergy(0))
        );
    }

    #[test]
    fn test_attack_without_defender_still_resolves() {
        let mut state = state_with_hand(vec![]);
        state.player.active = Some(make(&charmander(), Side::Player, 0));

        attack(&mut state, Side::Player, 0).unwrap();

        assert!(!state.game_over);
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_attack_insufficient_energy() {
        let mut state = state_with_hand(vec![]);
        state.player.active = Some(make(&charmander(), Side::Player, 0));

        assert_eq!(
            attack(&mut state, Side::Player, 1),
            Err(Rejection::InsufficientEnergy { attached: 0, needed: 2 })
        );
        assert_eq!(attack(&mut state, Side::Player, 2), Err(Rejection::NoSuchAttack(2)));
    }

    #[test]
    fn test_knockout_promotes_and_claims_prize() {
        let def = charmander();
        let mut state = state_with_hand(vec![]);
        state.player.active = Some(make(&def, Side::Player, 0));
        state.player.prize_cards = (1..4).map(|i| make(&def, Side::Player, i)).collect();

        let mut weak = make(&def, Side::Opponent, 0);
        weak.as_pokemon_mut().unwrap().hp = 10;
        state.opponent.active = Some(weak);
        state.opponent.bench.push_back(make(&def, Side::Opponent, 1));

        attack(&mut state, Side::Player, 0).unwrap();

        assert!(!state.game_over);
        assert_eq!(state.player.hand.len(), 1);
        assert_eq!(state.player.prize_cards.len(), 2);
        assert_eq!(state.opponent.active.as_ref().unwrap().instance.serial, 1);
        assert!(state.opponent.bench.is_empty());
        assert_eq!(state.opponent.discard.len(), 1);
        assert_eq!(state.opponent.discard[0].as_pokemon().unwrap().hp, 50);
    }

    #[test]
    fn test_knockout_last_prize_wins_without_promotion() {
        let def = charmander();
        let mut state = state_with_hand(vec![]);
        state.player.active = Some(make(&def, Side::Player, 0));
        state.player.prize_cards.push_back(make(&def, Side::Player, 1));

        let mut weak = make(&def, Side::Opponent, 0);
        weak.as_pokemon_mut().unwrap().hp = 10;
        state.opponent.active = Some(weak);
        state.opponent.bench.push_back(make(&def, Side::Opponent, 1));

        attack(&mut state, Side::Player, 0).unwrap();

        assert!(state.game_over);
        assert_eq!(state.winner, Some(Side::Player));
        assert_eq!(state.win_reason, Some(WinReason::PrizesTaken));
        assert!(state.opponent.active.is_none());
        assert_eq!(state.opponent.bench.len(), 1);
    }

    #[test]
    fn test_knockout_with_empty_bench_wins() {
        let def = charmander();
        let mut state = state_with_hand(vec![]);
        state.player.active = Some(make(&def, Side::Player, 0));
        state.player.prize_cards = (1..4).map(|i| make(&def, Side::Player, i)).collect();

        let mut weak = make(&def, Side::Opponent, 0);
        weak.as_pokemon_mut().unwrap().hp = 5;
        state.opponent.active = Some(weak);

        attack(&mut state, Side::Player, 0).unwrap();

        assert!(state.game_over);
        assert_eq!(state.winner, Some(Side::Player));
        assert_eq!(state.win_reason, Some(WinReason::NoPokemonLeft));
    }
}
