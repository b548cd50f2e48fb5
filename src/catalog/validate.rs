//! Deck-building rules.
//!
//! The engine never calls this itself: decks handed to
//! `TurnEngine::start_game_with_decks` are trusted. Deck builders call it
//! before saving or submitting a deck.

use rustc_hash::FxHashMap;

use crate::cards::{Card, CardId};
use crate::core::MatchConfig;
use crate::error::{Result, TcgError};

/// Check a deck against the construction rules in `config`:
/// - exactly `deck_size` cards
/// - at least one Basic Pokémon
/// - at most `max_copies` of any card, basic energy excepted
pub fn validate_deck(cards: &[Card], config: &MatchConfig) -> Result<()> {
    if cards.len() != config.deck_size {
        return Err(TcgError::DeckSize {
            expected: config.deck_size,
            actual: cards.len(),
        });
    }

    if !cards.iter().any(Card::is_basic_pokemon) {
        return Err(TcgError::NoBasicPokemon);
    }

    let mut copies: FxHashMap<&CardId, usize> = FxHashMap::default();
    for card in cards.iter().filter(|c| !is_basic_energy(c)) {
        *copies.entry(&card.id).or_insert(0) += 1;
    }
    let mut over: Vec<_> = copies
        .into_iter()
        .filter(|(_, count)| *count > config.max_copies)
        .collect();
    over.sort();
    if let Some((card, count)) = over.into_iter().next() {
        return Err(TcgError::TooManyCopies {
            card: card.clone(),
            count,
            max: config.max_copies,
        });
    }

    Ok(())
}

fn is_basic_energy(card: &Card) -> bool {
    card.as_energy().is_some_and(|energy| !energy.special)
}
