//! Card catalog for definition and deck-list lookup.
//!
//! The `CardCatalog` stores every card definition and every named deck list
//! a match can be built from. It is immutable once built and shared behind
//! an `Arc`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardDefinition, CardId};
use crate::core::DEFAULT_DECK;
use crate::error::{Result, TcgError};

/// A named deck: card ids with copy counts, in deck order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckList {
    pub entries: Vec<(CardId, usize)>,
}

impl DeckList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, id: impl Into<CardId>, copies: usize) -> Self {
        self.entries.push((id.into(), copies));
        self
    }

    /// Total number of cards.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, copies)| copies).sum()
    }
}

/// Catalog of card definitions and deck lists.
///
/// ## Example
///
/// ```
/// use rust_tcg::catalog::{CardCatalog, DeckList};
/// use rust_tcg::cards::{CardDefinition, ElementType, EnergyCard};
///
/// let mut catalog = CardCatalog::new();
/// catalog
///     .register(CardDefinition::energy("water-energy", "Water Energy", EnergyCard::basic(ElementType::Water)))
///     .unwrap();
/// catalog.register_deck("puddle", DeckList::new().with("water-energy", 60)).unwrap();
///
/// assert_eq!(catalog.get(&"water-energy".into()).unwrap().name, "Water Energy");
/// assert_eq!(catalog.deck("puddle").unwrap().total(), 60);
/// ```
#[derive(Clone, Debug)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
    decks: FxHashMap<String, DeckList>,
    default_deck: String,
}

impl Default for CardCatalog {
    fn default() -> Self {
        Self {
            cards: FxHashMap::default(),
            decks: FxHashMap::default(),
            default_deck: DEFAULT_DECK.to_string(),
        }
    }
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    pub fn register(&mut self, card: CardDefinition) -> Result<()> {
        if self.cards.contains_key(&card.id) {
            return Err(TcgError::DuplicateCard(card.id));
        }
        self.cards.insert(card.id.clone(), card);
        Ok(())
    }

    /// Register a named deck list. Every card in it must already be registered.
    ///
    /// Registering under an existing name replaces the old list.
    pub fn register_deck(&mut self, name: impl Into<String>, list: DeckList) -> Result<()> {
        if let Some((id, _)) = list.entries.iter().find(|(id, _)| !self.contains(id)) {
            return Err(TcgError::UnknownCard(id.clone()));
        }
        self.decks.insert(name.into(), list);
        Ok(())
    }

    pub(super) fn insert_card(&mut self, card: CardDefinition) {
        self.cards.insert(card.id.clone(), card);
    }

    pub(super) fn insert_deck(&mut self, name: impl Into<String>, list: DeckList) {
        self.decks.insert(name.into(), list);
    }

    /// Name of the deck used in place of unknown deck ids.
    #[must_use]
    pub fn default_deck(&self) -> &str {
        &self.default_deck
    }

    #[must_use]
    pub fn with_default_deck(mut self, name: impl Into<String>) -> Self {
        self.default_deck = name.into();
        self
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&CardDefinition> {
        self.cards.get(id)
    }

    /// Get a card definition by ID, or `UnknownCard`.
    pub fn get_or_err(&self, id: &CardId) -> Result<&CardDefinition> {
        self.get(id).ok_or_else(|| TcgError::UnknownCard(id.clone()))
    }

    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Get a deck list by name.
    #[must_use]
    pub fn deck(&self, name: &str) -> Option<&DeckList> {
        self.decks.get(name)
    }

    /// Registered deck names, sorted.
    #[must_use]
    pub fn deck_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.decks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardDefinition>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}
