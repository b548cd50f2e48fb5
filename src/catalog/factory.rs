//! Deck construction from named deck lists.

use tracing::warn;

use super::registry::{CardCatalog, DeckList};
use crate::cards::Card;
use crate::core::{InstanceId, Side};

/// Builds fresh card instances for a named deck.
///
/// Every built card is a new instance with its own `InstanceId`, serials
/// running `0..n` in deck-list order, so in-play state (damage, attached
/// energy) is never shared between decks.
#[derive(Clone, Copy, Debug)]
pub struct DeckFactory<'a> {
    catalog: &'a CardCatalog,
}

impl<'a> DeckFactory<'a> {
    #[must_use]
    pub fn new(catalog: &'a CardCatalog) -> Self {
        Self { catalog }
    }

    /// The deck list `deck_id` resolves to, falling back to the catalog's
    /// default deck for unknown ids.
    #[must_use]
    pub fn resolve(&self, deck_id: &str) -> Option<&'a DeckList> {
        if let Some(list) = self.catalog.deck(deck_id) {
            return Some(list);
        }
        let fallback = self.catalog.default_deck();
        warn!(deck = deck_id, fallback, "unknown deck, using default");
        self.catalog.deck(fallback)
    }

    /// Build the cards of `deck_id` for `owner`, unshuffled.
    ///
    /// Never fails: unknown ids use the default deck, and a catalog without
    /// a default deck yields an empty deck.
    #[must_use]
    pub fn build_deck(&self, deck_id: &str, owner: Side) -> Vec<Card> {
        let Some(list) = self.resolve(deck_id) else {
            warn!(deck = deck_id, "no default deck in catalog");
            return Vec::new();
        };

        let mut cards = Vec::with_capacity(list.total());
        for (id, copies) in &list.entries {
            let Some(definition) = self.catalog.get(id) else {
                warn!(card = %id, "deck list references unknown card");
                continue;
            };
            for _ in 0..*copies {
                let Ok(serial) = u16::try_from(cards.len()) else {
                    warn!(deck = deck_id, built = cards.len(), "deck list exceeds instance serials, truncating");
                    return cards;
                };
                cards.push(definition.instantiate(InstanceId::new(owner, serial)));
            }
        }
        cards
    }
}
