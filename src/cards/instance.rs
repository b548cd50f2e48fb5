//! Card instances - one physical copy in a match.
//!
//! `Card` pairs the shared identity of a copy (instance, card id, name) with
//! its `CardKind`. Pokémon in play carry their mutable state (HP, attached
//! energy, evolution stack) inside the kind, so moving a `Card` between zones
//! moves everything attached to it.

use serde::{Deserialize, Serialize};

use super::definition::{CardId, CardKind, EnergyCard, PokemonCard, TrainerCard};
use crate::core::entity::InstanceId;

/// A card copy in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique copy identifier.
    pub instance: InstanceId,

    /// Printed card this copy was built from.
    pub id: CardId,

    /// Printed name. Evolution matches on this.
    pub name: String,

    pub kind: CardKind,
}

impl Card {
    #[must_use]
    pub fn as_pokemon(&self) -> Option<&PokemonCard> {
        match &self.kind {
            CardKind::Pokemon(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_pokemon_mut(&mut self) -> Option<&mut PokemonCard> {
        match &mut self.kind {
            CardKind::Pokemon(p) => Some(p),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_trainer(&self) -> Option<&TrainerCard> {
        match &self.kind {
            CardKind::Trainer(t) => Some(t),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_energy(&self) -> Option<&EnergyCard> {
        match &self.kind {
            CardKind::Energy(e) => Some(e),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_basic_pokemon(&self) -> bool {
        self.as_pokemon().is_some_and(PokemonCard::is_basic)
    }

    #[must_use]
    pub fn is_energy(&self) -> bool {
        matches!(self.kind, CardKind::Energy(_))
    }

    /// Number of physical cards this represents, counting attachments.
    #[must_use]
    pub fn card_count(&self) -> usize {
        match &self.kind {
            CardKind::Pokemon(p) => {
                1 + p.attached_energy.iter().map(Card::card_count).sum::<usize>()
                    + p.evolved_from.iter().map(Card::card_count).sum::<usize>()
            }
            _ => 1,
        }
    }

    /// Collect the instance ids of this card and everything attached to it.
    pub fn collect_instances(&self, out: &mut Vec<InstanceId>) {
        out.push(self.instance);
        if let CardKind::Pokemon(p) = &self.kind {
            for card in p.attached_energy.iter().chain(&p.evolved_from) {
                card.collect_instances(out);
            }
        }
    }

    /// Strip in-play state: restore printed HP and detach everything.
    ///
    /// Returns the detached cards (energy first, then lower stages).
    pub fn leave_play(&mut self) -> Vec<Card> {
        let Some(pokemon) = self.as_pokemon_mut() else {
            return Vec::new();
        };
        pokemon.hp = pokemon.max_hp;
        let mut detached = std::mem::take(&mut pokemon.attached_energy);
        for mut lower in std::mem::take(&mut pokemon.evolved_from) {
            let nested = lower.leave_play();
            detached.push(lower);
            detached.extend(nested);
        }
        detached
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.instance)
    }
}
