//! Card definitions - static card data.
//!
//! `CardDefinition` holds the printed properties of a card: its id, name,
//! and a `CardKind` carrying exactly the fields that kind of card has.
//! A definition becomes a playable `Card` through `instantiate`, which
//! stamps it with a unique `InstanceId`.
//!
//! In-play state (current HP, attached energy, lower evolution stages) lives
//! on `PokemonCard` but is always empty on a definition.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::attributes::{ElementType, Stage, TrainerKind};
use super::instance::Card;
use crate::core::entity::InstanceId;

/// Identifier of a card definition (e.g. `"pikachu"`).
///
/// Identifies the printed card, not a copy of it.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An attack printed on a Pokémon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub name: String,

    /// Damage dealt to the defending active Pokémon.
    pub damage: u32,

    /// Energy symbols in the cost. Only the count is enforced.
    pub cost: SmallVec<[ElementType; 4]>,

    /// Effect text (opaque to the engine).
    pub effect: Option<String>,
}

impl Attack {
    /// Create a free attack.
    pub fn new(name: impl Into<String>, damage: u32) -> Self {
        Self {
            name: name.into(),
            damage,
            cost: SmallVec::new(),
            effect: None,
        }
    }

    #[must_use]
    pub fn with_cost(mut self, cost: &[ElementType]) -> Self {
        self.cost = SmallVec::from_slice(cost);
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = Some(effect.into());
        self
    }

    /// Number of attached energy cards needed to use this attack.
    #[must_use]
    pub fn energy_required(&self) -> usize {
        self.cost.len()
    }
}

/// A Pokémon's printed ability (opaque to the engine).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub effect: String,
}

/// Pokémon card data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonCard {
    /// Remaining hit points. Drops to zero or below on knockout.
    pub hp: i32,

    /// Printed hit points.
    pub max_hp: i32,

    pub stage: Stage,

    /// Name of the Pokémon this one evolves from.
    pub evolves_from: Option<String>,

    pub element: ElementType,
    pub weakness: Option<ElementType>,
    pub resistance: Option<ElementType>,
    pub retreat_cost: u32,
    pub attacks: Vec<Attack>,
    pub ability: Option<Ability>,

    /// Energy cards attached while in play.
    pub attached_energy: Vec<Card>,

    /// Lower-stage cards underneath this Pokémon, lowest first.
    pub evolved_from: Vec<Card>,
}

impl PokemonCard {
    /// Create a Pokémon with full HP and no attacks.
    #[must_use]
    pub fn new(hp: i32, stage: Stage, element: ElementType) -> Self {
        Self {
            hp,
            max_hp: hp,
            stage,
            evolves_from: None,
            element,
            weakness: None,
            resistance: None,
            retreat_cost: 0,
            attacks: Vec::new(),
            ability: None,
            attached_energy: Vec::new(),
            evolved_from: Vec::new(),
        }
    }

    /// Create a Basic Pokémon.
    #[must_use]
    pub fn basic(hp: i32, element: ElementType) -> Self {
        Self::new(hp, Stage::Basic, element)
    }

    /// Create an evolved Pokémon.
    #[must_use]
    pub fn evolution(hp: i32, stage: Stage, element: ElementType, from: impl Into<String>) -> Self {
        let mut card = Self::new(hp, stage, element);
        card.evolves_from = Some(from.into());
        card
    }

    #[must_use]
    pub fn with_weakness(mut self, element: ElementType) -> Self {
        self.weakness = Some(element);
        self
    }

    #[must_use]
    pub fn with_resistance(mut self, element: ElementType) -> Self {
        self.resistance = Some(element);
        self
    }

    #[must_use]
    pub fn with_retreat_cost(mut self, cost: u32) -> Self {
        self.retreat_cost = cost;
        self
    }

    #[must_use]
    pub fn with_attack(mut self, attack: Attack) -> Self {
        self.attacks.push(attack);
        self
    }

    #[must_use]
    pub fn with_ability(mut self, name: impl Into<String>, effect: impl Into<String>) -> Self {
        self.ability = Some(Ability {
            name: name.into(),
            effect: effect.into(),
        });
        self
    }

    #[must_use]
    pub fn is_basic(&self) -> bool {
        self.stage.is_basic()
    }

    /// Check if this card evolves from a Pokémon named `name`.
    #[must_use]
    pub fn evolves_from_name(&self, name: &str) -> bool {
        !self.is_basic() && self.evolves_from.as_deref() == Some(name)
    }

    #[must_use]
    pub fn energy_count(&self) -> usize {
        self.attached_energy.len()
    }

    /// Check if enough energy is attached for `attack` (count only).
    #[must_use]
    pub fn can_pay(&self, attack: &Attack) -> bool {
        self.energy_count() >= attack.energy_required()
    }

    /// Index of the first attack the attached energy can pay for.
    #[must_use]
    pub fn first_usable_attack(&self) -> Option<usize> {
        self.attacks.iter().position(|attack| self.can_pay(attack))
    }

    /// Apply damage. Returns true if this knocks the Pokémon out.
    pub fn take_damage(&mut self, damage: u32) -> bool {
        self.hp = self.hp.saturating_sub(i32::try_from(damage).unwrap_or(i32::MAX));
        self.is_knocked_out()
    }

    #[must_use]
    pub fn is_knocked_out(&self) -> bool {
        self.hp <= 0
    }
}

/// Trainer card data. The effect is recorded but never executed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerCard {
    pub kind: TrainerKind,
    pub effect: String,
}

/// Energy card data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyCard {
    pub element: ElementType,

    /// Energy symbols this card provides.
    pub provides: SmallVec<[ElementType; 2]>,

    /// Special energy is subject to the copy limit.
    pub special: bool,
}

impl EnergyCard {
    /// A basic energy providing one symbol of its own element.
    #[must_use]
    pub fn basic(element: ElementType) -> Self {
        Self {
            element,
            provides: SmallVec::from_slice(&[element]),
            special: false,
        }
    }

    /// A special energy providing the given symbols.
    #[must_use]
    pub fn special(element: ElementType, provides: &[ElementType]) -> Self {
        Self {
            element,
            provides: SmallVec::from_slice(provides),
            special: true,
        }
    }
}

/// The three kinds of card, each with only its own fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    Pokemon(PokemonCard),
    Trainer(TrainerCard),
    Energy(EnergyCard),
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use rust_tcg::cards::{Attack, CardDefinition, ElementType, PokemonCard};
///
/// let pikachu = CardDefinition::pokemon(
///     "pikachu",
///     "Pikachu",
///     PokemonCard::basic(60, ElementType::Lightning)
///         .with_attack(Attack::new("Gnaw", 10).with_cost(&[ElementType::Colorless])),
/// );
///
/// assert!(pikachu.is_basic_pokemon());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: CardId,
    pub name: String,
    pub kind: CardKind,
}

impl CardDefinition {
    /// Create a new card definition.
    pub fn new(id: impl Into<CardId>, name: impl Into<String>, kind: CardKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }

    pub fn pokemon(id: impl Into<CardId>, name: impl Into<String>, pokemon: PokemonCard) -> Self {
        Self::new(id, name, CardKind::Pokemon(pokemon))
    }

    pub fn trainer(
        id: impl Into<CardId>,
        name: impl Into<String>,
        kind: TrainerKind,
        effect: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            name,
            CardKind::Trainer(TrainerCard {
                kind,
                effect: effect.into(),
            }),
        )
    }

    pub fn energy(id: impl Into<CardId>, name: impl Into<String>, energy: EnergyCard) -> Self {
        Self::new(id, name, CardKind::Energy(energy))
    }

    #[must_use]
    pub fn is_basic_pokemon(&self) -> bool {
        matches!(&self.kind, CardKind::Pokemon(p) if p.is_basic())
    }

    /// Basic energy is exempt from the copy limit.
    #[must_use]
    pub fn is_basic_energy(&self) -> bool {
        matches!(&self.kind, CardKind::Energy(e) if !e.special)
    }

    /// Create a fresh copy of this card.
    #[must_use]
    pub fn instantiate(&self, instance: InstanceId) -> Card {
        Card {
            instance,
            id: self.id.clone(),
            name: self.name.clone(),
            kind: self.kind.clone(),
        }
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
