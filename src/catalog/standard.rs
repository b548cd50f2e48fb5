//! The built-in card set and its three theme decks.
//!
//! Decks: `starter` (Lightning/Grass), `water`, `fire`. Each is 60 cards and
//! passes `validate_deck` under the default `MatchConfig`.

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::registry::{CardCatalog, DeckList};
use crate::cards::{Attack, CardDefinition, ElementType, EnergyCard, PokemonCard, Stage, TrainerKind};

use crate::cards::ElementType::{Colorless as C, Fire as R, Grass as G, Lightning as L, Water as W};

static STANDARD: Lazy<Arc<CardCatalog>> = Lazy::new(|| Arc::new(build()));

impl CardCatalog {
    /// The shared built-in catalog.
    #[must_use]
    pub fn standard() -> Arc<CardCatalog> {
        Arc::clone(&STANDARD)
    }
}

fn build() -> CardCatalog {
    let mut catalog = CardCatalog::new();
    for card in pokemon().into_iter().chain(trainers()).chain(energy()) {
        catalog.insert_card(card);
    }
    for (name, list) in decks() {
        catalog.insert_deck(name, list);
    }
    catalog
}

fn pokemon() -> Vec<CardDefinition> {
    vec![
        // Lightning
        CardDefinition::pokemon(
            "pikachu",
            "Pikachu",
            PokemonCard::basic(60, L)
                .with_weakness(ElementType::Fighting)
                .with_retreat_cost(1)
                .with_attack(Attack::new("Gnaw", 10).with_cost(&[C]))
                .with_attack(
                    Attack::new("Thunder Jolt", 30)
                        .with_cost(&[L, C])
                        .with_effect("Flip a coin. If tails, Pikachu does 10 damage to itself."),
                ),
        ),
        CardDefinition::pokemon(
            "raichu",
            "Raichu",
            PokemonCard::evolution(90, Stage::Stage1, L, "Pikachu")
                .with_weakness(ElementType::Fighting)
                .with_retreat_cost(1)
                .with_attack(Attack::new("Agility", 20).with_cost(&[L, C]).with_effect(
                    "Flip a coin. If heads, during your opponent's next turn, prevent all effects of attacks, \
                     including damage, done to this Pokémon.",
                ))
                .with_attack(
                    Attack::new("Thunder", 60)
                        .with_cost(&[L, L, C])
                        .with_effect("This Pokémon does 10 damage to itself."),
                ),
        ),
        // Grass
        CardDefinition::pokemon(
            "bulbasaur",
            "Bulbasaur",
            PokemonCard::basic(60, G)
                .with_weakness(R)
                .with_retreat_cost(1)
                .with_attack(
                    Attack::new("Leech Seed", 20)
                        .with_cost(&[G, C])
                        .with_effect("Remove 1 damage counter from this Pokémon."),
                ),
        ),
        CardDefinition::pokemon(
            "ivysaur",
            "Ivysaur",
            PokemonCard::evolution(70, Stage::Stage1, G, "Bulbasaur")
                .with_weakness(R)
                .with_retreat_cost(1)
                .with_attack(Attack::new("Vine Whip", 30).with_cost(&[G, C]))
                .with_attack(
                    Attack::new("Poisonpowder", 20)
                        .with_cost(&[G, G, C])
                        .with_effect("The Defending Pokémon is now Poisoned."),
                ),
        ),
        CardDefinition::pokemon(
            "venusaur",
            "Venusaur",
            PokemonCard::evolution(100, Stage::Stage2, G, "Ivysaur")
                .with_weakness(R)
                .with_retreat_cost(2)
                .with_ability("Energy Trans", "Move Grass Energy between your Pokémon as often as you like.")
                .with_attack(Attack::new("Solarbeam", 60).with_cost(&[G, G, G, G])),
        ),
        // Fire
        CardDefinition::pokemon(
            "charmander",
            "Charmander",
            PokemonCard::basic(50, R)
                .with_weakness(W)
                .with_retreat_cost(1)
                .with_attack(Attack::new("Scratch", 10).with_cost(&[C]))
                .with_attack(
                    Attack::new("Ember", 30)
                        .with_cost(&[R, C])
                        .with_effect("Discard 1 Fire Energy attached to Charmander."),
                ),
        ),
        CardDefinition::pokemon(
            "charmeleon",
            "Charmeleon",
            PokemonCard::evolution(80, Stage::Stage1, R, "Charmander")
                .with_weakness(W)
                .with_retreat_cost(1)
                .with_attack(Attack::new("Slash", 30).with_cost(&[C, C, C]))
                .with_attack(
                    Attack::new("Flamethrower", 50)
                        .with_cost(&[R, R, C])
                        .with_effect("Discard 1 Fire Energy attached to Charmeleon."),
                ),
        ),
        CardDefinition::pokemon(
            "charizard",
            "Charizard",
            PokemonCard::evolution(120, Stage::Stage2, R, "Charmeleon")
                .with_weakness(W)
                .with_resistance(ElementType::Fighting)
                .with_retreat_cost(3)
                .with_attack(
                    Attack::new("Fire Spin", 100)
                        .with_cost(&[R, R, R, R])
                        .with_effect("Discard 2 Energy attached to Charizard."),
                ),
        ),
        CardDefinition::pokemon(
            "vulpix",
            "Vulpix",
            PokemonCard::basic(50, R)
                .with_weakness(W)
                .with_retreat_cost(1)
                .with_attack(
                    Attack::new("Confuse Ray", 10)
                        .with_cost(&[R])
                        .with_effect("Flip a coin. If heads, the Defending Pokémon is now Confused."),
                ),
        ),
        CardDefinition::pokemon(
            "ninetales",
            "Ninetales",
            PokemonCard::evolution(80, Stage::Stage1, R, "Vulpix")
                .with_weakness(W)
                .with_retreat_cost(1)
                .with_attack(
                    Attack::new("Lure", 0)
                        .with_cost(&[C, C])
                        .with_effect("Switch the Defending Pokémon with one of your opponent's Benched Pokémon."),
                )
                .with_attack(
                    Attack::new("Fire Blast", 80)
                        .with_cost(&[R, R, R, R])
                        .with_effect("Discard 1 Fire Energy attached to Ninetales."),
                ),
        ),
        // Water
        CardDefinition::pokemon(
            "squirtle",
            "Squirtle",
            PokemonCard::basic(40, W)
                .with_weakness(L)
                .with_retreat_cost(1)
                .with_attack(Attack::new("Bubble", 10).with_cost(&[W]))
                .with_attack(
                    Attack::new("Withdraw", 0)
                        .with_cost(&[W, C])
                        .with_effect("Flip a coin. If heads, prevent all damage done to Squirtle next turn."),
                ),
        ),
        CardDefinition::pokemon(
            "wartortle",
            "Wartortle",
            PokemonCard::evolution(70, Stage::Stage1, W, "Squirtle")
                .with_weakness(L)
                .with_retreat_cost(1)
                .with_attack(Attack::new("Bite", 40).with_cost(&[W, C, C])),
        ),
        CardDefinition::pokemon(
            "blastoise",
            "Blastoise",
            PokemonCard::evolution(100, Stage::Stage2, W, "Wartortle")
                .with_weakness(L)
                .with_retreat_cost(3)
                .with_ability("Rain Dance", "Attach as many Water Energy cards as you like.")
                .with_attack(Attack::new("Hydro Pump", 40).with_cost(&[W, W, W])),
        ),
        CardDefinition::pokemon(
            "staryu",
            "Staryu",
            PokemonCard::basic(40, W)
                .with_weakness(L)
                .with_retreat_cost(1)
                .with_attack(Attack::new("Slap", 20).with_cost(&[W])),
        ),
        CardDefinition::pokemon(
            "starmie",
            "Starmie",
            PokemonCard::evolution(60, Stage::Stage1, W, "Staryu")
                .with_weakness(L)
                .with_retreat_cost(1)
                .with_attack(
                    Attack::new("Star Freeze", 20)
                        .with_cost(&[W, C])
                        .with_effect("Flip a coin. If heads, the Defending Pokémon is now Paralyzed."),
                ),
        ),
    ]
}

fn trainers() -> Vec<CardDefinition> {
    vec![
        CardDefinition::trainer(
            "professor-oak",
            "Professor Oak",
            TrainerKind::Supporter,
            "Discard your hand, then draw 7 cards.",
        ),
        CardDefinition::trainer("bill", "Bill", TrainerKind::Supporter, "Draw 2 cards."),
        CardDefinition::trainer(
            "potion",
            "Potion",
            TrainerKind::Item,
            "Remove up to 2 damage counters from 1 of your Pokémon.",
        ),
        CardDefinition::trainer(
            "switch",
            "Switch",
            TrainerKind::Item,
            "Switch your Active Pokémon with 1 of your Benched Pokémon.",
        ),
        CardDefinition::trainer(
            "energy-retrieval",
            "Energy Retrieval",
            TrainerKind::Item,
            "Trade 1 card from your hand for up to 2 basic Energy cards from your discard pile.",
        ),
        CardDefinition::trainer(
            "gust-of-wind",
            "Gust of Wind",
            TrainerKind::Item,
            "Choose 1 of your opponent's Benched Pokémon and switch it with their Active Pokémon.",
        ),
    ]
}

fn energy() -> Vec<CardDefinition> {
    let basic = [
        ("lightning-energy", "Lightning Energy", L),
        ("grass-energy", "Grass Energy", G),
        ("fire-energy", "Fire Energy", R),
        ("water-energy", "Water Energy", W),
        ("psychic-energy", "Psychic Energy", ElementType::Psychic),
        ("fighting-energy", "Fighting Energy", ElementType::Fighting),
    ];
    basic
        .into_iter()
        .map(|(id, name, element)| CardDefinition::energy(id, name, EnergyCard::basic(element)))
        .chain(std::iter::once(CardDefinition::energy(
            "double-colorless-energy",
            "Double Colorless Energy",
            EnergyCard::special(C, &[C, C]),
        )))
        .collect()
}

fn decks() -> Vec<(&'static str, DeckList)> {
    let starter = DeckList::new()
        .with("pikachu", 4)
        .with("raichu", 3)
        .with("bulbasaur", 4)
        .with("ivysaur", 3)
        .with("venusaur", 2)
        .with("bill", 4)
        .with("professor-oak", 2)
        .with("potion", 4)
        .with("switch", 2)
        .with("lightning-energy", 16)
        .with("grass-energy", 16);

    let water = DeckList::new()
        .with("squirtle", 4)
        .with("wartortle", 3)
        .with("blastoise", 2)
        .with("staryu", 4)
        .with("starmie", 3)
        .with("bill", 4)
        .with("professor-oak", 2)
        .with("potion", 4)
        .with("energy-retrieval", 2)
        .with("gust-of-wind", 2)
        .with("water-energy", 26)
        .with("double-colorless-energy", 4);

    let fire = DeckList::new()
        .with("charmander", 4)
        .with("charmeleon", 3)
        .with("charizard", 2)
        .with("vulpix", 4)
        .with("ninetales", 3)
        .with("bill", 4)
        .with("professor-oak", 2)
        .with("potion", 4)
        .with("switch", 2)
        .with("gust-of-wind", 2)
        .with("fire-energy", 26)
        .with("double-colorless-energy", 4);

    vec![("starter", starter), ("water", water), ("fire", fire)]
}
