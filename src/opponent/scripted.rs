//! Fixed-priority opponent.

use tracing::debug;

use super::policy::{OpponentPolicy, OpponentTurn};
use crate::cards::Card;
use crate::rules::Outcome;
use crate::zones::ZoneTarget;

/// Deterministic heuristic opponent.
///
/// Each turn, in order:
/// 1. Draw (stops here if the deck was empty)
/// 2. With no active Pokémon, play the first Basic in hand to active
/// 3. With bench room, bench the first Basic in hand (at most one)
/// 4. Attach the first energy in hand to the active Pokémon
/// 5. With both actives present, use the first attack the energy pays for
#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptedOpponent;

impl ScriptedOpponent {
    fn note(&self, step: &str, outcome: Outcome) {
        if let Err(reason) = outcome {
            debug!(policy = self.name(), step, %reason, "opponent move rejected");
        }
    }
}

impl OpponentPolicy for ScriptedOpponent {
    fn name(&self) -> &str {
        "scripted"
    }

    fn take_turn(&self, turn: &mut OpponentTurn<'_>) {
        let drawn = turn.draw();
        self.note("draw", drawn);
        if turn.state().game_over {
            return;
        }

        if turn.own().active.is_none() {
            if let Some(index) = turn.own().find_in_hand(Card::is_basic_pokemon) {
                let played = turn.play_card(index, ZoneTarget::active());
                self.note("promote", played);
            }
        }

        if turn.own().has_bench_room(turn.config().bench_capacity) {
            if let Some(index) = turn.own().find_in_hand(Card::is_basic_pokemon) {
                let benched = turn.play_card(index, ZoneTarget::bench());
                self.note("bench", benched);
            }
        }

        if turn.own().active.is_some() {
            if let Some(index) = turn.own().find_in_hand(Card::is_energy) {
                let attached = turn.attach_energy(index, ZoneTarget::active());
                self.note("attach", attached);
            }
        }

        if turn.defender().active.is_none() {
            return;
        }
        let attack = turn
            .own()
            .active
            .as_ref()
            .and_then(Card::as_pokemon)
            .and_then(|pokemon| pokemon.first_usable_attack());
        if let Some(index) = attack {
            let attacked = turn.attack(index);
            self.note("attack", attacked);
        }
    }
}
