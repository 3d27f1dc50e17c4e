use std::ops::RangeInclusive;

use crate::character::battle::{BattleState, DamageEvent};
use crate::character::characters::{Characters, CombatantId};
use crate::engine::random::RandomSource;

pub const PLAYER_DAMAGE_RANGE : RangeInclusive<u32> = 80..=120;
pub const BOSS_DAMAGE_RANGE : RangeInclusive<u32> = 100..=160;

pub const VICTORY_MESSAGE : &str = "Victory! The Boss has been defeated!";
pub const DEFEAT_MESSAGE : &str = "Defeat! All characters have fallen!";

pub fn roll_damage(random: &mut dyn RandomSource, range: &RangeInclusive<u32>) -> u32 {
    random.next_int(*range.start(), *range.end())
}

/*
    Picks one of the given roster indices uniformly, None if there are none to pick from
 */
pub fn choose_target(random: &mut dyn RandomSource, alive: &[usize]) -> Option<usize> {
    if alive.is_empty() {
        return None;
    }
    let last = (alive.len() - 1) as u32;
    let choice = random.next_int(0, last) as usize;
    alive.get(choice.min(alive.len() - 1)).copied()
}

fn combatant_name(characters: &Characters, id: CombatantId) -> String {
    characters.get_combatant(id)
        .map(|c| c.get_name())
        .unwrap_or_else(|| id.to_string())
}

/*
    Builds the battle log line for a single hit
 */
pub fn describe_damage(characters: &Characters, event: &DamageEvent) -> String {
    let source = combatant_name(characters, event.source);
    let target = combatant_name(characters, event.target);
    match event.source {
        CombatantId::Boss => format!("The {} attacks {} for {} damage!", source, target, event.amount),
        CombatantId::Character(_) => format!("{} deals {} damage to the {}!", source, event.amount, target)
    }
}

pub fn describe_outcome(state: BattleState) -> Option<&'static str> {
    match state {
        BattleState::Victory => Some(VICTORY_MESSAGE),
        BattleState::Defeat => Some(DEFEAT_MESSAGE),
        BattleState::InProgress => None
    }
}
