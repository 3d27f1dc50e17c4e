use log::{debug, info};

use crate::character::characters::{build_characters, Characters, CombatantId};
use crate::engine::combat::{choose_target, roll_damage, BOSS_DAMAGE_RANGE, PLAYER_DAMAGE_RANGE};
use crate::engine::random::RandomSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleState {
    InProgress,
    Victory,
    Defeat
}

impl BattleState {
    pub fn is_terminal(&self) -> bool {
        *self != BattleState::InProgress
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DamageEvent {
    pub source: CombatantId,
    pub target: CombatantId,
    pub amount: u32,
    pub resulting_health: u32
}

#[derive(Clone, Debug, PartialEq)]
pub struct RoundResult {
    pub round: u32,
    pub state: BattleState,
    pub boss_health: u32,
    pub damage_events: Vec<DamageEvent>
}

/*
    Receives every health change as it happens so a UI can keep its health bars in step
 */
pub trait HealthObserver {
    fn on_health_changed(&mut self, combatant: CombatantId, current: u32, max: u32);
}

impl HealthObserver for () {
    fn on_health_changed(&mut self, _combatant: CombatantId, _current: u32, _max: u32) {}
}

pub struct BattleSession {
    characters: Characters,
    random: Box<dyn RandomSource>,
    state: BattleState,
    round: u32
}

impl BattleSession {
    pub fn new(party: Vec<(String, u32)>, boss_max_health: u32, random: Box<dyn RandomSource>) -> BattleSession {
        BattleSession::from_characters(build_characters(party, boss_max_health), random)
    }

    pub fn from_characters(characters: Characters, random: Box<dyn RandomSource>) -> BattleSession {
        BattleSession { characters, random, state: BattleState::InProgress, round: 0 }
    }

    pub fn get_characters(&self) -> &Characters {
        &self.characters
    }

    pub fn get_state(&self) -> BattleState {
        self.state
    }

    pub fn get_round(&self) -> u32 {
        self.round
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn run_round(&mut self) -> RoundResult {
        self.run_round_observed(&mut ())
    }

    /*
        Resolves a single round:
        1. Every character alive at the start of the round hits the boss in roster order, stopping once the boss is dead
        2. If the boss survives, it hits one random character from that same list
        Terminal states are detected at the top of a round, and straight after the party's attacks.
     */
    pub fn run_round_observed(&mut self, observer: &mut dyn HealthObserver) -> RoundResult {
        if self.state.is_terminal() {
            return self.build_result(Vec::new());
        }

        if !self.characters.get_boss().is_alive() {
            let boss = self.characters.get_boss();
            observer.on_health_changed(CombatantId::Boss, boss.get_health(), boss.get_max_health());
            return self.finish(BattleState::Victory, Vec::new());
        }

        let alive = self.characters.alive_party_indices();
        if alive.is_empty() {
            return self.finish(BattleState::Defeat, Vec::new());
        }

        self.round += 1;
        debug!("Round {} begins with {} characters alive", self.round, alive.len());
        let mut damage_events = Vec::new();

        for index in alive.iter() {
            if !self.characters.get_boss().is_alive() {
                break;
            }
            let amount = roll_damage(self.random.as_mut(), &PLAYER_DAMAGE_RANGE);
            let boss = self.characters.get_boss_mut();
            boss.apply_damage(amount);
            let event = DamageEvent { source: CombatantId::Character(*index), target: CombatantId::Boss, amount, resulting_health: boss.get_health() };
            observer.on_health_changed(CombatantId::Boss, boss.get_health(), boss.get_max_health());
            damage_events.push(event);
        }

        if !self.characters.get_boss().is_alive() {
            return self.finish(BattleState::Victory, damage_events);
        }

        if let Some(target_index) = choose_target(self.random.as_mut(), &alive) {
            let amount = roll_damage(self.random.as_mut(), &BOSS_DAMAGE_RANGE);
            if let Some(target) = self.characters.get_character_mut(target_index) {
                target.apply_damage(amount);
                let target_id = CombatantId::Character(target_index);
                observer.on_health_changed(target_id, target.get_health(), target.get_max_health());
                damage_events.push(DamageEvent { source: CombatantId::Boss, target: target_id, amount, resulting_health: target.get_health() });
            }
        }

        self.build_result(damage_events)
    }

    fn finish(&mut self, state: BattleState, damage_events: Vec<DamageEvent>) -> RoundResult {
        info!("Battle finished after {} rounds: {:?}", self.round, state);
        self.state = state;
        self.build_result(damage_events)
    }

    fn build_result(&self, damage_events: Vec<DamageEvent>) -> RoundResult {
        RoundResult {
            round: self.round,
            state: self.state,
            boss_health: self.characters.get_boss().get_health(),
            damage_events
        }
    }
}
