use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use ratatui::buffer::Buffer;

use crate::character::battle::BattleSession;
use crate::engine::random::RandomSource;

struct ScriptedRandomState {
    values: VecDeque<u32>,
    requested: Vec<(u32, u32)>
}

/*
    Returns a fixed sequence of values and records every range it was asked for.
    Clones share the same script so a test can keep a handle after boxing one into a session.
 */
#[derive(Clone)]
pub struct ScriptedRandom {
    state: Rc<RefCell<ScriptedRandomState>>
}

impl ScriptedRandom {
    pub fn new(values: Vec<u32>) -> ScriptedRandom {
        let state = ScriptedRandomState { values: VecDeque::from(values), requested: Vec::new() };
        ScriptedRandom { state: Rc::new(RefCell::new(state)) }
    }

    pub fn requested_ranges(&self) -> Vec<(u32, u32)> {
        self.state.borrow().requested.clone()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_int(&mut self, min: u32, max: u32) -> u32 {
        let mut state = self.state.borrow_mut();
        state.requested.push((min, max));
        let value = state.values.pop_front().expect("The scripted random source ran out of values!");
        assert!(value >= min && value <= max, "Scripted value {} is outside of {}..={}", value, min, max);
        value
    }
}

pub fn build_test_session(party_health: Vec<u32>, boss_health: u32, random: ScriptedRandom) -> BattleSession {
    let party = party_health.into_iter()
        .enumerate()
        .map(|(i, health)| (format!("Character {}", i + 1), health))
        .collect();
    BattleSession::new(party, boss_health, Box::new(random))
}

/*
    Reads a single row of a buffer back as a String
 */
pub fn buffer_line(buffer: &Buffer, y: u16) -> String {
    let area = buffer.area;
    let mut line = String::new();
    for x in area.x..area.x + area.width {
        line.push_str(buffer[(x, y)].symbol());
    }
    line
}

pub fn buffer_contains(buffer: &Buffer, text: &str) -> bool {
    let area = buffer.area;
    (area.y..area.y + area.height).any(|y| buffer_line(buffer, y).contains(text))
}
