use std::fmt::{Display, Formatter, Result};

pub mod battle;
pub mod characters;

/// A combatant in the battle. The boss uses the same shape as a party member.
#[derive(Clone, Debug, PartialEq)]
pub struct Character {
    name : String,
    max_health: u32,
    health: u32
}

pub fn build_character(name : String, max_health: u32) -> Character {
    debug_assert!(max_health > 0, "A character must start with some health");
    Character { name, max_health, health: max_health }
}

impl Character {
    pub fn get_name(&self) -> String {
        return self.name.clone();
    }

    pub fn get_health(&self) -> u32 {
        self.health
    }

    pub fn get_max_health(&self) -> u32 {
        self.max_health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /*
        Reduces health by the given amount, clamping at zero
     */
    pub fn apply_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }
}

impl Display for Character {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{} ({}/{})", self.name, self.health, self.max_health)
    }
}
