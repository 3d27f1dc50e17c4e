use std::fmt::{Display, Formatter, Result};

use crate::character::{build_character, Character};

pub const BOSS_NAME : &str = "Boss";
pub const DEFAULT_BOSS_HEALTH : u32 = 500;

/// Identifies who dealt or received damage. Party members are addressed by roster index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CombatantId {
    Boss,
    Character(usize)
}

impl Display for CombatantId {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            CombatantId::Boss => write!(f, "boss"),
            CombatantId::Character(index) => write!(f, "character #{}", index)
        }
    }
}

/// The party in fixed roster order, and the boss they are fighting.
#[derive(Debug, Clone)]
pub struct Characters {
    party: Vec<Character>,
    boss: Character
}

impl Characters {
    pub fn new(party: Vec<Character>, boss: Character) -> Characters {
        Characters { party, boss }
    }

    pub fn get_party(&self) -> &Vec<Character> { &self.party }
    pub fn get_boss(&self) -> &Character { &self.boss }
    pub fn get_boss_mut(&mut self) -> &mut Character { &mut self.boss }

    pub fn get_character_mut(&mut self, index: usize) -> Option<&mut Character> {
        self.party.get_mut(index)
    }

    pub fn get_combatant(&self, id: CombatantId) -> Option<&Character> {
        match id {
            CombatantId::Boss => Some(&self.boss),
            CombatantId::Character(index) => self.party.get(index)
        }
    }

    /*
        Roster indices of every living party member, in roster order
     */
    pub fn alive_party_indices(&self) -> Vec<usize> {
        self.party.iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(|(i, _)| i)
            .collect()
    }
}

pub fn build_characters(party: Vec<(String, u32)>, boss_max_health: u32) -> Characters {
    let party = party.into_iter()
        .map(|(name, max_health)| build_character(name, max_health))
        .collect();
    let boss = build_character(String::from(BOSS_NAME), boss_max_health);
    Characters::new(party, boss)
}

pub fn default_party() -> Vec<(String, u32)> {
    vec![
        (String::from("Warrior"), 300),
        (String::from("Mage"), 250),
        (String::from("Archer"), 280),
        (String::from("Priest"), 260)
    ]
}

#[cfg(test)]
mod tests {
    use crate::character::characters::{build_characters, default_party, CombatantId, DEFAULT_BOSS_HEALTH};

    #[test]
    fn test_build_default_characters() {
        let characters = build_characters(default_party(), DEFAULT_BOSS_HEALTH);

        let names : Vec<String> = characters.get_party().iter().map(|c| c.get_name()).collect();
        assert_eq!(vec!["Warrior", "Mage", "Archer", "Priest"], names);
        let health : Vec<u32> = characters.get_party().iter().map(|c| c.get_max_health()).collect();
        assert_eq!(vec![300, 250, 280, 260], health);
        assert_eq!("Boss", characters.get_boss().get_name());
        assert_eq!(500, characters.get_boss().get_health());
    }

    #[test]
    fn test_alive_party_indices() {
        // GIVEN a party of three
        let mut characters = build_characters(vec![
            (String::from("A"), 10),
            (String::from("B"), 10),
            (String::from("C"), 10)
        ], 100);
        assert_eq!(vec![0, 1, 2], characters.alive_party_indices());

        // WHEN the middle character dies
        characters.get_character_mut(1).unwrap().apply_damage(10);

        // THEN only the outer two are alive, still in roster order
        assert_eq!(vec![0, 2], characters.alive_party_indices());
    }

    #[test]
    fn test_get_combatant() {
        let characters = build_characters(default_party(), DEFAULT_BOSS_HEALTH);
        assert_eq!("Boss", characters.get_combatant(CombatantId::Boss).unwrap().get_name());
        assert_eq!("Archer", characters.get_combatant(CombatantId::Character(2)).unwrap().get_name());
        assert!(characters.get_combatant(CombatantId::Character(4)).is_none());
    }
}
