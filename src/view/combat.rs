use std::collections::VecDeque;
use std::io::Error;

use ratatui::backend::Backend;
use ratatui::style::Color;

use crate::character::battle::{DamageEvent, HealthObserver};
use crate::character::characters::{Characters, CombatantId};
use crate::character::Character;
use crate::terminal::terminal_manager::TerminalManager;
use crate::view::framehandler::combat::CombatFrameHandler;
use crate::view::framehandler::{FrameData, FrameHandler};
use crate::view::game_over::ResultFrameHandler;
use crate::view::View;
use crate::widget::sprite::{party_sprite_path, SpriteWidget, BOSS_SPRITE_SIZE, PARTY_SPRITE_SIZE, RESOURCE_SPRITE_BOSS};

const MAX_LOG_LINES : usize = 50;

#[derive(Clone, Debug, PartialEq)]
pub struct CombatantDisplay {
    pub name: String,
    pub current: u32,
    pub max: u32
}

impl CombatantDisplay {
    fn from_character(character: &Character) -> CombatantDisplay {
        CombatantDisplay { name: character.get_name(), current: character.get_health(), max: character.get_max_health() }
    }
}

/*
    What the screen currently shows. This lags behind the battle while hits are being animated.
 */
#[derive(Clone, Debug)]
pub struct BattleDisplay {
    pub round: u32,
    pub boss: CombatantDisplay,
    pub party: Vec<CombatantDisplay>,
    pub log: Vec<String>
}

#[derive(Clone, Debug, PartialEq)]
pub struct HealthUpdate {
    pub combatant: CombatantId,
    pub current: u32,
    pub max: u32,
    pub message: Option<String>
}

pub struct BattleView<B : Backend> {
    pub(crate) terminal_manager : TerminalManager<B>,
    display: BattleDisplay,
    pending: VecDeque<HealthUpdate>,
    result_message: Option<String>,
    frame_handler: CombatFrameHandler,
    result_handler: ResultFrameHandler
}

pub fn build_battle_view<B : Backend>(terminal_manager: TerminalManager<B>, characters: &Characters) -> BattleView<B> {
    let boss = characters.get_boss();
    let boss_sprite = SpriteWidget::load(RESOURCE_SPRITE_BOSS, boss.get_name(), BOSS_SPRITE_SIZE, Color::Red);
    let party_sprites = characters.get_party().iter()
        .enumerate()
        .map(|(i, c)| SpriteWidget::load(&party_sprite_path(i), c.get_name(), PARTY_SPRITE_SIZE, Color::Green))
        .collect();

    let display = BattleDisplay {
        round: 0,
        boss: CombatantDisplay::from_character(boss),
        party: characters.get_party().iter().map(CombatantDisplay::from_character).collect(),
        log: Vec::new()
    };

    BattleView {
        terminal_manager,
        display,
        pending: VecDeque::new(),
        result_message: None,
        frame_handler: CombatFrameHandler::new(boss_sprite, party_sprites),
        result_handler: ResultFrameHandler::new()
    }
}

impl <B : Backend> BattleView<B> {
    #[cfg(test)]
    pub fn get_display(&self) -> &BattleDisplay {
        &self.display
    }

    #[cfg(test)]
    pub fn has_pending_updates(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn set_round(&mut self, round: u32) {
        self.display.round = round;
    }

    pub fn print(&mut self, message: String) {
        self.display.log.push(message);
        if self.display.log.len() > MAX_LOG_LINES {
            let overflow = self.display.log.len() - MAX_LOG_LINES;
            self.display.log.drain(0..overflow);
        }
    }

    /*
        Pairs each damage event with the queued health update it caused, so the log line appears with the hit
     */
    pub fn attach_messages(&mut self, events: &[DamageEvent], messages: Vec<String>) {
        for (event, message) in events.iter().zip(messages.into_iter()) {
            let update = self.pending.iter_mut()
                .find(|u| u.message.is_none() && u.combatant == event.target && u.current == event.resulting_health);
            match update {
                Some(u) => u.message = Some(message),
                None => self.print(message)
            }
        }
    }

    /*
        Moves the display one hit closer to the battle's real state
     */
    pub fn apply_next_update(&mut self) -> Option<HealthUpdate> {
        let update = self.pending.pop_front()?;
        let target = match update.combatant {
            CombatantId::Boss => Some(&mut self.display.boss),
            CombatantId::Character(index) => self.display.party.get_mut(index)
        };
        if let Some(display) = target {
            display.current = update.current;
            display.max = update.max;
        }
        if let Some(message) = &update.message {
            self.print(message.clone());
        }
        Some(update)
    }

    pub fn show_result(&mut self, message: String) {
        self.result_message = Some(message);
    }

    #[cfg(test)]
    pub fn get_result_message(&self) -> Option<&String> {
        self.result_message.as_ref()
    }
}

impl <B : Backend> HealthObserver for BattleView<B> {
    fn on_health_changed(&mut self, combatant: CombatantId, current: u32, max: u32) {
        self.pending.push_back(HealthUpdate { combatant, current, max, message: None });
    }
}

impl <B : Backend> View for BattleView<B> {
    fn draw(&mut self) -> Result<(), Error> {
        let display = self.display.clone();
        let result_message = self.result_message.clone();
        let frame_handler = &mut self.frame_handler;
        let result_handler = &mut self.result_handler;
        self.terminal_manager.terminal.draw(|frame| {
            let frame_size = frame.area();
            frame_handler.handle_frame(frame, FrameData { data: display, frame_size });
            if let Some(message) = result_message {
                result_handler.handle_frame(frame, FrameData { data: message, frame_size });
            }
        })?;
        Ok(())
    }
}
