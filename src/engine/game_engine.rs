use std::io::{Error, ErrorKind};
use std::time::Duration;

use log::{error, info};
use ratatui::backend::Backend;

use crate::character::battle::{BattleSession, BattleState};
use crate::character::characters::{default_party, CombatantId, DEFAULT_BOSS_HEALTH};
use crate::engine::combat::{describe_damage, describe_outcome};
use crate::engine::random::SeededRandom;
use crate::settings::{Settings, SETTING_ATTACK_DELAY, SETTING_COUNTER_DELAY, SETTING_MESSAGE_TIMEOUT, SETTING_ROUND_DELAY, SETTING_START_DELAY};
use crate::sound::sound::{build_sound_sinks, SoundSinks, RESOURCE_MUSIC_BATTLE};
use crate::terminal::terminal_manager::TerminalManager;
use crate::ui::event::InputEvents;
use crate::view::combat::{build_battle_view, BattleView};
use crate::view::View;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleOutcome {
    Finished(BattleState),
    Closed
}

/*
    Drives the battle one round at a time, doing all of the waiting between rounds and hits
    so the session itself never blocks
 */
pub struct GameEngine<B: Backend> {
    session: BattleSession,
    settings: Settings,
    view: BattleView<B>,
    sound_sinks: Option<SoundSinks>,
    input: Option<InputEvents>
}

pub fn build_game_engine<B: Backend>(terminal_manager : TerminalManager<B>, settings: Settings) -> Result<GameEngine<B>, Error> {
    let rng_seed = settings.get_rng_seed().ok_or(Error::new(ErrorKind::NotFound, "Failed to retrieve the RNG seed value!"))?;
    info!("Battle RNG seed: {}", rng_seed);
    let session = BattleSession::new(default_party(), DEFAULT_BOSS_HEALTH, Box::new(SeededRandom::new(rng_seed)));
    Ok(build_game_engine_with_session(session, terminal_manager, settings))
}

pub fn build_game_engine_with_session<B: Backend>(session: BattleSession, terminal_manager : TerminalManager<B>, settings: Settings) -> GameEngine<B> {
    let view = build_battle_view(terminal_manager, session.get_characters());
    GameEngine { session, settings, view, sound_sinks: None, input: None }
}

impl <B: Backend> GameEngine<B> {
    pub fn set_input(&mut self, input: InputEvents) {
        self.input = Some(input);
    }

    #[cfg(test)]
    pub fn get_session(&self) -> &BattleSession {
        &self.session
    }

    #[cfg(test)]
    pub fn terminal_manager_mut(&mut self) -> &mut TerminalManager<B> {
        &mut self.view.terminal_manager
    }

    fn start_music(&mut self) {
        if !self.settings.is_music_enabled() {
            return;
        }
        let mut sinks = build_sound_sinks();
        match sinks.play_looping_track(RESOURCE_MUSIC_BATTLE, self.settings.get_music_volume()) {
            Ok(()) => self.sound_sinks = Some(sinks),
            Err(e) => error!("Failed to load music: {}", e)
        }
    }

    fn stop_music(&mut self) {
        if let Some(sinks) = self.sound_sinks.as_mut() {
            sinks.stop();
        }
        self.sound_sinks = None;
    }

    /*
        Waits for the given delay, returning true if the player asked to close the battle meanwhile
     */
    async fn wait(&mut self, delay: Duration) -> bool {
        match self.input.as_mut() {
            Some(input) => tokio::time::timeout(delay, input.quit_requested()).await.is_ok(),
            None => {
                tokio::time::sleep(delay).await;
                false
            }
        }
    }

    /*
        Holds the result on screen until any key is pressed or the timeout runs out
     */
    async fn wait_for_dismiss(&mut self, timeout: Duration) {
        match self.input.as_mut() {
            Some(input) => {
                if tokio::time::timeout(timeout, input.any_key()).await.is_ok() {
                    info!("Result dismissed early");
                }
            },
            None => tokio::time::sleep(timeout).await
        }
    }

    /*
        Shows the round's hits one at a time, returns true if the battle was closed part way through
     */
    async fn animate_round(&mut self) -> Result<bool, Error> {
        let attack_delay = self.settings.get_delay(SETTING_ATTACK_DELAY);
        let counter_delay = self.settings.get_delay(SETTING_COUNTER_DELAY);
        while let Some(update) = self.view.apply_next_update() {
            self.view.draw()?;
            let delay = match update.combatant {
                CombatantId::Boss => attack_delay,
                CombatantId::Character(_) => counter_delay
            };
            if self.wait(delay).await {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn play_round(&mut self) {
        let result = self.session.run_round_observed(&mut self.view);
        self.view.set_round(result.round);

        let characters = self.session.get_characters();
        let messages : Vec<String> = result.damage_events.iter()
            .map(|event| describe_damage(characters, event))
            .collect();
        for message in messages.iter() {
            info!("{}", message);
        }
        self.view.attach_messages(&result.damage_events, messages);
    }

    async fn show_outcome(&mut self, state: BattleState) -> Result<(), Error> {
        if let Some(message) = describe_outcome(state) {
            info!("{}", message);
            self.view.print(message.to_string());
            self.view.show_result(message.to_string());
            self.view.draw()?;
            self.wait_for_dismiss(self.settings.get_delay(SETTING_MESSAGE_TIMEOUT)).await;
        }
        Ok(())
    }

    async fn run_battle(&mut self) -> Result<BattleOutcome, Error> {
        self.view.draw()?;
        if self.wait(self.settings.get_delay(SETTING_START_DELAY)).await {
            return Ok(BattleOutcome::Closed);
        }

        loop {
            self.play_round();
            if self.animate_round().await? {
                return Ok(BattleOutcome::Closed);
            }
            self.view.draw()?;

            if self.session.is_terminal() {
                let state = self.session.get_state();
                self.show_outcome(state).await?;
                return Ok(BattleOutcome::Finished(state));
            }

            if self.wait(self.settings.get_delay(SETTING_ROUND_DELAY)).await {
                return Ok(BattleOutcome::Closed);
            }
        }
    }

    pub async fn begin(&mut self) -> Result<BattleOutcome, Error> {
        info!("Starting battle..");
        self.start_music();
        let outcome = self.run_battle().await;
        self.stop_music();
        if let Some(input) = self.input.as_mut() {
            input.stop().await;
        }
        info!("Battle over after {} rounds: {:?}", self.session.get_round(), outcome);
        outcome
    }
}
