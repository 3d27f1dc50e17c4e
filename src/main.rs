use std::io;

use log::{error, info};
use ratatui::backend::CrosstermBackend;

use crate::engine::game_engine::{build_game_engine, BattleOutcome};
use crate::settings::{build_settings, Settings};
use crate::terminal::terminal_manager;
use crate::terminal::terminal_manager::TerminalManager;
use crate::ui::event::InputEvents;

mod character;
mod engine;
mod error;
mod logging;
mod settings;
mod sound;
mod terminal;
mod ui;
mod view;
mod widget;

async fn run_battle(terminal_manager: TerminalManager<CrosstermBackend<io::Stdout>>, settings: Settings) -> Result<BattleOutcome, io::Error> {
    let mut engine = build_game_engine(terminal_manager, settings)?;
    engine.set_input(InputEvents::spawn());
    engine.begin().await
}

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    logging::init_logging()?;
    let settings = build_settings();

    let terminal_manager = terminal_manager::init()?;
    terminal_manager::install_panic_hook();
    let outcome = run_battle(terminal_manager, settings).await;

    // Always give the terminal back, even if the battle failed
    terminal_manager::restore()?;

    match outcome {
        Ok(outcome) => {
            info!("Exiting with outcome: {:?}", outcome);
            Ok(())
        },
        Err(e) => {
            error!("Battle failed: {}", e);
            Err(e)
        }
    }
}
