use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::error::errors::GenericError;

pub const LOG_FILE_PATH : &str = "boss-battle.log";
const LOG_PATTERN : &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {h({l})} {t} - {m}{n}";

/*
    Logs go to a file, the terminal belongs to the battle screen
 */
pub fn build_log_config(path: &str, level: LevelFilter) -> Result<Config, GenericError> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(path)
        .map_err(|e| GenericError::wrap("Failed to open the log file", e))?;

    Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(level))
        .map_err(|e| GenericError::wrap("Invalid logging config", e))
}

pub fn init_logging() -> Result<(), GenericError> {
    let config = build_log_config(LOG_FILE_PATH, LevelFilter::Info)?;
    log4rs::init_config(config).map_err(|e| GenericError::wrap("Failed to initialise logging", e))?;
    log::info!("Logging initialised.");
    Ok(())
}
