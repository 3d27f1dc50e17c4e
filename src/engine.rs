pub mod combat;
pub mod game_engine;
pub mod random;
