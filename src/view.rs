use std::io::Error;

pub mod combat;
pub mod framehandler;
pub mod game_over;

pub trait View {
    fn draw(&mut self) -> Result<(), Error>;
}
