pub mod health_bar;
pub mod sprite;
