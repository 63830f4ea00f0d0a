pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod snake;
pub mod term;
