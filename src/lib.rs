pub mod commands;
pub mod config;
pub mod data;
pub mod error;
pub mod logic;
pub mod passcode;
pub mod store;

pub use error::GameError;
pub use logic::Session;
