//! Shared types for Purple Mines.
//!
//! `models` holds the value types the engine and any front end agree on
//! (money, multipliers, tile states), `protocol` holds the commands a front end
//! sends and the snapshots it renders.

pub mod models;
pub mod protocol;
