//! # Monopoly Rules
//!
//! The rule engine of a Monopoly-style board game. This crate owns the
//! players, the bank's property registry, and the rent formulas for the three
//! property archetypes. It contains no turn sequencing and no rendering.
//!
//! ## Core Components
//!
//! - **player**: Players and their balance bookkeeping
//! - **property**: Streets, railroads and utilities with their rent rules
//! - **board**: The fixed, ordered property registry consulted by rent rules
//! - **game**: The game container holding players and the board
//! - **config**: TOML-driven rules and custom board layouts

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod player;
pub mod property;

pub use board::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use player::*;
pub use property::*;
