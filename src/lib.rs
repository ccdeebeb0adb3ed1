//! # Connect Four Server
//!
//! A Connect Four engine with variable board sizes, blocked cells and
//! inverted gravity, served to many players as one shared board over HTTP.
//! A terminal client plays the same engine locally.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, game state, presets
//! - [`table`]: A game plus the setup rules applied to every new game
//! - [`server`]: actix-web routes around one lock-guarded table
//! - [`ui`]: Terminal UI for hot-seat play
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types
//! - [`telemetry`]: tracing subscriber setup

pub mod config;
pub mod error;
pub mod game;
pub mod server;
pub mod table;
pub mod telemetry;
pub mod ui;
