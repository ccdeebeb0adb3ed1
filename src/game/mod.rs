//! Core Connect Four game logic: variable-size board with blocked cells,
//! player types, and a mutable game state with gravity and win/draw rules.

mod blocked;
mod board;
mod player;
mod size;
mod state;

pub use blocked::random_blocked;
pub use board::{Board, Cell, Gravity, MoveError, Position, DEFAULT_CONNECT};
pub use player::Player;
pub use size::BoardSize;
pub use state::{GameOutcome, GameState};
