//! Terminal UI: hot-seat Connect Four on a local table, with board presets,
//! blocked cells and gravity switching.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
