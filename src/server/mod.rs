//! HTTP hosting layer: one shared [`Table`](crate::table::Table) behind a
//! lock, exposed as a small JSON API.

mod protocol;
mod routes;
mod state;

pub use protocol::{GameSnapshot, PlayRequest, PlayResponse, RandomMoveResponse};
pub use routes::configure;
pub use state::AppState;
