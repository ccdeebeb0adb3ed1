use serde::{Deserialize, Serialize};

use crate::game::{BoardSize, Cell, GameOutcome, GameState, Player};

/// Board state as sent to browser clients.
///
/// Cells and `winner` use the numeric codes the browser client expects:
/// 0 empty, 1/2 players, -1 blocked (cells) or draw (winner).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub board: Vec<Vec<Cell>>,
    pub rows: usize,
    pub cols: usize,
    pub current_player: Player,
    pub winner: i8,
    pub move_count: usize,
    pub inverted_gravity: bool,
    pub board_template: &'static str,
    pub connect: usize,
}

impl GameSnapshot {
    pub fn capture(state: &GameState, size: BoardSize) -> Self {
        GameSnapshot {
            board: state.board().to_rows(),
            rows: state.rows(),
            cols: state.cols(),
            current_player: state.current_player(),
            winner: GameOutcome::code(state.outcome()),
            move_count: state.move_count(),
            inverted_gravity: state.inverted_gravity(),
            board_template: size.template(),
            connect: state.connect(),
        }
    }
}

/// Body of `POST /api/play`, as JSON or an HTML form.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayRequest {
    pub col: i64,
}

#[derive(Debug, Serialize)]
pub struct PlayResponse {
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    pub state: GameSnapshot,
}

#[derive(Debug, Serialize)]
pub struct RandomMoveResponse {
    pub ok: bool,
    pub col: usize,
    pub row: usize,
    pub state: GameSnapshot,
}
