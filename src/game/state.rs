use super::board::{Board, Cell, Gravity, MoveError, Position, DEFAULT_CONNECT};
use super::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

impl GameOutcome {
    /// Wire code for an optional outcome: 0 ongoing, 1/2 winner, -1 draw.
    pub fn code(outcome: Option<GameOutcome>) -> i8 {
        match outcome {
            None => 0,
            Some(GameOutcome::Winner(Player::One)) => 1,
            Some(GameOutcome::Winner(Player::Two)) => 2,
            Some(GameOutcome::Draw) => -1,
        }
    }
}

/// One game's board, turn order and rule modifiers.
///
/// Gravity and blocked cells are independent modifiers and may be combined.
/// The state is mutated in place; a hosting layer that shares it between
/// requests wraps it in a lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
    move_count: usize,
    gravity: Gravity,
    connect: usize,
}

impl GameState {
    /// Create a fresh game: empty board, Player 1 to move, normal gravity.
    pub fn new(rows: usize, cols: usize) -> Self {
        GameState {
            board: Board::new(rows, cols),
            current_player: Player::One,
            outcome: None,
            move_count: 0,
            gravity: Gravity::Down,
            connect: DEFAULT_CONNECT,
        }
    }

    /// Set the run length needed to win (at least 2).
    pub fn with_connect(mut self, connect: usize) -> Self {
        self.connect = connect.max(2);
        self
    }

    /// Start over in place with (possibly) new dimensions.
    ///
    /// Gravity returns to normal and blocked cells are cleared; the winning
    /// run length is kept.
    pub fn reset(&mut self, rows: usize, cols: usize) {
        *self = GameState::new(rows, cols).with_connect(self.connect);
    }

    /// Block every listed cell that is in bounds and still empty.
    /// Returns how many cells were newly blocked.
    pub fn apply_blocked<I>(&mut self, positions: I) -> usize
    where
        I: IntoIterator<Item = Position>,
    {
        positions
            .into_iter()
            .filter(|&pos| self.board.block(pos))
            .count()
    }

    pub fn set_inverted_gravity(&mut self, inverted: bool) {
        self.gravity = Gravity::from_inverted(inverted);
    }

    pub fn inverted_gravity(&self) -> bool {
        self.gravity.is_inverted()
    }

    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    pub fn connect(&self) -> usize {
        self.connect
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Pieces placed so far (blocked cells excluded).
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn blocked_count(&self) -> usize {
        self.board.count(Cell::Blocked)
    }

    /// Columns that would accept a drop right now.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Returns the landing row. A rejected drop leaves the state untouched.
    pub fn drop_piece(&mut self, column: usize) -> Result<usize, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self
            .board
            .drop_piece(column, player.to_cell(), self.gravity)?;
        self.move_count += 1;

        if self.board.check_win(row, column, self.connect) {
            self.outcome = Some(GameOutcome::Winner(player));
        } else if self.move_count == self.board.playable_cells() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current_player = player.other();
        }

        Ok(row)
    }
}
