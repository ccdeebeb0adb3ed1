//! The table: one game plus the rules used to set up every new game on it.
//!
//! Both front ends drive the engine through a [`Table`]; the HTTP server
//! shares one behind a lock, the terminal client owns one outright.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::game::{random_blocked, BoardSize, GameOutcome, GameState, MoveError};

pub struct Table {
    state: GameState,
    size: BoardSize,
    setup: GameConfig,
    rng: StdRng,
}

impl Table {
    /// Build a table and deal its first game.
    pub fn new(setup: GameConfig) -> Self {
        let rng = match setup.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let (rows, cols) = setup.size.dimensions();
        let mut table = Table {
            state: GameState::new(rows, cols).with_connect(setup.connect),
            size: setup.size,
            setup,
            rng,
        };
        table.new_game(table.size);
        table
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Reset to an empty `size` board, then re-apply the configured setup:
    /// explicit blocked cells, random blocked cells, and starting gravity.
    pub fn new_game(&mut self, size: BoardSize) {
        let (rows, cols) = size.dimensions();
        self.state.reset(rows, cols);
        self.size = size;

        let explicit = self.state.apply_blocked(self.setup.blocked.iter().copied());
        let random = if self.setup.random_blocked > 0 {
            let cells = random_blocked(rows, cols, self.setup.random_blocked, &mut self.rng);
            self.state.apply_blocked(cells)
        } else {
            0
        };
        self.state.set_inverted_gravity(self.setup.inverted_gravity);

        tracing::info!(
            size = %size,
            rows,
            cols,
            blocked = explicit + random,
            inverted_gravity = self.setup.inverted_gravity,
            "new game"
        );
    }

    /// Restart with the current board size.
    pub fn restart(&mut self) {
        self.new_game(self.size);
    }

    pub fn set_inverted_gravity(&mut self, inverted: bool) {
        self.state.set_inverted_gravity(inverted);
        tracing::info!(inverted, "gravity changed");
    }

    /// Drop the current player's piece. Negative columns are invalid columns.
    pub fn play(&mut self, column: i64) -> Result<usize, MoveError> {
        let player = self.state.current_player();
        let result = usize::try_from(column)
            .map_err(|_| MoveError::InvalidColumn)
            .and_then(|col| self.state.drop_piece(col));

        match result {
            Ok(row) => {
                tracing::info!(player = player.name(), column, row, "piece dropped");
                self.log_outcome();
            }
            Err(err) => {
                tracing::debug!(player = player.name(), column, reason = err.reason(), "drop rejected");
            }
        }
        result
    }

    /// Play a uniformly random legal column for the current player.
    ///
    /// Returns `(column, row)`. Fails with `GameOver` on a finished game and
    /// `ColumnFull` when no column accepts a piece.
    pub fn random_move(&mut self) -> Result<(usize, usize), MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let legal = self.state.legal_columns();
        if legal.is_empty() {
            return Err(MoveError::ColumnFull);
        }
        let col = legal[self.rng.random_range(0..legal.len())];
        let row = self.play(col as i64)?;
        Ok((col, row))
    }

    fn log_outcome(&self) {
        match self.state.outcome() {
            Some(GameOutcome::Winner(player)) => {
                tracing::info!(winner = player.name(), moves = self.state.move_count(), "game won");
            }
            Some(GameOutcome::Draw) => {
                tracing::info!(moves = self.state.move_count(), "game drawn");
            }
            None => {}
        }
    }
}
