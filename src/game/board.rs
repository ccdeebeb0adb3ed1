use serde::{Deserialize, Serialize};

/// Run length needed to win unless a table overrides it.
pub const DEFAULT_CONNECT: usize = 4;

/// Axes checked for a winning run: horizontal, vertical, and both diagonals.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "i8")]
pub enum Cell {
    Empty,
    One,
    Two,
    Blocked,
}

impl Cell {
    /// True for cells holding a player's piece.
    pub fn is_piece(self) -> bool {
        matches!(self, Cell::One | Cell::Two)
    }
}

/// Wire encoding shared with browser clients: 0 empty, 1/2 pieces, -1 blocked.
impl From<Cell> for i8 {
    fn from(cell: Cell) -> i8 {
        match cell {
            Cell::Empty => 0,
            Cell::One => 1,
            Cell::Two => 2,
            Cell::Blocked => -1,
        }
    }
}

/// Which end of a column a dropped piece travels toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gravity {
    /// Pieces settle on the last row.
    #[default]
    Down,
    /// Pieces settle on row 0.
    Up,
}

impl Gravity {
    pub fn from_inverted(inverted: bool) -> Self {
        if inverted {
            Gravity::Up
        } else {
            Gravity::Down
        }
    }

    pub fn is_inverted(self) -> bool {
        self == Gravity::Up
    }
}

/// A cell coordinate. Row 0 is the top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

impl MoveError {
    /// Short machine-readable reason, used in HTTP responses and logs.
    pub fn reason(&self) -> &'static str {
        match self {
            MoveError::ColumnFull => "column_full",
            MoveError::InvalidColumn => "invalid_column",
            MoveError::GameOver => "game_over",
        }
    }
}

/// Row-major grid of `rows x cols` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Zero dimensions are raised to 1.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top. Panics when out of bounds; use [`Board::cell`] otherwise.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(self.in_bounds(row, col), "({row}, {col}) outside board");
        self.cells[row * self.cols + col]
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.in_bounds(row, col)
            .then(|| self.cells[row * self.cols + col])
    }

    /// One row of the board, left to right.
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Copy of the grid as nested rows, top row first.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.cols).map(<[Cell]>::to_vec).collect()
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// Mark an empty in-bounds cell as blocked. Returns whether the cell changed.
    pub fn block(&mut self, pos: Position) -> bool {
        if self.cell(pos.row, pos.col) == Some(Cell::Empty) {
            self.set(pos.row, pos.col, Cell::Blocked);
            true
        } else {
            false
        }
    }

    /// Number of cells of the given kind.
    pub fn count(&self, kind: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Cells that can ever hold a piece.
    pub fn playable_cells(&self) -> usize {
        self.cells.len() - self.count(Cell::Blocked)
    }

    /// Row a piece dropped into `col` would land in, if any.
    ///
    /// Blocked cells are not landing targets but do not stop the scan, so a
    /// piece passes them and settles on the next empty cell further along.
    pub fn landing_row(&self, col: usize, gravity: Gravity) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        let empty = |&row: &usize| self.get(row, col) == Cell::Empty;
        match gravity {
            Gravity::Down => (0..self.rows).rev().find(empty),
            Gravity::Up => (0..self.rows).find(empty),
        }
    }

    /// Check if a column has no empty cell left (or does not exist)
    pub fn is_column_full(&self, col: usize) -> bool {
        self.landing_row(col, Gravity::Down).is_none()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(
        &mut self,
        col: usize,
        cell: Cell,
        gravity: Gravity,
    ) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn);
        }
        let row = self
            .landing_row(col, gravity)
            .ok_or(MoveError::ColumnFull)?;
        self.set(row, col, cell);
        Ok(row)
    }

    /// Check if every playable cell is occupied
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the piece at (row, col) is part of a run of at least `connect`.
    pub fn check_win(&self, row: usize, col: usize, connect: usize) -> bool {
        let cell = self.get(row, col);
        if !cell.is_piece() {
            return false;
        }

        AXES.iter().any(|&(dr, dc)| {
            1 + self.run_length(row, col, dr, dc, cell) + self.run_length(row, col, -dr, -dc, cell)
                >= connect
        })
    }

    /// Consecutive `cell`s starting next to (row, col) and stepping by (dr, dc).
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while r >= 0 && c >= 0 && self.cell(r as usize, c as usize) == Some(cell) {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(6, 7);
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.playable_cells(), 42);
    }

    #[test]
    fn test_zero_dimensions_are_clamped() {
        let board = Board::new(0, 0);
        assert_eq!((board.rows(), board.cols()), (1, 1));
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new(6, 7);

        let row = board.drop_piece(3, Cell::One, Gravity::Down).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Cell::One);

        let row = board.drop_piece(3, Cell::Two, Gravity::Down).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Cell::Two);
    }

    #[test]
    fn test_drop_piece_inverted() {
        let mut board = Board::new(6, 7);
        assert_eq!(board.drop_piece(0, Cell::One, Gravity::Up), Ok(0));
        assert_eq!(board.drop_piece(0, Cell::Two, Gravity::Up), Ok(1));
        assert_eq!(board.get(0, 0), Cell::One);
        assert_eq!(board.get(1, 0), Cell::Two);
    }

    #[test]
    fn test_drop_skips_blocked_cells() {
        let mut board = Board::new(6, 7);
        assert!(board.block(Position::new(5, 2)));
        assert!(board.block(Position::new(0, 4)));

        assert_eq!(board.drop_piece(2, Cell::One, Gravity::Down), Ok(4));
        assert_eq!(board.drop_piece(4, Cell::Two, Gravity::Up), Ok(1));
    }

    #[test]
    fn test_piece_lands_beyond_blocked_gap() {
        let mut board = Board::new(4, 4);
        // Column 0: bottom empty, then blocked, then empty above.
        board.block(Position::new(2, 0));
        assert_eq!(board.drop_piece(0, Cell::One, Gravity::Down), Ok(3));
        assert_eq!(board.drop_piece(0, Cell::Two, Gravity::Down), Ok(1));
        assert_eq!(board.drop_piece(0, Cell::One, Gravity::Down), Ok(0));
        assert_eq!(
            board.drop_piece(0, Cell::Two, Gravity::Down),
            Err(MoveError::ColumnFull)
        );
    }

    #[test]
    fn test_fully_blocked_column_is_full() {
        let mut board = Board::new(4, 4);
        for row in 0..4 {
            board.block(Position::new(row, 1));
        }
        assert!(board.is_column_full(1));
        assert_eq!(board.landing_row(1, Gravity::Up), None);
    }

    #[test]
    fn test_block_skips_occupied_and_out_of_range() {
        let mut board = Board::new(6, 7);
        board.drop_piece(0, Cell::One, Gravity::Down).unwrap();
        assert!(!board.block(Position::new(5, 0)));
        assert!(!board.block(Position::new(6, 0)));
        assert!(!board.block(Position::new(0, 7)));
        assert_eq!(board.get(5, 0), Cell::One);
        assert_eq!(board.count(Cell::Blocked), 0);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new(6, 7);

        for _ in 0..6 {
            board.drop_piece(0, Cell::One, Gravity::Down).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(
            board.drop_piece(0, Cell::Two, Gravity::Down),
            Err(MoveError::ColumnFull)
        );
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new(6, 7);
        assert_eq!(
            board.drop_piece(7, Cell::One, Gravity::Down),
            Err(MoveError::InvalidColumn)
        );
        assert!(board.is_column_full(7));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(6, 7);
        for col in 0..7 {
            for _ in 0..6 {
                board.drop_piece(col, Cell::One, Gravity::Down).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new(6, 7);
        for col in 0..4 {
            board.drop_piece(col, Cell::One, Gravity::Down).unwrap();
        }
        assert!(board.check_win(5, 2, DEFAULT_CONNECT));
    }

    #[test]
    fn test_vertical_win_inverted() {
        let mut board = Board::new(6, 7);
        for _ in 0..4 {
            board.drop_piece(3, Cell::Two, Gravity::Up).unwrap();
        }
        assert!(board.check_win(3, 3, DEFAULT_CONNECT));
        assert!(board.check_win(0, 3, DEFAULT_CONNECT));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new(6, 7);
        // Create diagonal / pattern
        board.drop_piece(0, Cell::One, Gravity::Down).unwrap();

        board.drop_piece(1, Cell::Two, Gravity::Down).unwrap();
        board.drop_piece(1, Cell::One, Gravity::Down).unwrap();

        board.drop_piece(2, Cell::Two, Gravity::Down).unwrap();
        board.drop_piece(2, Cell::Two, Gravity::Down).unwrap();
        board.drop_piece(2, Cell::One, Gravity::Down).unwrap();

        board.drop_piece(3, Cell::Two, Gravity::Down).unwrap();
        board.drop_piece(3, Cell::Two, Gravity::Down).unwrap();
        board.drop_piece(3, Cell::Two, Gravity::Down).unwrap();
        let row = board.drop_piece(3, Cell::One, Gravity::Down).unwrap();

        assert!(board.check_win(row, 3, DEFAULT_CONNECT));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new(6, 7);
        // Create diagonal \ pattern
        board.drop_piece(6, Cell::One, Gravity::Down).unwrap();

        board.drop_piece(5, Cell::Two, Gravity::Down).unwrap();
        board.drop_piece(5, Cell::One, Gravity::Down).unwrap();

        board.drop_piece(4, Cell::Two, Gravity::Down).unwrap();
        board.drop_piece(4, Cell::Two, Gravity::Down).unwrap();
        board.drop_piece(4, Cell::One, Gravity::Down).unwrap();

        board.drop_piece(3, Cell::Two, Gravity::Down).unwrap();
        board.drop_piece(3, Cell::Two, Gravity::Down).unwrap();
        board.drop_piece(3, Cell::Two, Gravity::Down).unwrap();
        let row = board.drop_piece(3, Cell::One, Gravity::Down).unwrap();

        assert!(board.check_win(row, 3, DEFAULT_CONNECT));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new(6, 7);
        for col in 0..3 {
            board.drop_piece(col, Cell::One, Gravity::Down).unwrap();
        }
        assert!(!board.check_win(5, 1, DEFAULT_CONNECT));
        assert!(board.check_win(5, 1, 3));
    }

    #[test]
    fn test_blocked_cell_breaks_run() {
        let mut board = Board::new(6, 7);
        board.block(Position::new(5, 2));
        for col in [0, 1, 3, 4] {
            board.drop_piece(col, Cell::One, Gravity::Down).unwrap();
        }
        assert!(!board.check_win(5, 3, DEFAULT_CONNECT));
        assert!(!board.check_win(5, 2, DEFAULT_CONNECT));
    }

    #[test]
    fn test_cell_wire_codes() {
        let codes: Vec<i8> = [Cell::Empty, Cell::One, Cell::Two, Cell::Blocked]
            .into_iter()
            .map(i8::from)
            .collect();
        assert_eq!(codes, vec![0, 1, 2, -1]);
        assert_eq!(serde_json::to_string(&Cell::Blocked).unwrap(), "-1");
    }

    #[test]
    fn test_to_rows_top_first() {
        let mut board = Board::new(2, 3);
        board.drop_piece(1, Cell::Two, Gravity::Down).unwrap();
        assert_eq!(
            board.to_rows(),
            vec![
                vec![Cell::Empty, Cell::Empty, Cell::Empty],
                vec![Cell::Empty, Cell::Two, Cell::Empty],
            ]
        );
        assert_eq!(board.row(1), &[Cell::Empty, Cell::Two, Cell::Empty]);
    }
}
