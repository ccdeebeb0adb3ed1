use rand::seq::SliceRandom;
use rand::Rng;

use super::Position;

/// Pick up to `count` distinct cells of a `rows x cols` board, uniformly.
pub fn random_blocked<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    count: usize,
    rng: &mut R,
) -> Vec<Position> {
    let mut cells: Vec<Position> = (0..rows)
        .flat_map(|row| (0..cols).map(move |col| Position::new(row, col)))
        .collect();
    cells.shuffle(rng);
    cells.truncate(count);
    cells
}
