//! Food placement.
//!
//! Food goes on a uniformly random free cell. Columns and rows are drawn
//! independently and rejected while they land on the snake. On a dense board
//! rejection sampling can take long, so after `MAX_RANDOM_SAMPLES` misses the
//! placement picks uniformly among the remaining free cells instead. A full
//! board yields `None`.

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::types::Cell;

/// Rejected draws before falling back to enumerating free cells
pub const MAX_RANDOM_SAMPLES: u32 = 32;

/// Pick a free cell for the next food, or `None` if the board is full.
pub fn place_food(board: &Board, rng: &mut SimpleRng) -> Option<Cell> {
    let free = board.free_count();
    if free == 0 {
        return None;
    }

    for _ in 0..MAX_RANDOM_SAMPLES {
        let cell = board.cell_at(rng.next_range(board.cols()), rng.next_range(board.rows()));
        if !board.is_occupied(cell) {
            return Some(cell);
        }
    }

    let nth = rng.next_range(free as u32) as usize;
    log::debug!(
        "food sampling fell back to enumeration ({} free of {})",
        free,
        board.cell_count()
    );
    board.free_cells().nth(nth)
}
