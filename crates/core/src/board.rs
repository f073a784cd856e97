//! Board module - grid geometry and occupancy
//!
//! The board is `width x height` grid units quantized by `block`, i.e.
//! `cols x rows` cells. Coordinates are in grid units: a cell at column `c`,
//! row `r` has `x = c * block`, `y = r * block`. Valid cells satisfy
//! `0 <= x <= width - block` and `0 <= y <= height - block`.
//!
//! Occupancy is a flat row-major array (`row * cols + col`) so collision and
//! free-cell queries do not scan the snake.

use crate::error::ConfigError;
use crate::types::{
    Cell, DEFAULT_BLOCK_SIZE, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, INITIAL_SNAKE_LEN,
};

/// Fewest columns that still fit the initial snake left of the board center
pub const MIN_COLS: u32 = 4;

/// Most columns or rows on either axis
pub const MAX_SIDE: u32 = 8192;

/// Most cells on a board; occupancy and the snake body are sized for all of them up front
pub const MAX_CELLS: usize = 1 << 20;

/// Board geometry plus a per-cell occupancy grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    block: i32,
    cols: u32,
    rows: u32,
    occupied: Vec<bool>,
    occupied_count: usize,
}

impl Board {
    /// Validate dimensions and create an empty board
    pub fn new(width: i32, height: i32, block: i32) -> Result<Self, ConfigError> {
        if block <= 0 {
            return Err(ConfigError::NonPositiveBlock(block));
        }
        for (axis, value) in [("width", width), ("height", height)] {
            if value <= 0 {
                return Err(ConfigError::NonPositiveDimension { axis, value });
            }
            if value % block != 0 {
                return Err(ConfigError::Misaligned { axis, value, block });
            }
        }

        let cols = (width / block) as u32;
        let rows = (height / block) as u32;
        if cols < MIN_COLS {
            return Err(ConfigError::TooSmall {
                cols,
                rows,
                min_cols: MIN_COLS,
            });
        }
        let cell_count = (cols as usize).saturating_mul(rows as usize);
        if cols > MAX_SIDE || rows > MAX_SIDE || cell_count > MAX_CELLS {
            return Err(ConfigError::TooLarge {
                cols,
                rows,
                max_side: MAX_SIDE,
                max_cells: MAX_CELLS,
            });
        }

        Ok(Self {
            width,
            height,
            block,
            cols,
            rows,
            occupied: vec![false; cell_count],
            occupied_count: 0,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn block_size(&self) -> i32 {
        self.block
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells on the board
    pub fn cell_count(&self) -> usize {
        self.occupied.len()
    }

    /// Number of cells not covered by the snake
    pub fn free_count(&self) -> usize {
        self.cell_count() - self.occupied_count
    }

    /// Grid-aligned center, rounded down to the block grid
    pub fn center(&self) -> Cell {
        Cell::new(
            (self.width / 2) / self.block * self.block,
            (self.height / 2) / self.block * self.block,
        )
    }

    /// Where the initial snake goes: center first, then leftwards
    pub fn initial_snake(&self) -> [Cell; INITIAL_SNAKE_LEN] {
        let head = self.center();
        let mut out = [head; INITIAL_SNAKE_LEN];
        for (i, cell) in out.iter_mut().enumerate() {
            cell.x = head.x - (i as i32) * self.block;
        }
        out
    }

    /// Cell at column `col`, row `row`
    pub fn cell_at(&self, col: u32, row: u32) -> Cell {
        Cell::new(col as i32 * self.block, row as i32 * self.block)
    }

    /// Check the board bounds (inclusive of the last block)
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x <= self.width - self.block && cell.y >= 0 && cell.y <= self.height - self.block
    }

    /// In bounds and on the block grid
    pub fn is_aligned(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && cell.x % self.block == 0 && cell.y % self.block == 0
    }

    #[inline(always)]
    fn index(&self, cell: Cell) -> Option<usize> {
        if !self.is_aligned(cell) {
            return None;
        }
        let col = (cell.x / self.block) as usize;
        let row = (cell.y / self.block) as usize;
        Some(row * self.cols as usize + col)
    }

    /// Whether a snake segment covers `cell` (false when out of bounds)
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.index(cell).map(|i| self.occupied[i]).unwrap_or(false)
    }

    /// Mark or clear a cell. Returns false if the cell is not on the grid.
    pub fn set_occupied(&mut self, cell: Cell, occupied: bool) -> bool {
        let Some(i) = self.index(cell) else {
            return false;
        };
        if self.occupied[i] != occupied {
            self.occupied[i] = occupied;
            if occupied {
                self.occupied_count += 1;
            } else {
                self.occupied_count -= 1;
            }
        }
        true
    }

    /// Clear all occupancy
    pub fn clear(&mut self) {
        self.occupied.fill(false);
        self.occupied_count = 0;
    }

    /// Iterate free cells in row-major order
    pub fn free_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.occupied
            .iter()
            .enumerate()
            .filter(|(_, &taken)| !taken)
            .map(move |(i, _)| {
                let col = (i % self.cols as usize) as u32;
                let row = (i / self.cols as usize) as u32;
                self.cell_at(col, row)
            })
    }
}

impl Default for Board {
    /// The 640x480 board with 20-unit blocks
    fn default() -> Self {
        let cols = (DEFAULT_BOARD_WIDTH / DEFAULT_BLOCK_SIZE) as u32;
        let rows = (DEFAULT_BOARD_HEIGHT / DEFAULT_BLOCK_SIZE) as u32;
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            block: DEFAULT_BLOCK_SIZE,
            cols,
            rows,
            occupied: vec![false; (cols as usize) * (rows as usize)],
            occupied_count: 0,
        }
    }
}
