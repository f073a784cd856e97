//! Read-only view of a game, handed to renderers and tests.

use crate::types::{Cell, Direction, EndReason};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: i32,
    pub height: i32,
    pub block_size: i32,
    /// Head first, tail last
    pub segments: Vec<Cell>,
    /// `None` only once the board has been filled
    pub food: Option<Cell>,
    pub heading: Direction,
    pub score: u32,
    pub steps: u32,
    pub game_over: bool,
    pub end: Option<EndReason>,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Cell> {
        self.segments.first().copied()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Board size in cells
    pub fn grid_size(&self) -> (u32, u32) {
        if self.block_size <= 0 {
            return (0, 0);
        }
        (
            (self.width / self.block_size).max(0) as u32,
            (self.height / self.block_size).max(0) as u32,
        )
    }

    /// Column/row of a cell, or `None` if it is off the board
    pub fn grid_pos(&self, cell: Cell) -> Option<(u32, u32)> {
        if self.block_size <= 0 || cell.x < 0 || cell.y < 0 {
            return None;
        }
        let (cols, rows) = self.grid_size();
        let col = (cell.x / self.block_size) as u32;
        let row = (cell.y / self.block_size) as u32;
        if col >= cols || row >= rows {
            return None;
        }
        Some((col, row))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            block_size: 0,
            segments: Vec::new(),
            food: None,
            heading: Direction::Right,
            score: 0,
            steps: 0,
            game_over: false,
            end: None,
            seed: 0,
        }
    }
}
