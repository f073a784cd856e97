//! Construction errors.
//!
//! The simulation itself is total; only building a game from bad parameters
//! can fail.

use thiserror::Error;

/// Invalid board or snake parameters passed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("block size must be positive, got {0}")]
    NonPositiveBlock(i32),

    #[error("board {axis} must be positive, got {value}")]
    NonPositiveDimension { axis: &'static str, value: i32 },

    #[error("board {axis} {value} is not a multiple of block size {block}")]
    Misaligned {
        axis: &'static str,
        value: i32,
        block: i32,
    },

    #[error("board of {cols}x{rows} cells is too small for the initial snake (need at least {min_cols} columns)")]
    TooSmall { cols: u32, rows: u32, min_cols: u32 },

    #[error("board of {cols}x{rows} cells is too large (at most {max_side} per side and {max_cells} in total)")]
    TooLarge {
        cols: u32,
        rows: u32,
        max_side: u32,
        max_cells: usize,
    },

    #[error("invalid snake layout: {0}")]
    InvalidSnake(&'static str),
}
