//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Geometry
//!
//! The board is measured in grid units and quantized by a block size. Every
//! coordinate the game produces is a multiple of the block size:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_WIDTH` | 640 | Board width in grid units |
//! | `DEFAULT_BOARD_HEIGHT` | 480 | Board height in grid units |
//! | `DEFAULT_BLOCK_SIZE` | 20 | Edge length of one cell |
//! | `DEFAULT_TICK_RATE` | 20 | Simulation steps per second |
//!
//! With the defaults the board is 32 columns by 24 rows.
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Cell, Direction, DEFAULT_BLOCK_SIZE};
//!
//! let head = Cell::new(320, 240);
//! assert_eq!(head.translated(Direction::Right, DEFAULT_BLOCK_SIZE), Cell::new(340, 240));
//! assert_eq!(head.translated(Direction::Up, DEFAULT_BLOCK_SIZE), Cell::new(320, 220));
//!
//! assert_eq!("LEFT".parse::<Direction>(), Ok(Direction::Left));
//! assert_eq!(Direction::Down.to_string(), "down");
//! ```

use std::fmt;
use std::str::FromStr;

/// Default board width in grid units (32 blocks)
pub const DEFAULT_BOARD_WIDTH: i32 = 640;

/// Default board height in grid units (24 blocks)
pub const DEFAULT_BOARD_HEIGHT: i32 = 480;

/// Default edge length of one grid cell
pub const DEFAULT_BLOCK_SIZE: i32 = 20;

/// Default simulation rate in steps per second
pub const DEFAULT_TICK_RATE: u32 = 20;

/// Number of segments the snake starts with
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Heading of the snake.
///
/// Screen coordinates: `x` grows to the right, `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four headings in a fixed order (useful for tests and property generators)
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step `(dx, dy)` for this heading
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError;

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of up, down, left, right (or u, d, l, r)")
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Case-insensitive full names or single letters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            _ => Err(ParseDirectionError),
        }
    }
}

/// A grid-aligned coordinate pair.
///
/// Used for snake segments and food. Equality is exact coordinate match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one block away in `direction`
    pub fn translated(&self, direction: Direction, block: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * block,
            y: self.y + dy * block,
        }
    }
}

/// Discrete input delivered by a display driver between two ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Change the pending heading
    Steer(Direction),
    /// Stop the session (handled by the host loop, never by the game state)
    Quit,
}

/// Why a session became terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    /// Head left the board
    Wall,
    /// Head ran into a body segment
    SelfCollision,
    /// No free cell remained for the next food
    BoardFilled,
}

impl EndReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndReason::Wall => "wall",
            EndReason::SelfCollision => "self_collision",
            EndReason::BoardFilled => "board_filled",
        }
    }

    /// Whether the session ended because the snake filled the board
    pub fn is_win(&self) -> bool {
        matches!(self, EndReason::BoardFilled)
    }
}
