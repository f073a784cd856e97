//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake simulation: movement, growth, food
//! placement and collision detection. It has **no dependencies** on UI, input
//! or I/O, making it:
//!
//! - **Deterministic**: Same seed and heading sequence produce the same game
//! - **Testable**: Every rule is reachable through [`GameState`] directly
//! - **Portable**: Any display driver can host it (terminal, headless, tests)
//! - **Allocation-free per tick**: The body buffer is sized for a full board up front
//!
//! # Module Structure
//!
//! - [`board`]: Board geometry, validation and the occupancy grid
//! - [`game_state`]: Snake, heading, food, score and the step function
//! - [`food`]: Free-cell sampling with a bounded fallback
//! - [`rng`]: LCG used for food placement
//! - [`snapshot`]: Read-only copy of the state for renderers
//! - [`error`]: Construction errors
//!
//! # Rules
//!
//! - The snake starts three blocks long at the board center, heading right
//! - Each step moves the head one block; eating food grows the snake by one
//!   and scores one point
//! - Leaving the board or running into the body ends the game
//! - Filling the board ends the game as a win
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameState;
//! use tui_snake_types::{Cell, Direction};
//!
//! let mut game = GameState::new(640, 480, 12345).unwrap();
//! assert_eq!(game.head(), Cell::new(320, 240));
//!
//! game.force_food(Cell::new(340, 240));
//! let result = game.step();
//! assert_eq!(result.as_tuple(), (false, 1));
//! assert_eq!(game.len(), 4);
//!
//! game.set_heading(Direction::Left);
//! assert!(game.step().terminal);
//! ```

pub mod board;
pub mod error;
pub mod food;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::ConfigError;
pub use food::place_food;
pub use game_state::{GameState, StepResult};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
