//! Terminal "game renderer" module.
//!
//! This is the drawing half of the display driver. It renders a
//! [`GameSnapshot`](crate::core::GameSnapshot) into a simple framebuffer of
//! styled characters and flushes that framebuffer to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep rendering free of game logic (it only reads snapshots)
//! - Allow precise control over aspect ratio (2 chars wide per board cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
