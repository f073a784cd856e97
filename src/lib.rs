//! TUI Snake (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_snake::{core,input,term,types}`
//! and adds the pieces that tie them into a playable session: configuration,
//! the host loop and the crossterm display driver.

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;

pub mod config;
pub mod session;
pub mod terminal;

pub use config::{parse_args, GameConfig};
pub use session::{run_session, Driver, SessionEnd, SessionReport, TickInput};
pub use terminal::TerminalDriver;
