//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::InputEvent`]s. The game
//! state never sees key codes; the host loop folds the events of one tick
//! into at most one heading change (last write wins) and a quit flag.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit, translate_key_event};
