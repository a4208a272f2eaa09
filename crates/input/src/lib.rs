//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`] and runs the
//! blocking key reader on a dedicated thread. Independent of the engine and of
//! any async runtime: commands leave through a plain callback.

pub mod map;
pub mod reader;

pub use blockfall_types as types;

pub use map::{map_key, should_quit};
pub use reader::{read_keys, spawn_key_reader};
