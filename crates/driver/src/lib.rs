//! Driver module - runtime wiring for the terminal game
//!
//! Connects the pure stage to the outside world:
//!
//! - [`config`]: clap flags with `BLOCKFALL_*` environment fallbacks
//! - [`gravity`]: tokio task emitting periodic gravity ticks
//! - [`game_loop`]: the single consumer that owns the stage and redraws it
//! - [`event_log`]: optional JSON-lines log of landings, game over and quit
//! - [`screen`]: terminal frontend built on `blockfall-term`
//!
//! # Environment Variables
//!
//! - `BLOCKFALL_WIDTH` / `BLOCKFALL_HEIGHT`: stage size (default 10x20)
//! - `BLOCKFALL_TICK_MS`: gravity interval (default 500)
//! - `BLOCKFALL_SEED`: shape seed (random when unset)
//! - `BLOCKFALL_LOG_PATH`: event log file (disabled when unset)

pub mod config;
pub mod event_log;
pub mod game_loop;
pub mod gravity;
pub mod screen;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub use config::Config;
pub use event_log::{EventLog, StageEvent};
pub use game_loop::{ExitReason, Frontend, GameLoop, GameSummary};
pub use gravity::{spawn_gravity, GravityTick};
pub use screen::TerminalScreen;
