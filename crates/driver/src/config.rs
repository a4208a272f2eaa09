//! Runtime configuration from command-line flags and environment variables.
//!
//! Every flag falls back to a `BLOCKFALL_*` environment variable and then to
//! the built-in default.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{ensure, Result};
use clap::Parser;

use crate::types::{DEFAULT_STAGE_HEIGHT, DEFAULT_STAGE_WIDTH, GRAVITY_INTERVAL_MS, MIN_STAGE_EDGE};

/// Largest accepted stage edge.
pub const MAX_STAGE_EDGE: i32 = 200;

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "blockfall", version, about = "Falling-block puzzle game for the terminal")]
pub struct Config {
    /// Stage width in cells
    #[arg(long, env = "BLOCKFALL_WIDTH", default_value_t = DEFAULT_STAGE_WIDTH)]
    pub width: i32,

    /// Stage height in cells
    #[arg(long, env = "BLOCKFALL_HEIGHT", default_value_t = DEFAULT_STAGE_HEIGHT)]
    pub height: i32,

    /// Gravity interval in milliseconds
    #[arg(long = "tick-ms", env = "BLOCKFALL_TICK_MS", default_value_t = GRAVITY_INTERVAL_MS)]
    pub tick_ms: u64,

    /// Seed for piece shapes (random when omitted)
    #[arg(long, env = "BLOCKFALL_SEED")]
    pub seed: Option<u32>,

    /// Append JSON-lines stage events to this file
    #[arg(long = "log-path", env = "BLOCKFALL_LOG_PATH")]
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_STAGE_WIDTH,
            height: DEFAULT_STAGE_HEIGHT,
            tick_ms: GRAVITY_INTERVAL_MS,
            seed: None,
            log_path: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        let edges = MIN_STAGE_EDGE..=MAX_STAGE_EDGE;
        ensure!(
            edges.contains(&self.width),
            "stage width must be within {}..={}, got {}",
            MIN_STAGE_EDGE,
            MAX_STAGE_EDGE,
            self.width
        );
        ensure!(
            edges.contains(&self.height),
            "stage height must be within {}..={}, got {}",
            MIN_STAGE_EDGE,
            MAX_STAGE_EDGE,
            self.height
        );
        ensure!(self.tick_ms > 0, "gravity interval must be positive");
        Ok(())
    }

    pub fn gravity_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
