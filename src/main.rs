//! Blockfall terminal runner (default binary).
//!
//! Keys are read on a dedicated thread, gravity ticks come from a tokio task,
//! and a single game loop owns the stage and draws every change.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use blockfall::driver::{
    spawn_gravity, Config, EventLog, GameLoop, GameSummary, StageEvent, TerminalScreen,
};
use blockfall::engine::Stage;
use blockfall::input::spawn_key_reader;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;
    let seed = config.seed.unwrap_or_else(rand::random);

    let (log, log_task) = match &config.log_path {
        Some(path) => {
            let (log, task) = EventLog::open(path)?;
            (log, Some(task))
        }
        None => (EventLog::disabled(), None),
    };
    let stage = Stage::with_seed(config.width, config.height, seed);
    log.record(StageEvent::started(&stage, seed));

    let mut screen = match TerminalScreen::enter() {
        Ok(screen) => screen,
        Err(err) => {
            drop(log);
            finish_log(log_task).await;
            return Err(err);
        }
    };

    let result = run(stage, &mut screen, log, config.gravity_interval()).await;

    // Always try to restore terminal state.
    let _ = screen.exit();
    finish_log(log_task).await;

    let summary = result?;
    println!("score: {}", summary.score);
    Ok(())
}

/// Wait for the log writer to flush once every sender is gone.
async fn finish_log(task: Option<JoinHandle<()>>) {
    if let Some(task) = task {
        let _ = task.await;
    }
}

async fn run(
    stage: Stage,
    screen: &mut TerminalScreen,
    log: EventLog,
    gravity_interval: Duration,
) -> Result<GameSummary> {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    // Not joined: the reader stays blocked on the terminal until the process exits.
    spawn_key_reader(move |command| command_tx.send(command).is_ok())
        .context("failed to start key reader")?;

    let (tick_tx, tick_rx) = mpsc::unbounded_channel();
    let gravity = spawn_gravity(gravity_interval, tick_tx);

    let result = GameLoop::new(stage, screen)
        .with_log(log)
        .run(command_rx, tick_rx)
        .await;
    gravity.abort();
    result
}
