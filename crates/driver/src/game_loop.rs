//! Single-owner game loop.
//!
//! Two producers feed the loop: the key reader (commands) and the gravity task
//! (ticks). The loop owns the [`Stage`] outright and is the only place that
//! calls [`Stage::update`], so updates and redraws are serialized without a
//! lock. Every update that changes the stage is followed by exactly one redraw.

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::core::ShapeSource;
use crate::engine::{Stage, StageSnapshot, UpdateOutcome};
use crate::event_log::{EventLog, StageEvent};
use crate::gravity::GravityTick;
use crate::types::{Command, Intent};

/// Where frames go.
pub trait Frontend {
    fn present(&mut self, snap: &StageSnapshot) -> Result<()>;
}

impl<F: Frontend + ?Sized> Frontend for &mut F {
    fn present(&mut self, snap: &StageSnapshot) -> Result<()> {
        (**self).present(snap)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The player asked to quit.
    Quit,
    /// The command channel closed.
    InputClosed,
}

/// Final state reported when the loop returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub reason: ExitReason,
    pub score: u32,
    pub finished: bool,
    pub rows_cleared: u32,
    pub pieces_spawned: u32,
}

pub struct GameLoop<R, F> {
    stage: Stage<R>,
    frontend: F,
    log: EventLog,
    snap: StageSnapshot,
}

impl<R: ShapeSource, F: Frontend> GameLoop<R, F> {
    pub fn new(stage: Stage<R>, frontend: F) -> Self {
        Self {
            stage,
            frontend,
            log: EventLog::disabled(),
            snap: StageSnapshot::default(),
        }
    }

    pub fn with_log(mut self, log: EventLog) -> Self {
        self.log = log;
        self
    }

    /// Draw the current state.
    pub fn present(&mut self) -> Result<()> {
        self.stage.snapshot_into(&mut self.snap);
        self.frontend.present(&self.snap)
    }

    /// Apply one intent, redrawing only if the stage changed.
    pub fn step(&mut self, intent: Intent) -> Result<UpdateOutcome> {
        let outcome = self.stage.update(intent);
        if let Some(event) = StageEvent::from_outcome(outcome, &self.stage) {
            self.log.record(event);
        }
        if outcome.changed() {
            self.present()?;
        }
        Ok(outcome)
    }

    /// Drive the stage until the player quits or input goes away.
    ///
    /// Commands take priority over ticks when both are pending. A finished
    /// stage keeps the loop alive so the final frame stays up until quit, and
    /// [`Command::Redraw`] still draws it again after a resize.
    /// If the tick channel closes the loop keeps serving commands.
    pub async fn run(
        mut self,
        mut commands: UnboundedReceiver<Command>,
        mut ticks: UnboundedReceiver<GravityTick>,
    ) -> Result<GameSummary> {
        self.present()?;

        let mut ticks_open = true;
        let reason = loop {
            tokio::select! {
                biased;

                command = commands.recv() => match command {
                    Some(Command::Play(intent)) => {
                        self.step(intent)?;
                    }
                    Some(Command::Redraw) => self.present()?,
                    Some(Command::Quit) => break ExitReason::Quit,
                    None => break ExitReason::InputClosed,
                },
                tick = ticks.recv(), if ticks_open => match tick {
                    Some(GravityTick) => {
                        self.step(Intent::Down)?;
                    }
                    None => ticks_open = false,
                },
            }
        };

        if reason == ExitReason::Quit {
            self.log.record(StageEvent::Quit {
                score: self.stage.score(),
            });
        }

        Ok(GameSummary {
            reason,
            score: self.stage.score(),
            finished: self.stage.is_finished(),
            rows_cleared: self.stage.rows_cleared(),
            pieces_spawned: self.stage.pieces_spawned(),
        })
    }
}
