//! Optional JSON-lines log of stage events.
//!
//! The terminal belongs to the game while it runs, so events go to a file
//! instead. A background task owns the file; the game loop only pushes records
//! into an unbounded channel and never waits on disk. If a write fails the
//! writer stops and later records are dropped.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::core::ShapeSource;
use crate::engine::{Stage, UpdateOutcome};

/// One logged event. Shapes are logged by letter (`"i"`, `"o"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StageEvent {
    Started {
        width: i32,
        height: i32,
        seed: u32,
        shape: &'static str,
    },
    Landed {
        rows_cleared: u32,
        points: u32,
        score: u32,
        next_shape: &'static str,
    },
    Finished {
        rows_cleared: u32,
        points: u32,
        score: u32,
    },
    Quit {
        score: u32,
    },
}

impl StageEvent {
    /// Start-of-game record for a freshly built stage.
    pub fn started<R: ShapeSource>(stage: &Stage<R>, seed: u32) -> Self {
        StageEvent::Started {
            width: stage.width(),
            height: stage.height(),
            seed,
            shape: stage.piece().shape().as_str(),
        }
    }

    /// Event for an update outcome worth logging, read after the update was
    /// applied to `stage`. Plain moves are not logged.
    pub fn from_outcome<R: ShapeSource>(outcome: UpdateOutcome, stage: &Stage<R>) -> Option<Self> {
        let score = stage.score();
        match outcome {
            UpdateOutcome::Landed {
                rows_cleared,
                points,
            } => Some(StageEvent::Landed {
                rows_cleared,
                points,
                score,
                next_shape: stage.piece().shape().as_str(),
            }),
            UpdateOutcome::Finished {
                rows_cleared,
                points,
            } => Some(StageEvent::Finished {
                rows_cleared,
                points,
                score,
            }),
            UpdateOutcome::Ignored | UpdateOutcome::Rejected | UpdateOutcome::Moved => None,
        }
    }
}

#[derive(Serialize)]
struct Record<'a> {
    ts: u64,
    #[serde(flatten)]
    event: &'a StageEvent,
}

/// Sending half of the log. Cheap to clone; the file closes when every clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    tx: Option<mpsc::UnboundedSender<StageEvent>>,
}

impl EventLog {
    /// A log that discards everything.
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    /// Open `path` for appending and start the writer task.
    ///
    /// Must be called inside a tokio runtime. The returned handle completes
    /// once every sender is dropped and the file is flushed.
    pub fn open(path: &Path) -> Result<(Self, JoinHandle<()>)> {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open event log {}", path.display()))?;
        let mut file = tokio::fs::File::from_std(file);

        let (tx, mut rx) = mpsc::unbounded_channel::<StageEvent>();
        let handle = tokio::spawn(async move {
            let mut buf: Vec<u8> = Vec::with_capacity(256);
            while let Some(event) = rx.recv().await {
                buf.clear();
                let record = Record {
                    ts: unix_millis(),
                    event: &event,
                };
                if serde_json::to_writer(&mut buf, &record).is_err() {
                    continue;
                }
                buf.push(b'\n');
                if file.write_all(&buf).await.is_err() {
                    break;
                }
            }
            let _ = file.flush().await;
        });

        Ok((Self { tx: Some(tx) }, handle))
    }

    pub fn is_enabled(&self) -> bool {
        self.tx.is_some()
    }

    pub fn record(&self, event: StageEvent) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(event);
        }
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
