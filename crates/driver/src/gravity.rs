//! Gravity timer task.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

/// One gravity step. The game loop turns it into a downward move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravityTick;

/// Send a tick right away and then once per `period` until the receiver is dropped.
///
/// A late tick is delivered once and the schedule restarts from there, so a
/// stalled runtime never produces a burst of catch-up ticks.
pub fn spawn_gravity(period: Duration, tx: mpsc::UnboundedSender<GravityTick>) -> JoinHandle<()> {
    let period = period.max(Duration::from_millis(1));
    tokio::spawn(async move {
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            if tx.send(GravityTick).is_err() {
                break;
            }
        }
    })
}
