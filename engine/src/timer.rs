//! Repeating playback timer.
//!
//! [`IntervalTimer`] owns a tokio task that emits one tick per period on a
//! bounded channel. The frame loop drains ticks with [`IntervalTimer::take_due`]
//! and applies them itself, so ticks never mutate state from another task.
//! Dropping the timer aborts the task and closes the channel: once playback
//! stops, no tick can be observed again.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

const TICK_CHANNEL_CAPACITY: usize = 16; // bounded: a stalled UI applies backpressure
const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug)]
pub struct IntervalTimer {
    rx: mpsc::Receiver<()>,
    join: JoinHandle<()>,
    period: Duration,
}

impl IntervalTimer {
    /// Spawn the tick task. The first tick fires one full period after start.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn start(period: Duration) -> Self {
        let period = period.max(MIN_PERIOD);
        let (tx, rx) = mpsc::channel(TICK_CHANNEL_CAPACITY);
        let join = tokio::spawn(tick_loop(period, tx));
        debug!(period_ms = period.as_millis() as u64, "Playback timer started");
        Self { rx, join, period }
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Drain ticks delivered since the last call. Never blocks.
    pub fn take_due(&mut self) -> usize {
        let mut due = 0;
        while self.rx.try_recv().is_ok() {
            due += 1;
        }
        due
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.rx.close();
        self.join.abort();
        debug!("Playback timer cancelled");
    }
}

async fn tick_loop(period: Duration, tx: mpsc::Sender<()>) {
    let mut ticks = tokio::time::interval_at(Instant::now() + period, period);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticks.tick().await;
        if tx.send(()).await.is_err() {
            break;
        }
    }
}
