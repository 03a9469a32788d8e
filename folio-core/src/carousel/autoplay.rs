//! Scoped autoplay timer.
//!
//! The timer is a single recurring Tokio task that only emits
//! [`AutoplayTick`] messages; it never touches carousel state. Dropping the
//! [`AutoplayTimer`] cancels the task, so the timer cannot outlive its owner.
//! At most one tick waits in the channel; firings while it is full are
//! dropped, so an owner that stops polling advances by one slide at most.

use std::time::Duration;

use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

/// Capacity of the tick channel handed to [`AutoplayTimer::spawn`].
pub const TICK_BUFFER: usize = 1;

pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);
const MIN_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplaySettings {
    pub enabled: bool,
    pub interval: Duration,
}

impl AutoplaySettings {
    pub fn enabled(interval: Duration) -> Self {
        Self {
            enabled: true,
            interval,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            interval: DEFAULT_AUTOPLAY_INTERVAL,
        }
    }
}

impl Default for AutoplaySettings {
    fn default() -> Self {
        Self::disabled()
    }
}

/// One timer firing. `generation` identifies the timer that produced it so
/// ticks still queued from a cancelled timer can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayTick {
    pub generation: u64,
}

#[derive(Debug)]
pub struct AutoplayTimer {
    generation: u64,
    period: Duration,
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl AutoplayTimer {
    /// Start a recurring timer that sends a tick every `period`, the first
    /// one a full period from now.
    ///
    /// Returns `None` when called outside a Tokio runtime; autoplay then
    /// stays off and manual navigation keeps working.
    pub fn spawn(
        generation: u64,
        period: Duration,
        ticks: mpsc::Sender<AutoplayTick>,
    ) -> Option<Self> {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                warn!("no async runtime available, carousel autoplay disabled");
                return None;
            }
        };

        let period = period.max(MIN_AUTOPLAY_INTERVAL);
        let token = CancellationToken::new();
        let task_token = token.clone();
        let handle = runtime.spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = task_token.cancelled() => break,
                    _ = interval.tick() => {
                        match ticks.try_send(AutoplayTick { generation }) {
                            Ok(()) => trace!(generation, "autoplay tick"),
                            Err(TrySendError::Full(_)) => {
                                trace!(generation, "autoplay tick pending, firing dropped");
                            }
                            Err(TrySendError::Closed(_)) => break,
                        }
                    }
                }
            }
        });

        debug!(generation, period_ms = period.as_millis() as u64, "autoplay timer started");
        Some(Self {
            generation,
            period,
            token,
            handle,
        })
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Stop the timer now. Equivalent to dropping it.
    pub fn cancel(self) {}
}

impl Drop for AutoplayTimer {
    fn drop(&mut self) {
        self.token.cancel();
        self.handle.abort();
        debug!(generation = self.generation, "autoplay timer stopped");
    }
}
