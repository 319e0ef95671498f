//! Once-per-second tick source for a running countdown.
//!
//! The ticker is armed only while the engine reports
//! [`TimerEngine::should_tick`](super::engine::TimerEngine::should_tick) and
//! is dropped as soon as that turns false, so a paused timer receives no
//! ticks at all. A host that falls behind gets one delayed tick rather than
//! a burst of catch-up ticks.

use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub struct Ticker {
    period: Duration,
    interval: Option<Interval>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Ticker { period, interval: None }
    }

    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    /// Arms or disarms the ticker to match `should_tick`.
    ///
    /// An already armed ticker keeps its schedule; a freshly armed one first
    /// fires one full period from now.
    pub fn sync(&mut self, should_tick: bool) {
        match (should_tick, self.interval.is_some()) {
            (true, false) => {
                let mut interval = interval_at(Instant::now() + self.period, self.period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                self.interval = Some(interval);
            }
            (false, true) => self.interval = None,
            _ => {}
        }
    }

    /// Waits for the next tick. Never resolves while disarmed.
    ///
    /// Cancel safe, so it can sit in a `tokio::select!` next to input.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}
