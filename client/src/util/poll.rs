//! Fixed-interval polling owned by a view.
//!
//! The view that starts a poll holds the `PollHandle`; cancelling or dropping
//! the handle stops the timer. Views park the handle in a local
//! `StoredValue` so the reactive owner drops it when the view unmounts.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub struct PollHandle {
    alive: Arc<AtomicBool>,
    #[cfg(feature = "csr")]
    interval: Option<gloo_timers::callback::Interval>,
}

impl PollHandle {
    /// Call `tick` every `period_ms` until cancelled. The first call happens
    /// after one period; callers fetch once themselves for an immediate load.
    pub fn start<F>(period_ms: u32, mut tick: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let alive = Arc::new(AtomicBool::new(true));
        #[cfg(feature = "csr")]
        {
            let alive_tick = alive.clone();
            let interval = gloo_timers::callback::Interval::new(period_ms, move || {
                if alive_tick.load(Ordering::Relaxed) {
                    tick();
                }
            });
            Self { alive, interval: Some(interval) }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (period_ms, &mut tick);
            Self { alive }
        }
    }

    pub fn is_active(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Stop the timer. Idempotent.
    pub fn cancel(&mut self) {
        self.alive.store(false, Ordering::Relaxed);
        #[cfg(feature = "csr")]
        drop(self.interval.take());
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
