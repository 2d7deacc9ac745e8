//! Restartable one-shot delay.
//!
//! The timer never runs on its own: the owner arms it with the current
//! instant and polls it from the event loop. A firing carries the payload it
//! was armed with, so stale firings can be recognised by the receiver.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct DelayTimer<T: Copy> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T: Copy> DelayTimer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Arm the timer. Does nothing while a firing is already pending; call
    /// [`DelayTimer::cancel`] first to reschedule. Returns whether it armed.
    pub fn start(&mut self, now: Instant, payload: T) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some((now + self.delay, payload));
        true
    }

    /// Idempotent.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(deadline, _)| deadline)
    }

    /// Fire if due. A timer fires at most once per `start`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.pending {
            Some((deadline, payload)) if now >= deadline => {
                self.pending = None;
                Some(payload)
            }
            _ => None,
        }
    }
}
