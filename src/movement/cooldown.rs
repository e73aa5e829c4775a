//! Movement domain: cancellable one-shot delays.

use bevy::prelude::*;
use std::time::Duration;

/// A single pending delayed action. Scheduling replaces whatever was
/// pending; an expired or cancelled delay holds no timer at all.
#[derive(Debug, Default)]
pub struct OneShot {
    timer: Option<Timer>,
}

impl OneShot {
    pub fn schedule(&mut self, delay: Duration) {
        self.timer = Some(Timer::new(delay, TimerMode::Once));
    }

    /// Drop the pending delay. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.timer.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_some()
    }

    /// Advance by `delta`. Returns true exactly once, on the tick the delay
    /// expires, after which the timer is released.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };

        timer.tick(delta);
        if timer.remaining().is_zero() {
            self.timer = None;
            true
        } else {
            false
        }
    }
}
