//! Pause before exiting the one-shot surface, so a console window opened just
//! for the command stays readable.

use std::time::Duration;

/// Something that can block for a duration.
pub trait Pause {
    fn pause(&self, duration: Duration);
}

/// Blocks the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Pause for ThreadSleep {
    fn pause(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// The hold step: waits `duration` once, or not at all when zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hold {
    pub duration: Duration,
}

impl Hold {
    pub fn from_secs(secs: u64) -> Self {
        Self {
            duration: Duration::from_secs(secs),
        }
    }

    pub fn is_noop(&self) -> bool {
        self.duration.is_zero()
    }

    /// Runs the hold with `pauser`. Returns whether it actually paused.
    pub fn run(&self, pauser: &dyn Pause) -> bool {
        if self.is_noop() {
            return false;
        }
        tracing::debug!(secs = self.duration.as_secs(), "holding before exit");
        pauser.pause(self.duration);
        true
    }
}
