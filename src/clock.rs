use std::time::{Duration, Instant};

/// Fixed-cadence tick scheduling driven by an external frame loop.
///
/// The clock owns no timer; the caller polls it with the current instant and
/// runs one tick whenever `poll` returns `true`.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    running: bool,
    next_due: Option<Instant>,
}

impl TickClock {
    /// Creates a stopped clock.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            running: false,
            next_due: None,
        }
    }

    /// Arms the clock; the first tick is due one interval after the next poll.
    pub fn start(&mut self) {
        self.running = true;
        self.next_due = None;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.next_due = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true when a tick is due at `now` and schedules the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }

        match self.next_due {
            None => {
                self.next_due = Some(now + self.interval);
                false
            }
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            Some(_) => false,
        }
    }
}
