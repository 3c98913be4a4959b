/// Fixed-interval gate for starting a payload transmission.
///
/// Fires at most once per interval. The gate re-arms whether or not the
/// caller managed to start, so a refused start is retried one interval
/// later rather than on every poll.
///
/// The schedule advances in fixed steps, so poll lateness does not
/// accumulate. After a gap of more than one interval it restarts from the
/// late poll instead of firing to catch up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeriodicTrigger {
    interval_ms: u64,
    last_fire_ms: u64,
}

impl PeriodicTrigger {
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_fire_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Returns `true` if a full interval has passed since the last firing.
    pub fn due(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_fire_ms) < self.interval_ms {
            return false;
        }
        self.last_fire_ms += self.interval_ms;
        if now_ms.saturating_sub(self.last_fire_ms) >= self.interval_ms {
            self.last_fire_ms = now_ms;
        }
        true
    }

    /// Restart the interval from `now_ms` without firing.
    pub fn rearm(&mut self, now_ms: u64) {
        self.last_fire_ms = now_ms;
    }
}
