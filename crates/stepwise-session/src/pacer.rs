use std::time::Duration;

use crate::config::SessionConfig;

/// Converts elapsed wall-clock time into a number of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacer {
    delay_ms: u32,
    steps_per_frame: usize,
    pending_ms: u64,
}

impl Pacer {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            delay_ms: config.delay_ms,
            steps_per_frame: config.steps_per_frame,
            pending_ms: 0,
        }
    }

    /// Steps owed for a tick that follows `elapsed` of wall-clock time.
    ///
    /// Unspent milliseconds carry over to the next tick.
    pub fn steps(&mut self, elapsed: Duration) -> usize {
        if self.delay_ms == 0 {
            return self.steps_per_frame;
        }
        let delay = u64::from(self.delay_ms);
        self.pending_ms = self
            .pending_ms
            .saturating_add(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX));
        let steps = self.pending_ms / delay;
        self.pending_ms %= delay;
        usize::try_from(steps).unwrap_or(usize::MAX)
    }

    /// Drop any carried-over time.
    pub fn reset(&mut self) {
        self.pending_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pacer(delay_ms: u32) -> Pacer {
        Pacer::new(&SessionConfig {
            delay_ms,
            ..Default::default()
        })
    }

    #[test]
    fn zero_delay_runs_a_full_frame() {
        let mut p = pacer(0);
        assert_eq!(p.steps(Duration::ZERO), 203);
        assert_eq!(p.steps(Duration::from_secs(5)), 203);
    }

    #[test]
    fn remainder_carries_over() {
        let mut p = pacer(10);
        assert_eq!(p.steps(Duration::from_millis(16)), 1);
        assert_eq!(p.steps(Duration::from_millis(16)), 2);
        assert_eq!(p.steps(Duration::from_millis(3)), 0);
        assert_eq!(p.steps(Duration::from_millis(5)), 1);
    }

    #[test]
    fn reset_drops_pending_time() {
        let mut p = pacer(10);
        p.steps(Duration::from_millis(9));
        p.reset();
        assert_eq!(p.steps(Duration::from_millis(9)), 0);
    }
}
