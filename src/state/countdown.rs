/// Breakdown of the time left until ticket sales close.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountdownState {
    /// Whole hours remaining (not wrapped at 24)
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub completed: bool,
}

impl CountdownState {
    /// Terminal state: sales closed, nothing left on the clock.
    pub const CLOSED: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
        completed: true,
    };

    /// Derive the breakdown for `expiration - now` (both unix seconds).
    pub fn compute(expiration: i64, now: i64) -> Self {
        if now >= expiration {
            return Self::CLOSED;
        }
        let left = (expiration - now) as u64;
        Self {
            hours: left / 3600,
            minutes: (left % 3600) / 60,
            seconds: left % 60,
            completed: false,
        }
    }

    pub fn total_secs(&self) -> u64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

/// Countdown driven by clock ticks.
///
/// Once the deadline has been reached the countdown latches closed and stays
/// closed for its whole lifetime, even if a later snapshot carries a
/// different expiration.
#[derive(Debug, Clone, Default)]
pub struct Countdown {
    current: Option<CountdownState>,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute for this tick. An unknown expiration leaves nothing to show
    /// (unless we already closed).
    pub fn tick(&mut self, expiration: Option<i64>, now: i64) -> Option<CountdownState> {
        if self.is_completed() {
            return self.current;
        }
        self.current = expiration.map(|exp| CountdownState::compute(exp, now));
        self.current
    }

    pub fn current(&self) -> Option<CountdownState> {
        self.current
    }

    pub fn is_completed(&self) -> bool {
        self.current.is_some_and(|s| s.completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_breakdown() {
        // 2h 3m 4s
        let state = CountdownState::compute(10_000 + 7_384, 10_000);
        assert_eq!(state.hours, 2);
        assert_eq!(state.minutes, 3);
        assert_eq!(state.seconds, 4);
        assert!(!state.completed);
        assert_eq!(state.total_secs(), 7_384);
    }

    #[test]
    fn test_hours_not_wrapped() {
        // 3 days
        let state = CountdownState::compute(3 * 86_400, 0);
        assert_eq!(state.hours, 72);
        assert_eq!(state.minutes, 0);
        assert_eq!(state.seconds, 0);
    }

    #[test]
    fn test_compute_at_and_after_deadline() {
        assert_eq!(CountdownState::compute(500, 500), CountdownState::CLOSED);
        assert_eq!(CountdownState::compute(500, 9_999), CountdownState::CLOSED);
    }

    #[test]
    fn test_monotonic_until_closed() {
        let expiration = 1_700_000_000;
        let mut countdown = Countdown::new();
        let mut last = u64::MAX;

        for now in (expiration - 200)..expiration {
            let state = countdown.tick(Some(expiration), now).unwrap();
            assert!(!state.completed);
            assert_eq!(state.total_secs(), (expiration - now) as u64);
            assert!(state.total_secs() < last);
            last = state.total_secs();
        }

        let state = countdown.tick(Some(expiration), expiration).unwrap();
        assert!(state.completed);
    }

    #[test]
    fn test_completed_never_reverts() {
        let mut countdown = Countdown::new();
        countdown.tick(Some(100), 100);
        assert!(countdown.is_completed());

        // Later ticks, a later expiration, even a missing one: still closed
        for now in 101..150 {
            assert_eq!(countdown.tick(Some(100), now), Some(CountdownState::CLOSED));
        }
        assert_eq!(countdown.tick(Some(10_000), 150), Some(CountdownState::CLOSED));
        assert_eq!(countdown.tick(None, 151), Some(CountdownState::CLOSED));
    }

    #[test]
    fn test_missing_expiration_shows_nothing() {
        let mut countdown = Countdown::new();
        assert_eq!(countdown.tick(None, 0), None);
        assert!(!countdown.is_completed());

        // Arrives later
        let state = countdown.tick(Some(60), 0).unwrap();
        assert_eq!(state.minutes, 1);
    }
}
