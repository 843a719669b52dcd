use web_time::{Duration, Instant};

/// Default tick period, roughly 30 ticks per second.
pub const DEFAULT_TICK: Duration = Duration::from_millis(33);

/// Fixed-period tick source with a smoothed tick rate.
///
/// The host polls [`should_tick`](Self::should_tick) (or sleeps for
/// [`until_next_tick`](Self::until_next_tick)) and calls
/// [`tick`](Self::tick) to get the seconds to feed into
/// [`SceneEngine::update`](crate::SceneEngine::update).
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Minimum time between ticks
    period: Duration,
    /// Last tick timestamp
    last_tick: Instant,
    /// Smoothed ticks per second (exponential moving average)
    smoothed_rate: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK)
    }
}

impl FrameClock {
    /// Create a clock that ticks at most once per `period`.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        let seconds = period.as_secs_f32();
        Self {
            period,
            last_tick: Instant::now(),
            smoothed_rate: if seconds > 0.0 { 1.0 / seconds } else { 60.0 },
            smoothing: 0.05,
        }
    }

    /// Tick period.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Whether a full period has passed since the last tick.
    #[must_use]
    pub fn should_tick(&self) -> bool {
        self.last_tick.elapsed() >= self.period
    }

    /// Time left before the next tick is due (zero if overdue).
    #[must_use]
    pub fn until_next_tick(&self) -> Duration {
        self.period.saturating_sub(self.last_tick.elapsed())
    }

    /// Mark a tick and return the seconds since the previous one.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;

        if elapsed > 0.0 {
            self.smoothed_rate = self.smoothed_rate * (1.0 - self.smoothing)
                + self.smoothing / elapsed;
        }
        elapsed
    }

    /// Smoothed ticks per second.
    #[must_use]
    pub const fn rate(&self) -> f32 {
        self.smoothed_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_clock_waits_a_period() {
        let clock = FrameClock::new(Duration::from_secs(60));
        assert!(!clock.should_tick());
        assert!(clock.until_next_tick() > Duration::from_secs(59));
        assert!((clock.rate() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn zero_period_always_ticks() {
        let mut clock = FrameClock::new(Duration::ZERO);
        assert!(clock.should_tick());
        assert_eq!(clock.until_next_tick(), Duration::ZERO);
        assert!(clock.tick() >= 0.0);
    }
}
