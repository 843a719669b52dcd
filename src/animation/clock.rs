/// Accumulated animation time for a single entity.
///
/// Advanced only while that entity animates, so pausing one prop does not
/// move any other clock.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationClock {
    elapsed: f32,
}

impl AnimationClock {
    /// Add `dt` seconds. Negative or non-finite deltas are ignored.
    pub fn advance(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
    }

    /// Seconds accumulated since the last reset.
    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Back to zero.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}
