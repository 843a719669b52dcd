//! Time-driven light levels: the day cycle and the cycling lamp.

use crate::options::LightingOptions;

/// Daylight intensity at `elapsed` seconds into a `period`-second day.
///
/// A triangle wave: full brightness at the start of the day, dark at
/// the half-way point, and back to full at the end. A non-positive or
/// non-finite period holds full daylight.
#[must_use]
pub fn daylight_intensity(elapsed: f32, period: f32) -> f32 {
    if !(period.is_finite() && period > 0.0 && elapsed.is_finite()) {
        return 1.0;
    }
    let half = period * 0.5;
    let t = elapsed.rem_euclid(period);
    let darkness = if t < half { t / half } else { (period - t) / half };
    (1.0 - darkness).clamp(0.0, 1.0)
}

/// Light state the lighting pass reads each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLighting {
    options: LightingOptions,
    /// Lamp steps above off.
    point_level: u32,
}

impl SceneLighting {
    /// Lamp off.
    #[must_use]
    pub fn new(options: &LightingOptions) -> Self {
        Self {
            options: options.clone(),
            point_level: 0,
        }
    }

    /// Daylight at `elapsed` scene seconds.
    #[must_use]
    pub fn daylight(&self, elapsed: f32) -> f32 {
        daylight_intensity(elapsed, self.options.day_period)
    }

    /// Current lamp intensity.
    #[must_use]
    pub fn point_light(&self) -> f32 {
        self.point_level as f32 * self.options.point_step
    }

    /// Raise the lamp one step, wrapping to off past the maximum.
    pub fn cycle_point_light(&mut self) {
        self.point_level = (self.point_level + 1) % self.levels();
        log::debug!("lamp intensity {:.2}", self.point_light());
    }

    /// Lamp off.
    pub fn restart(&mut self) {
        self.point_level = 0;
    }

    /// Number of distinct lamp levels, off included.
    fn levels(&self) -> u32 {
        let step = self.options.point_step;
        if !(step.is_finite() && step > 0.0) {
            return 1;
        }
        // Tolerate rounding so that e.g. 3 × 0.3 still reaches 0.9.
        let steps = (self.options.point_max / step + 1e-4).floor().max(0.0);
        steps as u32 + 1
    }
}
