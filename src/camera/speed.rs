//! Speed stepping for held accelerate/decelerate keys.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::options::SpeedOptions;

/// Whether the free camera can fly backward.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SpeedPolicy {
    /// Speed ranges over `[-max, max]`; decelerating through zero reverses.
    #[default]
    Reversible,
    /// Speed ranges over `[0, max]`; decelerating stops at zero.
    ForwardOnly,
}

impl SpeedPolicy {
    /// Lowest speed allowed for a given `max`.
    #[must_use]
    pub fn floor(self, max: f32) -> f32 {
        match self {
            Self::Reversible => -max,
            Self::ForwardOnly => 0.0,
        }
    }
}

/// Step size at the current speed: the stiction boost near zero, else the
/// regular increment.
fn step(speed: f32, options: &SpeedOptions) -> f32 {
    let stiction = &options.stiction;
    if stiction.enabled && speed.abs() <= stiction.threshold {
        stiction.increment
    } else {
        options.increment
    }
}

/// Speed after one accelerate tick.
#[must_use]
pub fn accelerate(speed: f32, options: &SpeedOptions) -> f32 {
    let max = options.max.abs();
    (speed + step(speed, options)).clamp(options.policy.floor(max), max)
}

/// Speed after one decelerate tick.
#[must_use]
pub fn decelerate(speed: f32, options: &SpeedOptions) -> f32 {
    let max = options.max.abs();
    let step = step(speed, options);
    match options.policy {
        SpeedPolicy::Reversible => (speed - step).clamp(-max, max),
        SpeedPolicy::ForwardOnly => {
            if speed <= step {
                0.0
            } else {
                (speed - step).min(max)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::StictionOptions;

    fn options(policy: SpeedPolicy) -> SpeedOptions {
        SpeedOptions {
            policy,
            ..SpeedOptions::default()
        }
    }

    #[test]
    fn stiction_boost_applies_near_zero() {
        let opts = options(SpeedPolicy::Reversible);
        assert_eq!(accelerate(0.0, &opts), 0.75);
        assert!((accelerate(0.75, &opts) - 0.775).abs() < 1e-6);
        assert_eq!(decelerate(0.05, &opts), 0.05 - 0.75);
    }

    #[test]
    fn speed_is_clamped_to_max() {
        let opts = options(SpeedPolicy::Reversible);
        let mut speed = 0.0;
        for _ in 0..100 {
            speed = accelerate(speed, &opts);
        }
        assert_eq!(speed, 1.0);
        for _ in 0..200 {
            speed = decelerate(speed, &opts);
        }
        assert_eq!(speed, -1.0);
    }

    #[test]
    fn forward_only_stops_at_zero() {
        let opts = options(SpeedPolicy::ForwardOnly);
        assert!((decelerate(0.5, &opts) - 0.475).abs() < 1e-6);
        assert_eq!(decelerate(0.3, &opts), 0.3 - 0.025);
        assert_eq!(decelerate(0.1, &opts), 0.0);
        assert_eq!(decelerate(0.0, &opts), 0.0);
    }

    #[test]
    fn without_stiction_steps_are_uniform() {
        let opts = SpeedOptions {
            stiction: StictionOptions {
                enabled: false,
                ..StictionOptions::default()
            },
            ..SpeedOptions::default()
        };
        assert_eq!(accelerate(0.0, &opts), 0.025);
        assert_eq!(decelerate(0.0, &opts), -0.025);
    }
}
