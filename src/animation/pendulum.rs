use std::f32::consts::TAU;

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::clock::AnimationClock;
use super::prop::ObjectPose;
use crate::curve::facing_or_default;
use crate::options::PendulumOptions;

/// World axis a pendulum prop swings along.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// World `X`.
    X,
    /// World `Y`.
    Y,
    /// World `Z` (bobbing).
    #[default]
    Z,
}

impl Axis {
    /// Unit vector along the axis.
    #[must_use]
    pub const fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::X,
            Self::Y => Vec3::Y,
            Self::Z => Vec3::Z,
        }
    }
}

/// A prop that oscillates around a rest pose while disturbed.
#[derive(Debug, Clone)]
pub struct PendulumProp {
    name: String,
    origin: ObjectPose,
    axis: Axis,
    amplitude: f32,
    frequency: f32,
    disturbed: bool,
    initial_disturbed: bool,
    clock: AnimationClock,
    pose: ObjectPose,
}

impl PendulumProp {
    /// Pendulum resting at `origin`.
    #[must_use]
    pub fn new(options: &PendulumOptions, origin: ObjectPose) -> Self {
        let origin = ObjectPose {
            position: origin.position,
            forward: facing_or_default(origin.forward),
        };
        Self {
            name: options.name.clone(),
            origin,
            axis: options.axis,
            amplitude: options.amplitude,
            frequency: options.frequency,
            disturbed: options.disturbed,
            initial_disturbed: options.disturbed,
            clock: AnimationClock::default(),
            pose: origin,
        }
    }

    /// Name used to address the prop.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current pose.
    #[must_use]
    pub const fn pose(&self) -> &ObjectPose {
        &self.pose
    }

    /// Rest pose.
    #[must_use]
    pub const fn origin(&self) -> &ObjectPose {
        &self.origin
    }

    /// Whether the prop is swinging.
    #[must_use]
    pub const fn is_disturbed(&self) -> bool {
        self.disturbed
    }

    /// Start or stop swinging. Stopping returns the prop to rest and zeroes
    /// its clock.
    pub fn set_disturbed(&mut self, disturbed: bool) {
        self.disturbed = disturbed;
        if !disturbed {
            self.settle();
        }
    }

    /// Advance by `dt` if disturbed.
    pub fn update(&mut self, dt: f32) {
        if !self.disturbed {
            return;
        }
        self.clock.advance(dt);
        let phase = TAU * self.frequency * self.clock.elapsed();
        let offset = self.amplitude * phase.sin();
        self.pose.position = self.origin.position + self.axis.unit() * offset;
    }

    /// Back to rest with the configured flag.
    pub fn restart(&mut self) {
        self.settle();
        self.disturbed = self.initial_disturbed;
    }

    fn settle(&mut self) {
        self.pose = self.origin;
        self.clock.reset();
    }
}
