use glam::{Mat4, Vec3};

use super::clock::AnimationClock;
use crate::curve::{align_object, facing_or_default, CurveDefinition};
use crate::options::CurvePropOptions;

/// Where a prop is and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectPose {
    /// World position.
    pub position: Vec3,
    /// Unit facing direction.
    pub forward: Vec3,
}

impl ObjectPose {
    /// Model matrix for mesh placement (Z-up, uniform `scale`).
    #[must_use]
    pub fn model_matrix(&self, scale: f32) -> Mat4 {
        align_object(self.position, self.forward, Vec3::Z)
            * Mat4::from_scale(Vec3::splat(scale))
    }
}

/// A prop that loops along its own curve while animated.
#[derive(Debug, Clone)]
pub struct CurveProp {
    name: String,
    curve: CurveDefinition,
    speed: f32,
    facing_blend: f32,
    animate: bool,
    initial_animate: bool,
    clock: AnimationClock,
    pose: ObjectPose,
    initial_pose: ObjectPose,
}

impl CurveProp {
    /// Prop from options, starting at `start`.
    #[must_use]
    pub fn new(options: &CurvePropOptions, start: ObjectPose) -> Self {
        let curve = options.curve.to_curve();
        if curve.is_degenerate() {
            log::warn!(
                "prop '{}' curve has {} point(s); it will not move",
                options.name,
                curve.points().len()
            );
        }
        let start = ObjectPose {
            position: start.position,
            forward: facing_or_default(start.forward),
        };
        Self {
            name: options.name.clone(),
            curve,
            speed: options.curve.speed,
            facing_blend: options.facing_blend.clamp(0.0, 1.0),
            animate: options.animate,
            initial_animate: options.animate,
            clock: AnimationClock::default(),
            pose: start,
            initial_pose: start,
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

    /// Whether the prop is moving.
    #[must_use]
    pub const fn is_animated(&self) -> bool {
        self.animate
    }

    /// Pause or resume. The clock keeps its value while paused.
    pub fn set_animated(&mut self, animate: bool) {
        self.animate = animate;
    }

    /// Seconds of animation time so far.
    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    /// Advance by `dt` if animated. Position snaps to the curve; facing
    /// turns a fraction of the way toward the direction of travel.
    pub fn update(&mut self, dt: f32) {
        if !self.animate {
            return;
        }
        self.clock.advance(dt);
        let t = self.clock.elapsed() * self.speed;
        let travel = self
            .curve
            .interpolation()
            .travel_direction(self.curve.evaluate_derivative(t));

        self.pose.position = self.curve.evaluate(t);
        self.pose.forward = facing_or_default(
            self.pose.forward.lerp(travel, self.facing_blend),
        );
    }

    /// Back to the configured start pose, flag and a zero clock.
    pub fn restart(&mut self) {
        self.clock.reset();
        self.pose = self.initial_pose;
        self.animate = self.initial_animate;
    }
}
