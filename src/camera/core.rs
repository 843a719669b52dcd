use glam::{Mat4, Quat, Vec3};

/// World up axis. The scene is Z-up.
pub const WORLD_UP: Vec3 = Vec3::Z;

/// What the renderer needs to build a view matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
}

impl CameraPose {
    /// Pose at `eye` looking at `target` with world up.
    #[must_use]
    pub const fn looking_at(eye: Vec3, target: Vec3) -> Self {
        Self {
            eye,
            target,
            up: WORLD_UP,
        }
    }

    /// Right-handed view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Unit vector from eye toward target, `+Y` if they coincide.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).try_normalize().unwrap_or(Vec3::Y)
    }

    /// Move eye and target a fraction `alpha` of the way toward `goal`.
    pub fn blend_toward(&mut self, goal: &Self, alpha: f32) {
        self.eye = self.eye.lerp(goal.eye, alpha);
        self.target = self.target.lerp(goal.target, alpha);
        self.up = goal.up;
    }

    /// Whether eye and target are each within `epsilon` of `goal` on every
    /// axis.
    #[must_use]
    pub fn within(&self, goal: &Self, epsilon: f32) -> bool {
        (self.eye - goal.eye).abs().max_element() <= epsilon
            && (self.target - goal.target).abs().max_element() <= epsilon
    }
}

/// Camera-mounted spotlight, published for the lighting pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reflector {
    /// Light position (the camera position).
    pub position: Vec3,
    /// Light direction (the tilted view direction).
    pub direction: Vec3,
    /// Whether the light is on.
    pub enabled: bool,
}

/// Position, heading and speed of the free-flying camera body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionPose {
    /// World position.
    pub position: Vec3,
    /// Horizontal unit heading, always `(cos yaw, sin yaw, 0)` in free
    /// flight.
    pub direction: Vec3,
    /// Heading in degrees, kept in `[0, 360)`.
    pub yaw: f32,
    /// Pitch in degrees; positive tilts the view downward.
    pub elevation: f32,
    /// Signed speed along `direction`, in units per second.
    pub speed: f32,
}

impl MotionPose {
    /// Stationary body at `position` heading `yaw` degrees.
    #[must_use]
    pub fn new(position: Vec3, yaw: f32, elevation: f32) -> Self {
        let yaw = wrap_degrees(yaw);
        Self {
            position,
            direction: yaw_direction(yaw),
            yaw,
            elevation,
            speed: 0.0,
        }
    }

    /// Body standing at `eye` facing horizontally toward `target`.
    #[must_use]
    pub fn facing(eye: Vec3, target: Vec3) -> Self {
        let flat = (target - eye).truncate();
        let yaw = if flat.length_squared() > f32::EPSILON {
            flat.y.atan2(flat.x).to_degrees()
        } else {
            0.0
        };
        Self::new(eye, yaw, 0.0)
    }

    /// Set the heading and recompute `direction`.
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = wrap_degrees(yaw);
        self.direction = yaw_direction(self.yaw);
    }

    /// Add `delta` degrees to the heading (positive = counter-clockwise).
    pub fn turn(&mut self, delta: f32) {
        self.set_yaw(self.yaw + delta);
    }

    /// View direction after applying elevation.
    #[must_use]
    pub fn tilted_direction(&self) -> Vec3 {
        tilt(self.direction, self.elevation).0
    }

    /// Camera pose for this body: target one unit ahead along the tilted
    /// direction, with up tilted alongside.
    #[must_use]
    pub fn look_at(&self) -> CameraPose {
        let (direction, up) = tilt(self.direction, self.elevation);
        CameraPose {
            eye: self.position,
            target: self.position + direction,
            up,
        }
    }
}

/// Rotate `direction` and world up together by `elevation` degrees around
/// `direction × up`.
#[must_use]
pub fn tilt(direction: Vec3, elevation: f32) -> (Vec3, Vec3) {
    let Some(axis) = direction.cross(WORLD_UP).try_normalize() else {
        return (direction, WORLD_UP);
    };
    let rotation = Quat::from_axis_angle(axis, -elevation.to_radians());
    (rotation * direction, rotation * WORLD_UP)
}

/// Reduce an angle in degrees into `[0, 360)`.
#[must_use]
pub fn wrap_degrees(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = angle.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Horizontal unit vector for a heading in degrees.
#[must_use]
pub fn yaw_direction(yaw: f32) -> Vec3 {
    let (sin, cos) = yaw.to_radians().sin_cos();
    Vec3::new(cos, sin, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn yaw_wraps_into_range() {
        assert_eq!(wrap_degrees(365.0), 5.0);
        assert_eq!(wrap_degrees(-10.0), 350.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(f32::NAN), 0.0);
    }

    #[test]
    fn turning_recomputes_direction() {
        let mut body = MotionPose::new(Vec3::ZERO, 0.0, 0.0);
        assert!(close(body.direction, Vec3::X));
        body.turn(90.0);
        assert!(close(body.direction, Vec3::Y));
        body.turn(-180.0);
        assert!((body.yaw - 270.0).abs() < 1e-4);
        assert!(close(body.direction, -Vec3::Y));
    }

    #[test]
    fn positive_elevation_tilts_view_down() {
        let body = MotionPose::new(Vec3::new(1.0, 2.0, 3.0), 0.0, 45.0);
        let pose = body.look_at();
        let h = std::f32::consts::FRAC_1_SQRT_2;
        assert!(close(pose.target - pose.eye, Vec3::new(h, 0.0, -h)));
        assert!(close(pose.up, Vec3::new(h, 0.0, h)));
        assert!(pose.up.dot(pose.target - pose.eye).abs() < 1e-6);
    }

    #[test]
    fn zero_elevation_looks_straight_ahead() {
        let body = MotionPose::new(Vec3::ZERO, 90.0, 0.0);
        let pose = body.look_at();
        assert!(close(pose.target, Vec3::Y));
        assert_eq!(pose.up, WORLD_UP);
    }

    #[test]
    fn facing_derives_yaw_from_target() {
        let body = MotionPose::facing(Vec3::ZERO, Vec3::new(0.0, 5.0, -2.0));
        assert!((body.yaw - 90.0).abs() < 1e-4);
        assert_eq!(body.speed, 0.0);
    }

    #[test]
    fn blend_and_within() {
        let goal = CameraPose::looking_at(Vec3::X, Vec3::ZERO);
        let mut pose = CameraPose::looking_at(Vec3::ZERO, Vec3::Y);
        pose.blend_toward(&goal, 0.5);
        assert!(close(pose.eye, Vec3::new(0.5, 0.0, 0.0)));
        assert!(!pose.within(&goal, 0.01));
        pose.blend_toward(&goal, 1.0);
        assert!(pose.within(&goal, 0.0));
    }
}
