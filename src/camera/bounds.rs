use glam::{Vec2, Vec3};

use crate::options::{BoundsOptions, ObstacleOptions};

/// Region the free camera is kept inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementBounds {
    min: Vec2,
    max: Vec2,
    min_height: f32,
    max_height: f32,
}

impl MovementBounds {
    /// Bounds from options; swapped limits are put back in order.
    #[must_use]
    pub fn from_options(options: &BoundsOptions) -> Self {
        let a = Vec2::from_array(options.min);
        let b = Vec2::from_array(options.max);
        Self {
            min: a.min(b),
            max: a.max(b),
            min_height: options.min_height.min(options.max_height),
            max_height: options.min_height.max(options.max_height),
        }
    }

    /// Clamp `x` and `y` into the square; `z` is untouched.
    #[must_use]
    pub fn clamp(&self, position: Vec3) -> Vec3 {
        let xy = position.truncate().clamp(self.min, self.max);
        xy.extend(position.z)
    }

    /// Clamp a height into the vertical range.
    #[must_use]
    pub fn clamp_height(&self, z: f32) -> f32 {
        z.clamp(self.min_height, self.max_height)
    }
}

/// Axis-aligned ground footprint the camera may not enter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    center: Vec2,
    half_extent: Vec2,
}

impl Obstacle {
    /// Footprint centered at `center` reaching `half_extent` each way.
    #[must_use]
    pub fn new(center: Vec2, half_extent: Vec2) -> Self {
        Self {
            center,
            half_extent: half_extent.abs(),
        }
    }

    /// Whether `position` lies inside the footprint (any height).
    #[must_use]
    pub fn contains(&self, position: Vec3) -> bool {
        let offset = (position.truncate() - self.center).abs();
        offset.x < self.half_extent.x && offset.y < self.half_extent.y
    }
}

impl From<&ObstacleOptions> for Obstacle {
    fn from(options: &ObstacleOptions) -> Self {
        Self::new(
            Vec2::from_array(options.center),
            Vec2::from_array(options.half_extent),
        )
    }
}
