use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::curve::{CurveDefinition, Interpolation};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Control points, closure, interpolation family and playback rate of one
/// motion curve.
pub struct CurveOptions {
    /// Control points in order.
    pub points: Vec<[f32; 3]>,
    /// Whether the curve loops back to its first point.
    pub closed: bool,
    /// Interpolation family.
    pub interpolation: Interpolation,
    /// Curve parameter advanced per second of animation time.
    #[schemars(range(min = 0.0, max = 5.0))]
    pub speed: f32,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            closed: true,
            interpolation: Interpolation::CatmullRom,
            speed: 0.6,
        }
    }
}

impl CurveOptions {
    /// Build the immutable curve these options describe.
    #[must_use]
    pub fn to_curve(&self) -> CurveDefinition {
        let points: Vec<Vec3> =
            self.points.iter().copied().map(Vec3::from_array).collect();
        CurveDefinition::new(points, self.closed, self.interpolation)
    }

    /// Closed loop of `count` points on a horizontal circle.
    #[must_use]
    pub fn ring(center: [f32; 3], radius: f32, count: usize) -> Vec<[f32; 3]> {
        (0..count)
            .map(|i| {
                let angle = std::f32::consts::TAU * i as f32 / count as f32;
                [
                    center[0] + radius * angle.cos(),
                    center[1] + radius * angle.sin(),
                    center[2],
                ]
            })
            .collect()
    }
}
