use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::curve::CurveOptions;
use crate::camera::{SpeedPolicy, StaticSlot};
use crate::curve::Interpolation;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera viewpoints, motion tuning and the fly-through path.
pub struct CameraOptions {
    /// First parked viewpoint.
    pub static_a: StaticViewOptions,
    /// Second parked viewpoint.
    pub static_b: StaticViewOptions,
    /// Free-camera pose restored on restart.
    pub restart: RestartPoseOptions,
    /// Fraction of the remaining distance covered per frame while blending.
    #[schemars(title = "Teleport Speed", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub teleport_speed: f32,
    /// Per-axis tolerance at which a blend counts as arrived.
    #[schemars(skip)]
    pub arrival_epsilon: f32,
    /// Free-mode speed stepping.
    pub speed: SpeedOptions,
    /// Degrees turned per held-key tick.
    #[schemars(title = "Turn Step", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub turn_step: f32,
    /// Degrees of look per pixel of pointer motion.
    #[schemars(title = "Look Sensitivity", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub look_sensitivity: f32,
    /// Pitch limit in degrees, applied symmetrically.
    #[schemars(title = "Max Elevation", range(min = 0.0, max = 89.0), extend("step" = 1.0))]
    pub max_elevation: f32,
    /// Height change per raise/lower command.
    #[schemars(skip)]
    pub raise_step: f32,
    /// Region the free camera may move in.
    #[schemars(skip)]
    pub bounds: BoundsOptions,
    /// Footprints the free camera may not enter.
    #[schemars(skip)]
    pub obstacles: Vec<ObstacleOptions>,
    /// Fly-through path driven in curve-path mode.
    #[schemars(skip)]
    pub path: CurveOptions,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(inline)]
/// Eye position and look-at point of a parked viewpoint.
pub struct StaticViewOptions {
    /// Eye position.
    pub position: [f32; 3],
    /// Look-at point.
    pub center: [f32; 3],
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(inline)]
#[serde(default)]
/// Free-camera pose applied by restart.
pub struct RestartPoseOptions {
    /// Camera position.
    pub position: [f32; 3],
    /// Heading in degrees, counter-clockwise from `+X`.
    pub yaw: f32,
    /// Pitch in degrees.
    pub elevation: f32,
}

impl Default for RestartPoseOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 5.3, 1.3],
            yaw: 90.0,
            elevation: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(inline)]
#[serde(default)]
/// How held accelerate/decelerate keys change speed.
pub struct SpeedOptions {
    /// Whether speed may go negative.
    pub policy: SpeedPolicy,
    /// Speed change per tick away from zero.
    pub increment: f32,
    /// Speed magnitude limit.
    pub max: f32,
    /// Larger step applied near zero speed.
    pub stiction: StictionOptions,
}

impl Default for SpeedOptions {
    fn default() -> Self {
        Self {
            policy: SpeedPolicy::Reversible,
            increment: 0.025,
            max: 1.0,
            stiction: StictionOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(inline)]
#[serde(default)]
/// Boosted step used while `|speed| <= threshold`.
pub struct StictionOptions {
    /// Whether the boost applies at all.
    pub enabled: bool,
    /// Speed magnitude at or below which the boost applies.
    pub threshold: f32,
    /// Step used instead of the regular increment.
    pub increment: f32,
}

impl Default for StictionOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: 0.1,
            increment: 0.75,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Horizontal square and height range the free camera is kept inside.
pub struct BoundsOptions {
    /// Minimum `(x, y)`.
    pub min: [f32; 2],
    /// Maximum `(x, y)`.
    pub max: [f32; 2],
    /// Lowest height reachable by lowering the camera.
    pub min_height: f32,
    /// Highest height reachable by raising the camera.
    pub max_height: f32,
}

impl Default for BoundsOptions {
    fn default() -> Self {
        Self {
            min: [-2.8, -2.8],
            max: [2.8, 2.8],
            min_height: 0.3,
            max_height: 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
/// Axis-aligned footprint in the ground plane.
pub struct ObstacleOptions {
    /// Footprint center `(x, y)`.
    pub center: [f32; 2],
    /// Half width and half depth.
    pub half_extent: [f32; 2],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            static_a: StaticViewOptions {
                position: [1.0, 4.0, 1.5],
                center: [0.0, 2.0, 2.0],
            },
            static_b: StaticViewOptions {
                position: [1.0, 4.0, 5.1],
                center: [0.0, 0.0, -0.3],
            },
            restart: RestartPoseOptions::default(),
            teleport_speed: 0.2,
            arrival_epsilon: 0.01,
            speed: SpeedOptions::default(),
            turn_step: 2.0,
            look_sensitivity: 0.5,
            max_elevation: 45.0,
            raise_step: 0.1,
            bounds: BoundsOptions::default(),
            // Tower footprint
            obstacles: vec![ObstacleOptions {
                center: [0.0, 0.02],
                half_extent: [0.8, 0.8],
            }],
            path: CurveOptions {
                points: vec![
                    [0.0, -2.0, 1.3],
                    [0.8, -1.65, 1.5],
                    [1.2, -1.3, 1.7],
                    [1.2, -0.6, 1.8],
                    [1.2, 0.1, 1.7],
                    [1.2, 0.8, 1.5],
                    [0.8, 1.15, 1.3],
                    [0.0, 1.5, 1.2],
                    [-0.8, 1.15, 1.3],
                    [-1.2, 0.8, 1.2],
                    [-1.2, 0.1, 1.4],
                    [-1.2, -0.6, 1.6],
                    [-1.2, -1.3, 1.3],
                    [-0.8, -1.65, 1.2],
                ],
                closed: true,
                interpolation: Interpolation::Hermite,
                speed: 0.6,
            },
        }
    }
}

impl CameraOptions {
    /// Viewpoint configured for `slot`.
    #[must_use]
    pub fn static_view(&self, slot: StaticSlot) -> &StaticViewOptions {
        match slot {
            StaticSlot::A => &self.static_a,
            StaticSlot::B => &self.static_b,
        }
    }
}
