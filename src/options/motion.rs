use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::curve::CurveOptions;
use crate::animation::Axis;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
/// Animated props and explosion timing.
pub struct MotionOptions {
    /// Props that loop along their own curve.
    #[schemars(skip)]
    pub props: Vec<CurvePropOptions>,
    /// Props that swing around a fixed point while disturbed.
    #[schemars(skip)]
    pub pendulums: Vec<PendulumOptions>,
    /// Explosion billboard timing.
    pub explosion: ExplosionOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// One curve-following prop.
pub struct CurvePropOptions {
    /// Name; also the prop-config section that seeds its start pose.
    pub name: String,
    /// Loop the prop follows.
    pub curve: CurveOptions,
    /// Fraction of the way the facing turns toward the tangent per update.
    pub facing_blend: f32,
    /// Whether the prop starts animated.
    pub animate: bool,
    /// Start position before the first animated update.
    pub position: [f32; 3],
    /// Start facing before the first animated update.
    pub forward: [f32; 3],
}

impl Default for CurvePropOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            curve: CurveOptions::default(),
            facing_blend: 0.2,
            animate: true,
            position: [0.0; 3],
            forward: [0.0, 1.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// One swinging prop.
pub struct PendulumOptions {
    /// Name; also the prop-config section that seeds its rest pose.
    pub name: String,
    /// Rest position.
    pub position: [f32; 3],
    /// Rest facing.
    pub forward: [f32; 3],
    /// Axis the prop oscillates along.
    pub axis: Axis,
    /// Peak displacement from rest.
    pub amplitude: f32,
    /// Oscillations per second.
    pub frequency: f32,
    /// Whether the prop starts disturbed.
    pub disturbed: bool,
}

impl Default for PendulumOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            position: [0.0; 3],
            forward: [1.0, 0.0, 0.0],
            axis: Axis::Z,
            amplitude: 0.05,
            frequency: 0.5,
            disturbed: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(inline)]
#[serde(default)]
/// Explosion sprite timing and placement.
pub struct ExplosionOptions {
    /// Sprite-sheet frame count.
    #[schemars(range(min = 1, max = 256))]
    pub frames: u32,
    /// Seconds each frame is shown.
    #[schemars(range(min = 0.001, max = 0.5))]
    pub frame_duration: f32,
    /// Billboard size.
    #[schemars(range(min = 0.01, max = 5.0))]
    pub size: f32,
    /// Prop-config section whose position is the explosion site.
    #[schemars(skip)]
    pub site: String,
    /// Site used when the config has no such section.
    #[schemars(skip)]
    pub fallback_site: [f32; 3],
}

impl Default for ExplosionOptions {
    fn default() -> Self {
        Self {
            frames: 84,
            frame_duration: 0.02,
            size: 0.3,
            site: "boat".into(),
            fallback_site: [-1.6, 1.9, -0.3],
        }
    }
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            props: vec![
                CurvePropOptions {
                    name: "duck".into(),
                    curve: CurveOptions {
                        points: CurveOptions::ring([1.4, 1.0, 1.15], 0.2, 6),
                        speed: 0.3,
                        ..CurveOptions::default()
                    },
                    position: [1.6, 1.0, 1.15],
                    ..CurvePropOptions::default()
                },
                CurvePropOptions {
                    name: "corpse".into(),
                    curve: CurveOptions {
                        points: vec![
                            [-3.2, -3.0, -0.08],
                            [-2.7, -2.9, -0.08],
                            [-2.4, -2.5, -0.08],
                            [-2.5, -2.0, -0.08],
                            [-2.9, -1.8, -0.08],
                            [-3.4, -1.9, -0.08],
                            [-3.7, -2.3, -0.08],
                            [-3.6, -2.8, -0.08],
                        ],
                        speed: 0.6,
                        ..CurveOptions::default()
                    },
                    position: [-3.2, -3.0, -0.08],
                    ..CurvePropOptions::default()
                },
            ],
            pendulums: vec![PendulumOptions {
                name: "lantern".into(),
                position: [0.9, -0.6, 1.6],
                axis: Axis::X,
                amplitude: 0.04,
                frequency: 0.8,
                ..PendulumOptions::default()
            }],
            explosion: ExplosionOptions::default(),
        }
    }
}
