use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Day cycle and lamp levels.
pub struct LightingOptions {
    /// Seconds for one full day cycle (bright, dark, bright again).
    #[schemars(title = "Day Length", range(min = 1.0, max = 600.0), extend("step" = 1.0))]
    pub day_period: f32,
    /// Lamp intensity added per cycle press.
    #[schemars(title = "Lamp Step", range(min = 0.05, max = 1.0), extend("step" = 0.05))]
    pub point_step: f32,
    /// Highest lamp intensity before cycling back to off.
    #[schemars(title = "Lamp Max", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub point_max: f32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            day_period: 60.0,
            point_step: 0.3,
            point_max: 0.9,
        }
    }
}
