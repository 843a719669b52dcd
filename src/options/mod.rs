//! Tuning constants with TOML preset support, plus the prop placement
//! config loader.
//!
//! Every number the camera and prop controllers use (viewpoints, speeds,
//! bounds, curve control points, key bindings) lives here. Options
//! serialize to/from TOML so a scene can be re-tuned without a rebuild.

mod camera;
mod curve;
mod keybindings;
mod lighting;
mod motion;
mod props;

use std::path::Path;

pub use camera::{
    BoundsOptions, CameraOptions, ObstacleOptions, RestartPoseOptions,
    SpeedOptions, StaticViewOptions, StictionOptions,
};
pub use curve::CurveOptions;
pub use keybindings::KeybindingOptions;
pub use lighting::LightingOptions;
pub use motion::{
    CurvePropOptions, ExplosionOptions, MotionOptions, PendulumOptions,
};
pub use props::{PropConfig, PropTable};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::LakeviewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera viewpoints, motion tuning and fly-through path.
    pub camera: CameraOptions,
    /// Animated props and explosions.
    pub motion: MotionOptions,
    /// Day cycle and lamp levels.
    pub lighting: LightingOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, LakeviewError> {
        let content =
            std::fs::read_to_string(path).map_err(LakeviewError::Io)?;
        let mut opts: Self = toml::from_str(&content)
            .map_err(|e| LakeviewError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options, falling back to defaults (with a logged error) when the
    /// file is missing or malformed.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::error!(
                "options '{}' not loaded, using defaults: {e}",
                path.display()
            );
            Self::default()
        })
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), LakeviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LakeviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(LakeviewError::Io)?;
        }
        std::fs::write(path, content).map_err(LakeviewError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::SpeedPolicy;
    use crate::curve::Interpolation;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
teleport_speed = 0.5

[camera.speed]
policy = "forward_only"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.teleport_speed, 0.5);
        assert_eq!(opts.camera.speed.policy, SpeedPolicy::ForwardOnly);
        // Everything else should be default
        assert_eq!(opts.camera.speed.increment, 0.025);
        assert_eq!(opts.camera.path.points.len(), 14);
        assert_eq!(opts.camera.path.interpolation, Interpolation::Hermite);
        assert_eq!(opts.motion.explosion.frames, 84);
    }

    #[test]
    fn stiction_can_be_disabled() {
        let toml_str = r"
[camera.speed.stiction]
enabled = false
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert!(!opts.camera.speed.stiction.enabled);
        assert_eq!(opts.camera.speed.stiction.increment, 0.75);
        assert!(Options::default().camera.speed.stiction.enabled);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyC"),
            Some(KeyAction::ToggleFreeCamera)
        );
        assert_eq!(
            opts.keybindings.lookup("ArrowLeft"),
            Some(KeyAction::TurnLeft)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn save_then_load_preserves_bindings() {
        let dir = std::env::temp_dir().join("lakeview-options-test");
        let path = dir.join("tuned.toml");
        let mut opts = Options::default();
        opts.keybindings.bind(KeyAction::Restart, "F5");
        opts.camera.max_elevation = 30.0;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(loaded.keybindings.lookup("F5"), Some(KeyAction::Restart));
        assert!(Options::list_presets(&dir).contains(&"tuned".to_owned()));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let opts =
            Options::load_or_default(Path::new("/nonexistent/lakeview.toml"));
        assert_eq!(opts, Options::default());
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("motion"));
        assert!(!props.contains_key("keybindings"));

        // Camera should have exposed fields but not skipped ones
        let camera = &props["camera"]["properties"];
        assert!(camera.get("teleport_speed").is_some());
        assert!(camera.get("max_elevation").is_some());
        assert!(camera.get("path").is_none());
        assert!(camera.get("bounds").is_none());
    }
}
