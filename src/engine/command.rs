//! The scene's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, pointer
//! motion, a menu entry, or a programmatic call, is represented as a
//! `SceneCommand`. Consumers construct commands and pass them to
//! [`SceneEngine::execute`](super::SceneEngine::execute).

use glam::Vec2;

use crate::camera::StaticSlot;
use crate::input::KeyAction;

/// A single scene operation.
///
/// The engine never cares *how* a command was triggered; keyboard,
/// pointer, menu and API calls all look identical:
///
/// ```ignore
/// engine.execute(SceneCommand::ToggleFreeCamera);
/// engine.execute(SceneCommand::Look { delta: Vec2::new(4.0, -2.0) });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    // ── Camera modes ────────────────────────────────────────────────
    /// Flip between the two static viewpoints.
    SwitchStaticSlot,

    /// Go to a specific static viewpoint.
    SelectStaticSlot(StaticSlot),

    /// Enter or leave free flight.
    ToggleFreeCamera,

    /// Enter or leave the fly-through path.
    ToggleCurvePath,

    // ── Free flight ─────────────────────────────────────────────────
    /// One speed-up tick.
    Accelerate,

    /// One slow-down tick.
    Decelerate,

    /// Turn counter-clockwise one step.
    TurnLeft,

    /// Turn clockwise one step.
    TurnRight,

    /// Pointer look by `delta` pixels.
    Look {
        /// Horizontal and vertical pointer delta.
        delta: Vec2,
    },

    /// Move up one step.
    Raise,

    /// Move down one step.
    Lower,

    /// Switch the camera spotlight.
    ToggleSpotlight,

    // ── Props ───────────────────────────────────────────────────────
    /// Pause or resume one curve prop.
    ToggleProp {
        /// Prop name.
        name: String,
    },

    /// Pause or resume every curve prop.
    ToggleProps,

    /// Disturb or settle one pendulum prop.
    TogglePendulum {
        /// Prop name.
        name: String,
    },

    /// Disturb or settle every pendulum prop.
    TogglePendulums,

    /// Spawn an explosion at the configured site.
    TriggerExplosion,

    // ── Lighting ────────────────────────────────────────────────────
    /// Step the lamp to its next brightness.
    CyclePointLight,

    // ── Scene ───────────────────────────────────────────────────────
    /// Reset camera, props and clocks to their defaults.
    Restart,
}

impl From<KeyAction> for SceneCommand {
    fn from(action: KeyAction) -> Self {
        match action {
            KeyAction::SwitchStaticSlot => Self::SwitchStaticSlot,
            KeyAction::SelectStaticA => Self::SelectStaticSlot(StaticSlot::A),
            KeyAction::SelectStaticB => Self::SelectStaticSlot(StaticSlot::B),
            KeyAction::ToggleFreeCamera => Self::ToggleFreeCamera,
            KeyAction::ToggleCurvePath => Self::ToggleCurvePath,
            KeyAction::Restart => Self::Restart,
            KeyAction::ToggleSpotlight => Self::ToggleSpotlight,
            KeyAction::TriggerExplosion => Self::TriggerExplosion,
            KeyAction::ToggleProps => Self::ToggleProps,
            KeyAction::TogglePendulums => Self::TogglePendulums,
            KeyAction::CyclePointLight => Self::CyclePointLight,
            KeyAction::Accelerate => Self::Accelerate,
            KeyAction::Decelerate => Self::Decelerate,
            KeyAction::TurnLeft => Self::TurnLeft,
            KeyAction::TurnRight => Self::TurnRight,
            KeyAction::Raise => Self::Raise,
            KeyAction::Lower => Self::Lower,
        }
    }
}
