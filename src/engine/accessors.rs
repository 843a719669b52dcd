//! Read-only query methods for [`SceneEngine`].

use glam::Mat4;

use super::SceneEngine;
use crate::animation::{Explosion, ObjectMotionController, ObjectPose};
use crate::camera::{CameraMode, CameraMotionController, CameraPose, Reflector};
use crate::input::InputProcessor;
use crate::options::{Options, PropTable};

// ── Camera ──

impl SceneEngine {
    /// Camera controller (mode, body, teleport state).
    #[must_use]
    pub const fn camera(&self) -> &CameraMotionController {
        &self.camera
    }

    /// Active camera mode.
    #[must_use]
    pub const fn mode(&self) -> CameraMode {
        self.camera.mode()
    }

    /// Pose the frame should be drawn from.
    #[must_use]
    pub const fn camera_pose(&self) -> &CameraPose {
        self.camera.view()
    }

    /// View matrix for the current camera pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view().view_matrix()
    }

    /// Camera spotlight for the lighting pass.
    #[must_use]
    pub fn reflector(&self) -> Reflector {
        self.camera.reflector()
    }
}

// ── Props ──

impl SceneEngine {
    /// Prop controller.
    #[must_use]
    pub const fn objects(&self) -> &ObjectMotionController {
        &self.objects
    }

    /// Current pose of the named prop.
    #[must_use]
    pub fn prop_pose(&self, name: &str) -> Option<&ObjectPose> {
        self.objects.pose(name)
    }

    /// Live explosions.
    #[must_use]
    pub fn explosions(&self) -> &[Explosion] {
        self.objects.explosions()
    }
}

// ── Lighting ──

impl SceneEngine {
    /// Day-cycle light intensity for the current scene time.
    #[must_use]
    pub fn daylight(&self) -> f32 {
        self.lighting.daylight(self.elapsed)
    }

    /// Lamp intensity.
    #[must_use]
    pub fn point_light(&self) -> f32 {
        self.lighting.point_light()
    }
}

// ── Configuration ──

impl SceneEngine {
    /// Options the engine was built from.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Static prop placements.
    #[must_use]
    pub const fn placements(&self) -> &PropTable {
        &self.placements
    }

    /// Input processor (bindings and held keys).
    #[must_use]
    pub const fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// Mutable input processor, for rebinding keys at runtime.
    pub fn input_mut(&mut self) -> &mut InputProcessor {
        &mut self.input
    }

    /// Scene seconds since construction or the last restart.
    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
