//! Frame-driven scene engine.
//!
//! Owns the camera controller, the prop controller and the input
//! processor. The host forwards input events as they arrive, calls
//! [`SceneEngine::update`] (or [`SceneEngine::advance_to`]) once per timer
//! tick, and only then reads poses for drawing. Update is the sole mutator;
//! everything read afterwards is a snapshot of that tick.

mod accessors;
pub mod command;
mod input;

pub use command::SceneCommand;

use crate::animation::ObjectMotionController;
use crate::camera::{CameraFrame, CameraMotionController};
use crate::input::InputProcessor;
use crate::lighting::SceneLighting;
use crate::options::{Options, PropTable};

/// What one tick changed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameReport {
    /// Seconds the tick advanced by.
    pub dt: f32,
    /// Camera events (teleport arrival, collision).
    pub camera: CameraFrame,
    /// Explosions that finished this tick.
    pub explosions_finished: usize,
}

/// The scene's mutable state: camera, props and input.
pub struct SceneEngine {
    options: Options,
    placements: PropTable,
    camera: CameraMotionController,
    objects: ObjectMotionController,
    lighting: SceneLighting,
    input: InputProcessor,
    /// Scene time accumulated by ticks.
    elapsed: f32,
    /// Latest absolute time seen by `advance_to`.
    last_time: f32,
}

impl SceneEngine {
    /// Engine from tuning options and prop placements.
    #[must_use]
    pub fn new(options: Options, placements: PropTable) -> Self {
        let camera = CameraMotionController::new(&options.camera);
        let objects =
            ObjectMotionController::from_options(&options.motion, &placements);
        let lighting = SceneLighting::new(&options.lighting);
        let input =
            InputProcessor::with_key_bindings(options.keybindings.clone());
        log::info!(
            "scene ready: {} prop(s), {} placement(s)",
            objects.poses().count(),
            placements.len()
        );
        Self {
            options,
            placements,
            camera,
            objects,
            lighting,
            input,
            elapsed: 0.0,
            last_time: 0.0,
        }
    }

    /// Advance one tick of `dt` seconds: held-key repeats first, then the
    /// camera, then the props.
    pub fn update(&mut self, dt: f32) -> FrameReport {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        let repeats: Vec<SceneCommand> = self.input.repeat_commands().collect();
        for command in repeats {
            let _ = self.execute(command);
        }

        let camera = self.camera.update(dt);
        let explosions_finished = self.objects.update(dt);
        self.elapsed += dt;

        FrameReport {
            dt,
            camera,
            explosions_finished,
        }
    }

    /// Tick to absolute time `now` (seconds). Time that runs backward
    /// counts as a zero-length tick.
    pub fn advance_to(&mut self, now: f32) -> FrameReport {
        let dt = if now.is_finite() && now > self.last_time {
            let dt = now - self.last_time;
            self.last_time = now;
            dt
        } else {
            0.0
        };
        self.update(dt)
    }

    /// Reset camera, props, lamp, clocks and held keys.
    pub fn restart(&mut self) {
        self.camera.restart();
        self.objects.restart();
        self.lighting.restart();
        self.input.release_all();
        self.elapsed = 0.0;
        log::info!("scene restarted");
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::CameraMode;
    use crate::input::InputEvent;

    fn engine() -> SceneEngine {
        SceneEngine::new(Options::default(), PropTable::default())
    }

    fn settle(engine: &mut SceneEngine) {
        let arrived =
            (0..200).any(|_| engine.update(0.033).camera.teleport_arrived);
        assert!(arrived, "teleport never arrived");
    }

    #[test]
    fn keyboard_drives_free_flight() {
        let mut engine = engine();
        assert!(engine.handle_input(InputEvent::press("KeyC")));
        settle(&mut engine);
        assert_eq!(engine.mode(), CameraMode::Free);

        let start = engine.camera().body().position;
        let _ = engine.handle_input(InputEvent::press("ArrowDown"));
        let _ = engine.update(0.033);
        let _ = engine.handle_input(InputEvent::release("ArrowDown"));
        assert!(engine.camera().body().speed < 0.0);

        let _ = engine.update(0.033);
        assert_ne!(engine.camera().body().position, start);
    }

    #[test]
    fn held_turn_repeats_each_tick() {
        let mut engine = engine();
        let _ = engine.handle_input(InputEvent::press("KeyC"));
        settle(&mut engine);
        let yaw = engine.camera().body().yaw;
        let _ = engine.handle_input(InputEvent::press("ArrowLeft"));
        for _ in 0..3 {
            let _ = engine.update(0.033);
        }
        assert!((engine.camera().body().yaw - (yaw + 6.0)).abs() < 1e-3);
    }

    #[test]
    fn advance_to_clamps_backward_time() {
        let mut engine = engine();
        assert!((engine.advance_to(0.5).dt - 0.5).abs() < 1e-6);
        assert_eq!(engine.advance_to(0.2).dt, 0.0);
        assert!((engine.advance_to(0.7).dt - 0.2).abs() < 1e-6);
        assert_eq!(engine.advance_to(f32::NAN).dt, 0.0);
        assert!((engine.elapsed() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn props_move_regardless_of_camera_mode() {
        let mut engine = engine();
        let before = engine.prop_pose("duck").copied();
        assert!(engine.execute(SceneCommand::ToggleCurvePath));
        let _ = engine.update(0.3);
        assert_ne!(engine.prop_pose("duck").copied(), before);
    }

    #[test]
    fn restart_resets_everything() {
        let mut engine = engine();
        let _ = engine.execute(SceneCommand::ToggleCurvePath);
        let _ = engine.execute(SceneCommand::TriggerExplosion);
        let _ = engine.handle_input(InputEvent::press("ArrowUp"));
        let _ = engine.update(0.5);

        assert!(engine.execute(SceneCommand::Restart));
        assert_eq!(engine.mode(), CameraMode::StaticA);
        assert!(engine.explosions().is_empty());
        assert_eq!(engine.elapsed(), 0.0);
        assert!(!engine.input().is_held(crate::KeyAction::Accelerate));
        assert_eq!(engine.camera_pose().eye, Vec3::new(1.0, 4.0, 1.5));
    }

    #[test]
    fn daylight_follows_scene_time_and_lamp_resets() {
        let mut engine = engine();
        assert_eq!(engine.daylight(), 1.0);
        let _ = engine.update(30.0);
        assert!(engine.daylight().abs() < 1e-5);

        assert!(engine.handle_input(InputEvent::press("KeyO")));
        assert!((engine.point_light() - 0.3).abs() < 1e-6);
        let _ = engine.execute(SceneCommand::Restart);
        assert_eq!(engine.point_light(), 0.0);
        assert_eq!(engine.daylight(), 1.0);
    }

    #[test]
    fn reflector_follows_free_camera() {
        let mut engine = engine();
        let _ = engine.execute(SceneCommand::ToggleFreeCamera);
        settle(&mut engine);
        assert!(engine.execute(SceneCommand::ToggleSpotlight));
        let reflector = engine.reflector();
        assert!(reflector.enabled);
        assert_eq!(reflector.position, engine.camera_pose().eye);
    }
}
