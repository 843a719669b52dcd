//! Camera mode state machine.
//!
//! The controller owns two poses: the free-flying `body` (position, yaw,
//! elevation, speed) and the displayed `view` (eye, target, up). In `Free`
//! the view follows the body; in static modes it rests on a configured
//! viewpoint; in `CurvePath` it is computed from the fly-through path.
//! Mode changes between static and free viewpoints blend the view through
//! a [`TeleportState`] instead of cutting.
//!
//! Commands return `true` when honored. An illegal command (wrong mode,
//! teleport in flight) is a silent no-op that returns `false`.

use glam::{Vec2, Vec3};

use super::bounds::{MovementBounds, Obstacle};
use super::core::{CameraPose, MotionPose, Reflector, WORLD_UP};
use super::mode::{CameraMode, StaticSlot};
use super::speed;
use super::teleport::{TeleportProgress, TeleportState};
use crate::animation::AnimationClock;
use crate::curve::CurveDefinition;
use crate::options::CameraOptions;

/// What happened during one [`CameraMotionController::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CameraFrame {
    /// A teleport landed this frame.
    pub teleport_arrived: bool,
    /// A free-flight move was rejected by an obstacle this frame.
    pub collided: bool,
}

/// Everything needed to leave `CurvePath` exactly as it was entered.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CurveResume {
    mode: CameraMode,
    body: MotionPose,
    view: CameraPose,
    teleport: Option<TeleportState>,
}

/// Owns the camera pose and the `StaticA`/`StaticB`/`Free`/`CurvePath`
/// state machine.
#[derive(Debug, Clone)]
pub struct CameraMotionController {
    options: CameraOptions,
    path: CurveDefinition,
    path_speed: f32,
    bounds: MovementBounds,
    obstacles: Vec<Obstacle>,

    mode: CameraMode,
    slot: StaticSlot,
    body: MotionPose,
    view: CameraPose,
    teleport: Option<TeleportState>,
    /// Free pose captured when `Free` was last left.
    free_resume: MotionPose,
    curve_resume: Option<CurveResume>,
    path_clock: AnimationClock,
    spotlight: bool,
}

impl CameraMotionController {
    /// Controller parked at static viewpoint A.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let path = options.path.to_curve();
        if path.is_degenerate() {
            log::warn!(
                "camera path has {} point(s); curve mode will hold still",
                path.points().len()
            );
        }
        let body = restart_body(options);
        Self {
            path,
            path_speed: options.path.speed,
            bounds: MovementBounds::from_options(&options.bounds),
            obstacles: options.obstacles.iter().map(Obstacle::from).collect(),
            mode: CameraMode::StaticA,
            slot: StaticSlot::A,
            body,
            view: static_pose(options, StaticSlot::A),
            teleport: None,
            free_resume: body,
            curve_resume: None,
            path_clock: AnimationClock::default(),
            spotlight: false,
            options: options.clone(),
        }
    }

    /// Reset to static viewpoint A with the configured restart body.
    pub fn restart(&mut self) {
        let body = restart_body(&self.options);
        self.mode = CameraMode::StaticA;
        self.slot = StaticSlot::A;
        self.body = body;
        self.free_resume = body;
        self.view = static_pose(&self.options, StaticSlot::A);
        self.teleport = None;
        self.curve_resume = None;
        self.path_clock.reset();
        self.spotlight = false;
        log::debug!("camera restarted at {}", self.mode);
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// Active mode.
    #[must_use]
    pub const fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Static slot used by the static modes and by leaving `Free`.
    #[must_use]
    pub const fn slot(&self) -> StaticSlot {
        self.slot
    }

    /// Displayed view pose.
    #[must_use]
    pub const fn view(&self) -> &CameraPose {
        &self.view
    }

    /// Free-flight body (position, heading, speed).
    #[must_use]
    pub const fn body(&self) -> &MotionPose {
        &self.body
    }

    /// In-flight blend, if any.
    #[must_use]
    pub const fn teleport(&self) -> Option<&TeleportState> {
        self.teleport.as_ref()
    }

    /// Whether a blend is in flight.
    #[must_use]
    pub const fn is_teleporting(&self) -> bool {
        self.teleport.is_some()
    }

    /// The fly-through path.
    #[must_use]
    pub const fn path(&self) -> &CurveDefinition {
        &self.path
    }

    /// Seconds of path time accumulated in `CurvePath`.
    #[must_use]
    pub const fn path_time(&self) -> f32 {
        self.path_clock.elapsed()
    }

    /// Spotlight pose for the lighting pass.
    #[must_use]
    pub fn reflector(&self) -> Reflector {
        Reflector {
            position: self.view.eye,
            direction: self.view.forward(),
            enabled: self.spotlight,
        }
    }

    // ── Mode transitions ─────────────────────────────────────────────

    /// Flip between the two static viewpoints. From `Free`, leaves free
    /// flight toward the other slot.
    pub fn switch_static_slot(&mut self) -> bool {
        self.go_to_slot(self.slot.other())
    }

    /// Go to a specific static viewpoint. No-op if already parked there.
    pub fn select_static_slot(&mut self, slot: StaticSlot) -> bool {
        if self.mode == slot.mode() {
            log::trace!("already at {}", self.mode);
            return false;
        }
        self.go_to_slot(slot)
    }

    fn go_to_slot(&mut self, slot: StaticSlot) -> bool {
        if !self.can_start_teleport("static slot switch") {
            return false;
        }
        if self.mode == CameraMode::Free {
            self.leave_free();
        }
        self.slot = slot;
        self.begin_teleport(slot.mode(), static_pose(&self.options, slot));
        true
    }

    /// `StaticX ⇄ Free`.
    pub fn toggle_free_mode(&mut self) -> bool {
        if !self.can_start_teleport("free toggle") {
            return false;
        }
        if self.mode == CameraMode::Free {
            self.leave_free();
            let target = static_pose(&self.options, self.slot);
            self.begin_teleport(self.slot.mode(), target);
        } else {
            self.body = self.free_resume;
            self.body.position = self.bounds.clamp(self.body.position);
            self.begin_teleport(CameraMode::Free, self.body.look_at());
        }
        true
    }

    /// `{StaticX, Free} ⇄ CurvePath`. Always honored; never blended.
    pub fn toggle_curve_path(&mut self) -> bool {
        if let Some(resume) = self.curve_resume.take() {
            self.mode = resume.mode;
            self.body = resume.body;
            self.body.speed = 0.0;
            self.view = resume.view;
            self.teleport = resume.teleport;
            log::debug!("camera left curve path, back to {}", self.mode);
            return true;
        }

        if self.mode == CameraMode::Free {
            self.spotlight = false;
        }
        self.curve_resume = Some(CurveResume {
            mode: self.mode,
            body: self.body,
            view: self.view,
            teleport: self.teleport.take(),
        });
        self.mode = CameraMode::CurvePath;
        self.view = self.path_view();
        log::debug!("camera entered curve path");
        true
    }

    fn can_start_teleport(&self, what: &str) -> bool {
        if self.mode == CameraMode::CurvePath {
            log::trace!("{what} ignored in curve path");
            return false;
        }
        if self.teleport.is_some() {
            log::trace!("{what} ignored while teleporting");
            return false;
        }
        true
    }

    fn leave_free(&mut self) {
        self.body.speed = 0.0;
        self.free_resume = self.body;
        self.spotlight = false;
    }

    fn begin_teleport(&mut self, mode: CameraMode, target: CameraPose) {
        log::debug!("camera {} -> {mode}", self.mode);
        self.mode = mode;
        self.teleport = Some(TeleportState::new(self.view, target));
    }

    // ── Free-flight controls ─────────────────────────────────────────

    fn steerable(&self, what: &str) -> bool {
        let ok = self.mode == CameraMode::Free && self.teleport.is_none();
        if !ok {
            log::trace!("{what} ignored in {}", self.mode);
        }
        ok
    }

    /// One accelerate tick.
    pub fn accelerate(&mut self) -> bool {
        if !self.steerable("accelerate") {
            return false;
        }
        self.body.speed = speed::accelerate(self.body.speed, &self.options.speed);
        true
    }

    /// One decelerate tick.
    pub fn decelerate(&mut self) -> bool {
        if !self.steerable("decelerate") {
            return false;
        }
        self.body.speed = speed::decelerate(self.body.speed, &self.options.speed);
        true
    }

    /// Turn counter-clockwise by the configured step.
    pub fn turn_left(&mut self) -> bool {
        if !self.steerable("turn") {
            return false;
        }
        self.body.turn(self.options.turn_step);
        self.view = self.body.look_at();
        true
    }

    /// Turn clockwise by the configured step.
    pub fn turn_right(&mut self) -> bool {
        if !self.steerable("turn") {
            return false;
        }
        self.body.turn(-self.options.turn_step);
        self.view = self.body.look_at();
        true
    }

    /// Pointer look: horizontal motion turns, vertical motion pitches
    /// (clamped to the configured limit).
    pub fn look(&mut self, delta: Vec2) -> bool {
        if !self.steerable("look") {
            return false;
        }
        let delta = delta * self.options.look_sensitivity;
        if delta.x != 0.0 {
            self.body.turn(-delta.x);
        }
        let limit = self.options.max_elevation.abs();
        self.body.elevation = (self.body.elevation + delta.y).clamp(-limit, limit);
        self.view = self.body.look_at();
        true
    }

    /// Move up by the configured step, within the height range.
    pub fn raise(&mut self) -> bool {
        self.nudge_height(self.options.raise_step)
    }

    /// Move down by the configured step, within the height range.
    pub fn lower(&mut self) -> bool {
        self.nudge_height(-self.options.raise_step)
    }

    fn nudge_height(&mut self, step: f32) -> bool {
        if !self.steerable("height change") {
            return false;
        }
        let z = self.bounds.clamp_height(self.body.position.z + step);
        self.body.position.z = z;
        self.view = self.body.look_at();
        true
    }

    /// Switch the camera spotlight. Only available in free flight.
    pub fn toggle_spotlight(&mut self) -> bool {
        if self.mode != CameraMode::Free {
            log::trace!("spotlight toggle ignored in {}", self.mode);
            return false;
        }
        self.spotlight = !self.spotlight;
        true
    }

    // ── Per-frame update ─────────────────────────────────────────────

    /// Advance one frame. Negative or non-finite `dt` counts as zero.
    pub fn update(&mut self, dt: f32) -> CameraFrame {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let mut frame = CameraFrame::default();

        if self.mode == CameraMode::CurvePath {
            self.path_clock.advance(dt);
            self.view = self.path_view();
            return frame;
        }

        if let Some(teleport) = self.teleport.as_mut() {
            let progress = teleport.step(
                &mut self.view,
                self.options.teleport_speed,
                self.options.arrival_epsilon,
            );
            if progress != TeleportProgress::Blending {
                self.teleport = None;
                frame.teleport_arrived = progress == TeleportProgress::Arrived;
                log::debug!("camera arrived at {}", self.mode);
            }
            return frame;
        }

        if self.mode == CameraMode::Free {
            frame.collided = self.integrate(dt);
            self.view = self.body.look_at();
        }
        frame
    }

    /// Move the body along its heading and keep it inside the bounds,
    /// moving or not. Returns `true` if an obstacle rejected the move; the
    /// position is then unchanged and speed zeroed.
    fn integrate(&mut self, dt: f32) -> bool {
        let moving = self.body.speed != 0.0 && dt != 0.0;
        let step = if moving {
            dt * self.body.speed * self.body.direction
        } else {
            Vec3::ZERO
        };
        let tentative = self.bounds.clamp(self.body.position + step);
        if moving && self.obstacles.iter().any(|o| o.contains(tentative)) {
            log::debug!("camera blocked at {tentative}");
            self.body.speed = 0.0;
            return true;
        }
        self.body.position = tentative;
        false
    }

    fn path_view(&self) -> CameraPose {
        let t = self.path_clock.elapsed() * self.path_speed;
        let eye = self.path.evaluate(t);
        let direction = self
            .path
            .interpolation()
            .travel_direction(self.path.evaluate_derivative(t));
        let up = if direction.cross(WORLD_UP).length_squared() > 1e-6 {
            WORLD_UP
        } else {
            Vec3::Y
        };
        CameraPose {
            eye,
            target: eye + direction,
            up,
        }
    }
}

fn restart_body(options: &CameraOptions) -> MotionPose {
    let restart = &options.restart;
    MotionPose::new(
        Vec3::from_array(restart.position),
        restart.yaw,
        restart.elevation,
    )
}

fn static_pose(options: &CameraOptions, slot: StaticSlot) -> CameraPose {
    let view = options.static_view(slot);
    CameraPose::looking_at(
        Vec3::from_array(view.position),
        Vec3::from_array(view.center),
    )
}
