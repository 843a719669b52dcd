//! Input and command dispatch for [`SceneEngine`].

use super::{SceneCommand, SceneEngine};
use crate::input::InputEvent;

// ── Unified input handler ──

impl SceneEngine {
    /// Process a platform-agnostic input event.
    ///
    /// Discrete keys run their command immediately. Held movement keys are
    /// only recorded here and repeat on every [`update`](Self::update)
    /// until released.
    ///
    /// Returns `true` if the event changed scene state.
    ///
    /// # Example
    ///
    /// ```ignore
    /// engine.handle_input(InputEvent::press("KeyC"));
    /// engine.handle_input(InputEvent::PointerMotion { dx: 4.0, dy: 0.0 });
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        self.input
            .handle_event(event)
            .is_some_and(|command| self.execute(command))
    }

    /// Run one scene command.
    ///
    /// Returns `true` if the command was honored. Commands that the
    /// current camera mode ignores (steering outside free flight, a free
    /// toggle during a teleport) return `false`.
    pub fn execute(&mut self, command: SceneCommand) -> bool {
        log::debug!("execute {command:?}");
        match command {
            SceneCommand::SwitchStaticSlot => self.camera.switch_static_slot(),
            SceneCommand::SelectStaticSlot(slot) => {
                self.camera.select_static_slot(slot)
            }
            SceneCommand::ToggleFreeCamera => self.camera.toggle_free_mode(),
            SceneCommand::ToggleCurvePath => self.camera.toggle_curve_path(),
            SceneCommand::Accelerate => self.camera.accelerate(),
            SceneCommand::Decelerate => self.camera.decelerate(),
            SceneCommand::TurnLeft => self.camera.turn_left(),
            SceneCommand::TurnRight => self.camera.turn_right(),
            SceneCommand::Look { delta } => self.camera.look(delta),
            SceneCommand::Raise => self.camera.raise(),
            SceneCommand::Lower => self.camera.lower(),
            SceneCommand::ToggleSpotlight => self.camera.toggle_spotlight(),
            SceneCommand::ToggleProp { name } => self.objects.toggle_prop(&name),
            SceneCommand::ToggleProps => self.objects.toggle_all_props(),
            SceneCommand::TogglePendulum { name } => {
                self.objects.toggle_pendulum(&name)
            }
            SceneCommand::TogglePendulums => self.objects.toggle_all_pendulums(),
            SceneCommand::TriggerExplosion => {
                self.objects.trigger_explosion();
                true
            }
            SceneCommand::CyclePointLight => {
                self.lighting.cycle_point_light();
                true
            }
            SceneCommand::Restart => {
                self.restart();
                true
            }
        }
    }
}
