//! Converts raw platform events into scene commands.
//!
//! The `InputProcessor` owns all transient input state (held repeat keys)
//! and the key-binding map. It is the only thing that sits between raw
//! window events and the engine's
//! [`execute`](crate::SceneEngine::execute) method.

use glam::Vec2;

use super::event::InputEvent;
use super::keyboard::{HeldKeys, KeyAction};
use crate::engine::SceneCommand;
use crate::options::KeybindingOptions;

/// Converts raw input events into [`SceneCommand`]s.
///
/// Discrete actions (mode toggles, restart) fire once on key press.
/// Movement actions (speed, turn, height) are tracked as held and emitted
/// once per tick by [`repeat_commands`](Self::repeat_commands) until
/// released.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
///
/// // On each timer tick:
/// for cmd in input_processor.repeat_commands() {
///     engine.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    held: HeldKeys,
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Currently held repeat actions.
    #[must_use]
    pub fn held(&self) -> HeldKeys {
        self.held
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<SceneCommand> {
        match event {
            InputEvent::Key { code, pressed } => self.handle_key(&code, pressed),
            InputEvent::PointerMotion { dx, dy } => {
                let delta = Vec2::new(dx, dy);
                (delta != Vec2::ZERO).then_some(SceneCommand::Look { delta })
            }
            InputEvent::FocusLost => {
                self.release_all();
                None
            }
        }
    }

    fn handle_key(&mut self, code: &str, pressed: bool) -> Option<SceneCommand> {
        let Some(action) = self.key_bindings.lookup(code) else {
            log::trace!("unbound key {code}");
            return None;
        };
        if action.is_held() {
            if pressed {
                self.held.press(action);
            } else {
                self.held.release(action);
            }
            return None;
        }
        pressed.then(|| SceneCommand::from(action))
    }

    /// One command per held movement key, in a fixed order.
    pub fn repeat_commands(&self) -> impl Iterator<Item = SceneCommand> {
        self.held.iter().map(SceneCommand::from)
    }

    /// Forget every held key.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Whether `action` is currently held.
    #[must_use]
    pub fn is_held(&self, action: KeyAction) -> bool {
        self.held.contains(action)
    }
}
