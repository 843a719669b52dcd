use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `ToggleFreeCamera` → `"KeyC"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::SwitchStaticSlot, "KeyP".into()),
            (KeyAction::SelectStaticA, "Digit1".into()),
            (KeyAction::SelectStaticB, "Digit2".into()),
            (KeyAction::ToggleFreeCamera, "KeyC".into()),
            (KeyAction::ToggleCurvePath, "KeyM".into()),
            (KeyAction::Restart, "KeyR".into()),
            (KeyAction::ToggleSpotlight, "Space".into()),
            (KeyAction::TriggerExplosion, "KeyE".into()),
            (KeyAction::ToggleProps, "KeyK".into()),
            (KeyAction::TogglePendulums, "KeyL".into()),
            (KeyAction::CyclePointLight, "KeyO".into()),
            (KeyAction::Accelerate, "ArrowUp".into()),
            (KeyAction::Decelerate, "ArrowDown".into()),
            (KeyAction::TurnLeft, "ArrowLeft".into()),
            (KeyAction::TurnRight, "ArrowRight".into()),
            (KeyAction::Raise, "KeyW".into()),
            (KeyAction::Lower, "KeyS".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

// The reverse cache is derived state and is not compared.
impl PartialEq for KeybindingOptions {
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
    }
}

impl Eq for KeybindingOptions {}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key string.
    ///
    /// Falls back to a scan of `bindings` when the reverse cache is stale
    /// (e.g. right after deserialization).
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied().or_else(|| {
            self.bindings
                .iter()
                .find(|(_, bound)| bound.as_str() == key)
                .map(|(action, _)| *action)
        })
    }

    /// Bind `action` to `key`, replacing any previous key for that action.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
        self.rebuild_reverse_map();
    }
}
