use serde::{Deserialize, Serialize};

/// Scene actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_free_camera = "KeyC"
/// turn_left = "ArrowLeft"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Flip between the two static viewpoints.
    SwitchStaticSlot,
    /// Jump to static viewpoint A.
    SelectStaticA,
    /// Jump to static viewpoint B.
    SelectStaticB,
    /// Enter or leave free flight.
    ToggleFreeCamera,
    /// Enter or leave the fly-through path.
    ToggleCurvePath,
    /// Reset the whole scene.
    Restart,
    /// Switch the camera spotlight.
    ToggleSpotlight,
    /// Spawn an explosion at the configured site.
    TriggerExplosion,
    /// Pause or resume every curve prop.
    ToggleProps,
    /// Disturb or settle every pendulum prop.
    TogglePendulums,
    /// Step the lamp to its next brightness.
    CyclePointLight,
    /// Held: speed up.
    Accelerate,
    /// Held: slow down (or reverse).
    Decelerate,
    /// Held: turn counter-clockwise.
    TurnLeft,
    /// Held: turn clockwise.
    TurnRight,
    /// Held: move up.
    Raise,
    /// Held: move down.
    Lower,
}

impl KeyAction {
    /// Actions that repeat every tick while their key is down.
    pub const HELD: [Self; 6] = [
        Self::Accelerate,
        Self::Decelerate,
        Self::TurnLeft,
        Self::TurnRight,
        Self::Raise,
        Self::Lower,
    ];

    /// Whether this action repeats while held instead of firing once.
    #[must_use]
    pub const fn is_held(self) -> bool {
        self.held_bit().is_some()
    }

    const fn held_bit(self) -> Option<u8> {
        match self {
            Self::Accelerate => Some(1 << 0),
            Self::Decelerate => Some(1 << 1),
            Self::TurnLeft => Some(1 << 2),
            Self::TurnRight => Some(1 << 3),
            Self::Raise => Some(1 << 4),
            Self::Lower => Some(1 << 5),
            _ => None,
        }
    }
}

/// Bitmask of held repeat actions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys(u8);

impl HeldKeys {
    /// Mark `action` as held. Non-repeating actions are ignored.
    pub fn press(&mut self, action: KeyAction) {
        if let Some(bit) = action.held_bit() {
            self.0 |= bit;
        }
    }

    /// Mark `action` as released.
    pub fn release(&mut self, action: KeyAction) {
        if let Some(bit) = action.held_bit() {
            self.0 &= !bit;
        }
    }

    /// Whether `action` is currently held.
    #[must_use]
    pub const fn contains(self, action: KeyAction) -> bool {
        match action.held_bit() {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }

    /// Release everything.
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Whether nothing is held.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Held actions in [`KeyAction::HELD`] order.
    pub fn iter(self) -> impl Iterator<Item = KeyAction> {
        KeyAction::HELD
            .into_iter()
            .filter(move |action| self.contains(*action))
    }
}
