/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`SceneCommand`](crate::SceneCommand) values.
///
/// # Example
///
/// ```ignore
/// let cmd = input_processor.handle_event(InputEvent::Key {
///     code: "KeyC".into(),
///     pressed: true,
/// });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Physical key pressed or released.
    Key {
        /// Key string in `winit::keyboard::KeyCode` debug format
        /// (`"KeyC"`, `"ArrowLeft"`, `"Space"`, ...).
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Passive pointer motion, in pixels since the previous event.
    PointerMotion {
        /// Horizontal delta (positive = right).
        dx: f32,
        /// Vertical delta (positive = down).
        dy: f32,
    },
    /// The window lost keyboard focus; all held keys count as released.
    FocusLost,
}

impl InputEvent {
    /// Key press for `code`.
    pub fn press(code: impl Into<String>) -> Self {
        Self::Key {
            code: code.into(),
            pressed: true,
        }
    }

    /// Key release for `code`.
    pub fn release(code: impl Into<String>) -> Self {
        Self::Key {
            code: code.into(),
            pressed: false,
        }
    }
}
