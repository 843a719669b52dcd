//! Input handling: event types, held-key state, and the input processor
//! that converts raw window events into scene commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable actions and held-key tracking.
pub mod keyboard;
/// Converts raw events into scene commands.
pub mod processor;

pub use event::InputEvent;
pub use keyboard::{HeldKeys, KeyAction};
pub use processor::InputProcessor;
