//! Shared utilities for hosts driving the engine.

/// Fixed-period tick clock.
pub mod frame_timing;

pub use frame_timing::{FrameClock, DEFAULT_TICK};
