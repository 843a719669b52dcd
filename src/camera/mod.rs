//! Camera system for the lakeside scene.
//!
//! Provides a camera that parks at two static viewpoints, flies freely
//! under keyboard and pointer control, or rides a fly-through spline, with
//! exponential blending between viewpoints.

/// Movement bounds and obstacle footprints.
pub mod bounds;
/// Mode state machine owning the camera pose.
pub mod controller;
/// Pose types and angle helpers.
pub mod core;
/// Camera modes and static slots.
pub mod mode;
/// Speed stepping policies.
pub mod speed;
/// Exponential pose blending.
pub mod teleport;

pub use self::core::{CameraPose, MotionPose, Reflector};
pub use bounds::{MovementBounds, Obstacle};
pub use controller::{CameraFrame, CameraMotionController};
pub use mode::{CameraMode, StaticSlot};
pub use speed::SpeedPolicy;
pub use teleport::{TeleportProgress, TeleportState};
