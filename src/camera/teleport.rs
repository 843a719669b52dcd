//! Exponential blending of the view toward a destination pose.
//!
//! Each frame the view covers a fixed fraction `alpha` of the remaining
//! distance. The fraction is per frame, not per second, so the blend rate
//! follows the tick rate.

use super::core::CameraPose;

/// An in-flight blend from one view pose to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeleportState {
    /// View at the moment the blend started.
    pub source: CameraPose,
    /// Destination view.
    pub target: CameraPose,
    /// Set on the first frame the view lands within tolerance.
    pub arrived: bool,
}

/// Result of one blend step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeleportProgress {
    /// Still converging.
    Blending,
    /// Landed this frame; the view was snapped to the target.
    Arrived,
    /// Had already landed on an earlier frame.
    Settled,
}

impl TeleportState {
    /// Blend from `source` toward `target`.
    #[must_use]
    pub const fn new(source: CameraPose, target: CameraPose) -> Self {
        Self {
            source,
            target,
            arrived: false,
        }
    }

    /// Advance `view` one frame toward the target.
    pub fn step(
        &mut self,
        view: &mut CameraPose,
        alpha: f32,
        epsilon: f32,
    ) -> TeleportProgress {
        if self.arrived {
            return TeleportProgress::Settled;
        }
        view.blend_toward(&self.target, alpha.clamp(0.0, 1.0));
        if view.within(&self.target, epsilon) {
            *view = self.target;
            self.arrived = true;
            return TeleportProgress::Arrived;
        }
        TeleportProgress::Blending
    }
}

/// Frames needed to close a gap of `distance` to within `epsilon` when each
/// frame keeps `1 - alpha` of the remainder: `ceil(ln(eps/d) / ln(1-alpha))`.
///
/// `Some(0)` when already within tolerance, `Some(1)` for `alpha >= 1`, and
/// `None` when `alpha <= 0` never converges.
#[must_use]
pub fn frame_bound(distance: f32, alpha: f32, epsilon: f32) -> Option<u32> {
    if distance <= epsilon {
        return Some(0);
    }
    if alpha >= 1.0 {
        return Some(1);
    }
    if alpha <= 0.0 || epsilon <= 0.0 {
        return None;
    }
    let frames = ((epsilon / distance).ln() / (1.0 - alpha).ln()).ceil();
    Some(frames as u32)
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn pose(eye: Vec3, target: Vec3) -> CameraPose {
        CameraPose::looking_at(eye, target)
    }

    #[test]
    fn arrives_exactly_once_within_bound() {
        let start = pose(Vec3::ZERO, Vec3::Y);
        let goal = pose(Vec3::X, Vec3::new(1.0, 1.0, 0.0));
        let mut view = start;
        let mut teleport = TeleportState::new(start, goal);

        let bound = frame_bound(1.0, 0.2, 0.01).unwrap();
        assert_eq!(bound, 21);

        let mut arrivals = Vec::new();
        for frame in 1..=40 {
            if teleport.step(&mut view, 0.2, 0.01) == TeleportProgress::Arrived
            {
                arrivals.push(frame);
            }
        }
        assert_eq!(arrivals, vec![bound]);
        assert_eq!(view, goal);
        assert!(teleport.arrived);
    }

    #[test]
    fn blending_moves_fraction_of_remaining_distance() {
        let start = pose(Vec3::ZERO, Vec3::Y);
        let goal = pose(Vec3::new(10.0, 0.0, 0.0), Vec3::Y);
        let mut view = start;
        let mut teleport = TeleportState::new(start, goal);
        assert_eq!(
            teleport.step(&mut view, 0.2, 0.01),
            TeleportProgress::Blending
        );
        assert!((view.eye.x - 2.0).abs() < 1e-6);
        let _ = teleport.step(&mut view, 0.2, 0.01);
        assert!((view.eye.x - 3.6).abs() < 1e-5);
    }

    #[test]
    fn already_there_arrives_on_first_step() {
        let here = pose(Vec3::ONE, Vec3::ZERO);
        let mut view = here;
        let mut teleport = TeleportState::new(here, here);
        assert_eq!(
            teleport.step(&mut view, 0.2, 0.01),
            TeleportProgress::Arrived
        );
        assert_eq!(
            teleport.step(&mut view, 0.2, 0.01),
            TeleportProgress::Settled
        );
    }

    #[test]
    fn frame_bound_edge_cases() {
        assert_eq!(frame_bound(0.005, 0.2, 0.01), Some(0));
        assert_eq!(frame_bound(5.0, 1.0, 0.01), Some(1));
        assert_eq!(frame_bound(5.0, 0.0, 0.01), None);
    }
}
