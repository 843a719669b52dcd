//! Uniform Catmull-Rom segment evaluation.

use glam::{Vec3, Vec4};

use super::SegmentWindow;

/// Per-control-point polynomial coefficients for `(u³, u², u, 1)`, before
/// the overall factor of one half.
const BASIS: [[f32; 4]; 4] = [
    [-1.0, 2.0, -1.0, 0.0],
    [3.0, -5.0, 0.0, 2.0],
    [-3.0, 4.0, 1.0, 0.0],
    [1.0, -1.0, 0.0, 0.0],
];

fn blend(points: &[Vec3; 4], powers: Vec4) -> Vec3 {
    BASIS
        .iter()
        .zip(points)
        .map(|(row, p)| *p * Vec4::from_array(*row).dot(powers))
        .sum::<Vec3>()
        * 0.5
}

/// Position within the window's segment.
pub(super) fn position(window: &SegmentWindow) -> Vec3 {
    let u = window.u;
    let u2 = u * u;
    blend(&window.points, Vec4::new(u2 * u, u2, u, 1.0))
}

/// Derivative with respect to the local parameter `u`.
pub(super) fn derivative(window: &SegmentWindow) -> Vec3 {
    let u = window.u;
    blend(&window.points, Vec4::new(3.0 * u * u, 2.0 * u, 1.0, 0.0))
}
