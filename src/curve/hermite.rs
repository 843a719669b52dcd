//! Cubic Hermite segment evaluation with neighbor-difference tangents.

use glam::Vec3;

use super::SegmentWindow;

/// Endpoints and tangents of the active segment.
fn knots(window: &SegmentWindow) -> (Vec3, Vec3, Vec3, Vec3) {
    let [prev, p0, p1, next] = window.points;
    let m0 = 0.5 * (p1 - prev);
    let m1 = 0.5 * (next - p0);
    (p0, m0, p1, m1)
}

pub(super) fn position(window: &SegmentWindow) -> Vec3 {
    let (p0, m0, p1, m1) = knots(window);
    let t = window.u;
    let t2 = t * t;
    let t3 = t2 * t;

    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    h00 * p0 + h10 * m0 + h01 * p1 + h11 * m1
}

pub(super) fn derivative(window: &SegmentWindow) -> Vec3 {
    let (p0, m0, p1, m1) = knots(window);
    let t = window.u;
    let t2 = t * t;

    let dh00 = 6.0 * t2 - 6.0 * t;
    let dh10 = 3.0 * t2 - 4.0 * t + 1.0;
    let dh01 = -6.0 * t2 + 6.0 * t;
    let dh11 = 3.0 * t2 - 2.0 * t;

    dh00 * p0 + dh10 * m0 + dh01 * p1 + dh11 * m1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tangent_at_start_is_half_neighbor_span() {
        let window = SegmentWindow {
            points: [Vec3::ZERO, Vec3::X, Vec3::new(2.0, 1.0, 0.0), Vec3::Y],
            u: 0.0,
            segments: 3,
        };
        assert_eq!(position(&window), Vec3::X);
        assert_eq!(derivative(&window), Vec3::new(1.0, 0.5, 0.0));
    }
}
