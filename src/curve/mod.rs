//! Parametric curve evaluation over fixed control-point sequences.
//!
//! A [`CurveDefinition`] is an immutable list of control points plus a
//! `closed` flag and an [`Interpolation`] family. Evaluation is stateless:
//! any `t` is reduced modulo 1 before segment lookup, so a curve can be
//! sampled forever from a running clock without wrap bookkeeping.
//!
//! Degenerate curves (fewer than two points) evaluate to [`Vec3::ZERO`]
//! for both position and tangent. Callers that need a facing direction go
//! through [`facing_or_default`], which substitutes [`FALLBACK_DIRECTION`]
//! for a zero-length vector.

mod catmull_rom;
mod frame;
mod hermite;

pub use frame::align_object;
use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Direction substituted when a tangent or facing vector has zero length.
pub const FALLBACK_DIRECTION: Vec3 = Vec3::Z;

/// Interpolation family used between control points.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    /// Uniform Catmull-Rom. Used for cyclic prop motion.
    ///
    /// The derivative is reported negated so that `-normalize(tangent)`
    /// points along the direction of travel.
    #[default]
    CatmullRom,
    /// Cubic Hermite with neighbor-difference tangents. Used for the camera
    /// fly-through; the derivative is reported as-is.
    Hermite,
}

impl Interpolation {
    /// Unit direction of travel for a derivative reported by this family.
    #[must_use]
    pub fn travel_direction(self, tangent: Vec3) -> Vec3 {
        match self {
            Self::CatmullRom => facing_or_default(-tangent),
            Self::Hermite => facing_or_default(tangent),
        }
    }
}

/// Ordered control points with a closed flag and interpolation family.
///
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveDefinition {
    points: Vec<Vec3>,
    closed: bool,
    interpolation: Interpolation,
}

/// Position and tangent sampled at one parameter value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample {
    /// Parameter the sample was taken at (before modulo reduction).
    pub t: f32,
    /// Curve position.
    pub position: Vec3,
    /// First derivative with respect to `t`, in the family's sign
    /// convention.
    pub tangent: Vec3,
}

/// Four control points around the active segment plus the local parameter.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SegmentWindow {
    /// Points at segment offsets -1, 0, +1, +2.
    pub points: [Vec3; 4],
    /// Local parameter within the segment, in `[0, 1)`.
    pub u: f32,
    /// Number of segments the whole curve is split into.
    pub segments: usize,
}

impl CurveDefinition {
    /// Curve over `points` with the given closure and interpolation.
    pub fn new(
        points: impl Into<Vec<Vec3>>,
        closed: bool,
        interpolation: Interpolation,
    ) -> Self {
        Self {
            points: points.into(),
            closed,
            interpolation,
        }
    }

    /// Closed Catmull-Rom loop.
    pub fn catmull_rom_loop(points: impl Into<Vec<Vec3>>) -> Self {
        Self::new(points, true, Interpolation::CatmullRom)
    }

    /// Closed Hermite loop.
    pub fn hermite_loop(points: impl Into<Vec<Vec3>>) -> Self {
        Self::new(points, true, Interpolation::Hermite)
    }

    /// Control points in order.
    #[must_use]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Whether the curve wraps from its last point back to the first.
    #[must_use]
    pub fn closed(&self) -> bool {
        self.closed
    }

    /// Interpolation family.
    #[must_use]
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// True when the curve has too few points to define any segment.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }

    /// Position at `t` (taken modulo 1).
    #[must_use]
    pub fn evaluate(&self, t: f32) -> Vec3 {
        let Some(window) = self.window(t) else {
            return Vec3::ZERO;
        };
        match self.interpolation {
            Interpolation::CatmullRom => catmull_rom::position(&window),
            Interpolation::Hermite => hermite::position(&window),
        }
    }

    /// First derivative at `t` (taken modulo 1) with respect to `t`.
    ///
    /// Catmull-Rom curves report the negated derivative; see
    /// [`Interpolation::CatmullRom`].
    #[must_use]
    pub fn evaluate_derivative(&self, t: f32) -> Vec3 {
        let Some(window) = self.window(t) else {
            return Vec3::ZERO;
        };
        let scale = window.segments as f32;
        match self.interpolation {
            Interpolation::CatmullRom => {
                -catmull_rom::derivative(&window) * scale
            }
            Interpolation::Hermite => hermite::derivative(&window) * scale,
        }
    }

    /// Position and tangent together.
    #[must_use]
    pub fn sample(&self, t: f32) -> CurveSample {
        CurveSample {
            t,
            position: self.evaluate(t),
            tangent: self.evaluate_derivative(t),
        }
    }

    /// Endless samples at `0, step, 2·step, …`.
    ///
    /// Restartable: each call starts over at `t = 0`, and no state is
    /// shared between iterators.
    pub fn samples(&self, step: f32) -> impl Iterator<Item = CurveSample> + '_ {
        (0_u32..).map(move |k| self.sample(k as f32 * step))
    }

    /// Resolve the segment containing `t`. `None` for degenerate curves.
    pub(crate) fn window(&self, t: f32) -> Option<SegmentWindow> {
        let n = self.points.len();
        if n < 2 {
            return None;
        }

        let t = wrap_unit(t);
        let segments = if self.closed { n } else { n - 1 };
        let scaled = t * segments as f32;
        let index = (scaled.floor() as usize).min(segments - 1);
        let u = scaled - index as f32;

        let pick = |offset: isize| -> Vec3 {
            let j = index as isize + offset;
            let j = if self.closed {
                j.rem_euclid(n as isize)
            } else {
                j.clamp(0, n as isize - 1)
            };
            self.points[j as usize]
        };

        Some(SegmentWindow {
            points: [pick(-1), pick(0), pick(1), pick(2)],
            u,
            segments,
        })
    }
}

/// Free-function form of [`CurveDefinition::evaluate`].
#[must_use]
pub fn evaluate(curve: &CurveDefinition, t: f32) -> Vec3 {
    curve.evaluate(t)
}

/// Free-function form of [`CurveDefinition::evaluate_derivative`].
#[must_use]
pub fn evaluate_derivative(curve: &CurveDefinition, t: f32) -> Vec3 {
    curve.evaluate_derivative(t)
}

/// Normalize `v`, or return [`FALLBACK_DIRECTION`] if it has no usable
/// length.
#[must_use]
pub fn facing_or_default(v: Vec3) -> Vec3 {
    v.try_normalize().unwrap_or(FALLBACK_DIRECTION)
}

/// Reduce `t` into `[0, 1)`. Non-finite input maps to 0.
fn wrap_unit(t: f32) -> f32 {
    if !t.is_finite() {
        return 0.0;
    }
    let wrapped = t.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use super::*;

    fn ring(center: Vec3, radius: f32, count: usize) -> Vec<Vec3> {
        (0..count)
            .map(|i| {
                let a = TAU * i as f32 / count as f32;
                center + Vec3::new(radius * a.cos(), radius * a.sin(), 0.0)
            })
            .collect()
    }

    fn close(a: Vec3, b: Vec3, tol: f32) -> bool {
        (a - b).abs().max_element() <= tol
    }

    #[test]
    fn duck_ring_starts_at_first_control_point() {
        let curve = CurveDefinition::catmull_rom_loop(ring(
            Vec3::new(1.4, 1.0, 1.15),
            0.2,
            6,
        ));
        let p = curve.evaluate(0.0);
        assert!(close(p, Vec3::new(1.6, 1.0, 1.15), 1e-5), "got {p}");
    }

    #[test]
    fn closed_catmull_rom_is_periodic() {
        let curve = CurveDefinition::catmull_rom_loop(ring(Vec3::ZERO, 1.0, 8));
        for k in 0..20 {
            let t = k as f32 * 0.049;
            let a = curve.evaluate(t);
            let b = curve.evaluate(t + 1.0);
            let c = curve.evaluate(t - 3.0);
            assert!(close(a, b, 1e-4), "t={t}: {a} vs {b}");
            assert!(close(a, c, 1e-4), "t={t}: {a} vs {c}");
        }
    }

    #[test]
    fn segments_join_continuously() {
        let points = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.5, 0.0),
            Vec3::new(3.0, 2.0, 1.0),
            Vec3::new(1.0, 3.0, 0.5),
            Vec3::new(-1.0, 1.5, 0.0),
        ];
        for family in [Interpolation::CatmullRom, Interpolation::Hermite] {
            let curve = CurveDefinition::new(points.clone(), true, family);
            let n = points.len() as f32;
            for i in 1..points.len() {
                let junction = i as f32 / n;
                let before = curve.evaluate(junction - 1e-5);
                let at = curve.evaluate(junction);
                assert!(close(before, at, 1e-3), "{family:?} seg {i}");
                // Both families interpolate their control points
                assert!(close(at, points[i], 1e-4), "{family:?} knot {i}");
            }
        }
    }

    #[test]
    fn catmull_rom_tangent_is_negated_travel_direction() {
        let curve = CurveDefinition::catmull_rom_loop(ring(Vec3::ZERO, 1.0, 12));
        let t = 0.3;
        let ahead = curve.evaluate(t + 1e-3) - curve.evaluate(t);
        let facing = -facing_or_default(curve.evaluate_derivative(t));
        assert!(facing.dot(ahead.normalize()) > 0.99);
    }

    #[test]
    fn hermite_tangent_points_along_travel() {
        let curve = CurveDefinition::hermite_loop(ring(Vec3::ZERO, 2.0, 14));
        let t = 0.71;
        let ahead = curve.evaluate(t + 1e-3) - curve.evaluate(t);
        let facing = facing_or_default(curve.evaluate_derivative(t));
        assert!(facing.dot(ahead.normalize()) > 0.99);
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let curve = CurveDefinition::hermite_loop(ring(Vec3::ONE, 1.5, 7));
        let t = 0.42;
        let h = 1e-3;
        let numeric =
            (curve.evaluate(t + h) - curve.evaluate(t - h)) / (2.0 * h);
        let analytic = curve.evaluate_derivative(t);
        assert!(
            (numeric - analytic).length() < 0.05 * analytic.length(),
            "{numeric} vs {analytic}"
        );
    }

    #[test]
    fn degenerate_curves_collapse_to_zero() {
        for points in [vec![], vec![Vec3::new(3.0, 1.0, 2.0)]] {
            let curve = CurveDefinition::catmull_rom_loop(points);
            assert!(curve.is_degenerate());
            assert_eq!(curve.evaluate(0.3), Vec3::ZERO);
            assert_eq!(curve.evaluate_derivative(0.3), Vec3::ZERO);
            assert_eq!(
                facing_or_default(curve.evaluate_derivative(0.3)),
                FALLBACK_DIRECTION
            );
        }
    }

    #[test]
    fn non_finite_parameter_maps_to_start() {
        let curve = CurveDefinition::catmull_rom_loop(ring(Vec3::ZERO, 1.0, 6));
        assert_eq!(curve.evaluate(f32::NAN), curve.evaluate(0.0));
        assert_eq!(curve.evaluate(f32::INFINITY), curve.evaluate(0.0));
    }

    #[test]
    fn open_curve_ends_on_last_point() {
        let points = vec![Vec3::ZERO, Vec3::X, Vec3::new(2.0, 1.0, 0.0)];
        let curve = CurveDefinition::new(points, false, Interpolation::Hermite);
        let near_end = curve.evaluate(1.0 - 1e-6);
        assert!(close(near_end, Vec3::new(2.0, 1.0, 0.0), 1e-3));
        assert!(close(curve.evaluate(0.5), Vec3::X, 1e-5));
    }

    #[test]
    fn sample_iterator_restarts_from_zero() {
        let curve = CurveDefinition::catmull_rom_loop(ring(Vec3::ZERO, 1.0, 6));
        let first: Vec<_> = curve.samples(0.1).take(3).collect();
        let again: Vec<_> = curve.samples(0.1).take(3).collect();
        assert_eq!(first, again);
        assert_eq!(first[0].position, curve.evaluate(0.0));
        // Runs past t = 1 without stopping
        let late = curve.samples(0.1).nth(25).map_or(0.0, |s| s.t);
        assert!((late - 2.5).abs() < 1e-5);
    }

    #[test]
    fn free_functions_delegate() {
        let curve = CurveDefinition::hermite_loop(ring(Vec3::ZERO, 1.0, 5));
        assert_eq!(evaluate(&curve, 0.2), curve.evaluate(0.2));
        assert_eq!(
            evaluate_derivative(&curve, 0.2),
            curve.evaluate_derivative(0.2)
        );
    }
}
