use glam::{Mat4, Vec3, Vec4};

use super::FALLBACK_DIRECTION;

/// Model matrix that places an object at `position` facing `front`.
///
/// The object's local `+Z` maps to `-front`, and local `+X` to
/// `up × z`. A zero `front` falls back to `+Z`. An `up` parallel to the
/// facing axis falls back to `+X`, or `+Y` when the facing axis is itself
/// along `X`.
#[must_use]
pub fn align_object(position: Vec3, front: Vec3, up: Vec3) -> Mat4 {
    let z = (-front).try_normalize().unwrap_or(FALLBACK_DIRECTION);
    let x = up.cross(z).try_normalize().unwrap_or_else(|| {
        if z.x.abs() > 0.9 {
            Vec3::Y
        } else {
            Vec3::X
        }
    });
    let x = x.reject_from_normalized(z).normalize();
    let y = z.cross(x);

    Mat4::from_cols(
        x.extend(0.0),
        y.extend(0.0),
        z.extend(0.0),
        Vec4::new(position.x, position.y, position.z, 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_positive_y_maps_local_z_backward() {
        let m = align_object(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, Vec3::Z);
        let local_z = m.transform_vector3(Vec3::Z);
        assert!((local_z + Vec3::Y).length() < 1e-6);
        assert_eq!(m.transform_point3(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn degenerate_inputs_still_give_orthonormal_frame() {
        let m = align_object(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO);
        assert_eq!(m.z_axis.truncate(), FALLBACK_DIRECTION);
        assert_eq!(m.x_axis.truncate(), Vec3::X);
        assert!((m.y_axis.truncate().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn up_along_x_facing_axis_keeps_all_axes() {
        let m = align_object(Vec3::ZERO, -Vec3::X, Vec3::X);
        let (x, y, z) = (
            m.x_axis.truncate(),
            m.y_axis.truncate(),
            m.z_axis.truncate(),
        );
        assert_eq!(z, Vec3::X);
        for axis in [x, y] {
            assert!((axis.length() - 1.0).abs() < 1e-6);
            assert!(axis.dot(z).abs() < 1e-6);
        }
        assert!(x.dot(y).abs() < 1e-6);
    }
}
