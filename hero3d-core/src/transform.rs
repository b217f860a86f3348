/// Rotation state and the per-vertex model transform
use nalgebra::{Rotation3, Vector3};

use crate::geometry::Point3D;

/// Rotation state around three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationState {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    /// Accumulate one frame of angular speed. Angles are never wrapped.
    pub fn advance(&mut self, speed: &RotationState) {
        self.rotate(speed.x, speed.y, speed.z);
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Rotate `p` about X, then Y, then Z.
///
/// The axis order determines the rendered silhouettes and must not change.
pub fn rotate_point(p: &Point3D, r: &RotationState) -> Point3D {
    let (sin_x, cos_x) = r.x.sin_cos();
    let (sin_y, cos_y) = r.y.sin_cos();
    let (sin_z, cos_z) = r.z.sin_cos();

    // X
    let y1 = p.y * cos_x - p.z * sin_x;
    let z1 = p.y * sin_x + p.z * cos_x;
    let x1 = p.x;

    // Y
    let z2 = z1 * cos_y - x1 * sin_y;
    let x2 = z1 * sin_y + x1 * cos_y;

    // Z
    let x3 = x2 * cos_z - y1 * sin_z;
    let y3 = x2 * sin_z + y1 * cos_z;

    Point3D::new(x3, y3, z2)
}

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Rotation matrix equivalent to [`rotate_point`]
    pub fn rotation_matrix(rotation: &RotationState) -> Rotation3<f64> {
        let rx = Rotation3::from_scaled_axis(Vector3::new(rotation.x, 0.0, 0.0));
        let ry = Rotation3::from_scaled_axis(Vector3::new(0.0, rotation.y, 0.0));
        let rz = Rotation3::from_scaled_axis(Vector3::new(0.0, 0.0, rotation.z));

        // Apply rotations in order: X, Y, Z
        rz * ry * rx
    }

    /// Scale, rotate, then translate a template vertex into world space
    pub fn model_point(
        vertex: &Point3D,
        scale: f64,
        rotation: &RotationState,
        translation: &Point3D,
    ) -> Point3D {
        rotate_point(&(vertex * scale), rotation) + translation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Point3D> {
        vec![
            Point3D::new(1.0, 0.0, 0.0),
            Point3D::new(0.0, 1.0, 0.0),
            Point3D::new(0.0, 0.0, 1.0),
            Point3D::new(1.0, -2.0, 3.0),
            Point3D::new(-80.0, 80.0, -80.0),
            Point3D::new(0.25, 90.0, -0.5),
        ]
    }

    fn sample_rotations() -> Vec<RotationState> {
        vec![
            RotationState::new(0.3, 0.0, 0.0),
            RotationState::new(0.0, -1.2, 0.0),
            RotationState::new(0.0, 0.0, 2.5),
            RotationState::new(0.1, 0.2, 0.3),
            RotationState::new(-4.0, 7.5, 12.0),
            RotationState::new(1e3, -1e3, 3.0),
        ]
    }

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::zero();
        assert_eq!(state.x, 0.0);
        assert_eq!(state.y, 0.0);
        assert_eq!(state.z, 0.0);

        state.rotate(0.1, 0.2, 0.3);
        assert!((state.x - 0.1).abs() < 1e-12);
        assert!((state.y - 0.2).abs() < 1e-12);
        assert!((state.z - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_advance_accumulates_without_wrapping() {
        let speed = RotationState::new(0.0, 0.003, 0.0);
        let mut state = RotationState::zero();
        for _ in 0..3 {
            state.advance(&speed);
        }
        assert!((state.y - 0.009).abs() < 1e-12);

        let mut spinning = RotationState::zero();
        let fast = RotationState::new(1.0, 1.0, 1.0);
        for _ in 0..10 {
            spinning.advance(&fast);
        }
        assert!((spinning.x - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        let zero = RotationState::zero();
        for p in sample_points() {
            assert_eq!(rotate_point(&p, &zero), p);
        }
    }

    #[test]
    fn test_rotation_preserves_norm() {
        for p in sample_points() {
            for r in sample_rotations() {
                let rotated = rotate_point(&p, &r);
                assert!((rotated.norm() - p.norm()).abs() < 1e-9 * p.norm().max(1.0));
            }
        }
    }

    #[test]
    fn test_axis_order_is_x_then_y_then_z() {
        // Quarter turns about X then Y send +y to +z, then +z to +x
        let r = RotationState::new(std::f64::consts::FRAC_PI_2, std::f64::consts::FRAC_PI_2, 0.0);
        let rotated = rotate_point(&Point3D::new(0.0, 1.0, 0.0), &r);
        assert!((rotated - Point3D::new(1.0, 0.0, 0.0)).norm() < 1e-12);

        // Y leaves +y alone, then Z sends it to -x
        let r = RotationState::new(0.0, std::f64::consts::FRAC_PI_2, std::f64::consts::FRAC_PI_2);
        let rotated = rotate_point(&Point3D::new(0.0, 1.0, 0.0), &r);
        assert!((rotated - Point3D::new(-1.0, 0.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_matrix_matches_rotate_point() {
        for p in sample_points() {
            for r in sample_rotations() {
                let by_matrix = Transform::rotation_matrix(&r) * p;
                let by_steps = rotate_point(&p, &r);
                assert!((by_matrix - by_steps).norm() < 1e-9 * p.norm().max(1.0));
            }
        }
    }

    #[test]
    fn test_model_point_scales_before_translating() {
        let vertex = Point3D::new(1.0, 0.0, 0.0);
        let translation = Point3D::new(10.0, 20.0, 400.0);
        let world = Transform::model_point(&vertex, 50.0, &RotationState::zero(), &translation);
        assert_eq!(world, Point3D::new(60.0, 20.0, 400.0));
    }
}
