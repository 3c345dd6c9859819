//! Quaternion rotations
//!
//! Vertices are rotated by conjugation, `v' = q v q*`, treating `v` as a
//! pure quaternion. For a versor the conjugate equals the inverse.

use std::ops::Mul;

use super::vector::{snorm, Vector3};

/// A quaternion q = w + xi + yj + zk
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    /// Scalar (real) component
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Identity quaternion (no rotation)
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Pure quaternion (zero real part) carrying a vector
    pub fn pure(v: Vector3) -> Self {
        Self::new(0.0, v.x, v.y, v.z)
    }

    /// Build a rotation of `angle` radians about `axis`.
    ///
    /// `axis` must already be unit length. It is not renormalized here: a
    /// zero or non-unit axis yields a non-unit quaternion and rotations built
    /// from it also scale vectors.
    pub fn versor(axis: Vector3, angle: f64) -> Self {
        debug_assert!(
            (snorm(axis) - 1.0).abs() < 1e-6,
            "versor axis must be unit length, got |axis|² = {}",
            snorm(axis)
        );

        let half = angle * 0.5;
        let s = half.sin();
        Self::new(half.cos(), axis.x * s, axis.y * s, axis.z * s)
    }

    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// q* = w - xi - yj - zk
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Vector (imaginary) part
    #[inline]
    pub fn vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Rotate a vector: v' = q v q*
    pub fn rotate_vector(&self, v: Vector3) -> Vector3 {
        (*self * Self::pure(v) * self.conjugate()).vector()
    }
}

/// Hamilton product
impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        }
    }
}

/// Rotate every vertex in place. Order and count are preserved.
pub fn rotate(vertices: &mut [Vector3], q: &Quaternion) {
    for v in vertices.iter_mut() {
        *v = q.rotate_vector(*v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_versor_components() {
        let q = Quaternion::versor(Vector3::Z, PI);
        assert_abs_diff_eq!(q.w, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.z, 1.0, epsilon = 1e-12);
        assert_eq!(q.x, 0.0);
        assert_eq!(q.y, 0.0);
    }

    #[test]
    fn test_hamilton_basis() {
        let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(i * j, k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(i * i, Quaternion::new(-1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_quarter_turn_about_z() {
        let q = Quaternion::versor(Vector3::Z, FRAC_PI_2);
        let v = q.rotate_vector(Vector3::X);
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_axis_is_fixed() {
        let axis = Vector3::new(1.0, 1.0, 1.0).normalize();
        let q = Quaternion::versor(axis, 1.234);
        let v = q.rotate_vector(axis * 3.0);
        assert_abs_diff_eq!(v.x, axis.x * 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, axis.y * 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.z, axis.z * 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_identity_rotation() {
        let mut vertices = vec![Vector3::new(1.0, 2.0, 3.0), Vector3::new(-4.0, 0.5, 0.0)];
        let before = vertices.clone();
        rotate(&mut vertices, &Quaternion::identity());
        assert_eq!(vertices, before);
    }

    #[test]
    fn test_non_unit_quaternion_scales() {
        // A quaternion of norm 2 scales by |q|² = 4
        let q = Quaternion::new(2.0, 0.0, 0.0, 0.0);
        let v = q.rotate_vector(Vector3::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(v.x, 4.0, epsilon = 1e-12);
    }
}
