use glam::DVec3;

/// Double precision point/direction used throughout the core
pub type Vector3 = DVec3;

/// Squared norm: x² + y² + z²
#[inline]
pub fn snorm(v: Vector3) -> f64 {
    v.x * v.x + v.y * v.y + v.z * v.z
}

/// XY-box proximity test. Depth is ignored.
#[inline]
pub fn is_close_xy(a: Vector3, b: Vector3, eps: f64) -> bool {
    (a.x - b.x).abs() < eps && (a.y - b.y).abs() < eps
}

/// True when any vertex lies inside the XY box of half-width `eps` around `query`
pub fn any_close_xy(vertices: &[Vector3], query: Vector3, eps: f64) -> bool {
    vertices.iter().any(|v| is_close_xy(*v, query, eps))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snorm() {
        assert_eq!(snorm(Vector3::new(1.0, 2.0, 2.0)), 9.0);
        assert_eq!(snorm(Vector3::ZERO), 0.0);
    }

    #[test]
    fn test_add_and_scale() {
        let v = Vector3::new(1.0, -2.0, 0.5) + Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(v * 2.0, Vector3::new(4.0, -2.0, 3.0));
    }

    #[test]
    fn test_close_xy_ignores_depth() {
        let a = Vector3::new(0.5, 0.5, 10.0);
        let b = Vector3::new(0.51, 0.49, -10.0);
        assert!(is_close_xy(a, b, 0.02));
    }

    #[test]
    fn test_close_xy_is_strict() {
        let a = Vector3::new(0.0, 0.0, 0.0);
        let b = Vector3::new(0.5, 0.0, 0.0);
        assert!(!is_close_xy(a, b, 0.5));
        assert!(is_close_xy(a, b, 0.5000001));
    }

    #[test]
    fn test_close_xy_box_not_circle() {
        // Corner of the box is outside the inscribed circle but still a hit
        let a = Vector3::new(0.0, 0.0, 0.0);
        let b = Vector3::new(0.019, 0.019, 0.0);
        assert!(b.truncate().length() > 0.02);
        assert!(is_close_xy(a, b, 0.02));
    }

    #[test]
    fn test_any_close_xy_empty() {
        assert!(!any_close_xy(&[], Vector3::ZERO, 1.0));
    }
}
