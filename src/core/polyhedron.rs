//! Discrete sphere generation
//!
//! The seed is an octahedron whose poles sit on `+axis` and `-axis`. Each
//! subdivision pass splits every triangle into four through its edge
//! midpoints and pushes the midpoints back onto the unit sphere. Midpoints
//! are shared between neighbouring faces, so depth `d` yields
//! `4^(d+1) + 2` vertices.

use std::collections::HashMap;

use crate::math::{rotate, Quaternion, Vector3};

/// Ordered vertex cloud, mutated in place by rotation every frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyhedron {
    pub vertices: Vec<Vector3>,
}

impl Polyhedron {
    pub fn new(vertices: Vec<Vector3>) -> Self {
        Self { vertices }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Apply one rotation step to every vertex
    pub fn rotate(&mut self, q: &Quaternion) {
        rotate(&mut self.vertices, q);
    }
}

/// Number of vertices produced at a given subdivision depth, `None` past `usize`
pub fn vertex_count(depth: u32) -> Option<usize> {
    depth
        .checked_add(1)
        .and_then(|exp| 4usize.checked_pow(exp))
        .and_then(|n| n.checked_add(2))
}

/// Generate a discrete unit sphere with a pole along `axis`.
///
/// `axis` must be unit length. The output is fully deterministic: the same
/// axis and depth always give the same vertices in the same order.
pub fn generate_discrete_sphere(axis: Vector3, depth: u32) -> Polyhedron {
    let (mut vertices, mut faces) = seed_octahedron(axis);

    for _ in 0..depth {
        faces = subdivide(&mut vertices, &faces);
    }

    log::debug!(
        "Generated discrete sphere: depth {}, {} vertices, {} faces",
        depth,
        vertices.len(),
        faces.len()
    );

    Polyhedron::new(vertices)
}

/// Octahedron ordered `[axis, u, v, -u, -v, -axis]`
fn seed_octahedron(axis: Vector3) -> (Vec<Vector3>, Vec<[usize; 3]>) {
    let (u, v) = axis.any_orthonormal_pair();

    let vertices = vec![axis, u, v, -u, -v, -axis];
    let faces = vec![
        [0, 1, 2],
        [0, 2, 3],
        [0, 3, 4],
        [0, 4, 1],
        [5, 2, 1],
        [5, 3, 2],
        [5, 4, 3],
        [5, 1, 4],
    ];

    (vertices, faces)
}

/// Split each triangle into four, appending shared midpoints to `vertices`
fn subdivide(vertices: &mut Vec<Vector3>, faces: &[[usize; 3]]) -> Vec<[usize; 3]> {
    let mut midpoints: HashMap<(usize, usize), usize> = HashMap::with_capacity(faces.len() * 3 / 2);
    let mut new_faces = Vec::with_capacity(faces.len() * 4);

    let mut midpoint = |a: usize, b: usize, vertices: &mut Vec<Vector3>| -> usize {
        let key = if a < b { (a, b) } else { (b, a) };
        *midpoints.entry(key).or_insert_with(|| {
            let mid = ((vertices[a] + vertices[b]) * 0.5).normalize();
            vertices.push(mid);
            vertices.len() - 1
        })
    };

    for &[a, b, c] in faces {
        let ab = midpoint(a, b, vertices);
        let bc = midpoint(b, c, vertices);
        let ca = midpoint(c, a, vertices);

        new_faces.push([a, ab, ca]);
        new_faces.push([b, bc, ab]);
        new_faces.push([c, ca, bc]);
        new_faces.push([ab, bc, ca]);
    }

    new_faces
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_vertex_count_formula() {
        assert_eq!(vertex_count(0), Some(6));
        assert_eq!(vertex_count(1), Some(18));
        assert_eq!(vertex_count(2), Some(66));
        assert_eq!(vertex_count(6), Some(16386));
        assert_eq!(vertex_count(10), Some(4_194_306));
    }

    #[test]
    fn test_vertex_count_overflow() {
        assert_eq!(vertex_count(31), None);
        assert_eq!(vertex_count(64), None);
        assert_eq!(vertex_count(u32::MAX), None);
    }

    #[test]
    fn test_generated_counts_match_formula() {
        for depth in 0..=4 {
            let sphere = generate_discrete_sphere(Vector3::Y, depth);
            assert_eq!(Some(sphere.len()), vertex_count(depth), "depth {}", depth);
        }
    }

    #[test]
    fn test_seed_poles_follow_axis() {
        let axis = Vector3::new(0.1, 1.0, 0.0).normalize();
        let sphere = generate_discrete_sphere(axis, 0);
        assert_eq!(sphere.vertices[0], axis);
        assert_eq!(sphere.vertices[5], -axis);
    }

    #[test]
    fn test_seed_equator_is_orthogonal() {
        let axis = Vector3::new(0.3, -0.2, 0.9).normalize();
        let sphere = generate_discrete_sphere(axis, 0);
        for v in &sphere.vertices[1..5] {
            assert_abs_diff_eq!(v.dot(axis), 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_no_duplicate_vertices() {
        let sphere = generate_discrete_sphere(Vector3::Z, 2);
        for (i, a) in sphere.vertices.iter().enumerate() {
            for b in &sphere.vertices[i + 1..] {
                assert!(a.distance(*b) > 1e-9);
            }
        }
    }

    #[test]
    fn test_empty_polyhedron() {
        let p = Polyhedron::default();
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
    }
}
