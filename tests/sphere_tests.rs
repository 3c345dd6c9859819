use approx::assert_abs_diff_eq;
use sphere_spin::core::{generate_discrete_sphere, vertex_count};
use sphere_spin::Vector3;

#[cfg(test)]
mod generation_tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        let axis = Vector3::new(0.1, 1.0, 0.0).normalize();
        for depth in 0..=4 {
            let a = generate_discrete_sphere(axis, depth);
            let b = generate_discrete_sphere(axis, depth);
            assert_eq!(a.len(), b.len());
            for (va, vb) in a.vertices.iter().zip(&b.vertices) {
                assert_eq!(va.to_array().map(f64::to_bits), vb.to_array().map(f64::to_bits));
            }
        }
    }

    #[test]
    fn test_depth_zero_is_octahedron_about_z() {
        let sphere = generate_discrete_sphere(Vector3::Z, 0);
        assert_eq!(sphere.len(), 6, "Seed should be an octahedron");

        let expected = [
            Vector3::Z,
            Vector3::X,
            Vector3::Y,
            Vector3::NEG_X,
            Vector3::NEG_Y,
            Vector3::NEG_Z,
        ];
        for e in expected {
            assert!(
                sphere.vertices.iter().any(|v| v.abs_diff_eq(e, 1e-12)),
                "Missing seed vertex {:?}",
                e
            );
        }
        assert_eq!(sphere.vertices[0], Vector3::Z);
        assert_eq!(sphere.vertices[5], Vector3::NEG_Z);
    }

    #[test]
    fn test_seed_vertices_are_prefix_of_subdivided() {
        let axis = Vector3::new(1.0, 2.0, -0.5).normalize();
        let seed = generate_discrete_sphere(axis, 0);
        let dense = generate_discrete_sphere(axis, 3);
        assert_eq!(&dense.vertices[..6], &seed.vertices[..]);
    }

    #[test]
    fn test_vertices_on_unit_sphere() {
        let sphere = generate_discrete_sphere(Vector3::new(0.0, 0.6, 0.8), 4);
        assert_eq!(Some(sphere.len()), vertex_count(4));
        for v in &sphere.vertices {
            assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sphere_is_centered() {
        let sphere = generate_discrete_sphere(Vector3::Y, 3);
        let centroid = sphere.vertices.iter().fold(Vector3::ZERO, |acc, v| acc + *v) / sphere.len() as f64;
        assert!(centroid.length() < 1e-9, "Centroid should be at origin, got {:?}", centroid);
    }

    #[test]
    fn test_nearest_neighbour_spacing_shrinks() {
        let spacing = |depth| {
            let sphere = generate_discrete_sphere(Vector3::Z, depth);
            let first = sphere.vertices[0];
            sphere.vertices[1..]
                .iter()
                .map(|v| v.distance(first))
                .fold(f64::INFINITY, f64::min)
        };
        assert!(spacing(1) < spacing(0));
        assert!(spacing(3) < spacing(2));
    }
}
