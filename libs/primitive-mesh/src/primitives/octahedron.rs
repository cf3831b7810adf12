//! # Octahedron and Pyramid Primitives
//!
//! The regular octahedron with poles on the z axis, and its upper half,
//! which serves as an arrow head or, subdivided, as a hemisphere.

use super::check_levels;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::subdivision::subdivide_levels;
use glam::DVec3;
use std::f64::consts::FRAC_1_SQRT_2;

/// Top pole followed by the equator ring, in the order both shapes share.
fn upper_vertices() -> [DVec3; 5] {
    let f = FRAC_1_SQRT_2;
    [
        DVec3::new(0.0, 0.0, 1.0),
        DVec3::new(-f, f, 0.0),
        DVec3::new(f, f, 0.0),
        DVec3::new(f, -f, 0.0),
        DVec3::new(-f, -f, 0.0),
    ]
}

const UPPER_FACES: [[u32; 3]; 4] = [[0, 2, 1], [0, 3, 2], [0, 4, 3], [0, 1, 4]];

const OCTAHEDRON_LOWER_FACES: [[u32; 3]; 4] = [[5, 1, 2], [5, 2, 3], [5, 3, 4], [5, 4, 1]];

/// The square base split along the 1-3 diagonal, facing down.
const PYRAMID_BASE_FACES: [[u32; 3]; 2] = [[1, 2, 3], [1, 3, 4]];

/// Creates an octahedron, optionally refined by geodesic subdivision.
///
/// Vertices sit at `(0, 0, ±1)` and `(±1/√2, ±1/√2, 0)`.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::create_octahedron;
///
/// let mesh = create_octahedron(0).unwrap();
/// assert_eq!(mesh.vertex_count(), 6);
/// assert_eq!(mesh.face_count(), 8);
/// ```
pub fn create_octahedron(levels: u32) -> Result<Mesh, MeshError> {
    check_levels("Octahedron", levels)?;

    let mut mesh = Mesh::with_capacity(6, 8);
    for vertex in upper_vertices() {
        mesh.add_vertex(vertex);
    }
    mesh.add_vertex(DVec3::new(0.0, 0.0, -1.0));

    for face in UPPER_FACES.into_iter().chain(OCTAHEDRON_LOWER_FACES) {
        mesh.add_face(face);
    }

    subdivide_levels(mesh, levels)
}

/// Creates the upper half of the octahedron: four sides and a square base
/// split into two triangles.
///
/// The base edge 1-3 is a diameter of the equator, so subdividing places
/// its midpoint at the origin instead of on the sphere.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::create_pyramid;
///
/// let mesh = create_pyramid(0).unwrap();
/// assert_eq!(mesh.vertex_count(), 5);
/// assert_eq!(mesh.face_count(), 6);
/// ```
pub fn create_pyramid(levels: u32) -> Result<Mesh, MeshError> {
    check_levels("Pyramid", levels)?;

    let mut mesh = Mesh::with_capacity(5, 6);
    for vertex in upper_vertices() {
        mesh.add_vertex(vertex);
    }
    for face in UPPER_FACES.into_iter().chain(PYRAMID_BASE_FACES) {
        mesh.add_face(face);
    }

    subdivide_levels(mesh, levels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_octahedron_is_closed() {
        let mesh = create_octahedron(0).unwrap();
        assert!(mesh.validate().is_ok());
        assert!(mesh.is_closed());
        assert_eq!(mesh.edge_uses().len(), 12);
    }

    #[test]
    fn test_octahedron_on_unit_sphere() {
        let mesh = create_octahedron(0).unwrap();
        for v in mesh.vertices() {
            assert_relative_eq!(v.length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_octahedron_normals_point_outward() {
        let mesh = create_octahedron(0).unwrap();
        for face in 0..mesh.face_count() {
            assert!(mesh.face_normal(face).dot(mesh.face_centroid(face)) > 0.0);
        }
    }

    #[test]
    fn test_octahedron_subdivided_counts() {
        let mesh = create_octahedron(2).unwrap();
        assert_eq!(mesh.face_count(), 8 * 16);
        assert_eq!(mesh.vertex_count(), 6 + 3 * 8 + 3 * 32);
    }

    #[test]
    fn test_pyramid_is_closed() {
        let mesh = create_pyramid(0).unwrap();
        assert!(mesh.is_closed());
        let (min, max) = mesh.bounding_box();
        assert_eq!(min.z, 0.0);
        assert_eq!(max.z, 1.0);
    }

    #[test]
    fn test_pyramid_base_faces_down() {
        let mesh = create_pyramid(0).unwrap();
        assert_relative_eq!(mesh.face_normal(4).z, -1.0);
        assert_relative_eq!(mesh.face_normal(5).z, -1.0);
    }

    #[test]
    fn test_pyramid_subdivided_diagonal_collapses_to_origin() {
        let mesh = create_pyramid(1).unwrap();
        assert_eq!(mesh.vertex_count(), 5 + 3 * 6);
        assert_eq!(mesh.face_count(), 24);
        let at_origin = mesh.vertices().iter().filter(|v| **v == DVec3::ZERO).count();
        assert_eq!(at_origin, 2);
    }
}
