//! # Icosahedron Primitive
//!
//! The regular 20-sided polyhedron inscribed in the unit sphere, the usual
//! seed for geodesic spheres.

use super::check_levels;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::subdivision::subdivide_levels;
use glam::DVec3;

/// Vertex table: one pole, an upper ring of five, a lower ring of five
/// rotated by 36 degrees, and the opposite pole.
const VERTICES: [[f64; 3]; 12] = [
    [0.000, 0.000, 1.000],
    [0.894, 0.000, 0.447],
    [0.276, 0.851, 0.447],
    [-0.724, 0.526, 0.447],
    [-0.724, -0.526, 0.447],
    [0.276, -0.851, 0.447],
    [0.724, 0.526, -0.447],
    [-0.276, 0.851, -0.447],
    [-0.894, 0.000, -0.447],
    [-0.276, -0.851, -0.447],
    [0.724, -0.526, -0.447],
    [0.000, 0.000, -1.000],
];

/// Face table, counter-clockwise seen from outside.
const FACES: [[u32; 3]; 20] = [
    // Upper cap
    [0, 1, 2],
    [0, 2, 3],
    [0, 3, 4],
    [0, 4, 5],
    [0, 5, 1],
    // Lower cap
    [11, 7, 6],
    [11, 8, 7],
    [11, 9, 8],
    [11, 10, 9],
    [11, 6, 10],
    // Belt
    [1, 6, 2],
    [2, 7, 3],
    [3, 8, 4],
    [4, 9, 5],
    [5, 10, 1],
    [6, 7, 2],
    [7, 8, 3],
    [8, 9, 4],
    [9, 10, 5],
    [10, 6, 1],
];

/// Creates an icosahedron, optionally refined by geodesic subdivision.
///
/// # Arguments
///
/// * `levels` - Number of subdivision passes (0 for the bare icosahedron)
///
/// # Returns
///
/// A closed triangle mesh with `20 * 4^levels` faces.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::create_icosahedron;
///
/// let mesh = create_icosahedron(0).unwrap();
/// assert_eq!(mesh.vertex_count(), 12);
/// assert_eq!(mesh.face_count(), 20);
///
/// let sphere = create_icosahedron(2).unwrap();
/// assert_eq!(sphere.face_count(), 320);
/// ```
pub fn create_icosahedron(levels: u32) -> Result<Mesh, MeshError> {
    check_levels("Icosahedron", levels)?;

    let mut mesh = Mesh::with_capacity(VERTICES.len(), FACES.len());
    for [x, y, z] in VERTICES {
        mesh.add_vertex(DVec3::new(x, y, z));
    }
    for face in FACES {
        mesh.add_face(face);
    }

    subdivide_levels(mesh, levels)
}
