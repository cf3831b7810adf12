//! # Cube and Box Primitives
//!
//! The unit cube as a closed triangle mesh, and axis-aligned boxes as six
//! quads built from bounding limits.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::UNIT_CUBE_HALF_EXTENT;
use glam::DVec3;

/// Triangles of the cube before reversal; listed inward-facing.
const RAW_CUBE_FACES: [[u32; 3]; 12] = [
    [0, 3, 2],
    [0, 2, 1],
    [4, 5, 6],
    [4, 6, 7],
    [0, 1, 5],
    [0, 5, 4],
    [1, 2, 6],
    [1, 6, 5],
    [2, 3, 7],
    [2, 7, 6],
    [3, 0, 4],
    [3, 4, 7],
];

/// Box sides as quads over the corner order of [`create_box`].
const BOX_FACES: [[u32; 4]; 6] = [
    [0, 1, 2, 3], // z = z_min
    [0, 1, 5, 4], // y = y_min
    [4, 5, 6, 7], // z = z_max
    [6, 7, 3, 2], // y = y_max
    [0, 3, 7, 4], // x = x_min
    [1, 2, 6, 5], // x = x_max
];

/// Creates the unit cube centered at the origin.
///
/// # Returns
///
/// A closed mesh with 8 vertices at `±0.5` and 12 triangles (2 per side),
/// all wound so their normals point outward.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::create_cube;
///
/// let mesh = create_cube();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.face_count(), 12);
/// ```
pub fn create_cube() -> Mesh {
    let f = -UNIT_CUBE_HALF_EXTENT;
    let mut mesh = Mesh::with_capacity(8, 12);

    // Ring at z = +0.5 first, then z = -0.5
    mesh.add_vertex(DVec3::new(-f, -f, -f));
    mesh.add_vertex(DVec3::new(f, -f, -f));
    mesh.add_vertex(DVec3::new(f, f, -f));
    mesh.add_vertex(DVec3::new(-f, f, -f));
    mesh.add_vertex(DVec3::new(-f, -f, f));
    mesh.add_vertex(DVec3::new(f, -f, f));
    mesh.add_vertex(DVec3::new(f, f, f));
    mesh.add_vertex(DVec3::new(-f, f, f));

    for [a, b, c] in RAW_CUBE_FACES {
        mesh.add_triangle(c, b, a);
    }

    mesh
}

/// Creates an axis-aligned box from bounding limits.
///
/// # Arguments
///
/// * `limits` - `[x_min, x_max, y_min, y_max, z_min, z_max]`, the layout
///   [`Mesh::bounds`] returns
///
/// # Returns
///
/// A mesh with 8 corner vertices and 6 quads. Each quad keeps its own fixed
/// winding; unlike [`create_cube`] the normals are not uniformly outward,
/// so renderers that cull back faces should draw it two-sided.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::create_box;
///
/// let mesh = create_box([0.0, 1.0, 0.0, 1.0, 0.0, 1.0]).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.face_count(), 6);
/// ```
pub fn create_box(limits: [f64; 6]) -> Result<Mesh, MeshError> {
    if limits.iter().any(|value| !value.is_finite()) {
        return Err(MeshError::invalid_parameter(format!(
            "Box limits must be finite: {:?}",
            limits
        )));
    }

    let [x0, x1, y0, y1, z0, z1] = limits;
    if x0 > x1 || y0 > y1 || z0 > z1 {
        return Err(MeshError::invalid_parameter(format!(
            "Box limits must be ordered min <= max per axis: {:?}",
            limits
        )));
    }

    let mut mesh = Mesh::with_capacity(8, 6);

    mesh.add_vertex(DVec3::new(x0, y0, z0));
    mesh.add_vertex(DVec3::new(x1, y0, z0));
    mesh.add_vertex(DVec3::new(x1, y1, z0));
    mesh.add_vertex(DVec3::new(x0, y1, z0));
    mesh.add_vertex(DVec3::new(x0, y0, z1));
    mesh.add_vertex(DVec3::new(x1, y0, z1));
    mesh.add_vertex(DVec3::new(x1, y1, z1));
    mesh.add_vertex(DVec3::new(x0, y1, z1));

    for face in BOX_FACES {
        mesh.add_face(face);
    }

    Ok(mesh)
}
