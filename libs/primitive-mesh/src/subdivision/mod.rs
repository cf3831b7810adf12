//! # Geodesic Subdivision
//!
//! Splits every triangle of a mesh into four and pushes the new edge
//! midpoints onto the unit sphere. Repeated passes turn a coarse polyhedron
//! into an increasingly round sphere approximation.
//!
//! ## Algorithm
//!
//! For each input face `(a, b, c)`, in face order:
//!
//! 1. Append `i = |a + b|`, `j = |b + c|`, `k = |a + c|` (normalized sums).
//! 2. Overwrite the face in place with the corner triangle `(k, j, c)`.
//! 3. Append `(i, j, k)`, `(a, i, k)` and `(i, b, j)`.
//!
//! Midpoints are not shared between neighbouring faces, so every pass
//! produces exactly `V + 3F` vertices and `4F` faces. All four children keep
//! the winding of their parent.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::{MAX_FACES, MAX_VERTICES};
use glam::DVec3;

/// Runs one geodesic subdivision pass.
///
/// The input is left untouched; the result starts as a copy of it, grows
/// by appending, and only overwrites the slots of the input faces.
///
/// # Errors
///
/// - [`MeshError::UnsupportedFaceArity`] if any face is not a triangle
/// - [`MeshError::InvalidIndex`] if a face references a missing vertex
/// - [`MeshError::TooManyVertices`] / [`MeshError::TooManyFaces`] if the
///   refined mesh would exceed the safety limits
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::create_octahedron;
/// use primitive_mesh::subdivision::subdivide;
///
/// let octahedron = create_octahedron(0).unwrap();
/// let refined = subdivide(&octahedron).unwrap();
/// assert_eq!(refined.vertex_count(), 6 + 3 * 8);
/// assert_eq!(refined.face_count(), 4 * 8);
/// ```
pub fn subdivide(mesh: &Mesh) -> Result<Mesh, MeshError> {
    let triangles = triangles_of(mesh)?;

    // Snapshot the count before anything is appended
    let face_count = triangles.len();

    let vertex_total = mesh.vertex_count() + 3 * face_count;
    if vertex_total > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count: vertex_total,
            max: MAX_VERTICES,
        });
    }
    let face_total = 4 * face_count;
    if face_total > MAX_FACES {
        return Err(MeshError::TooManyFaces {
            count: face_total,
            max: MAX_FACES,
        });
    }

    let mut refined = Mesh::with_capacity(vertex_total, face_total);
    for &vertex in mesh.vertices() {
        refined.add_vertex(vertex);
    }
    for face in mesh.faces() {
        refined.add_face(face.clone());
    }

    for (face_index, [a, b, c]) in triangles.into_iter().enumerate() {
        let (pa, pb, pc) = (mesh.vertex(a), mesh.vertex(b), mesh.vertex(c));

        let i = refined.add_vertex(sphere_midpoint(pa, pb));
        let j = refined.add_vertex(sphere_midpoint(pb, pc));
        let k = refined.add_vertex(sphere_midpoint(pa, pc));

        refined.add_triangle(i, j, k);
        refined.add_triangle(a, i, k);
        refined.add_triangle(i, b, j);
        refined.replace_face(face_index, vec![k, j, c]);
    }

    log::debug!(
        "subdivided {} faces / {} vertices into {} faces / {} vertices",
        face_count,
        mesh.vertex_count(),
        refined.face_count(),
        refined.vertex_count()
    );

    Ok(refined)
}

/// Applies `levels` subdivision passes in sequence, each consuming the
/// output of the previous one. Zero levels returns the mesh unchanged.
pub fn subdivide_levels(mesh: Mesh, levels: u32) -> Result<Mesh, MeshError> {
    let mut current = mesh;
    for _ in 0..levels {
        current = subdivide(&current)?;
    }
    Ok(current)
}

/// Reads every face as a triangle, checking arity and index range up front
/// so the split loop cannot fail halfway.
fn triangles_of(mesh: &Mesh) -> Result<Vec<[u32; 3]>, MeshError> {
    let vertex_count = mesh.vertex_count();

    mesh.faces()
        .iter()
        .enumerate()
        .map(|(face_index, face)| {
            let &[a, b, c] = face.as_slice() else {
                return Err(MeshError::unsupported_arity(face_index, face.len()));
            };
            if let Some(&index) = [a, b, c].iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::InvalidIndex {
                    face: face_index,
                    index,
                    vertex_count,
                });
            }
            Ok([a, b, c])
        })
        .collect()
}

/// Direction of the edge midpoint, scaled to unit length.
///
/// Antipodal endpoints sum to the zero vector, which has no direction; the
/// midpoint then stays at the origin.
#[inline]
fn sphere_midpoint(a: DVec3, b: DVec3) -> DVec3 {
    (a + b).normalize_or_zero()
}
