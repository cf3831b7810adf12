//! # Cylinder Primitive
//!
//! Two disk caps of unit diameter at z = -0.5 and z = +0.5 joined by a
//! triangulated side wall. Used as the shaft of axis arrows.

use super::disk::create_disk;
use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::CYLINDER_HALF_HEIGHT;
use glam::DVec3;

/// Creates a unit cylinder along the z axis.
///
/// The first ring (indices `0..slices`) is the cap at z = -0.5, the second
/// ring (indices `slices..2 * slices`) the cap at z = +0.5. The second cap's
/// fan is flipped so both caps face away from the body.
///
/// # Returns
///
/// A closed mesh with `2 * slices` vertices and
/// `2 * (slices - 2) + 2 * slices` triangles.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::create_cylinder;
///
/// let mesh = create_cylinder(8).unwrap();
/// assert_eq!(mesh.vertex_count(), 16);
/// assert_eq!(mesh.face_count(), 28);
/// ```
pub fn create_cylinder(slices: u32) -> Result<Mesh, MeshError> {
    let mut mesh = create_disk(slices)?;
    mesh.translate(DVec3::new(0.0, 0.0, -CYLINDER_HALF_HEIGHT));

    let mut far_cap = Mesh::with_capacity(slices as usize, (slices - 2) as usize);
    for vertex in mesh.vertices() {
        far_cap.add_vertex(DVec3::new(vertex.x, vertex.y, CYLINDER_HALF_HEIGHT));
    }
    for face in mesh.faces() {
        far_cap.add_triangle(face[0], face[2], face[1]);
    }

    // Offsets the far cap's indices by `slices`
    mesh.merge(&far_cap);

    for i in 0..slices {
        let next = (i + 1) % slices;
        mesh.add_triangle(i, next, i + slices);
        mesh.add_triangle(next, next + slices, i + slices);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cylinder_counts() {
        let mesh = create_cylinder(8).unwrap();
        assert_eq!(mesh.vertex_count(), 16);
        // 6 cap triangles per end plus 16 side triangles
        assert_eq!(mesh.face_count(), 28);
    }

    #[test]
    fn test_cylinder_ring_blocks_are_contiguous() {
        let slices = 6;
        let mesh = create_cylinder(slices).unwrap();
        for i in 0..slices {
            let near = mesh.vertex(i);
            let far = mesh.vertex(i + slices);
            assert_eq!(near.z, -0.5);
            assert_eq!(far.z, 0.5);
            assert_eq!(near.truncate(), far.truncate());
        }
    }

    #[test]
    fn test_cylinder_far_cap_is_flipped_and_offset() {
        let mesh = create_cylinder(8).unwrap();
        assert_eq!(mesh.face(0), &[0, 2, 1]);
        assert_eq!(mesh.face(6), &[8, 9, 10]);
    }

    #[test]
    fn test_cylinder_is_closed() {
        let mesh = create_cylinder(8).unwrap();
        assert!(mesh.validate().is_ok());
        assert!(mesh.is_closed());
    }

    #[test]
    fn test_cylinder_normals_point_outward() {
        let mesh = create_cylinder(12).unwrap();
        for face in 0..mesh.face_count() {
            assert!(mesh.face_normal(face).dot(mesh.face_centroid(face)) > 0.0);
        }
    }

    #[test]
    fn test_cylinder_rejects_too_few_slices() {
        assert!(create_cylinder(0).is_err());
    }
}
