//! # Cone Primitive
//!
//! A disk base at z=0 closed by side triangles meeting at an apex on the
//! z axis. Used as the head of axis arrows.

use super::disk::create_disk;
use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::CONE_APEX_HEIGHT;
use glam::DVec3;

/// Creates a cone with its base on z=0 and its apex at `(0, 0, 1)`.
///
/// # Returns
///
/// A closed mesh with `slices + 1` vertices (apex last) and
/// `(slices - 2) + slices` triangles.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::create_cone;
///
/// let mesh = create_cone(8).unwrap();
/// assert_eq!(mesh.vertex_count(), 9);
/// assert_eq!(mesh.face_count(), 14);
/// ```
pub fn create_cone(slices: u32) -> Result<Mesh, MeshError> {
    let mut mesh = create_disk(slices)?;
    let apex = mesh.add_vertex(DVec3::new(0.0, 0.0, CONE_APEX_HEIGHT));

    for i in 0..slices {
        mesh.add_triangle(i, (i + 1) % slices, apex);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cone_counts() {
        for slices in [3, 8, 16, 33] {
            let mesh = create_cone(slices).unwrap();
            assert_eq!(mesh.vertex_count(), slices as usize + 1);
            assert_eq!(mesh.face_count(), (slices as usize - 2) + slices as usize);
        }
    }

    #[test]
    fn test_cone_side_wraps_around() {
        let mesh = create_cone(8).unwrap();
        assert_eq!(mesh.face(mesh.face_count() - 1), &[7, 0, 8]);
    }

    #[test]
    fn test_cone_is_closed() {
        let mesh = create_cone(8).unwrap();
        assert!(mesh.validate().is_ok());
        assert!(mesh.is_closed());
    }

    #[test]
    fn test_cone_bounds() {
        let mesh = create_cone(8).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min.z, 0.0);
        assert_eq!(max.z, 1.0);
    }

    #[test]
    fn test_cone_rejects_too_few_slices() {
        assert!(create_cone(1).is_err());
    }
}
