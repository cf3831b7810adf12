//! # Disk Primitive
//!
//! A flat regular polygon of unit diameter in the z=0 plane, used as the
//! base of cones and the caps of cylinders.

use super::check_slices;
use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::DISK_RADIUS;
use glam::DVec3;
use std::f64::consts::TAU;

/// Creates a disk as a triangle fan around its first ring vertex.
///
/// # Arguments
///
/// * `slices` - Number of ring vertices, evenly spaced starting at angle 0
///
/// # Returns
///
/// A mesh with `slices` vertices and `slices - 2` triangles
/// `(0, i + 1, i)` for `i` in `1..slices - 1`, facing -z.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::create_disk;
///
/// let mesh = create_disk(8).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.face_count(), 6);
/// ```
pub fn create_disk(slices: u32) -> Result<Mesh, MeshError> {
    check_slices("Disk", slices)?;

    let mut mesh = Mesh::with_capacity(slices as usize, (slices - 2) as usize);
    let step = TAU / slices as f64;

    for i in 0..slices {
        let theta = step * i as f64;
        if i > 0 && i < slices - 1 {
            mesh.add_triangle(0, i + 1, i);
        }
        mesh.add_vertex(DVec3::new(
            DISK_RADIUS * theta.cos(),
            DISK_RADIUS * theta.sin(),
            0.0,
        ));
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_disk_counts() {
        let mesh = create_disk(8).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 6);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_disk_fan_layout() {
        let mesh = create_disk(5).unwrap();
        assert_eq!(mesh.faces(), &[vec![0, 2, 1], vec![0, 3, 2], vec![0, 4, 3]]);
    }

    #[test]
    fn test_disk_ring_on_half_unit_circle() {
        let mesh = create_disk(12).unwrap();
        assert_eq!(mesh.vertex(0), DVec3::new(0.5, 0.0, 0.0));
        for v in mesh.vertices() {
            assert_relative_eq!(v.length(), 0.5, epsilon = 1e-12);
            assert_eq!(v.z, 0.0);
        }
    }

    #[test]
    fn test_disk_faces_down() {
        let mesh = create_disk(8).unwrap();
        for face in 0..mesh.face_count() {
            assert_relative_eq!(mesh.face_normal(face).z, -1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_disk_minimum_slices() {
        let mesh = create_disk(3).unwrap();
        assert_eq!(mesh.face_count(), 1);
    }

    #[test]
    fn test_disk_rejects_too_few_slices() {
        assert!(matches!(
            create_disk(2),
            Err(MeshError::InvalidParameter { .. })
        ));
        assert!(create_disk(0).is_err());
    }
}
