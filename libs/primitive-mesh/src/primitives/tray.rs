//! # Tray Primitive
//!
//! The printer-bed sized reference quad drawn under a model.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates a single-quad tray in the z=0 plane with one corner at the origin.
///
/// # Arguments
///
/// * `width` - Extent along x
/// * `depth` - Extent along y
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::create_tray;
///
/// let mesh = create_tray(100.0, 36.0).unwrap();
/// assert_eq!(mesh.bounds(), [0.0, 100.0, 0.0, 36.0, 0.0, 0.0]);
/// ```
pub fn create_tray(width: f64, depth: f64) -> Result<Mesh, MeshError> {
    if !(width.is_finite() && depth.is_finite()) || width <= 0.0 || depth <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "Tray size must be positive: {} x {}",
            width, depth
        )));
    }

    let mut mesh = Mesh::with_capacity(4, 1);
    mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
    mesh.add_vertex(DVec3::new(0.0, depth, 0.0));
    mesh.add_vertex(DVec3::new(width, depth, 0.0));
    mesh.add_vertex(DVec3::new(width, 0.0, 0.0));
    mesh.add_face([0, 1, 2, 3]);

    Ok(mesh)
}
