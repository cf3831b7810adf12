//! # Primitives
//!
//! Mesh generation for the canonical shapes the viewer decorates a scene
//! with: polyhedra that double as sphere seeds, the unit cube, bounding
//! boxes, round primitives for axis arrows, and the reference tray.
//!
//! All unit shapes are centered on the origin except the cone and the tray,
//! which sit on the z=0 plane.

pub mod cone;
pub mod cube;
pub mod cylinder;
pub mod disk;
pub mod icosahedron;
pub mod octahedron;
pub mod tray;

pub use cone::create_cone;
pub use cube::{create_box, create_cube};
pub use cylinder::create_cylinder;
pub use disk::create_disk;
pub use icosahedron::create_icosahedron;
pub use octahedron::{create_octahedron, create_pyramid};
pub use tray::create_tray;

use crate::error::MeshError;
use config::constants::{MAX_SUBDIVISION_LEVELS, MAX_VERTICES, MIN_SLICES};

/// Rejects subdivision depths above the hard safety limit.
pub(crate) fn check_levels(shape: &str, levels: u32) -> Result<(), MeshError> {
    if levels > MAX_SUBDIVISION_LEVELS {
        return Err(MeshError::invalid_parameter(format!(
            "{} subdivision levels must be at most {}: {}",
            shape, MAX_SUBDIVISION_LEVELS, levels
        )));
    }
    Ok(())
}

/// Rejects slice counts that cannot form a ring or would blow the vertex
/// budget. Round primitives use at most `2 * slices` vertices.
pub(crate) fn check_slices(shape: &str, slices: u32) -> Result<(), MeshError> {
    if slices < MIN_SLICES {
        return Err(MeshError::invalid_parameter(format!(
            "{} slices must be at least {}: {}",
            shape, MIN_SLICES, slices
        )));
    }
    let count = 2 * slices as usize;
    if count > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count,
            max: MAX_VERTICES,
        });
    }
    Ok(())
}
