//! # Shape Descriptors
//!
//! Serializable description of a primitive together with its parameters,
//! and the dispatch from a description to the matching mesh generator.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::{
    create_box, create_cone, create_cube, create_cylinder, create_disk, create_icosahedron,
    create_octahedron, create_pyramid, create_tray,
};
use config::constants::{DEFAULT_BOX_LIMITS, DEFAULT_TRAY_SIZE};
use config::MeshConfig;
use serde::{Deserialize, Serialize};

/// A primitive shape and the parameters needed to build it.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{build_shape, Shape};
///
/// let mesh = build_shape(&Shape::Cone { slices: 8 }).unwrap();
/// assert_eq!(mesh.vertex_count(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape {
    /// Icosahedron refined `subdivide` times
    Icosahedron { subdivide: u32 },
    /// Octahedron refined `subdivide` times
    Octahedron { subdivide: u32 },
    /// Upper half of the octahedron refined `subdivide` times
    Pyramid { subdivide: u32 },
    /// Unit cube centered at the origin
    Cube,
    /// Axis-aligned box, `[x_min, x_max, y_min, y_max, z_min, z_max]`
    Box { limits: [f64; 6] },
    /// Unit-diameter disk fan
    Disk { slices: u32 },
    /// Cone with its base on z=0
    Cone { slices: u32 },
    /// Unit cylinder centered at the origin
    Cylinder { slices: u32 },
    /// Reference tray quad
    Tray { width: f64, depth: f64 },
}

impl Shape {
    /// Default box over `[0, 1]` on every axis.
    pub fn default_box() -> Self {
        Shape::Box {
            limits: DEFAULT_BOX_LIMITS,
        }
    }

    /// Default 100 x 36 tray.
    pub fn default_tray() -> Self {
        let (width, depth) = DEFAULT_TRAY_SIZE;
        Shape::Tray { width, depth }
    }

    /// Disk at the configured default resolution.
    pub fn default_disk(config: &MeshConfig) -> Self {
        Shape::Disk {
            slices: config.default_slices,
        }
    }

    /// Cone at the configured default resolution.
    pub fn default_cone(config: &MeshConfig) -> Self {
        Shape::Cone {
            slices: config.default_slices,
        }
    }

    /// Cylinder at the configured default resolution.
    pub fn default_cylinder(config: &MeshConfig) -> Self {
        Shape::Cylinder {
            slices: config.default_slices,
        }
    }

    /// Short lowercase name of the shape family.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Icosahedron { .. } => "icosahedron",
            Shape::Octahedron { .. } => "octahedron",
            Shape::Pyramid { .. } => "pyramid",
            Shape::Cube => "cube",
            Shape::Box { .. } => "box",
            Shape::Disk { .. } => "disk",
            Shape::Cone { .. } => "cone",
            Shape::Cylinder { .. } => "cylinder",
            Shape::Tray { .. } => "tray",
        }
    }

    /// Subdivision depth requested by this shape, zero for shapes that
    /// are never subdivided.
    pub fn subdivision_levels(&self) -> u32 {
        match self {
            Shape::Icosahedron { subdivide }
            | Shape::Octahedron { subdivide }
            | Shape::Pyramid { subdivide } => *subdivide,
            _ => 0,
        }
    }
}

/// Builds the mesh described by `shape` under the default configuration.
pub fn build_shape(shape: &Shape) -> Result<Mesh, MeshError> {
    build_shape_with_config(shape, &MeshConfig::default())
}

/// Builds the mesh described by `shape`, enforcing the subdivision cap of
/// `config` on top of the generators' own validation.
pub fn build_shape_with_config(shape: &Shape, config: &MeshConfig) -> Result<Mesh, MeshError> {
    let levels = shape.subdivision_levels();
    if levels > config.max_subdivision_levels {
        return Err(MeshError::invalid_parameter(format!(
            "{} subdivision levels exceed configured maximum {}: {}",
            shape.name(),
            config.max_subdivision_levels,
            levels
        )));
    }

    match shape {
        Shape::Icosahedron { subdivide } => create_icosahedron(*subdivide),
        Shape::Octahedron { subdivide } => create_octahedron(*subdivide),
        Shape::Pyramid { subdivide } => create_pyramid(*subdivide),
        Shape::Cube => Ok(create_cube()),
        Shape::Box { limits } => create_box(*limits),
        Shape::Disk { slices } => create_disk(*slices),
        Shape::Cone { slices } => create_cone(*slices),
        Shape::Cylinder { slices } => create_cylinder(*slices),
        Shape::Tray { width, depth } => create_tray(*width, *depth),
    }
}
