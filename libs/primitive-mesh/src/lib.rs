//! # Primitive Mesh
//!
//! Deterministic mesh generation for the model viewer's scene furniture:
//! axis arrows, bounding boxes, the reference tray, and sphere markers.
//!
//! ## Architecture
//!
//! ```text
//! Shape ─→ primitives (base mesh) ─→ subdivision × N ─→ Mesh ─→ renderer
//!                 ↑
//!             MeshCache (memoized by shape + parameters)
//! ```
//!
//! ## Algorithms
//!
//! - **Polyhedra**: Fixed vertex/face tables (icosahedron, octahedron, cube)
//! - **Round shapes**: Triangle fans over evenly spaced rings
//! - **Subdivision**: 1-to-4 triangle split with midpoints projected onto
//!   the unit sphere
//!
//! ## Usage
//!
//! ```rust
//! use primitive_mesh::{build_shape, Shape};
//!
//! let sphere = build_shape(&Shape::Icosahedron { subdivide: 2 }).unwrap();
//! assert_eq!(sphere.face_count(), 320);
//!
//! let arrow_head = build_shape(&Shape::Cone { slices: 16 }).unwrap();
//! assert_eq!(arrow_head.vertex_count(), 17);
//! ```

pub mod cache;
pub mod error;
pub mod mesh;
pub mod primitives;
pub mod shape;
pub mod subdivision;

pub use cache::MeshCache;
pub use error::MeshError;
pub use mesh::{Face, Mesh};
pub use shape::{build_shape, build_shape_with_config, Shape};
pub use subdivision::{subdivide, subdivide_levels};
