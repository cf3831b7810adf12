//! # Configuration Constants
//!
//! Shape dimensions, tessellation defaults and safety limits for the
//! primitive mesh generator.
//!
//! ## Categories
//!
//! - **Precision**: Unit-sphere tolerance
//! - **Resolution**: Slice counts and subdivision depth
//! - **Limits**: Maximum mesh sizes for safety bounds
//! - **Dimensions**: Canonical sizes of the unit primitives

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance on the norm of a vertex projected onto the unit sphere.
///
/// Subdivision normalizes every new vertex; after the division the length
/// may drift from 1.0 by a few ulps, never by more than this.
///
/// # Example
///
/// ```rust
/// use config::constants::UNIT_SPHERE_TOLERANCE;
///
/// let length: f64 = 0.999_999_999_999_9;
/// assert!((length - 1.0).abs() < UNIT_SPHERE_TOLERANCE);
/// ```
pub const UNIT_SPHERE_TOLERANCE: f64 = 1e-9;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of slices around disks, cones and cylinders.
pub const DEFAULT_SLICES: u32 = 8;

/// Minimum number of slices for any round primitive.
///
/// A disk ring needs at least 3 points to enclose an area. Smaller counts
/// are rejected rather than producing a degenerate mesh.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SLICES;
///
/// let requested = 2;
/// assert!(requested < MIN_SLICES);
/// ```
pub const MIN_SLICES: u32 = 3;

/// Maximum number of geodesic subdivision passes.
///
/// Each pass multiplies the face count by 4. Eight passes on an
/// icosahedron already yield 1,310,720 triangles.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_SUBDIVISION_LEVELS;
///
/// let faces = 20u64 * 4u64.pow(MAX_SUBDIVISION_LEVELS);
/// assert_eq!(faces, 1_310_720);
/// ```
pub const MAX_SUBDIVISION_LEVELS: u32 = 8;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion when subdividing large
/// user-supplied meshes.
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of faces in a single mesh.
pub const MAX_FACES: usize = 10_000_000;

/// Default capacity of the primitive mesh cache.
///
/// Primitives are regenerated rarely (once per session in the viewer),
/// so a small cache covers every distinct shape a scene uses.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

// =============================================================================
// DIMENSION CONSTANTS
// =============================================================================

/// Half the edge length of the unit cube centered at the origin.
pub const UNIT_CUBE_HALF_EXTENT: f64 = 0.5;

/// Radius of the disk ring (unit diameter).
pub const DISK_RADIUS: f64 = 0.5;

/// Half the height of the unit cylinder; caps sit at z = -0.5 and z = +0.5.
pub const CYLINDER_HALF_HEIGHT: f64 = 0.5;

/// Height of the cone apex above its base plane.
pub const CONE_APEX_HEIGHT: f64 = 1.0;

/// Limits of the default box, `[x_min, x_max, y_min, y_max, z_min, z_max]`.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_BOX_LIMITS;
///
/// assert_eq!(DEFAULT_BOX_LIMITS[1] - DEFAULT_BOX_LIMITS[0], 1.0);
/// ```
pub const DEFAULT_BOX_LIMITS: [f64; 6] = [0.0, 1.0, 0.0, 1.0, 0.0, 1.0];

/// Default size of the reference tray as `(width, depth)` in millimetres.
pub const DEFAULT_TRAY_SIZE: (f64, f64) = (100.0, 36.0);
