//! Validated configuration snapshot shared by the mesh generator.

use crate::constants::{DEFAULT_SLICES, MAX_SUBDIVISION_LEVELS, MIN_SLICES};
use thiserror::Error;

/// Immutable snapshot of the tunable mesh settings.
///
/// # Examples
/// ```
/// use config::MeshConfig;
/// let config = MeshConfig::default();
/// assert!(config.default_slices >= 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshConfig {
    /// Slice count used by round primitives when the caller has no preference.
    pub default_slices: u32,
    /// Upper bound on subdivision passes accepted by the factory.
    pub max_subdivision_levels: u32,
}

impl MeshConfig {
    /// Builds a configuration, rejecting values that cannot produce a mesh.
    ///
    /// # Examples
    /// ```
    /// use config::MeshConfig;
    /// let cfg = MeshConfig::new(16, 4).expect("valid config");
    /// assert_eq!(cfg.default_slices, 16);
    /// ```
    pub fn new(default_slices: u32, max_subdivision_levels: u32) -> Result<Self, ConfigError> {
        if default_slices < MIN_SLICES {
            return Err(ConfigError::InvalidSlices(default_slices));
        }
        if max_subdivision_levels > MAX_SUBDIVISION_LEVELS {
            return Err(ConfigError::SubdivisionLimitTooHigh(max_subdivision_levels));
        }
        Ok(Self {
            default_slices,
            max_subdivision_levels,
        })
    }
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            default_slices: DEFAULT_SLICES,
            max_subdivision_levels: MAX_SUBDIVISION_LEVELS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the slice count is too small to form a ring.
    #[error("default_slices must be >= {min}: {0}", min = MIN_SLICES)]
    InvalidSlices(u32),
    /// Raised when the subdivision cap exceeds the hard safety limit.
    #[error("max_subdivision_levels must be <= {max}: {0}", max = MAX_SUBDIVISION_LEVELS)]
    SubdivisionLimitTooHigh(u32),
}
