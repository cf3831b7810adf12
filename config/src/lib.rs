//! # Config Crate
//!
//! Centralized configuration for the primitive mesh generator.
//! Every shape dimension, tessellation default and safety limit used by
//! `primitive-mesh` is defined here so the geometry code stays free of
//! scattered literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SLICES, MIN_SLICES};
//! use config::MeshConfig;
//!
//! assert!(DEFAULT_SLICES >= MIN_SLICES);
//!
//! let cfg = MeshConfig::default();
//! assert_eq!(cfg.default_slices, DEFAULT_SLICES);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Snapshots**: `MeshConfig` can only be built from sane values

pub mod constants;
mod mesh_config;

pub use mesh_config::{ConfigError, MeshConfig};

#[cfg(test)]
mod tests;
