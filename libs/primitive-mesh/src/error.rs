//! # Mesh Errors
//!
//! Error types for primitive construction and subdivision.
//!
//! Every operation either returns a complete mesh or fails outright with one
//! of these variants; there are no partial results.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A shape parameter is outside its accepted range
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// A face is not a triangle where a triangle mesh is required
    #[error("Face {face} has {arity} vertices, expected 3")]
    UnsupportedFaceArity { face: usize, arity: usize },

    /// A face references a vertex that does not exist
    #[error("Face {face} references vertex {index} but mesh has {vertex_count} vertices")]
    InvalidIndex {
        face: usize,
        index: u32,
        vertex_count: usize,
    },

    /// A face has fewer than 3 vertices or repeats a vertex
    #[error("Face {face} is degenerate")]
    DegenerateFace { face: usize },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Too many faces
    #[error("Too many faces: {count} (max: {max})")]
    TooManyFaces { count: usize, max: usize },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates an unsupported face arity error.
    pub fn unsupported_arity(face: usize, arity: usize) -> Self {
        Self::UnsupportedFaceArity { face, arity }
    }
}
