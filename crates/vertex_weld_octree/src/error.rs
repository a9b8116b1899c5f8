use vertex_weld_core::{Aabb3, Point3f};

use thiserror::Error;

/// Errors returned by octree construction, insertion, and welding.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum WeldError {
    /// A vertex cannot be inserted because it lies outside the tree's fixed bounds.
    #[error("vertex {vertex:?} lies outside the octree bounds {bounds:?}")]
    OutOfBounds { vertex: Point3f, bounds: Aabb3 },

    #[error("max_vertices_per_node must be at least 1")]
    InvalidCapacity,

    /// Weld tolerances must be finite and non-negative. Zero is allowed and merges only exact
    /// duplicates.
    #[error("invalid weld tolerance {0}, must be finite and non-negative")]
    InvalidTolerance(f32),

    /// A flat position buffer must contain a whole number of `[x, y, z]` triples.
    #[error("position buffer length {0} is not a multiple of 3")]
    InvalidPositionBuffer(usize),
}

/// Result type for octree operations.
pub type Result<T> = std::result::Result<T, WeldError>;
