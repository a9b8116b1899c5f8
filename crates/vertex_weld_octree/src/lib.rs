//! A point-bucketing octree over 3D vertex sets, with sphere range queries, incremental
//! insertion, and tolerance-based vertex welding.
//!
//! The main entry points:
//! - [`Octree`]: builds the index and answers range queries
//! - [`Octree::merge_vertices`]: the welding pass, producing an index remapping table
//!
//! See the [`octree`] module docs for the data model and traversal options, and
//! [`Octree::merge_vertices`] for welding semantics.

pub mod octree;

mod error;
mod weld;

pub use crate::octree::{
    Node, Octree, OctreeVisitor, VisitStatus, DEFAULT_MAX_VERTICES_PER_NODE,
};
pub use error::{Result, WeldError};

pub mod prelude {
    pub use crate::{
        Node, Octree, OctreeVisitor, VisitStatus, WeldError, DEFAULT_MAX_VERTICES_PER_NODE,
    };

    pub use vertex_weld_core::prelude::*;
}
