//! Octree-accelerated range queries and vertex welding for 3D point sets, such as mesh
//! position attributes.
//!
//! This library is organized into two crates:
//! - **core**: the geometric primitives, i.e. points, axis-aligned boxes, and spheres
//! - **octree**: the point-bucketing [`Octree`](octree::Octree), its sphere range queries, and
//!   tolerance-based vertex welding
//!
//! To get started, see the [`octree`](octree::octree) module docs.

pub use vertex_weld_core as core;
pub use vertex_weld_octree as octree;

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::octree::prelude::*;
}
