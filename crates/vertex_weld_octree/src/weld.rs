//! Tolerance-based vertex welding, built on sphere range queries. See
//! `Octree::merge_vertices`.

use crate::{Octree, Result, WeldError};

use vertex_weld_core::Sphere3;

// Marks vertices whose representative has not been decided yet. Vertex indices never reach
// u32::MAX (checked at construction and insertion).
const UNRESOLVED: u32 = u32::MAX;

impl Octree {
    /// Returns a remapping table that welds together all vertices lying within `tolerance` of
    /// each other. Entry `i` of the table holds the index that vertex `i` should be replaced
    /// with, which is `i` itself for vertices that did not merge into another one. Applying
    /// the table to a mesh's triangle indices stitches coincident seams without moving any
    /// vertex.
    ///
    /// Welding is a single greedy pass in ascending index order, not a transitive closure.
    /// Each still-unmerged vertex claims every vertex inside its tolerance sphere, and the
    /// smallest index in the sphere becomes the representative of all of them. A chain of
    /// vertices where only adjacent pairs are within tolerance therefore ends up in more than
    /// one group, and a later claim can take a vertex back from an earlier group; how such
    /// chains resolve depends only on the vertex order. In exchange, the pass costs one range
    /// query per unmerged vertex.
    ///
    /// The table always covers every vertex. `tolerance` must be finite and non-negative; a
    /// zero tolerance merges only exactly coincident vertices.
    ///
    /// ```
    /// use vertex_weld_octree::prelude::*;
    ///
    /// let octree = Octree::from_vertices_with_default_capacity(vec![
    ///     Point3f([1.0, 1.0, 1.0]),
    ///     Point3f([2.0, 2.0, 2.0]),
    ///     Point3f([1.0, 1.0, 1.0]),
    /// ]);
    ///
    /// assert_eq!(octree.merge_vertices(0.0), Ok(vec![0, 1, 0]));
    /// ```
    pub fn merge_vertices(&self, tolerance: f32) -> Result<Vec<u32>> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(WeldError::InvalidTolerance(tolerance));
        }

        let num_vertices = self.num_vertices();
        let mut resolved = vec![UNRESOLVED; num_vertices];

        let mut found = Vec::new();
        for index in 0..num_vertices as u32 {
            if resolved[index as usize] != UNRESOLVED {
                continue;
            }

            self.search_sphere_into(Sphere3::new(self.vertex(index), tolerance), &mut found);

            // The query sphere is centered on vertex `index`, so `found` contains at least
            // `index` itself.
            let new_index = found.iter().copied().min().unwrap_or(index);
            for &other in found.iter() {
                resolved[other as usize] = new_index;
            }
        }

        debug_assert!(resolved.iter().all(|&new_index| new_index != UNRESOLVED));

        #[cfg(feature = "tracing")]
        {
            let num_merged = resolved
                .iter()
                .enumerate()
                .filter(|&(index, &new_index)| new_index != index as u32)
                .count();
            tracing::debug!(num_vertices, num_merged, ?tolerance, "merged vertices");
        }

        Ok(resolved)
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
