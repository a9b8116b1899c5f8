//! The `Octree` type is a point-bucketing spatial index over a growable set of 3D vertices.
//!
//! The tree covers a fixed axis-aligned bounding box, computed at construction as the tight
//! bounds of the initial vertex set. Every node owns an octant of its parent's box. Leaf nodes
//! store vertex indices; branch nodes store exactly 8 children. A leaf that collects more than
//! `max_vertices_per_node` indices is split, distributing its indices among its octants, so
//! dense regions subdivide deeply while empty regions stay shallow.
//!
//! Vertices are never stored in the nodes themselves. Nodes hold `u32` indices into the tree's
//! vertex array, so the same vertex data can back triangle lists or other index-based mesh
//! attributes without copying.
//!
//! # Use Cases
//!
//! The primary use case is vertex welding. [`Octree::merge_vertices`] produces an index
//! remapping that collapses vertices lying within a distance tolerance of each other, e.g. to
//! stitch the seams of a scanned or procedurally generated triangle mesh.
//!
//! The tree is also useful on its own as a neighborhood index. [`Octree::search`] answers "which
//! vertices lie within `radius` of this position" without scanning the whole set, and
//! [`Octree::add_vertex`] keeps the index current while points stream in.
//!
//! ```
//! use vertex_weld_octree::prelude::*;
//!
//! let vertices = vec![
//!     Point3f([0.0, 0.0, 0.0]),
//!     Point3f([0.00005, 0.0, 0.0]),
//!     Point3f([5.0, 5.0, 5.0]),
//! ];
//! let mut octree = Octree::from_vertices(vertices, 8).unwrap();
//!
//! // All vertices within 1.0 of the origin.
//! assert_eq!(octree.search(Point3f::ZERO, 1.0), vec![0, 1]);
//!
//! // Vertices 0 and 1 are near-coincident, so they weld to one representative.
//! assert_eq!(octree.merge_vertices(1e-4), Ok(vec![0, 0, 2]));
//!
//! // The bounds are fixed at construction, but vertices can still be added inside them.
//! assert_eq!(octree.add_vertex(Point3f([2.5, 2.5, 2.5])), Ok(3));
//! ```
//!
//! # Traversal
//!
//! The octree supports two modes of traversal. One is using the visitor pattern via
//! [`OctreeVisitor`], which walks the tree in pre-order and lets the visitor prune subtrees with
//! [`VisitStatus`]. This is how you would feed a wireframe of the node boxes to a debug
//! renderer:
//!
//! ```
//! use vertex_weld_octree::prelude::*;
//!
//! let octree = Octree::from_vertices_with_default_capacity(vec![Point3f::ZERO]);
//!
//! let mut boxes = Vec::new();
//! octree.visit_all_nodes_in_preorder(&mut |node: &Node| {
//!     boxes.push(node.aabb());
//!
//!     VisitStatus::Continue
//! });
//! assert_eq!(boxes, vec![octree.bounds()]);
//! ```
//!
//! The other form of traversal is "node-based," which is more manual but also more flexible. See
//! the [`Octree::root`] and [`Node`] documentation for details.

use crate::{Result, WeldError};

use vertex_weld_core::prelude::*;

/// The leaf capacity used by [`Octree::from_vertices_with_default_capacity`].
pub const DEFAULT_MAX_VERTICES_PER_NODE: usize = 8;

/// A point-bucketing octree. See the [module docs](self) for details.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Octree {
    vertices: Vec<Point3f>,
    root: Node,
    max_vertices_per_node: usize,
}

impl Octree {
    /// Constructs an `Octree` over `vertices`, splitting leaves until every leaf holds at most
    /// `max_vertices_per_node` indices (where possible; see [`Octree::add_vertex`] for the
    /// exception).
    ///
    /// The tree's bounds are the tight bounding box of `vertices`. An empty vertex set is
    /// allowed and produces a zero-size box at the origin.
    pub fn from_vertices(vertices: Vec<Point3f>, max_vertices_per_node: usize) -> Result<Self> {
        if max_vertices_per_node == 0 {
            return Err(WeldError::InvalidCapacity);
        }

        Ok(Self::build(vertices, max_vertices_per_node))
    }

    /// Same as [`Octree::from_vertices`], with a leaf capacity of
    /// [`DEFAULT_MAX_VERTICES_PER_NODE`].
    pub fn from_vertices_with_default_capacity(vertices: Vec<Point3f>) -> Self {
        Self::build(vertices, DEFAULT_MAX_VERTICES_PER_NODE)
    }

    /// Constructs an `Octree` from a flat buffer of `[x, y, z]` position triples, as found in
    /// mesh position attributes. The buffer length must be a multiple of 3.
    pub fn from_position_buffer(positions: &[f32], max_vertices_per_node: usize) -> Result<Self> {
        if positions.len() % 3 != 0 {
            return Err(WeldError::InvalidPositionBuffer(positions.len()));
        }

        // The length was already checked, so the cast cannot have a remainder.
        let vertices = bytemuck::cast_slice(positions).to_vec();

        Self::from_vertices(vertices, max_vertices_per_node)
    }

    fn build(vertices: Vec<Point3f>, max_vertices_per_node: usize) -> Self {
        // Constrained by u32 vertex indices.
        assert!(vertices.len() <= u32::MAX as usize);

        let aabb = bounding_aabb(vertices.iter().copied())
            .unwrap_or_else(|| Aabb3::from_min_and_max(Point3f::ZERO, Point3f::ZERO));

        let mut root = Node {
            aabb,
            body: NodeBody::Leaf {
                indices: (0..vertices.len() as u32).collect(),
            },
        };
        root.split_to_capacity(&vertices, max_vertices_per_node);

        let tree = Self {
            vertices,
            root,
            max_vertices_per_node,
        };

        #[cfg(feature = "tracing")]
        {
            let mut num_leaves = 0;
            tree.visit_all_nodes_in_preorder(&mut |node: &Node| {
                if node.is_leaf() {
                    num_leaves += 1;
                }

                VisitStatus::Continue
            });
            tracing::debug!(
                num_vertices = tree.vertices.len(),
                num_leaves,
                max_vertices_per_node,
                "built octree"
            );
        }

        tree
    }

    /// The number of vertices indexed by the tree.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertices, in insertion order. Indices returned by queries point into this slice.
    #[inline]
    pub fn vertices(&self) -> &[Point3f] {
        &self.vertices
    }

    /// The vertex with the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> Point3f {
        self.vertices[index as usize]
    }

    /// The fixed bounding box covered by the tree.
    #[inline]
    pub fn bounds(&self) -> Aabb3 {
        self.root.aabb
    }

    /// The leaf capacity the tree was built with.
    #[inline]
    pub fn max_vertices_per_node(&self) -> usize {
        self.max_vertices_per_node
    }

    /// The root `Node`, for manual traversal.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns the indices of all vertices within `radius` of `center`, by depth-first
    /// traversal of the nodes whose boxes intersect the query sphere.
    ///
    /// The order of the returned indices reflects the traversal, so it is stable for a given
    /// tree but otherwise unspecified.
    pub fn search(&self, center: Point3f, radius: f32) -> Vec<u32> {
        self.search_sphere(Sphere3::new(center, radius))
    }

    /// Same as [`Octree::search`], with the query given as a [`Sphere3`].
    pub fn search_sphere(&self, sphere: Sphere3) -> Vec<u32> {
        let mut results = Vec::new();
        self.search_sphere_into(sphere, &mut results);

        results
    }

    /// Same as [`Octree::search_sphere`], but clears and fills `results` instead of allocating.
    /// Useful when issuing many queries in a loop.
    pub fn search_sphere_into(&self, sphere: Sphere3, results: &mut Vec<u32>) {
        results.clear();

        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if !node.aabb.intersects_sphere(sphere) {
                continue;
            }

            match &node.body {
                NodeBody::Branch { children } => stack.extend(children.iter()),
                NodeBody::Leaf { indices } => {
                    for &index in indices.iter() {
                        if sphere.contains_point(self.vertices[index as usize]) {
                            results.push(index);
                        }
                    }
                }
            }
        }
    }

    /// Appends `vertex` to the vertex set and inserts its index into the leaf whose octant
    /// contains it, splitting that leaf if it overflows. Returns the new vertex's index.
    ///
    /// The tree's bounds do not grow, so a vertex outside [`Octree::bounds`] is rejected with
    /// [`WeldError::OutOfBounds`] and the tree is left unchanged.
    ///
    /// More than `max_vertices_per_node` coincident (or nearly coincident) vertices cannot be
    /// separated by splitting, so in that case the containing leaf is left over capacity rather
    /// than splitting without progress.
    pub fn add_vertex(&mut self, vertex: Point3f) -> Result<u32> {
        let bounds = self.root.aabb;
        if !bounds.contains_point(vertex) {
            return Err(WeldError::OutOfBounds { vertex, bounds });
        }

        // Constrained by u32 vertex indices.
        assert!(self.vertices.len() < u32::MAX as usize);

        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);

        let mut node = &mut self.root;
        while !node.is_leaf() {
            let child_index = node.aabb.octant_index(vertex);
            node = match &mut node.body {
                NodeBody::Branch { children } => &mut children[child_index],
                // Ruled out by the loop condition.
                NodeBody::Leaf { .. } => unreachable!(),
            };
        }
        if let NodeBody::Leaf { indices } = &mut node.body {
            indices.push(index);
        }

        if node.indices().len() > self.max_vertices_per_node {
            #[cfg(feature = "tracing")]
            tracing::trace!(vertex_index = index, "leaf over capacity after insert, splitting");

            node.split_to_capacity(&self.vertices, self.max_vertices_per_node);
        }

        Ok(index)
    }

    /// Visit every node in the octree. This is a pre-order traversal.
    pub fn visit_all_nodes_in_preorder(&self, visitor: &mut impl OctreeVisitor) -> VisitStatus {
        self.root.visit_self_and_descendants_in_preorder(visitor)
    }
}

/// A single octree node, covering one octant of its parent's box.
///
/// Branch nodes have exactly 8 children and store no indices. Leaf nodes store the indices of
/// the vertices inside their box, and may be empty.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Node {
    aabb: Aabb3,
    body: NodeBody,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
enum NodeBody {
    Leaf { indices: Vec<u32> },
    Branch { children: Box<[Node; 8]> },
}

impl Node {
    fn new_leaf(aabb: Aabb3) -> Self {
        Self {
            aabb,
            body: NodeBody::Leaf {
                indices: Vec::new(),
            },
        }
    }

    /// The box covered by this node.
    #[inline]
    pub fn aabb(&self) -> Aabb3 {
        self.aabb
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(&self.body, NodeBody::Leaf { .. })
    }

    /// The 8 children of a branch node, in [`Aabb3::octant_index`] order. `None` for leaves.
    #[inline]
    pub fn children(&self) -> Option<&[Node; 8]> {
        match &self.body {
            NodeBody::Leaf { .. } => None,
            NodeBody::Branch { children } => Some(&**children),
        }
    }

    /// The indices stored directly in this node. Branch nodes store none.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        match &self.body {
            NodeBody::Leaf { indices } => indices,
            NodeBody::Branch { .. } => &[],
        }
    }

    /// Visit `self` and all nodes descending from `self`. This is a pre-order traversal.
    pub fn visit_self_and_descendants_in_preorder(
        &self,
        visitor: &mut impl OctreeVisitor,
    ) -> VisitStatus {
        let status = visitor.visit_node(self);
        if status != VisitStatus::Continue {
            return status;
        }

        if let NodeBody::Branch { children } = &self.body {
            for child in children.iter() {
                match child.visit_self_and_descendants_in_preorder(visitor) {
                    VisitStatus::Continue => (),
                    VisitStatus::ExitEarly => return VisitStatus::ExitEarly,
                    VisitStatus::Stop => continue,
                }
            }
        }

        VisitStatus::Continue
    }

    /// Splits `self` and re-splits the resulting children until every reachable leaf holds at
    /// most `max_vertices_per_node` indices or splitting stops making progress.
    fn split_to_capacity(&mut self, vertices: &[Point3f], max_vertices_per_node: usize) {
        let mut worklist: Vec<&mut Node> = vec![self];
        while let Some(node) = worklist.pop() {
            if node.indices().len() <= max_vertices_per_node {
                continue;
            }

            if node.split_leaf(vertices) {
                if let NodeBody::Branch { children } = &mut node.body {
                    worklist.extend(children.iter_mut());
                }
            }
        }
    }

    /// Replaces this leaf's index list with 8 child leaves, distributing each index to the
    /// octant containing its vertex. Does nothing to branches.
    ///
    /// Returns `false` without splitting when every index lands in the same child, which
    /// happens when the indexed vertices are coincident or closer together than the box's
    /// floating-point resolution. No amount of splitting can separate such vertices, so the
    /// leaf stays over capacity instead of growing a chain of single-child branches.
    fn split_leaf(&mut self, vertices: &[Point3f]) -> bool {
        let indices = match &mut self.body {
            NodeBody::Leaf { indices } => std::mem::take(indices),
            NodeBody::Branch { .. } => return false,
        };
        let num_indices = indices.len();

        let mut children = Box::new(self.aabb.split_at_center().map(Node::new_leaf));
        for index in indices.into_iter() {
            let child = &mut children[self.aabb.octant_index(vertices[index as usize])];
            // New children are always leaves.
            if let NodeBody::Leaf { indices } = &mut child.body {
                indices.push(index);
            }
        }

        for child in children.iter_mut() {
            if child.indices().len() == num_indices {
                // The split made no progress. Take the indices back and stay a leaf.
                if let NodeBody::Leaf { indices } = &mut child.body {
                    self.body = NodeBody::Leaf {
                        indices: std::mem::take(indices),
                    };
                }

                return false;
            }
        }

        self.body = NodeBody::Branch { children };

        true
    }
}

pub trait OctreeVisitor {
    /// Visit a node of the octree.
    fn visit_node(&mut self, node: &Node) -> VisitStatus;
}

impl<F> OctreeVisitor for F
where
    F: FnMut(&Node) -> VisitStatus,
{
    #[inline]
    fn visit_node(&mut self, node: &Node) -> VisitStatus {
        (self)(node)
    }
}

#[derive(Eq, PartialEq)]
pub enum VisitStatus {
    /// Continue traversing this branch.
    Continue,
    /// Stop traversing this branch.
    Stop,
    /// Stop traversing the entire tree. No further nodes will be visited.
    ExitEarly,
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn small_vertex_set_stays_in_a_single_leaf() {
        let vertices = vec![
            Point3f([0.0, 0.0, 0.0]),
            Point3f([1.0, 2.0, 3.0]),
            Point3f([4.0, 4.0, 4.0]),
        ];
        let octree = Octree::from_vertices(vertices, 8).unwrap();

        assert!(octree.root().is_leaf());
        assert_eq!(octree.root().indices(), &[0, 1, 2]);
        assert_eq!(
            octree.bounds(),
            Aabb3::from_min_and_max(Point3f::ZERO, Point3f::fill(4.0))
        );
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert_eq!(
            Octree::from_vertices(vec![Point3f::ZERO], 0),
            Err(WeldError::InvalidCapacity)
        );
    }

    #[test]
    fn empty_vertex_set_is_a_zero_size_tree() {
        let octree = Octree::from_vertices_with_default_capacity(Vec::new());

        assert!(octree.is_empty());
        assert!(octree.root().is_leaf());
        assert_eq!(
            octree.bounds(),
            Aabb3::from_min_and_max(Point3f::ZERO, Point3f::ZERO)
        );
        assert!(octree.search(Point3f::ZERO, 100.0).is_empty());
    }

    #[test]
    fn leaves_partition_the_indices() {
        let vertices = scattered_vertices(100, 10.0);
        let octree = Octree::from_vertices(vertices, 8).unwrap();

        // 100 vertices cannot fit in one leaf of capacity 8.
        assert!(!octree.root().is_leaf());

        let mut seen = HashSet::new();
        let mut num_indexed = 0;
        octree.visit_all_nodes_in_preorder(&mut |node: &Node| {
            if node.is_leaf() {
                assert!(node.indices().len() <= octree.max_vertices_per_node());
            } else {
                assert!(node.indices().is_empty());
                assert_eq!(node.children().unwrap().len(), 8);
            }
            for &index in node.indices() {
                assert!(node.aabb().contains_point(octree.vertex(index)));
                assert!(seen.insert(index));
                num_indexed += 1;
            }

            VisitStatus::Continue
        });

        assert_eq!(num_indexed, octree.num_vertices());
    }

    #[test]
    fn children_tile_their_parent() {
        let vertices = scattered_vertices(100, 10.0);
        let octree = Octree::from_vertices(vertices, 8).unwrap();

        // Manual node traversal.
        let mut stack = vec![octree.root()];
        while let Some(node) = stack.pop() {
            if let Some(children) = node.children() {
                let octants = node.aabb().split_at_center();
                for (child, octant) in children.iter().zip(octants.iter()) {
                    assert_eq!(child.aabb(), *octant);
                }
                stack.extend(children.iter());
            }
        }
    }

    #[test]
    fn search_finds_every_vertex_at_zero_radius() {
        let vertices = scattered_vertices(100, 10.0);
        let octree = Octree::from_vertices(vertices.clone(), 8).unwrap();

        for (index, &vertex) in vertices.iter().enumerate() {
            let found = octree.search(vertex, 0.0);
            assert!(found.contains(&(index as u32)));
        }
    }

    #[test]
    fn search_agrees_with_linear_scan() {
        let vertices = scattered_vertices(200, 10.0);
        let octree = Octree::from_vertices(vertices.clone(), 8).unwrap();

        let sphere = Sphere3::new(Point3f([5.0, 5.0, 5.0]), 3.0);

        let mut found = octree.search_sphere(sphere);
        found.sort();

        let expected: Vec<u32> = vertices
            .iter()
            .enumerate()
            .filter(|(_, &v)| sphere.contains_point(v))
            .map(|(i, _)| i as u32)
            .collect();

        assert!(!expected.is_empty());
        assert_eq!(found, expected);
    }

    #[test]
    fn search_is_independent_of_sibling_visit_order() {
        let vertices = scattered_vertices(200, 10.0);
        let octree = Octree::from_vertices(vertices, 8).unwrap();

        let sphere = Sphere3::new(Point3f([3.0, 7.0, 2.0]), 2.5);
        let mut found = octree.search_sphere(sphere);

        // The same query as a manual node traversal, visiting siblings in reverse order.
        let mut found_reversed = Vec::new();
        let mut stack = vec![octree.root()];
        while let Some(node) = stack.pop() {
            if !node.aabb().intersects_sphere(sphere) {
                continue;
            }

            if let Some(children) = node.children() {
                stack.extend(children.iter().rev());
            } else {
                for &index in node.indices() {
                    if sphere.contains_point(octree.vertex(index)) {
                        found_reversed.push(index);
                    }
                }
            }
        }

        assert!(!found.is_empty());
        found.sort();
        found_reversed.sort();
        assert_eq!(found, found_reversed);
    }

    #[test]
    fn search_outside_the_bounds_finds_nothing() {
        let vertices = scattered_vertices(100, 10.0);
        let octree = Octree::from_vertices(vertices, 8).unwrap();

        assert!(octree.search(Point3f::fill(100.0), 5.0).is_empty());
    }

    #[test]
    fn boundary_vertices_are_always_found() {
        // Vertices on the root box faces, including the maximum corner, must stay covered by
        // some leaf after splitting.
        let mut vertices = vec![Point3f::ZERO, Point3f::fill(8.0)];
        for i in 1..20 {
            let c = i as f32 * 0.4;
            vertices.push(Point3f([c, 0.0, 0.0]));
            vertices.push(Point3f([8.0, c, 8.0]));
            vertices.push(Point3f([c, 8.0, c]));
        }
        let octree = Octree::from_vertices(vertices.clone(), 4).unwrap();

        for (index, &vertex) in vertices.iter().enumerate() {
            let found = octree.search(vertex, 0.0);
            assert!(found.contains(&(index as u32)), "lost vertex {}", index);
        }
    }

    #[test]
    fn add_vertex_returns_the_new_index_and_is_searchable() {
        let vertices = scattered_vertices(20, 10.0);
        let mut octree = Octree::from_vertices(vertices, 8).unwrap();

        let index = octree.add_vertex(Point3f([1.5, 2.5, 3.5])).unwrap();

        assert_eq!(index, 20);
        assert_eq!(octree.num_vertices(), 21);
        assert!(octree.search(Point3f([1.5, 2.5, 3.5]), 0.0).contains(&index));
    }

    #[test]
    fn add_vertex_splits_overflowing_leaves() {
        let vertices = vec![Point3f([0.0, 0.0, 0.0]), Point3f([8.0, 8.0, 8.0])];
        let mut octree = Octree::from_vertices(vertices, 2).unwrap();

        assert!(octree.root().is_leaf());

        // The third vertex overflows the root leaf, splitting it. Vertices 0 and 2 land in the
        // lower octant, vertex 1 in the upper.
        octree.add_vertex(Point3f([1.0, 1.0, 1.0])).unwrap();
        assert!(!octree.root().is_leaf());
        assert_eq!(max_leaf_len(&octree), 2);

        // The fourth vertex overflows the lower octant's leaf in turn.
        octree.add_vertex(Point3f([2.0, 2.0, 2.0])).unwrap();
        assert_eq!(max_leaf_len(&octree), 2);

        for index in 0..octree.num_vertices() as u32 {
            assert!(octree.search(octree.vertex(index), 0.0).contains(&index));
        }
    }

    #[test]
    fn search_agrees_with_linear_scan_after_many_inserts() {
        // Start from the bounds corners alone, then grow the tree one vertex at a time.
        let mut octree =
            Octree::from_vertices(vec![Point3f::ZERO, Point3f::fill(10.0)], 4).unwrap();
        for vertex in scattered_vertices(200, 10.0) {
            octree.add_vertex(vertex).unwrap();
        }

        assert_eq!(octree.num_vertices(), 202);
        assert!(!octree.root().is_leaf());

        let sphere = Sphere3::new(Point3f([5.0, 5.0, 5.0]), 3.0);
        let mut found = octree.search_sphere(sphere);
        found.sort();

        let expected: Vec<u32> = octree
            .vertices()
            .iter()
            .enumerate()
            .filter(|(_, &v)| sphere.contains_point(v))
            .map(|(i, _)| i as u32)
            .collect();

        assert!(!expected.is_empty());
        assert_eq!(found, expected);
    }

    #[test]
    fn add_vertex_outside_the_bounds_is_rejected() {
        let vertices = vec![Point3f::ZERO, Point3f::fill(4.0)];
        let mut octree = Octree::from_vertices(vertices, 8).unwrap();
        let before = octree.clone();

        let result = octree.add_vertex(Point3f([5.0, 1.0, 1.0]));

        assert_eq!(
            result,
            Err(WeldError::OutOfBounds {
                vertex: Point3f([5.0, 1.0, 1.0]),
                bounds: before.bounds()
            })
        );
        // The rejected vertex must not be stored.
        assert_eq!(octree, before);
    }

    #[test]
    fn coincident_vertices_beyond_capacity_stay_in_one_leaf() {
        let vertices = vec![Point3f::fill(1.0); 10];
        let mut octree = Octree::from_vertices(vertices, 4).unwrap();

        // Splitting cannot separate coincident vertices, so they share an oversized leaf.
        assert!(octree.root().is_leaf());
        assert_eq!(octree.search(Point3f::fill(1.0), 0.0).len(), 10);

        // Every insert re-attempts the split, but none of them commits one.
        for _ in 0..10 {
            octree.add_vertex(Point3f::fill(1.0)).unwrap();
        }
        assert!(octree.root().is_leaf());
        assert_eq!(octree.search(Point3f::fill(1.0), 0.0).len(), 20);
    }

    #[test]
    fn from_position_buffer_matches_from_vertices() {
        let positions = [0.0f32, 0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 4.0, 4.0];
        let from_buffer = Octree::from_position_buffer(&positions, 8).unwrap();

        let vertices = vec![
            Point3f([0.0, 0.0, 0.0]),
            Point3f([1.0, 2.0, 3.0]),
            Point3f([4.0, 4.0, 4.0]),
        ];
        let from_vertices = Octree::from_vertices(vertices, 8).unwrap();

        assert_eq!(from_buffer, from_vertices);
    }

    #[test]
    fn truncated_position_buffers_are_rejected() {
        let positions = [0.0f32, 1.0, 2.0, 3.0];

        assert_eq!(
            Octree::from_position_buffer(&positions, 8),
            Err(WeldError::InvalidPositionBuffer(4))
        );
    }

    #[test]
    fn visitor_can_prune_and_exit() {
        let vertices = scattered_vertices(100, 10.0);
        let octree = Octree::from_vertices(vertices, 8).unwrap();

        // The root is visited first.
        let mut first_aabb = None;
        octree.visit_all_nodes_in_preorder(&mut |node: &Node| {
            first_aabb.get_or_insert(node.aabb());

            VisitStatus::Continue
        });
        assert_eq!(first_aabb, Some(octree.bounds()));

        // Stopping at the root's children visits exactly the root and its 8 children.
        let mut num_visited = 0;
        octree.visit_all_nodes_in_preorder(&mut |node: &Node| {
            num_visited += 1;
            if node.aabb() == octree.bounds() {
                VisitStatus::Continue
            } else {
                VisitStatus::Stop
            }
        });
        assert_eq!(num_visited, 9);

        // Exiting early visits only the root.
        let mut num_visited = 0;
        octree.visit_all_nodes_in_preorder(&mut |_: &Node| {
            num_visited += 1;

            VisitStatus::ExitEarly
        });
        assert_eq!(num_visited, 1);
    }

    fn scattered_vertices(num_vertices: usize, cube_size: f32) -> Vec<Point3f> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0xB0C5);

        (0..num_vertices)
            .map(|_| {
                Point3f([
                    rng.gen_range(0.0..cube_size),
                    rng.gen_range(0.0..cube_size),
                    rng.gen_range(0.0..cube_size),
                ])
            })
            .collect()
    }

    fn max_leaf_len(octree: &Octree) -> usize {
        let mut max_len = 0;
        octree.visit_all_nodes_in_preorder(&mut |node: &Node| {
            max_len = max_len.max(node.indices().len());

            VisitStatus::Continue
        });

        max_len
    }
}
