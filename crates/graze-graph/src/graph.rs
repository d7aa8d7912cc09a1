//! The [`SurfaceGraph`] container and its bounds-safe accessors.

use graze_core::{CellStatus, NodeId};
use smallvec::SmallVec;

use crate::builder::SurfaceGraphBuilder;

/// Inline capacity for adjacency lists.
///
/// Six covers triangulated sphere meshes (most vertices have degree 6)
/// without heap allocation; higher-degree nodes spill transparently.
pub const MAX_DEGREE_INLINE: usize = 6;

/// One vertex of the surface graph.
pub(crate) struct Node<P> {
    pub(crate) status: CellStatus,
    pub(crate) blocked: bool,
    pub(crate) neighbors: SmallVec<[NodeId; MAX_DEGREE_INLINE]>,
    pub(crate) payload: P,
}

/// The fixed node set of a graph embedded on a closed surface.
///
/// Each node carries a tri-state [`CellStatus`], an obstacle flag, an
/// adjacency list fixed at construction, and an opaque payload `P`
/// (position or visual data — never inspected here or by the engine).
///
/// # Range policy
///
/// Accessors never panic on an out-of-range [`NodeId`]: reads return
/// inert defaults (`Unclaimed`, `false`, an empty neighbour list) and
/// writes are dropped. Construction already drops out-of-range
/// adjacency and obstacle references, so in-range traversal never
/// observes a dangling edge.
///
/// # Adjacency direction
///
/// Adjacency is stored exactly as given and may be asymmetric; callers
/// that want guaranteed mutual reachability opt in to
/// [`SurfaceGraphBuilder::symmetric_edges`] at load time.
pub struct SurfaceGraph<P = ()> {
    pub(crate) nodes: Vec<Node<P>>,
}

impl<P: Default> SurfaceGraph<P> {
    /// Start building a graph with `node_count` nodes, all unclaimed,
    /// unblocked, and without edges.
    pub fn builder(node_count: u32) -> SurfaceGraphBuilder<P> {
        SurfaceGraphBuilder::new(node_count)
    }
}

impl<P> SurfaceGraph<P> {
    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if `node` names a node of this graph.
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.nodes.len()
    }

    /// The neighbours of `node`, in construction order.
    ///
    /// Returned by value so callers may mutate the graph while walking
    /// the list. Out-of-range nodes have no neighbours.
    pub fn neighbours(&self, node: NodeId) -> SmallVec<[NodeId; MAX_DEGREE_INLINE]> {
        match self.nodes.get(node.index()) {
            Some(n) => n.neighbors.clone(),
            None => SmallVec::new(),
        }
    }

    /// Current status of `node` (`Unclaimed` if out of range).
    pub fn status(&self, node: NodeId) -> CellStatus {
        self.nodes
            .get(node.index())
            .map(|n| n.status)
            .unwrap_or_default()
    }

    /// Set the status of `node`. Dropped if out of range.
    pub fn set_status(&mut self, node: NodeId, status: CellStatus) {
        if let Some(n) = self.nodes.get_mut(node.index()) {
            n.status = status;
        }
    }

    /// Returns `true` if an obstacle occupies `node` (`false` if out
    /// of range).
    pub fn is_blocked(&self, node: NodeId) -> bool {
        self.nodes
            .get(node.index())
            .is_some_and(|n| n.blocked)
    }

    /// Place an obstacle on `node`. Dropped if out of range.
    ///
    /// Obstacles are placed at setup and never cleared by the engine.
    pub fn mark_blocked(&mut self, node: NodeId) {
        if let Some(n) = self.nodes.get_mut(node.index()) {
            n.blocked = true;
        }
    }

    /// The opaque payload of `node`, if in range.
    pub fn payload(&self, node: NodeId) -> Option<&P> {
        self.nodes.get(node.index()).map(|n| &n.payload)
    }

    /// Every node's current status, in node order.
    ///
    /// The reporting layer uses this to produce full trail/territory
    /// snapshots after a step.
    pub fn statuses(&self) -> impl Iterator<Item = (NodeId, CellStatus)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graze_core::AgentId;
    use proptest::prelude::*;

    fn n(i: u32) -> NodeId {
        NodeId(i)
    }

    fn two_node_graph() -> SurfaceGraph {
        SurfaceGraph::<()>::builder(2)
            .neighbors(0, [1])
            .neighbors(1, [0])
            .build()
    }

    #[test]
    fn status_roundtrip() {
        let mut g = two_node_graph();
        assert_eq!(g.status(n(0)), CellStatus::Unclaimed);
        g.set_status(n(0), CellStatus::Trail(AgentId(0)));
        assert_eq!(g.status(n(0)), CellStatus::Trail(AgentId(0)));
        g.set_status(n(0), CellStatus::Territory);
        assert_eq!(g.status(n(0)), CellStatus::Territory);
        // Other nodes untouched.
        assert_eq!(g.status(n(1)), CellStatus::Unclaimed);
    }

    #[test]
    fn out_of_range_reads_are_inert() {
        let g = two_node_graph();
        assert!(!g.contains(n(2)));
        assert_eq!(g.status(n(2)), CellStatus::Unclaimed);
        assert!(!g.is_blocked(n(2)));
        assert!(g.neighbours(n(2)).is_empty());
        assert!(g.payload(n(2)).is_none());
    }

    #[test]
    fn out_of_range_writes_are_dropped() {
        let mut g = two_node_graph();
        g.set_status(n(5), CellStatus::Territory);
        g.mark_blocked(n(5));
        assert_eq!(g.node_count(), 2);
        assert!(g.statuses().all(|(_, s)| s == CellStatus::Unclaimed));
    }

    #[test]
    fn mark_blocked_is_sticky() {
        let mut g = two_node_graph();
        g.mark_blocked(n(1));
        assert!(g.is_blocked(n(1)));
        assert!(!g.is_blocked(n(0)));
    }

    #[test]
    fn statuses_enumerates_in_node_order() {
        let mut g = two_node_graph();
        g.set_status(n(1), CellStatus::Territory);
        let snap: Vec<_> = g.statuses().collect();
        assert_eq!(
            snap,
            vec![
                (n(0), CellStatus::Unclaimed),
                (n(1), CellStatus::Territory),
            ]
        );
    }

    proptest! {
        #[test]
        fn neighbours_never_dangle(
            count in 1u32..32,
            edges in prop::collection::vec((0u32..64, 0u32..64), 0..64),
        ) {
            let mut b = SurfaceGraph::<()>::builder(count);
            for (from, to) in &edges {
                b = b.neighbors(*from, [*to]);
            }
            let g = b.build();
            for i in 0..count {
                for nb in g.neighbours(NodeId(i)) {
                    prop_assert!(g.contains(nb));
                }
            }
        }

        #[test]
        fn accessors_never_panic(count in 0u32..16, probe in 0u32..64) {
            let g = SurfaceGraph::<()>::builder(count).build();
            let _ = g.status(NodeId(probe));
            let _ = g.is_blocked(NodeId(probe));
            let _ = g.neighbours(NodeId(probe));
        }
    }
}
