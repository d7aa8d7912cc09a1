//! Construction of [`SurfaceGraph`] from an external graph description.

use graze_core::{CellStatus, NodeId};
use indexmap::IndexSet;
use smallvec::SmallVec;

use crate::graph::{Node, SurfaceGraph, MAX_DEGREE_INLINE};

/// Builder for [`SurfaceGraph`].
///
/// Collects adjacency lists, obstacle placements, and payloads for a
/// fixed node count, then freezes them into a graph.
///
/// # Range policy
///
/// Any reference to a node index `>= node_count` is dropped silently —
/// the built graph is simply missing that edge, obstacle, or payload.
/// Malformed input therefore degrades the graph instead of failing
/// construction.
pub struct SurfaceGraphBuilder<P = ()> {
    node_count: u32,
    adjacency: Vec<SmallVec<[NodeId; MAX_DEGREE_INLINE]>>,
    obstacles: IndexSet<NodeId>,
    payloads: Vec<P>,
    symmetric: bool,
}

impl<P: Default> SurfaceGraphBuilder<P> {
    /// Start a builder for a graph with `node_count` nodes.
    ///
    /// All nodes begin unclaimed, unblocked, edgeless, and with a
    /// default payload.
    pub fn new(node_count: u32) -> Self {
        let count = node_count as usize;
        Self {
            node_count,
            adjacency: vec![SmallVec::new(); count],
            obstacles: IndexSet::new(),
            payloads: (0..count).map(|_| P::default()).collect(),
            symmetric: false,
        }
    }
}

impl<P> SurfaceGraphBuilder<P> {
    /// Supply the neighbour list of `node`, replacing any previously
    /// supplied list.
    ///
    /// Order is preserved; it is the order the engine probes seeds in.
    /// Out-of-range entries (and an out-of-range `node`) are dropped.
    pub fn neighbors(mut self, node: u32, neighbors: impl IntoIterator<Item = u32>) -> Self {
        if node < self.node_count {
            let count = self.node_count;
            self.adjacency[node as usize] = neighbors
                .into_iter()
                .filter(|&i| i < count)
                .map(NodeId)
                .collect();
        }
        self
    }

    /// Place an obstacle ("cow") on `node`. Dropped if out of range;
    /// placing one twice is equivalent to placing it once.
    pub fn obstacle(mut self, node: u32) -> Self {
        if node < self.node_count {
            self.obstacles.insert(NodeId(node));
        }
        self
    }

    /// Attach a payload to `node`. Dropped if out of range.
    pub fn payload(mut self, node: u32, payload: P) -> Self {
        if node < self.node_count {
            self.payloads[node as usize] = payload;
        }
        self
    }

    /// Symmetrize adjacency at build time: for every stored edge
    /// `a -> b`, ensure `b -> a` exists too.
    ///
    /// Off by default — adjacency is otherwise preserved exactly as
    /// given, including deliberately one-way edges. Enabling this is
    /// the safe choice when the input's directionality is accidental.
    pub fn symmetric_edges(mut self, enabled: bool) -> Self {
        self.symmetric = enabled;
        self
    }

    /// Freeze the description into a [`SurfaceGraph`].
    pub fn build(mut self) -> SurfaceGraph<P> {
        if self.symmetric {
            let edges: Vec<(usize, NodeId)> = self
                .adjacency
                .iter()
                .enumerate()
                .flat_map(|(a, nbs)| nbs.iter().map(move |&b| (a, b)))
                .collect();
            for (a, b) in edges {
                let back = NodeId(a as u32);
                let list = &mut self.adjacency[b.index()];
                if !list.contains(&back) {
                    list.push(back);
                }
            }
        }

        let obstacles = self.obstacles;
        let nodes = self
            .adjacency
            .into_iter()
            .zip(self.payloads)
            .enumerate()
            .map(|(i, (neighbors, payload))| Node {
                status: CellStatus::Unclaimed,
                blocked: obstacles.contains(&NodeId(i as u32)),
                neighbors,
                payload,
            })
            .collect();
        SurfaceGraph { nodes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(i: u32) -> NodeId {
        NodeId(i)
    }

    #[test]
    fn out_of_range_neighbors_are_dropped() {
        let g = SurfaceGraph::<()>::builder(3)
            .neighbors(0, [1, 7, 2, 99])
            .build();
        assert_eq!(g.neighbours(n(0)).as_slice(), &[n(1), n(2)]);
    }

    #[test]
    fn out_of_range_node_is_dropped() {
        let g = SurfaceGraph::<()>::builder(2).neighbors(9, [0, 1]).build();
        assert!(g.neighbours(n(0)).is_empty());
        assert!(g.neighbours(n(1)).is_empty());
    }

    #[test]
    fn out_of_range_obstacle_is_dropped() {
        let g = SurfaceGraph::<()>::builder(2).obstacle(5).obstacle(1).build();
        assert!(!g.is_blocked(n(0)));
        assert!(g.is_blocked(n(1)));
    }

    #[test]
    fn neighbor_order_is_preserved() {
        let g = SurfaceGraph::<()>::builder(4).neighbors(0, [3, 1, 2]).build();
        assert_eq!(g.neighbours(n(0)).as_slice(), &[n(3), n(1), n(2)]);
    }

    #[test]
    fn repeated_list_replaces() {
        let g = SurfaceGraph::<()>::builder(3)
            .neighbors(0, [1, 2])
            .neighbors(0, [2])
            .build();
        assert_eq!(g.neighbours(n(0)).as_slice(), &[n(2)]);
    }

    #[test]
    fn symmetric_edges_adds_missing_back_edges() {
        let g = SurfaceGraph::<()>::builder(3)
            .neighbors(0, [1, 2])
            .neighbors(1, [0])
            .symmetric_edges(true)
            .build();
        // 1 -> 0 already present, not duplicated; 2 -> 0 added.
        assert_eq!(g.neighbours(n(1)).as_slice(), &[n(0)]);
        assert_eq!(g.neighbours(n(2)).as_slice(), &[n(0)]);
    }

    #[test]
    fn asymmetric_edges_preserved_by_default() {
        let g = SurfaceGraph::<()>::builder(2).neighbors(0, [1]).build();
        assert_eq!(g.neighbours(n(0)).as_slice(), &[n(1)]);
        assert!(g.neighbours(n(1)).is_empty());
    }

    #[test]
    fn payloads_attach_to_nodes() {
        let g = SurfaceGraph::<[f32; 3]>::builder(2)
            .payload(1, [1.0, 2.0, 3.0])
            .build();
        assert_eq!(g.payload(n(0)), Some(&[0.0, 0.0, 0.0]));
        assert_eq!(g.payload(n(1)), Some(&[1.0, 2.0, 3.0]));
    }
}
