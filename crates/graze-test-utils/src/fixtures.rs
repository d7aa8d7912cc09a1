//! Reusable graph fixtures.
//!
//! Three small topologies that between them exercise every closure
//! decision: a lone pocket behind a closing loop, two independent
//! pockets captured in one step, and one component reachable through
//! two seeds.

use graze_graph::SurfaceGraph;

/// Five nodes: a 4-cycle `0-1-2-3-0` with every ring node also
/// adjacent to hub node 4 (and the hub to all of them).
///
/// Walking `0, 1, 2` with ceiling 2 closes the loop around the pocket
/// `{3, 4}`.
pub fn ring_with_hub() -> SurfaceGraph {
    SurfaceGraph::builder(5)
        .neighbors(0, [1, 3, 4])
        .neighbors(1, [0, 2, 4])
        .neighbors(2, [1, 3, 4])
        .neighbors(3, [2, 0, 4])
        .neighbors(4, [0, 1, 2, 3])
        .build()
}

/// Three nodes: center 0 with two dead-end neighbours 1 and 2 that are
/// not connected to each other.
///
/// Stepping onto 0 discovers two disjoint size-1 regions — the
/// multiple-capture path.
pub fn twin_pockets() -> SurfaceGraph {
    SurfaceGraph::builder(3)
        .neighbors(0, [1, 2])
        .neighbors(1, [0])
        .neighbors(2, [0])
        .build()
}

/// A triangle: node 0's two neighbours 1 and 2 are themselves adjacent,
/// so both seeds lead into the same unclaimed component.
///
/// Stepping onto 0 must capture that component exactly once — the
/// second seed reports overlap.
pub fn shared_pocket() -> SurfaceGraph {
    SurfaceGraph::builder(3)
        .neighbors(0, [1, 2])
        .neighbors(1, [0, 2])
        .neighbors(2, [0, 1])
        .build()
}
