//! Benchmark profiles for the graze engine.
//!
//! Provides deterministic graph builders for benchmarking:
//!
//! - [`ring_lattice`]: a large cycle with random chord edges, the
//!   worst case for probes (every seed reaches a huge component and
//!   must be cut off by the ceiling).
//! - [`walk_profile`]: a seeded pseudo-random step sequence.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use graze_core::NodeId;
use graze_graph::SurfaceGraph;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Build a symmetric cycle of `node_count` nodes with `chord_count`
/// additional random chords, deterministically from `seed`.
pub fn ring_lattice(node_count: u32, chord_count: u32, seed: u64) -> SurfaceGraph {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut adjacency: Vec<Vec<u32>> = (0..node_count)
        .map(|i| {
            vec![
                (i + node_count - 1) % node_count,
                (i + 1) % node_count,
            ]
        })
        .collect();
    for _ in 0..chord_count {
        let a = rng.random_range(0..node_count);
        let b = rng.random_range(0..node_count);
        if a != b {
            adjacency[a as usize].push(b);
        }
    }

    let mut builder = SurfaceGraph::builder(node_count);
    for (node, neighbors) in adjacency.into_iter().enumerate() {
        builder = builder.neighbors(node as u32, neighbors);
    }
    // Chords are one-way as generated; symmetrize at load.
    builder.symmetric_edges(true).build()
}

/// A seeded pseudo-random walk of `len` steps over `node_count` nodes.
pub fn walk_profile(node_count: u32, len: usize, seed: u64) -> Vec<NodeId> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| NodeId(rng.random_range(0..node_count)))
        .collect()
}
