//! Surface graph store for graze simulations.
//!
//! [`SurfaceGraph`] holds the fixed node set of a closed-surface graph:
//! per-node status, obstacle flag, adjacency list, and an opaque payload
//! the engine never reads. It is a pure data container — all region
//! logic lives in `graze-engine`.
//!
//! Graphs are built once via [`SurfaceGraphBuilder`] and live for the
//! process lifetime; nodes are never added or removed afterwards.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod builder;
mod graph;

pub use builder::SurfaceGraphBuilder;
pub use graph::{SurfaceGraph, MAX_DEGREE_INLINE};
