//! Graze: the territory-capture mechanic of a "paint the surface" game,
//! generalized from a 2-D grid to an arbitrary graph on a closed surface.
//!
//! A token walks graph nodes and leaves a trail. When the trail closes
//! off a small unclaimed region, the region and the trail bounding it
//! become permanent territory — unless the region holds a protected
//! obstacle (a cow). "Small" is a caller-supplied ceiling: on a closed
//! surface there is no computable inside/outside, so any component
//! larger than the ceiling is treated as the exterior.
//!
//! This facade re-exports the public API of the graze sub-crates; for
//! most users a single `graze` dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use graze::prelude::*;
//!
//! // A 4-cycle around a hub: walking three ring nodes pens the
//! // remaining pocket {3, 4} in.
//! let mut graph = SurfaceGraph::<()>::builder(5)
//!     .neighbors(0, [1, 3, 4])
//!     .neighbors(1, [0, 2, 4])
//!     .neighbors(2, [1, 3, 4])
//!     .neighbors(3, [2, 0, 4])
//!     .neighbors(4, [0, 1, 2, 3])
//!     .build();
//!
//! let mut engine = ClosureEngine::new(AgentId(0));
//! engine.step(&mut graph, NodeId(0), 2);
//! engine.step(&mut graph, NodeId(1), 2);
//! let outcome = engine.step(&mut graph, NodeId(2), 2);
//!
//! assert_eq!(outcome.regions_captured, 1);
//! assert!(graph.statuses().all(|(_, s)| s == CellStatus::Territory));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `graze-core` | IDs, [`types::CellStatus`], status-change events |
//! | [`graph`] | `graze-graph` | [`graph::SurfaceGraph`] store and builder |
//! | [`engine`] | `graze-engine` | [`engine::ClosureEngine`] and step outcomes |
//! | [`script`] | `graze-script` | Text walk scripts and status reports |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`graze-core`).
pub use graze_core as types;

/// The surface graph store (`graze-graph`).
pub use graze_graph as graph;

/// The region-closure engine (`graze-engine`).
pub use graze_engine as engine;

/// Text walk scripts and status reports (`graze-script`).
pub use graze_script as script;

/// Common imports for typical graze usage.
///
/// ```rust
/// use graze::prelude::*;
/// ```
pub mod prelude {
    pub use graze_core::{AgentId, CellStatus, NodeId, StatusChange};
    pub use graze_engine::{ClosureEngine, RecapturePolicy, StepOutcome};
    pub use graze_graph::{SurfaceGraph, SurfaceGraphBuilder};
    pub use graze_script::{render_status, ScriptError, WalkScript};
}
