//! Region-closure engine: the decision procedure of graze.
//!
//! [`ClosureEngine::step`] applies one player step to a node of a
//! [`graze_graph::SurfaceGraph`]: it lays trail, survey-probes the
//! unclaimed space behind each neighbour with a bounded flood fill,
//! decides which of the discovered regions qualify for capture, and
//! commits the winners — promoting the bounding trail into territory
//! along the way. The ordered list of status changes comes back in the
//! returned [`StepOutcome`].
//!
//! On a closed surface there is no general inside/outside test, so
//! "capturable" is approximated by a caller-supplied size ceiling: a
//! component larger than the ceiling is assumed to be the exterior and
//! is never captured. The ceiling also bounds per-step traversal cost.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod context;
mod probe;
mod step;

pub use step::{ClosureEngine, RecapturePolicy, StepOutcome};
