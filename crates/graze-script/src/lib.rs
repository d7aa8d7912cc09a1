//! Text map/walk scripts for graze.
//!
//! The engine treats I/O as an external collaborator; this crate is
//! that collaborator. A script is a whitespace-separated integer
//! stream:
//!
//! ```text
//! node_count ceiling
//! k n_1 .. n_k        (one adjacency list per node)
//! m c_1 .. c_m        (obstacle nodes)
//! s_1 s_2 ..          (step indices until end of input)
//! ```
//!
//! Out-of-range adjacency and obstacle references are dropped by the
//! graph builder; out-of-range step indices are filtered here, before
//! they ever reach the engine. [`render_status`] produces the
//! trail/territory index report printed after each applied step.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod report;
mod script;

pub use error::ScriptError;
pub use report::render_status;
pub use script::WalkScript;
