//! Core types for the graze territory-capture engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the node and agent identifiers, the tri-state cell status, and the
//! status-change event record shared by the graph store and the
//! closure engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod event;
mod id;
mod status;

pub use event::StatusChange;
pub use id::{AgentId, NodeId};
pub use status::CellStatus;
