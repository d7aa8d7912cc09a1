//! Status-change events reported from a step.

use crate::{CellStatus, NodeId};

/// One node's transition to a new status during a step.
///
/// A step returns these in traversal order: the stepped node's trail
/// mark first, then each captured region's cells and promoted trail
/// nodes in breadth-first discovery order. This replaces a mid-traversal
/// paint callback so callers can assert on (or replay) the full list
/// after the step returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusChange {
    /// The node whose status changed.
    pub node: NodeId,
    /// The status it changed to.
    pub status: CellStatus,
}

impl StatusChange {
    /// Convenience constructor.
    pub fn new(node: NodeId, status: CellStatus) -> Self {
        Self { node, status }
    }
}
