//! Reusable visited-set scratch for probes.

use graze_core::NodeId;

/// A visited-set lent into probe calls.
///
/// One instance is shared across all survey probes of a step (so two
/// seeds leading into the same component are detected as overlap); a
/// separate instance, reset per call, serves each capture probe and
/// each probe's private traversal marker. The engine owns these and
/// reuses the allocations across steps.
pub(crate) struct ExplorationContext {
    visited: Vec<bool>,
}

impl ExplorationContext {
    pub(crate) fn new() -> Self {
        Self { visited: Vec::new() }
    }

    /// Clear all marks and size the set for a graph of `node_count`
    /// nodes, keeping the allocation.
    pub(crate) fn reset(&mut self, node_count: usize) {
        self.visited.clear();
        self.visited.resize(node_count, false);
    }

    pub(crate) fn mark(&mut self, node: NodeId) {
        if let Some(slot) = self.visited.get_mut(node.index()) {
            *slot = true;
        }
    }

    pub(crate) fn is_marked(&self, node: NodeId) -> bool {
        self.visited.get(node.index()).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_and_reset() {
        let mut ctx = ExplorationContext::new();
        ctx.reset(4);
        assert!(!ctx.is_marked(NodeId(2)));
        ctx.mark(NodeId(2));
        assert!(ctx.is_marked(NodeId(2)));
        ctx.reset(4);
        assert!(!ctx.is_marked(NodeId(2)));
    }

    #[test]
    fn out_of_range_is_unmarked_and_inert() {
        let mut ctx = ExplorationContext::new();
        ctx.reset(2);
        ctx.mark(NodeId(9));
        assert!(!ctx.is_marked(NodeId(9)));
    }
}
