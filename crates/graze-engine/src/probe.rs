//! The bounded flood-fill probe.

use std::collections::VecDeque;

use graze_core::{CellStatus, NodeId, StatusChange};
use graze_graph::SurfaceGraph;

use crate::context::ExplorationContext;

/// How a probe interacts with the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ProbeMode {
    /// Classify only: no events, no mutation. Survey results are only
    /// meaningful because survey never mutates.
    Survey,
    /// Record the capture as status-change events; additionally write
    /// the new statuses into the graph when `commit` is true.
    Capture {
        /// Whether to mutate the graph (false for probe-only steps,
        /// which report the identical event list without committing).
        commit: bool,
    },
}

/// What one probe found out about the component behind its seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ProbeReport {
    /// Unclaimed nodes counted before the traversal ended.
    pub(crate) size: u32,
    /// The component contains an obstacle; it is vetoed for this step.
    pub(crate) blocked: bool,
    /// The component was already explored by an earlier seed this step.
    pub(crate) overlapped: bool,
    /// Every non-unclaimed boundary node encountered was trail; false
    /// once the component touches pre-existing territory.
    pub(crate) trail_only: bool,
}

impl Default for ProbeReport {
    fn default() -> Self {
        Self {
            size: 0,
            blocked: false,
            overlapped: false,
            trail_only: true,
        }
    }
}

/// Explore the connected unclaimed component containing `seed`.
///
/// `shared` is the step-wide visitation set: a seed (or frontier node)
/// already marked there means another probe of the same step reached
/// this component first, and the probe aborts as overlapped. `local`
/// is this probe's private marker; it is reset here and also keeps
/// trail promotions from being reported twice.
///
/// Expansion stops as soon as `size` strictly exceeds `ceiling` — a
/// component that large is assumed to be the exterior, and the early
/// exit bounds traversal cost. A component of exactly `ceiling` nodes
/// is still fully explored.
pub(crate) fn probe<P>(
    graph: &mut SurfaceGraph<P>,
    seed: NodeId,
    shared: &mut ExplorationContext,
    local: &mut ExplorationContext,
    ceiling: u32,
    mode: ProbeMode,
    events: &mut Vec<StatusChange>,
) -> ProbeReport {
    let mut report = ProbeReport::default();

    if shared.is_marked(seed) {
        report.overlapped = true;
        return report;
    }
    if !graph.status(seed).is_unclaimed() {
        return report;
    }
    if graph.is_blocked(seed) {
        report.blocked = true;
        return report;
    }

    local.reset(graph.node_count());

    report.size = 1;
    claim(graph, seed, mode, events);
    shared.mark(seed);
    local.mark(seed);
    if report.size > ceiling {
        return report;
    }

    let mut frontier = VecDeque::new();
    frontier.push_back(seed);

    while let Some(node) = frontier.pop_front() {
        for next in graph.neighbours(node) {
            if local.is_marked(next) {
                continue;
            }
            match graph.status(next) {
                CellStatus::Unclaimed => {
                    if shared.is_marked(next) {
                        // A prior seed owns this component; the partial
                        // count is meaningless, so discard it.
                        report.overlapped = true;
                        report.size = 0;
                        return report;
                    }
                    if graph.is_blocked(next) {
                        report.blocked = true;
                        return report;
                    }
                    report.size += 1;
                    claim(graph, next, mode, events);
                    shared.mark(next);
                    local.mark(next);
                    frontier.push_back(next);
                    if report.size > ceiling {
                        return report;
                    }
                }
                CellStatus::Trail(_) => {
                    if graph.is_blocked(next) {
                        report.blocked = true;
                        return report;
                    }
                    // Promote the bounding trail; it contributes no
                    // further unclaimed area and is not counted.
                    claim(graph, next, mode, events);
                    local.mark(next);
                }
                CellStatus::Territory => {
                    if graph.is_blocked(next) {
                        report.blocked = true;
                        return report;
                    }
                    report.trail_only = false;
                    local.mark(next);
                }
            }
        }
    }

    report
}

/// Record (and, when committing, apply) one node's promotion to
/// territory.
fn claim<P>(
    graph: &mut SurfaceGraph<P>,
    node: NodeId,
    mode: ProbeMode,
    events: &mut Vec<StatusChange>,
) {
    if let ProbeMode::Capture { commit } = mode {
        events.push(StatusChange::new(node, CellStatus::Territory));
        if commit {
            graph.set_status(node, CellStatus::Territory);
        }
    }
}
