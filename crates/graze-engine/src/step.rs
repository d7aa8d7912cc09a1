//! Step orchestration: applying one player step and resolving capture.

use graze_core::{AgentId, CellStatus, NodeId, StatusChange};
use graze_graph::SurfaceGraph;

use crate::context::ExplorationContext;
use crate::probe::{probe, ProbeMode, ProbeReport};

/// What a step onto an already-captured node does.
///
/// Regressing territory back to trail on re-entry can un-capture
/// owned ground as a side effect of walking. Both readings are
/// supported so the choice is explicit rather than accidental.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecapturePolicy {
    /// A step onto territory is a no-op with an empty outcome.
    #[default]
    Forbid,
    /// Territory reverts to trail and may be re-captured by a later
    /// loop closure.
    Regress,
}

/// The committed (or, for survey steps, hypothetical) effect of one step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Every status change, in traversal order: the trail mark first,
    /// then each captured region in discovery order.
    pub changes: Vec<StatusChange>,
    /// Number of regions captured by this step.
    pub regions_captured: u32,
}

impl StepOutcome {
    /// Returns `true` if the step changed nothing.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Survey-scan accumulator: how many independent capture candidates
/// the neighbour scan has produced so far.
enum Candidates {
    None,
    Single { seed: NodeId, trail_only: bool },
    Multiple,
}

/// The region-closure engine.
///
/// Owns the reusable exploration scratch and the policy knobs; the
/// graph itself is borrowed exclusively for the duration of each step,
/// so no external mutation can interleave with the probes and commits
/// of one step.
///
/// # Example
///
/// ```
/// use graze_core::{AgentId, CellStatus, NodeId};
/// use graze_engine::ClosureEngine;
/// use graze_graph::SurfaceGraph;
///
/// // A triangle: stepping its corners closes no region until the
/// // last unclaimed node is itself the pocket.
/// let mut graph = SurfaceGraph::<()>::builder(3)
///     .neighbors(0, [1, 2])
///     .neighbors(1, [0, 2])
///     .neighbors(2, [0, 1])
///     .build();
/// let mut engine = ClosureEngine::new(AgentId(0));
/// engine.step(&mut graph, NodeId(0), 1);
/// let outcome = engine.step(&mut graph, NodeId(1), 1);
/// assert_eq!(outcome.regions_captured, 1);
/// assert!(graph.statuses().all(|(_, s)| s == CellStatus::Territory));
/// ```
pub struct ClosureEngine {
    agent: AgentId,
    recapture: RecapturePolicy,
    survey_ctx: ExplorationContext,
    capture_ctx: ExplorationContext,
    local_ctx: ExplorationContext,
}

impl ClosureEngine {
    /// Create an engine laying trail as `agent`, with the default
    /// [`RecapturePolicy::Forbid`].
    pub fn new(agent: AgentId) -> Self {
        Self {
            agent,
            recapture: RecapturePolicy::default(),
            survey_ctx: ExplorationContext::new(),
            capture_ctx: ExplorationContext::new(),
            local_ctx: ExplorationContext::new(),
        }
    }

    /// Replace the recapture policy.
    pub fn with_recapture(mut self, policy: RecapturePolicy) -> Self {
        self.recapture = policy;
        self
    }

    /// The agent this engine lays trail as.
    pub fn agent(&self) -> AgentId {
        self.agent
    }

    /// The active recapture policy.
    pub fn recapture_policy(&self) -> RecapturePolicy {
        self.recapture
    }

    /// Apply one step onto `node` and commit any resulting captures.
    ///
    /// An out-of-range `node` is a no-op with an empty outcome (the
    /// caller is expected to have filtered it); so is a step onto
    /// territory under [`RecapturePolicy::Forbid`].
    pub fn step<P>(
        &mut self,
        graph: &mut SurfaceGraph<P>,
        node: NodeId,
        ceiling: u32,
    ) -> StepOutcome {
        self.run(graph, node, ceiling, true)
    }

    /// Run the identical decision procedure without committing.
    ///
    /// The graph's observable status set is left exactly as it was;
    /// the returned outcome reports what [`ClosureEngine::step`] would
    /// have changed. Because nothing is committed mid-scan, a trail
    /// node bounding two captured regions appears once per region in
    /// the hypothetical event list.
    pub fn survey_step<P>(
        &mut self,
        graph: &mut SurfaceGraph<P>,
        node: NodeId,
        ceiling: u32,
    ) -> StepOutcome {
        self.run(graph, node, ceiling, false)
    }

    fn run<P>(
        &mut self,
        graph: &mut SurfaceGraph<P>,
        node: NodeId,
        ceiling: u32,
        committing: bool,
    ) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        if !graph.contains(node) {
            return outcome;
        }
        let previous = graph.status(node);
        if previous.is_territory() && self.recapture == RecapturePolicy::Forbid {
            return outcome;
        }

        let trail = CellStatus::Trail(self.agent);
        outcome.changes.push(StatusChange::new(node, trail));
        graph.set_status(node, trail);

        self.survey_ctx.reset(graph.node_count());
        let mut found = Candidates::None;

        for seed in graph.neighbours(node) {
            let report = probe(
                graph,
                seed,
                &mut self.survey_ctx,
                &mut self.local_ctx,
                ceiling,
                ProbeMode::Survey,
                &mut outcome.changes,
            );
            if !is_candidate(&report, ceiling) {
                continue;
            }
            found = match found {
                Candidates::None => Candidates::Single {
                    seed,
                    trail_only: report.trail_only,
                },
                Candidates::Single { seed: first, .. } => {
                    // A second independent region: capture both now.
                    self.capture(graph, first, ceiling, committing, &mut outcome);
                    self.capture(graph, seed, ceiling, committing, &mut outcome);
                    Candidates::Multiple
                }
                Candidates::Multiple => {
                    self.capture(graph, seed, ceiling, committing, &mut outcome);
                    Candidates::Multiple
                }
            };
        }

        // A lone candidate is captured only if its boundary is all
        // trail. A pocket already bordering territory is deferred to a
        // later, independent loop closure.
        if let Candidates::Single {
            seed,
            trail_only: true,
        } = found
        {
            self.capture(graph, seed, ceiling, committing, &mut outcome);
        }

        if !committing {
            graph.set_status(node, previous);
        }
        outcome
    }

    /// Commit one known-eligible region via a fresh capture probe.
    ///
    /// Capture probes never share visitation with each other: the
    /// survey scan already proved the candidates disjoint.
    fn capture<P>(
        &mut self,
        graph: &mut SurfaceGraph<P>,
        seed: NodeId,
        ceiling: u32,
        commit: bool,
        outcome: &mut StepOutcome,
    ) {
        self.capture_ctx.reset(graph.node_count());
        probe(
            graph,
            seed,
            &mut self.capture_ctx,
            &mut self.local_ctx,
            ceiling,
            ProbeMode::Capture { commit },
            &mut outcome.changes,
        );
        outcome.regions_captured += 1;
    }
}

/// A survey report qualifies for capture iff it found a non-empty,
/// ceiling-sized-or-smaller, unblocked component no other seed reached.
fn is_candidate(report: &ProbeReport, ceiling: u32) -> bool {
    report.size > 0 && report.size <= ceiling && !report.blocked && !report.overlapped
}
