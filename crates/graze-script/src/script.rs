//! Parsing the walk-script format.

use std::io::BufRead;

use graze_core::NodeId;
use graze_graph::SurfaceGraph;

use crate::error::ScriptError;

/// A parsed map plus step sequence.
///
/// Holds the adjacency and obstacle lists exactly as read (the graph
/// builder applies the range-drop policy when [`WalkScript::build_graph`]
/// is called) and the step indices with out-of-range entries already
/// filtered out.
#[derive(Debug)]
pub struct WalkScript {
    node_count: u32,
    ceiling: u32,
    adjacency: Vec<Vec<u32>>,
    obstacles: Vec<u32>,
    steps: Vec<NodeId>,
}

/// Whitespace token cursor over the full input.
struct Tokens<'a> {
    iter: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            iter: input.split_whitespace(),
        }
    }

    /// Next integer, or `UnexpectedEof` naming what was wanted.
    fn next_u32(&mut self, expected: &'static str) -> Result<u32, ScriptError> {
        let token = self
            .iter
            .next()
            .ok_or(ScriptError::UnexpectedEof { expected })?;
        token.parse().map_err(|_| ScriptError::InvalidToken {
            token: token.to_string(),
        })
    }

    /// Next integer, or `None` at end of input.
    fn next_u32_opt(&mut self) -> Result<Option<u32>, ScriptError> {
        match self.iter.next() {
            None => Ok(None),
            Some(token) => token
                .parse()
                .map(Some)
                .map_err(|_| ScriptError::InvalidToken {
                    token: token.to_string(),
                }),
        }
    }
}

impl WalkScript {
    /// Read a complete script from `reader`.
    ///
    /// The step list runs to end of input; step indices outside the
    /// node count are discarded here, since the engine's contract
    /// assumes pre-filtered step input.
    pub fn parse(mut reader: impl BufRead) -> Result<Self, ScriptError> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        let mut tokens = Tokens::new(&input);

        let node_count = tokens.next_u32("node count")?;
        let ceiling = tokens.next_u32("region ceiling")?;

        let mut adjacency = Vec::with_capacity(node_count as usize);
        for _ in 0..node_count {
            let degree = tokens.next_u32("neighbour count")?;
            let mut neighbors = Vec::with_capacity(degree as usize);
            for _ in 0..degree {
                neighbors.push(tokens.next_u32("neighbour index")?);
            }
            adjacency.push(neighbors);
        }

        let obstacle_count = tokens.next_u32("obstacle count")?;
        let mut obstacles = Vec::with_capacity(obstacle_count as usize);
        for _ in 0..obstacle_count {
            obstacles.push(tokens.next_u32("obstacle index")?);
        }

        let mut steps = Vec::new();
        while let Some(step) = tokens.next_u32_opt()? {
            if step < node_count {
                steps.push(NodeId(step));
            }
        }

        Ok(Self {
            node_count,
            ceiling,
            adjacency,
            obstacles,
            steps,
        })
    }

    /// Number of nodes the map declares.
    pub fn node_count(&self) -> u32 {
        self.node_count
    }

    /// The region-size ceiling to pass to each step.
    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }

    /// The filtered step sequence, in input order.
    pub fn steps(&self) -> &[NodeId] {
        &self.steps
    }

    /// Build the surface graph this script describes.
    pub fn build_graph(&self) -> SurfaceGraph<()> {
        let mut builder = SurfaceGraph::builder(self.node_count);
        for (node, neighbors) in self.adjacency.iter().enumerate() {
            builder = builder.neighbors(node as u32, neighbors.iter().copied());
        }
        for &obstacle in &self.obstacles {
            builder = builder.obstacle(obstacle);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graze_core::{AgentId, CellStatus};
    use graze_engine::ClosureEngine;

    /// The ring-with-hub map: 4-cycle plus hub node 4, ceiling 2,
    /// walked 0 -> 1 -> 2.
    const RING_WITH_HUB: &str = "\
        5 2\n\
        3 1 3 4\n\
        3 0 2 4\n\
        3 1 3 4\n\
        3 2 0 4\n\
        4 0 1 2 3\n\
        0\n\
        0 1 2\n";

    #[test]
    fn parses_map_and_steps() {
        let script = WalkScript::parse(RING_WITH_HUB.as_bytes()).unwrap();
        assert_eq!(script.node_count(), 5);
        assert_eq!(script.ceiling(), 2);
        assert_eq!(
            script.steps(),
            &[NodeId(0), NodeId(1), NodeId(2)]
        );
        let graph = script.build_graph();
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.neighbours(NodeId(4)).len(), 4);
    }

    #[test]
    fn obstacles_are_applied() {
        let input = "2 1\n1 1\n1 0\n1 1\n";
        let script = WalkScript::parse(input.as_bytes()).unwrap();
        let graph = script.build_graph();
        assert!(graph.is_blocked(NodeId(1)));
        assert!(!graph.is_blocked(NodeId(0)));
    }

    #[test]
    fn out_of_range_steps_are_filtered() {
        let input = "2 1\n1 1\n1 0\n0\n0 9 1 2\n";
        let script = WalkScript::parse(input.as_bytes()).unwrap();
        assert_eq!(script.steps(), &[NodeId(0), NodeId(1)]);
    }

    #[test]
    fn empty_step_list_is_fine() {
        let input = "1 1\n0\n0\n";
        let script = WalkScript::parse(input.as_bytes()).unwrap();
        assert!(script.steps().is_empty());
    }

    #[test]
    fn truncated_adjacency_is_an_eof_error() {
        let err = WalkScript::parse("3 1\n2 0\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ScriptError::UnexpectedEof {
                expected: "neighbour index"
            }
        ));
    }

    #[test]
    fn missing_obstacle_count_is_an_eof_error() {
        let err = WalkScript::parse("1 1\n0\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ScriptError::UnexpectedEof {
                expected: "obstacle count"
            }
        ));
    }

    #[test]
    fn non_numeric_token_is_invalid() {
        let err = WalkScript::parse("five 2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ScriptError::InvalidToken { token } if token == "five"));
    }

    #[test]
    fn script_drives_a_full_capture() {
        let script = WalkScript::parse(RING_WITH_HUB.as_bytes()).unwrap();
        let mut graph = script.build_graph();
        let mut engine = ClosureEngine::new(AgentId(0));
        for &step in script.steps() {
            engine.step(&mut graph, step, script.ceiling());
        }
        assert!(graph.statuses().all(|(_, s)| s == CellStatus::Territory));
    }
}
