//! Read a walk script from stdin, apply each step, and print the
//! trail/territory report after every one.
//!
//! ```text
//! cargo run --example walk < demo.txt
//! ```

use std::io;
use std::process::ExitCode;

use graze_core::AgentId;
use graze_engine::ClosureEngine;
use graze_script::{render_status, WalkScript};

fn main() -> ExitCode {
    let script = match WalkScript::parse(io::stdin().lock()) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("walk: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut graph = script.build_graph();
    let mut engine = ClosureEngine::new(AgentId(0));
    for &step in script.steps() {
        engine.step(&mut graph, step, script.ceiling());
        println!("{}", render_status(&graph));
    }
    ExitCode::SUCCESS
}
