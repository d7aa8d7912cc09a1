//! Rendering the post-step status report.

use std::fmt::Write;

use graze_graph::SurfaceGraph;

/// Render the `Trail:` / `Territory:` index report for the current
/// graph state.
///
/// Indices appear in node order, space-separated, one section per
/// status. This is the snapshot the reporting layer prints after each
/// applied step.
pub fn render_status<P>(graph: &SurfaceGraph<P>) -> String {
    let mut out = String::new();

    out.push_str("Trail:\n");
    let trail = graph
        .statuses()
        .filter(|(_, s)| s.is_trail())
        .map(|(n, _)| n.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "{trail}");

    out.push_str("Territory:\n");
    let territory = graph
        .statuses()
        .filter(|(_, s)| s.is_territory())
        .map(|(n, _)| n.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "{territory}");

    out
}
