//! Mermaid flowchart emission for derived roadmaps.

use crate::roadmap::{NodeKind, Roadmap};

/// Render a derived roadmap as `flowchart TD` text. Sentinel nodes get
/// stadium shapes, topic nodes plain rectangles.
pub fn render(roadmap: &Roadmap) -> String {
    let mut out = String::from("flowchart TD\n");
    for node in roadmap.nodes() {
        let label = escape(&node.label);
        match node.kind {
            NodeKind::Start | NodeKind::Complete => {
                out.push_str(&format!("    {}([\"{}\"])\n", node.id, label));
            }
            NodeKind::Topic(_) => {
                out.push_str(&format!("    {}[\"{}\"]\n", node.id, label));
            }
        }
    }
    for edge in roadmap.edges() {
        out.push_str(&format!("    {} --> {}\n", edge.source, edge.target));
    }
    out
}

// Mermaid entity codes. Brackets and parens can end a quoted node label in
// some renderers, so they get escaped along with the quote itself.
fn escape(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '"' => out.push_str("#quot;"),
            '[' => out.push_str("#91;"),
            ']' => out.push_str("#93;"),
            '(' => out.push_str("#40;"),
            ')' => out.push_str("#41;"),
            other => out.push(other),
        }
    }
    out
}
