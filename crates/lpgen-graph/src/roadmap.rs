use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableGraph;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use lpgen_core::LearningPath;

/// Label of the synthetic entry node feeding the first topic.
pub const START_LABEL: &str = "Start Learning Journey";
/// Label of the synthetic exit node fed by the last topic.
pub const COMPLETE_LABEL: &str = "Complete Learning Path";

/// What a roadmap node stands for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NodeKind {
    Start,
    /// Backed by the topic at this ordinal position in the path.
    Topic(usize),
    Complete,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoadmapNode {
    /// Stable identity (`start`, `t0`..`tN`, `complete`), threaded through
    /// the rendering boundary so clicks come back as ids, not free text.
    pub id: String,
    /// Rendered label. For topic nodes this equals `Topic.name`
    /// character-for-character.
    pub label: String,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoadmapEdge {
    pub source: String,
    pub target: String,
}

/// Graph description of a learning path.
///
/// Built either by deriving one node per topic plus the two sentinel nodes
/// (`from_path`), or from a ready-made flowchart description supplied by the
/// generation response (`from_flowchart`). The two construction paths are
/// mutually exclusive: a supplied description is authoritative and is never
/// regenerated from topics.
pub struct Roadmap {
    graph: StableGraph<RoadmapNode, ()>,
    node_indices: HashMap<String, NodeIndex>,
    /// Projection-time label lookup. First insertion wins, so duplicate
    /// topic names and sentinel collisions resolve deterministically.
    label_targets: HashMap<String, NodeKind>,
    supplied: Option<String>,
}

impl Roadmap {
    /// Derive the roadmap from a path: Start -> topic 0 -> .. -> Complete.
    pub fn from_path(path: &LearningPath) -> Self {
        let mut roadmap = Self::empty();
        let start = roadmap.add_node("start", START_LABEL, NodeKind::Start);

        let mut prev = start;
        for (i, topic) in path.topics.iter().enumerate() {
            if topic.name == START_LABEL || topic.name == COMPLETE_LABEL {
                warn!(topic = %topic.name, "topic name collides with a sentinel label");
            }
            let node = roadmap.add_node(&format!("t{i}"), &topic.name, NodeKind::Topic(i));
            roadmap.graph.add_edge(prev, node, ());
            prev = node;
        }

        let complete = roadmap.add_node("complete", COMPLETE_LABEL, NodeKind::Complete);
        roadmap.graph.add_edge(prev, complete, ());
        roadmap
    }

    /// Wrap a flowchart description supplied verbatim by the generation
    /// response. No nodes are derived; click resolution for such roadmaps
    /// falls back to label matching against the path.
    pub fn from_flowchart(code: impl Into<String>) -> Self {
        let mut roadmap = Self::empty();
        roadmap.supplied = Some(code.into());
        roadmap
    }

    fn empty() -> Self {
        Self {
            graph: StableGraph::new(),
            node_indices: HashMap::new(),
            label_targets: HashMap::new(),
            supplied: None,
        }
    }

    fn add_node(&mut self, id: &str, label: &str, kind: NodeKind) -> NodeIndex {
        let node = RoadmapNode {
            id: id.to_string(),
            label: label.to_string(),
            kind,
        };
        let idx = self.graph.add_node(node);
        self.node_indices.insert(id.to_string(), idx);
        self.label_targets.entry(label.to_string()).or_insert(kind);
        idx
    }

    /// Whether this roadmap carries a supplied description instead of a
    /// derived graph.
    pub fn is_supplied(&self) -> bool {
        self.supplied.is_some()
    }

    /// Nodes in projection order (Start, topics in path order, Complete).
    /// Empty for supplied-flowchart roadmaps.
    pub fn nodes(&self) -> Vec<&RoadmapNode> {
        self.graph.node_weights().collect()
    }

    /// Directed edges as (source id, target id) pairs, in projection order.
    pub fn edges(&self) -> Vec<RoadmapEdge> {
        self.graph
            .edge_references()
            .filter_map(|e| {
                let src = self.graph.node_weight(e.source())?;
                let dst = self.graph.node_weight(e.target())?;
                Some(RoadmapEdge {
                    source: src.id.clone(),
                    target: dst.id.clone(),
                })
            })
            .collect()
    }

    /// Resolve a rendered node label through the projection-time mapping.
    /// Returns `None` for unknown labels and for supplied-flowchart
    /// roadmaps, where no mapping exists.
    pub fn target_for_label(&self, label: &str) -> Option<NodeKind> {
        self.label_targets.get(label).copied()
    }

    /// Resolve a stable node id.
    pub fn target_for_id(&self, id: &str) -> Option<NodeKind> {
        self.node_indices
            .get(id)
            .and_then(|idx| self.graph.node_weight(*idx))
            .map(|n| n.kind)
    }

    /// The flowchart text handed to the external renderer: the supplied
    /// description when present, otherwise mermaid derived from the graph.
    pub fn mermaid(&self) -> String {
        match &self.supplied {
            Some(code) => code.clone(),
            None => crate::mermaid::render(self),
        }
    }
}
