//! Roadmap projection: derives a directed node/edge description of a
//! learning path, ready to hand to an external flowchart renderer.

pub mod mermaid;
pub mod roadmap;

pub use roadmap::{NodeKind, Roadmap, RoadmapEdge, RoadmapNode, COMPLETE_LABEL, START_LABEL};
