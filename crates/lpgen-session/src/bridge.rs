//! Resolution of rendered-node clicks back to structured topic data.

use lpgen_core::LearningPath;
use lpgen_graph::{NodeKind, Roadmap, COMPLETE_LABEL, START_LABEL};
use tracing::debug;

use crate::selection::SelectionState;

/// What a clicked node stands for. `Unresolved` is a normal outcome, never
/// an error: the caller renders no content for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Topic(usize),
    Start,
    Complete,
    Unresolved,
}

/// Resolve a clicked node's label to a topic or sentinel.
///
/// A derived roadmap answers through its projection-time mapping. For
/// supplied flowcharts (where no mapping exists) resolution falls back to
/// the sentinel literals and then to an exact name match against the path.
pub fn resolve_click(
    path: &LearningPath,
    roadmap: Option<&Roadmap>,
    label: &str,
) -> FocusTarget {
    if let Some(kind) = roadmap.and_then(|r| r.target_for_label(label)) {
        return kind.into();
    }
    match label {
        START_LABEL => FocusTarget::Start,
        COMPLETE_LABEL => FocusTarget::Complete,
        _ => match path.index_of_by_name(label) {
            Some(i) => FocusTarget::Topic(i),
            None => {
                debug!(%label, "click did not resolve to any roadmap content");
                FocusTarget::Unresolved
            }
        },
    }
}

/// Resolve a click and drive the selection state: anything resolved gets
/// focused, and topic clicks also move the active topic so the sidebar
/// follows the roadmap. Unresolved clicks leave the state untouched.
pub fn click(
    state: &mut SelectionState,
    path: &LearningPath,
    roadmap: Option<&Roadmap>,
    label: &str,
) -> FocusTarget {
    let target = resolve_click(path, roadmap, label);
    match target {
        FocusTarget::Unresolved => {}
        FocusTarget::Topic(i) => {
            state.select_topic(i, path.topic_count());
            state.focus_node(label);
        }
        FocusTarget::Start | FocusTarget::Complete => state.focus_node(label),
    }
    target
}

impl From<NodeKind> for FocusTarget {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Start => FocusTarget::Start,
            NodeKind::Topic(i) => FocusTarget::Topic(i),
            NodeKind::Complete => FocusTarget::Complete,
        }
    }
}
