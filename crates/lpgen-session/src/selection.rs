//! Focus and active-topic state for the roadmap view.

/// Observable state of the detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No node focused, panel closed.
    Idle,
    /// A node is focused and the panel is open.
    Zoomed,
    /// Close requested; the focused label is retained until the close
    /// animation finishes and [`SelectionState::finish_close`] runs.
    Closing,
}

/// Session-lifetime selection state, mutated only through the transition
/// methods below.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    active_topic: usize,
    focused: Option<String>,
    zoomed: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for a freshly loaded path: active topic back to 0, panel
    /// closed.
    pub fn reset_for_path(&mut self) {
        self.active_topic = 0;
        self.focused = None;
        self.zoomed = false;
    }

    /// Index of the active topic. Invariant: within range whenever the
    /// current path has topics, 0 right after a path loads.
    pub fn active_topic(&self) -> usize {
        self.active_topic
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    pub fn phase(&self) -> Phase {
        match (&self.focused, self.zoomed) {
            (None, _) => Phase::Idle,
            (Some(_), true) => Phase::Zoomed,
            (Some(_), false) => Phase::Closing,
        }
    }

    /// Set the active topic. Valid in any phase, idempotent, ignores
    /// out-of-range indices, and never touches focus or zoom.
    pub fn select_topic(&mut self, i: usize, topic_count: usize) {
        if i < topic_count {
            self.active_topic = i;
        }
    }

    /// Focus a node and open the panel. Refocusing the same label while
    /// already zoomed keeps the panel open rather than toggling it closed.
    pub fn focus_node(&mut self, label: impl Into<String>) {
        self.focused = Some(label.into());
        self.zoomed = true;
    }

    /// Request a close: the panel starts its close transition but the
    /// focused label stays until [`finish_close`](Self::finish_close).
    pub fn close_detail(&mut self) {
        if self.phase() == Phase::Zoomed {
            self.zoomed = false;
        }
    }

    /// Complete a close transition. A no-op outside `Closing`, so a stray
    /// deferred signal after a re-focus cannot clear a live panel.
    pub fn finish_close(&mut self) {
        if self.phase() == Phase::Closing {
            self.focused = None;
        }
    }
}
