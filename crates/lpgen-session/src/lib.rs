//! Interactive roadmap navigation: selection state, click resolution, and
//! detail-view computation over a generated learning path.

pub mod bridge;
pub mod detail;
pub mod selection;

pub use bridge::{click, resolve_click, FocusTarget};
pub use detail::{
    resolve_detail, CompleteDetail, DetailView, ResourceLink, StartDetail, TopicDetail,
};
pub use selection::{Phase, SelectionState};
