//! Core data model for generated learning paths.
//!
//! A [`LearningPath`] is the structured curriculum produced for one
//! generation request: a title, an overview, an ordered sequence of topics
//! (each with its own study plan, resources and projects), plus flattened
//! path-level resource and project lists used by the roadmap detail views.
//!
//! The model is immutable once deserialized from a generation response. A
//! new generation replaces the whole value rather than mutating it in
//! place, so stale references from a prior render never observe a partially
//! updated path.

pub mod path;

pub use path::{LearningPath, StudyDay, Topic, TopicProject, TopicResource};
