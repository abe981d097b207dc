use serde::{Deserialize, Serialize};

/// A structured learning path as returned by the generation backend.
///
/// Field names follow the backend JSON shape (`total_duration`,
/// `study_plan`, `estimated_time`), so the whole struct round-trips through
/// `serde_json` against real generation responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LearningPath {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub total_duration: String,
    /// Ordered learning sequence. Insertion order is path order.
    #[serde(default)]
    pub topics: Vec<Topic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Flattened path-level resource list, distinct from per-topic
    /// resources. Only the roadmap detail panel's fallback view reads it.
    #[serde(default)]
    pub resources: Vec<String>,
    /// Path-level projects, shown by the completion view.
    #[serde(default)]
    pub projects: Vec<String>,
}

/// One ordered unit of a learning path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Topic {
    /// Correlation key against rendered roadmap node labels. Expected to be
    /// unique within a path; on duplicates the first match wins.
    pub name: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub study_plan: Vec<StudyDay>,
    #[serde(default)]
    pub resources: Vec<TopicResource>,
    #[serde(default)]
    pub projects: Vec<TopicProject>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudyDay {
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopicResource {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub estimated_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopicProject {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub complexity: String,
}

impl LearningPath {
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    /// Topic at ordinal position `i`, or `None` when out of range.
    pub fn topic_at(&self, i: usize) -> Option<&Topic> {
        self.topics.get(i)
    }

    /// Exact-match lookup of a topic by name. First match wins when
    /// duplicate names exist; the ambiguity is a property of the generated
    /// data, not something to silently repair here.
    pub fn index_of_by_name(&self, name: &str) -> Option<usize> {
        self.topics.iter().position(|t| t.name == name)
    }

    pub fn is_first(&self, i: usize) -> bool {
        i == 0 && !self.topics.is_empty()
    }

    pub fn is_last(&self, i: usize) -> bool {
        !self.topics.is_empty() && i == self.topics.len() - 1
    }
}

impl TopicResource {
    /// Whether the resource URL points at an embeddable YouTube player.
    /// Front ends use this to offer an inline-video hint instead of a bare
    /// link.
    pub fn is_embeddable_video(&self) -> bool {
        self.url.contains("youtube.com/embed")
    }
}
