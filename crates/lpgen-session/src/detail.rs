//! Detail-view computation for the focused roadmap node.

use lpgen_core::LearningPath;

use crate::bridge::FocusTarget;

/// How many path-level resources the detail panel previews.
const RESOURCE_PREVIEW: usize = 2;

const NO_RESOURCES_PLACEHOLDER: &str = "No specific resources available for this topic.";
const DEFAULT_PREREQUISITE: &str = "Basic understanding of the subject";
const DEFAULT_PROJECT: &str = "Create a portfolio project showcasing your new skills";
const FINAL_NEXT_STEP: &str = "Complete the practical projects to solidify your knowledge.";

/// Computed payload for the detail panel. `Unresolved` targets produce no
/// view at all; the caller renders nothing rather than erroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Topic(TopicDetail),
    Start(StartDetail),
    Complete(CompleteDetail),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicDetail {
    pub name: String,
    /// Position narrative: starting point, final topic, or building on
    /// previous knowledge.
    pub narrative: String,
    /// Trimmed subset of the *path-level* resource list, not the topic's
    /// own resources. Mirrors the generation response's flattened fallback
    /// list.
    pub resources: Vec<ResourceLink>,
    pub next_step: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartDetail {
    pub prerequisites: Vec<String>,
    /// Name of the first topic, the call-to-action target.
    pub first_topic: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteDetail {
    pub projects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLink {
    /// Display text: the hostname for http(s) URLs, the raw string
    /// otherwise.
    pub label: String,
    /// Link target; non-URL resource strings get a dead `#` href.
    pub href: String,
}

/// Compute the detail view for a resolved focus target.
pub fn resolve_detail(path: &LearningPath, target: FocusTarget) -> Option<DetailView> {
    match target {
        FocusTarget::Topic(i) => topic_detail(path, i).map(DetailView::Topic),
        FocusTarget::Start => Some(DetailView::Start(StartDetail {
            prerequisites: vec![path
                .prerequisites
                .clone()
                .unwrap_or_else(|| DEFAULT_PREREQUISITE.to_string())],
            first_topic: path.topic_at(0).map(|t| t.name.clone()),
        })),
        FocusTarget::Complete => {
            let projects = if path.projects.is_empty() {
                vec![DEFAULT_PROJECT.to_string()]
            } else {
                path.projects.clone()
            };
            Some(DetailView::Complete(CompleteDetail { projects }))
        }
        FocusTarget::Unresolved => None,
    }
}

fn topic_detail(path: &LearningPath, i: usize) -> Option<TopicDetail> {
    let topic = path.topic_at(i)?;

    let narrative = if path.is_first(i) {
        "This topic is part of your learning journey. It's your starting point."
    } else if path.is_last(i) {
        "This topic is part of your learning journey. This is the final topic in your path."
    } else {
        "This topic is part of your learning journey. Build upon previous knowledge to master this."
    };

    let resources = if path.resources.is_empty() {
        vec![ResourceLink {
            label: NO_RESOURCES_PLACEHOLDER.to_string(),
            href: "#".to_string(),
        }]
    } else {
        path.resources
            .iter()
            .take(RESOURCE_PREVIEW)
            .map(|r| resource_link(r))
            .collect()
    };

    let next_step = match path.topic_at(i + 1) {
        Some(next) => format!("Continue to {}", next.name),
        None => FINAL_NEXT_STEP.to_string(),
    };

    Some(TopicDetail {
        name: topic.name.clone(),
        narrative: narrative.to_string(),
        resources,
        next_step,
    })
}

fn resource_link(resource: &str) -> ResourceLink {
    if resource.starts_with("http") {
        ResourceLink {
            label: hostname(resource),
            href: resource.to_string(),
        }
    } else {
        ResourceLink {
            label: resource.to_string(),
            href: "#".to_string(),
        }
    }
}

/// Hostname of an http(s) URL with a leading `www.` stripped; falls back to
/// the raw string when there is nothing after the scheme.
fn hostname(url: &str) -> String {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let host = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    let host = host.strip_prefix("www.").unwrap_or(host);
    if host.is_empty() {
        url.to_string()
    } else {
        host.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostname_strips_scheme_www_and_path() {
        assert_eq!(hostname("https://www.example.com/a/b?q=1"), "example.com");
        assert_eq!(hostname("http://docs.rs/serde"), "docs.rs");
        assert_eq!(hostname("https://"), "https://");
    }

    #[test]
    fn non_http_resource_is_shown_verbatim() {
        let link = resource_link("The Rust Book, chapter 4");
        assert_eq!(link.label, "The Rust Book, chapter 4");
        assert_eq!(link.href, "#");
    }
}
