use lpgen_core::{LearningPath, Topic};
use lpgen_graph::{Roadmap, COMPLETE_LABEL, START_LABEL};
use lpgen_session::{
    click, resolve_click, resolve_detail, DetailView, FocusTarget, Phase, SelectionState,
};

fn path_with(names: &[&str]) -> LearningPath {
    LearningPath {
        title: "Test path".into(),
        overview: String::new(),
        total_duration: "3 weeks".into(),
        topics: names
            .iter()
            .map(|n| Topic {
                name: n.to_string(),
                duration: "1 week".into(),
                description: String::new(),
                study_plan: vec![],
                resources: vec![],
                projects: vec![],
            })
            .collect(),
        prerequisites: None,
        difficulty: None,
        resources: vec![],
        projects: vec![],
    }
}

#[test]
fn clicks_resolve_against_derived_roadmap() {
    let path = path_with(&["A", "B"]);
    let roadmap = Roadmap::from_path(&path);

    assert_eq!(
        resolve_click(&path, Some(&roadmap), "A"),
        FocusTarget::Topic(0)
    );
    assert_eq!(
        resolve_click(&path, Some(&roadmap), COMPLETE_LABEL),
        FocusTarget::Complete
    );
    assert_eq!(
        resolve_click(&path, Some(&roadmap), START_LABEL),
        FocusTarget::Start
    );
    assert_eq!(
        resolve_click(&path, Some(&roadmap), "Z"),
        FocusTarget::Unresolved
    );
}

#[test]
fn clicks_resolve_by_name_for_supplied_flowcharts() {
    let path = path_with(&["A", "B"]);
    let roadmap = Roadmap::from_flowchart("flowchart TD\n    a[\"A\"] --> b[\"B\"]");

    assert_eq!(
        resolve_click(&path, Some(&roadmap), "B"),
        FocusTarget::Topic(1)
    );
    assert_eq!(
        resolve_click(&path, Some(&roadmap), START_LABEL),
        FocusTarget::Start
    );
    assert_eq!(
        resolve_click(&path, Some(&roadmap), "Z"),
        FocusTarget::Unresolved
    );
}

#[test]
fn topic_click_moves_focus_and_active_topic() {
    let path = path_with(&["A", "B", "C"]);
    let roadmap = Roadmap::from_path(&path);
    let mut state = SelectionState::new();

    let target = click(&mut state, &path, Some(&roadmap), "B");
    assert_eq!(target, FocusTarget::Topic(1));
    assert_eq!(state.active_topic(), 1);
    assert_eq!(state.phase(), Phase::Zoomed);
    assert_eq!(state.focused(), Some("B"));
}

#[test]
fn unresolved_click_changes_nothing() {
    let path = path_with(&["A"]);
    let mut state = SelectionState::new();

    let target = click(&mut state, &path, None, "nope");
    assert_eq!(target, FocusTarget::Unresolved);
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(state.active_topic(), 0);
    assert!(resolve_detail(&path, target).is_none());
}

#[test]
fn focus_then_deferred_close_returns_to_idle() {
    let path = path_with(&["A"]);
    let roadmap = Roadmap::from_path(&path);
    let mut state = SelectionState::new();

    click(&mut state, &path, Some(&roadmap), "A");
    state.close_detail();
    assert_eq!(state.phase(), Phase::Closing);
    assert_eq!(state.focused(), Some("A"));

    state.finish_close();
    assert_eq!(state.phase(), Phase::Idle);
    assert!(state.focused().is_none());
}

#[test]
fn last_topic_directs_to_projects_not_a_fourth_topic() {
    let path = path_with(&["A", "B", "C"]);
    let view = resolve_detail(&path, FocusTarget::Topic(2)).unwrap();
    match view {
        DetailView::Topic(detail) => {
            assert!(detail.narrative.contains("final topic"));
            assert_eq!(
                detail.next_step,
                "Complete the practical projects to solidify your knowledge."
            );
        }
        other => panic!("expected topic detail, got {other:?}"),
    }
}

#[test]
fn interior_topic_names_its_successor() {
    let path = path_with(&["A", "B", "C"]);
    let view = resolve_detail(&path, FocusTarget::Topic(1)).unwrap();
    match view {
        DetailView::Topic(detail) => {
            assert!(detail.narrative.contains("Build upon previous knowledge"));
            assert_eq!(detail.next_step, "Continue to C");
        }
        other => panic!("expected topic detail, got {other:?}"),
    }
}

#[test]
fn sparse_resource_list_still_yields_a_view() {
    let mut path = path_with(&["A", "B"]);
    path.resources = vec!["https://www.example.com/guide".into()];
    let view = resolve_detail(&path, FocusTarget::Topic(0)).unwrap();
    match view {
        DetailView::Topic(detail) => {
            assert_eq!(detail.resources.len(), 1);
            assert_eq!(detail.resources[0].label, "example.com");
            assert_eq!(detail.resources[0].href, "https://www.example.com/guide");
        }
        other => panic!("expected topic detail, got {other:?}"),
    }

    path.resources.clear();
    let view = resolve_detail(&path, FocusTarget::Topic(0)).unwrap();
    match view {
        DetailView::Topic(detail) => {
            assert_eq!(
                detail.resources[0].label,
                "No specific resources available for this topic."
            );
        }
        other => panic!("expected topic detail, got {other:?}"),
    }
}

#[test]
fn resource_preview_is_capped_at_two() {
    let mut path = path_with(&["A"]);
    path.resources = vec![
        "https://one.dev".into(),
        "https://two.dev".into(),
        "https://three.dev".into(),
    ];
    let view = resolve_detail(&path, FocusTarget::Topic(0)).unwrap();
    match view {
        DetailView::Topic(detail) => {
            let labels: Vec<&str> = detail.resources.iter().map(|r| r.label.as_str()).collect();
            assert_eq!(labels, vec!["one.dev", "two.dev"]);
        }
        other => panic!("expected topic detail, got {other:?}"),
    }
}

#[test]
fn start_view_lists_prerequisites_or_default() {
    let mut path = path_with(&["A", "B"]);
    let view = resolve_detail(&path, FocusTarget::Start).unwrap();
    match view {
        DetailView::Start(detail) => {
            assert_eq!(detail.prerequisites, vec!["Basic understanding of the subject"]);
            assert_eq!(detail.first_topic.as_deref(), Some("A"));
        }
        other => panic!("expected start detail, got {other:?}"),
    }

    path.prerequisites = Some("Comfort with a text editor".into());
    let view = resolve_detail(&path, FocusTarget::Start).unwrap();
    match view {
        DetailView::Start(detail) => {
            assert_eq!(detail.prerequisites, vec!["Comfort with a text editor"]);
        }
        other => panic!("expected start detail, got {other:?}"),
    }
}

#[test]
fn complete_view_lists_projects_or_placeholder() {
    let mut path = path_with(&["A"]);
    let view = resolve_detail(&path, FocusTarget::Complete).unwrap();
    match view {
        DetailView::Complete(detail) => {
            assert_eq!(
                detail.projects,
                vec!["Create a portfolio project showcasing your new skills"]
            );
        }
        other => panic!("expected complete detail, got {other:?}"),
    }

    path.projects = vec!["Blog engine".into(), "REST API".into()];
    let view = resolve_detail(&path, FocusTarget::Complete).unwrap();
    match view {
        DetailView::Complete(detail) => {
            assert_eq!(detail.projects, vec!["Blog engine", "REST API"]);
        }
        other => panic!("expected complete detail, got {other:?}"),
    }
}

#[test]
fn single_topic_is_framed_as_starting_point() {
    let path = path_with(&["Only"]);
    let view = resolve_detail(&path, FocusTarget::Topic(0)).unwrap();
    match view {
        DetailView::Topic(detail) => {
            assert!(detail.narrative.contains("starting point"));
            assert_eq!(
                detail.next_step,
                "Complete the practical projects to solidify your knowledge."
            );
        }
        other => panic!("expected topic detail, got {other:?}"),
    }
}
