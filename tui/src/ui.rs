use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use lpgen_session::{resolve_click, resolve_detail, DetailView, Phase};

use crate::app::{App, InputMode, PaneFocus, SaveStatus};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(1), // Help message
                Constraint::Length(3), // Prompt input
                Constraint::Min(1),    // Main content
                Constraint::Length(1), // Status bar
            ]
            .as_ref(),
        )
        .split(f.area());

    let msg = match app.input_mode {
        InputMode::Normal => {
            "g: new prompt | Tab: switch pane | j/k: move | Enter: open node | Esc: close | s: save | q: quit"
        }
        InputMode::Editing => "Editing - Esc to cancel, Enter to generate.",
    };
    let help = Paragraph::new(msg).style(Style::default().fg(Color::Yellow));
    f.render_widget(help, chunks[0]);

    let input = Paragraph::new(app.input.as_str())
        .style(match app.input_mode {
            InputMode::Normal => Style::default(),
            InputMode::Editing => Style::default().fg(Color::Yellow),
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("What do you want to learn?"),
        );
    f.render_widget(input, chunks[1]);

    draw_main(f, app, chunks[2]);

    let status = Paragraph::new(status_line(app))
        .style(Style::default().bg(Color::Blue).fg(Color::White));
    f.render_widget(status, chunks[3]);
}

fn draw_main(f: &mut Frame, app: &App, area: Rect) {
    if let Some(error) = &app.error {
        draw_error(f, app, area, error);
        return;
    }

    let Some(path) = &app.path else {
        let placeholder = Paragraph::new(if app.generating {
            "Generating..."
        } else {
            "No learning path yet. Press 'g' and describe a goal."
        })
        .block(Block::default().borders(Borders::ALL).title("Learning Path"));
        f.render_widget(placeholder, area);
        return;
    };

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(32), Constraint::Percentage(68)].as_ref())
        .split(area);

    draw_sidebar(f, app, panes[0], path);

    // The detail panel replaces the roadmap while open (incl. the closing
    // transition, where the label is still set).
    if app.selection.phase() != Phase::Idle {
        draw_detail(f, app, panes[1], path);
    } else {
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)].as_ref())
            .split(panes[1]);
        draw_roadmap(f, app, right[0], path);
        draw_topic_content(f, app, right[1], path);
    }
}

fn draw_sidebar(f: &mut Frame, app: &App, area: Rect, path: &lpgen_core::LearningPath) {
    let items: Vec<ListItem> = path
        .topics
        .iter()
        .enumerate()
        .map(|(i, topic)| {
            let style = if i == app.selection.active_topic() {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(topic.name.clone(), style),
                Span::styled(
                    format!("  {}", topic.duration),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let border_style = if app.pane == PaneFocus::Sidebar {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!("Topics ({})", path.total_duration)),
    );
    f.render_widget(list, area);
}

fn draw_roadmap(f: &mut Frame, app: &App, area: Rect, path: &lpgen_core::LearningPath) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)].as_ref())
        .split(area);

    let overview = Paragraph::new(path.overview.as_str())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(path.title.clone()));
    f.render_widget(overview, sections[0]);

    let items: Vec<ListItem> = app
        .node_labels()
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let style = if i == app.node_cursor && app.pane == PaneFocus::Roadmap {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if i == 0 { "o " } else { "v " };
            ListItem::new(format!("{marker}{label}")).style(style)
        })
        .collect();

    let border_style = if app.pane == PaneFocus::Roadmap {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Roadmap - Enter opens a step"),
    );
    f.render_widget(list, sections[1]);
}

/// Content of the topic highlighted in the sidebar. Follows the selection,
/// so j/k over the topic list changes what shows here.
fn draw_topic_content(f: &mut Frame, app: &App, area: Rect, path: &lpgen_core::LearningPath) {
    let Some(topic) = path.topic_at(app.selection.active_topic()) else {
        return;
    };
    let panel = Paragraph::new(topic_lines(topic))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} ({})", topic.name, topic.duration)),
        );
    f.render_widget(panel, area);
}

fn topic_lines(topic: &lpgen_core::Topic) -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();
    if !topic.description.is_empty() {
        lines.push(Line::from(topic.description.clone()));
    }
    if !topic.study_plan.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Study Plan:", bold)));
        for day in &topic.study_plan {
            lines.push(Line::from(format!("  {}:", day.day)));
            for task in &day.tasks {
                lines.push(Line::from(format!("    - {task}")));
            }
        }
    }
    if !topic.resources.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Resources:", bold)));
        for resource in &topic.resources {
            let video = if resource.is_embeddable_video() {
                " [video]"
            } else {
                ""
            };
            lines.push(Line::from(format!(
                "  - {} ({}){video}",
                resource.title, resource.estimated_time
            )));
            lines.push(Line::from(format!("      {}", resource.url)));
        }
    }
    if !topic.projects.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Projects:", bold)));
        for project in &topic.projects {
            lines.push(Line::from(format!(
                "  - {} [{}] {}",
                project.name, project.complexity, project.description
            )));
        }
    }
    lines
}

fn draw_detail(f: &mut Frame, app: &App, area: Rect, path: &lpgen_core::LearningPath) {
    let Some(label) = app.selection.focused() else {
        return;
    };
    let target = resolve_click(path, app.roadmap.as_ref(), label);
    let mut lines: Vec<Line> = Vec::new();

    match resolve_detail(path, target) {
        Some(DetailView::Topic(detail)) => {
            lines.push(Line::from(detail.narrative));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Suggested Resources:",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for link in &detail.resources {
                lines.push(Line::from(format!("  - {} ({})", link.label, link.href)));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Next Steps:",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(format!("  {}", detail.next_step)));
        }
        Some(DetailView::Start(detail)) => {
            lines.push(Line::from(
                "Before you begin, make sure you have these prerequisites:",
            ));
            for prereq in &detail.prerequisites {
                lines.push(Line::from(format!("  - {prereq}")));
            }
            if let Some(first) = &detail.first_topic {
                lines.push(Line::from(""));
                lines.push(Line::from(format!(
                    "Open {first} to start your learning journey."
                )));
            }
        }
        Some(DetailView::Complete(detail)) => {
            lines.push(Line::from(
                "Congratulations on completing the learning path! Projects to solidify your knowledge:",
            ));
            for project in &detail.projects {
                lines.push(Line::from(format!("  - {project}")));
            }
        }
        None => {
            lines.push(Line::from("No matching content for this step."));
        }
    }

    let closing = app.selection.phase() == Phase::Closing;
    let title = if closing {
        format!("{label} (closing)")
    } else {
        label.to_string()
    };
    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(panel, area);
}

fn draw_error(f: &mut Frame, app: &App, area: Rect, error: &str) {
    let mut lines = vec![Line::from(Span::styled(
        error.to_string(),
        Style::default().fg(Color::Red),
    ))];
    if let Some(raw) = &app.error_raw {
        lines.push(Line::from(""));
        if app.show_raw {
            let pretty = serde_json::to_string_pretty(raw).unwrap_or_else(|_| raw.to_string());
            for l in pretty.lines() {
                lines.push(Line::from(l.to_string()));
            }
        } else {
            lines.push(Line::from("Press 'r' to show technical details."));
        }
    }
    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Error"));
    f.render_widget(panel, area);
}

fn status_line(app: &App) -> String {
    let badge = match app.save_status {
        Some(SaveStatus::Saving) => " [Saving...]",
        Some(SaveStatus::Saved) => " [Saved!]",
        Some(SaveStatus::Failed) => " [Save failed]",
        None => "",
    };
    format!("{}{}", app.status_message, badge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lpgen_core::{StudyDay, Topic, TopicProject, TopicResource};

    fn flatten(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn topic_content_shows_plan_resources_and_projects() {
        let topic = Topic {
            name: "Ownership".into(),
            duration: "2 weeks".into(),
            description: "Borrowing and lifetimes".into(),
            study_plan: vec![StudyDay {
                day: "Day 1".into(),
                tasks: vec!["Read chapter 4".into()],
            }],
            resources: vec![
                TopicResource {
                    kind: "video".into(),
                    title: "Ownership explained".into(),
                    url: "https://www.youtube.com/embed/xyz".into(),
                    estimated_time: "1h".into(),
                },
                TopicResource {
                    kind: "article".into(),
                    title: "The book".into(),
                    url: "https://doc.rust-lang.org/book/ch04-00.html".into(),
                    estimated_time: "2h".into(),
                },
            ],
            projects: vec![TopicProject {
                name: "Linked list".into(),
                description: "Implement one without cloning".into(),
                complexity: "Hard".into(),
            }],
        };

        let text = flatten(&topic_lines(&topic));
        assert_eq!(text[0], "Borrowing and lifetimes");
        assert!(text.contains(&"  Day 1:".to_string()));
        assert!(text.contains(&"    - Read chapter 4".to_string()));
        // Only the embeddable resource carries the inline-video hint.
        assert!(text.contains(&"  - Ownership explained (1h) [video]".to_string()));
        assert!(text.contains(&"  - The book (2h)".to_string()));
        assert!(text
            .iter()
            .any(|l| l.contains("Linked list") && l.contains("[Hard]")));
    }

    #[test]
    fn topic_content_skips_empty_sections() {
        let topic = Topic {
            name: "Intro".into(),
            duration: "1 day".into(),
            description: String::new(),
            study_plan: vec![],
            resources: vec![],
            projects: vec![],
        };
        assert!(topic_lines(&topic).is_empty());
    }
}
