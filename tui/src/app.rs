use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use serde_json::Value;

use lpgen_client::{validate_prompt, GenerateOutcome, SaveReceipt, UNEXPECTED_FORMAT_MSG};
use lpgen_config::Config;
use lpgen_core::LearningPath;
use lpgen_graph::{Roadmap, COMPLETE_LABEL, START_LABEL};
use lpgen_session::{click, Phase, SelectionState};

pub enum InputMode {
    Normal,
    Editing,
}

/// Which pane j/k and Enter act on.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PaneFocus {
    Sidebar,
    Roadmap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    Saving,
    Saved,
    Failed,
}

/// Async results delivered back into the draw loop.
pub enum AppEvent {
    Generated { seq: u64, outcome: GenerateOutcome },
    SaveFinished(Result<SaveReceipt, String>),
}

/// Work the event loop must spawn on behalf of the app.
pub enum AppCommand {
    Quit,
    Generate { seq: u64, prompt: String },
    Save(Box<LearningPath>),
}

pub struct App {
    pub config: Config,
    pub input: String,
    pub input_mode: InputMode,
    pub pane: PaneFocus,
    pub path: Option<LearningPath>,
    pub roadmap: Option<Roadmap>,
    pub selection: SelectionState,
    pub node_cursor: usize,
    pub error: Option<String>,
    pub error_raw: Option<Value>,
    pub show_raw: bool,
    pub generating: bool,
    pub save_status: Option<SaveStatus>,
    pub status_message: String,
    generation_seq: u64,
    close_deadline: Option<Instant>,
    save_status_until: Option<Instant>,
}

impl App {
    pub fn new(config: Config) -> App {
        App {
            config,
            input: String::new(),
            input_mode: InputMode::Normal,
            pane: PaneFocus::Sidebar,
            path: None,
            roadmap: None,
            selection: SelectionState::new(),
            node_cursor: 0,
            error: None,
            error_raw: None,
            show_raw: false,
            generating: false,
            save_status: None,
            status_message: "Press 'g' to describe what you want to learn, 'q' to quit."
                .to_string(),
            generation_seq: 0,
            close_deadline: None,
            save_status_until: None,
        }
    }

    /// Labels of the clickable roadmap nodes, in order. For supplied
    /// flowcharts (which carry no derived nodes) the list is synthesized
    /// from the path so keyboard navigation still works.
    pub fn node_labels(&self) -> Vec<String> {
        if let Some(roadmap) = &self.roadmap {
            let derived: Vec<String> =
                roadmap.nodes().iter().map(|n| n.label.clone()).collect();
            if !derived.is_empty() {
                return derived;
            }
        }
        match &self.path {
            Some(path) => {
                let mut labels = Vec::with_capacity(path.topic_count() + 2);
                labels.push(START_LABEL.to_string());
                labels.extend(path.topics.iter().map(|t| t.name.clone()));
                labels.push(COMPLETE_LABEL.to_string());
                labels
            }
            None => Vec::new(),
        }
    }

    pub fn on_key(&mut self, code: KeyCode) -> Option<AppCommand> {
        match self.input_mode {
            InputMode::Normal => self.on_normal_key(code),
            InputMode::Editing => self.on_editing_key(code),
        }
    }

    fn on_normal_key(&mut self, code: KeyCode) -> Option<AppCommand> {
        match code {
            KeyCode::Char('q') => return Some(AppCommand::Quit),
            KeyCode::Char('g') => {
                self.input_mode = InputMode::Editing;
                self.status_message =
                    "Describe what you want to learn, Enter to generate.".to_string();
            }
            KeyCode::Char('j') | KeyCode::Down => self.move_cursor(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-1),
            KeyCode::Tab => {
                self.pane = match self.pane {
                    PaneFocus::Sidebar => PaneFocus::Roadmap,
                    PaneFocus::Roadmap => PaneFocus::Sidebar,
                };
            }
            KeyCode::Enter => {
                if self.pane == PaneFocus::Roadmap {
                    self.click_node();
                }
            }
            KeyCode::Esc => self.request_close(),
            KeyCode::Char('s') => return self.request_save(),
            KeyCode::Char('r') => self.show_raw = !self.show_raw,
            _ => {}
        }
        None
    }

    fn on_editing_key(&mut self, code: KeyCode) -> Option<AppCommand> {
        match code {
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.status_message = "Prompt editing cancelled.".to_string();
            }
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                return self.submit_prompt();
            }
            _ => {}
        }
        None
    }

    /// Validate and launch a generation. Exactly one may be in flight; a
    /// new one discards all output of the previous path before starting.
    fn submit_prompt(&mut self) -> Option<AppCommand> {
        if self.generating {
            self.status_message = "A generation is already in progress.".to_string();
            return None;
        }
        if let Some(msg) = validate_prompt(&self.input) {
            self.error = Some(msg.to_string());
            return None;
        }

        self.path = None;
        self.roadmap = None;
        self.error = None;
        self.error_raw = None;
        self.show_raw = false;
        self.node_cursor = 0;
        self.selection.reset_for_path();

        self.generating = true;
        self.generation_seq += 1;
        self.status_message = "Generating learning path...".to_string();
        Some(AppCommand::Generate {
            seq: self.generation_seq,
            prompt: self.input.trim().to_string(),
        })
    }

    pub fn on_generated(&mut self, seq: u64, outcome: GenerateOutcome) {
        // A superseded generation's output is discarded, never composited
        // with the current one.
        if seq != self.generation_seq {
            return;
        }
        self.generating = false;
        match outcome {
            GenerateOutcome::Success { path, flowchart } => {
                self.roadmap = Some(match flowchart {
                    Some(code) => Roadmap::from_flowchart(code),
                    None => Roadmap::from_path(&path),
                });
                self.selection.reset_for_path();
                self.status_message = format!("Generated \"{}\".", path.title);
                self.path = Some(path);
            }
            GenerateOutcome::FormatError { raw } => {
                self.error = Some(UNEXPECTED_FORMAT_MSG.to_string());
                self.error_raw = Some(raw);
                self.status_message = "Generation failed. Press 'r' for details.".to_string();
            }
            GenerateOutcome::TransportError { message } => {
                self.error = Some(message);
                self.status_message = "Generation failed.".to_string();
            }
        }
    }

    fn request_save(&mut self) -> Option<AppCommand> {
        if self.save_status == Some(SaveStatus::Saving) {
            return None;
        }
        let path = self.path.as_ref()?;
        self.save_status = Some(SaveStatus::Saving);
        self.save_status_until = None;
        Some(AppCommand::Save(Box::new(path.clone())))
    }

    pub fn on_save_finished(&mut self, result: Result<SaveReceipt, String>) {
        let ttl = Duration::from_millis(self.config.ui.save_status_ms);
        match result {
            Ok(receipt) => {
                self.save_status = Some(SaveStatus::Saved);
                self.status_message = format!("Saved learning path {}.", receipt.path_id);
            }
            Err(message) => {
                self.save_status = Some(SaveStatus::Failed);
                self.status_message = format!("Save failed: {message}");
            }
        }
        self.save_status_until = Some(Instant::now() + ttl);
    }

    fn move_cursor(&mut self, delta: i64) {
        match self.pane {
            PaneFocus::Sidebar => {
                let count = self.path.as_ref().map(|p| p.topic_count()).unwrap_or(0);
                if count == 0 {
                    return;
                }
                let current = self.selection.active_topic() as i64;
                let next = (current + delta).clamp(0, count as i64 - 1) as usize;
                self.selection.select_topic(next, count);
            }
            PaneFocus::Roadmap => {
                let count = self.node_labels().len();
                if count == 0 {
                    return;
                }
                let next = (self.node_cursor as i64 + delta).clamp(0, count as i64 - 1);
                self.node_cursor = next as usize;
            }
        }
    }

    /// Treat the cursor position in the roadmap pane as a node click.
    fn click_node(&mut self) {
        let labels = self.node_labels();
        let Some(label) = labels.get(self.node_cursor) else {
            return;
        };
        let Some(path) = &self.path else { return };
        click(&mut self.selection, path, self.roadmap.as_ref(), label);
        self.close_deadline = None;
    }

    /// Start the two-phase close; the focused label clears once the
    /// configured transition delay has elapsed.
    fn request_close(&mut self) {
        if self.selection.phase() == Phase::Zoomed {
            self.selection.close_detail();
            self.close_deadline =
                Some(Instant::now() + Duration::from_millis(self.config.ui.close_delay_ms));
        }
    }

    /// Periodic housekeeping between draws: deferred focus clear and the
    /// self-clearing save badge.
    pub fn on_tick(&mut self) {
        let now = Instant::now();
        if let Some(deadline) = self.close_deadline {
            if now >= deadline {
                self.selection.finish_close();
                self.close_deadline = None;
            }
        }
        if let Some(until) = self.save_status_until {
            if now >= until {
                self.save_status = None;
                self.save_status_until = None;
            }
        }
    }
}
