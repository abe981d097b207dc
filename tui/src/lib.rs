//! Interactive terminal front end for lpgen.
//!
//! One synchronous draw loop owns all state; generation and save requests
//! run as spawned tasks and report back through an mpsc channel polled
//! between draws, so no two selection transitions are ever in flight at
//! once.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::warn;

mod app;
mod ui;

use app::{App, AppCommand, AppEvent};
use lpgen_client::PathClient;
use lpgen_config::Config;

pub async fn run_tui(config: Config) -> Result<()> {
    let client = PathClient::new(&config.api)?;
    let user_id = config.api.user_id.clone();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, App::new(config), client, user_id).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    client: PathClient,
    user_id: Option<String>,
) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<AppEvent>();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        while let Ok(event) = rx.try_recv() {
            match event {
                AppEvent::Generated { seq, outcome } => app.on_generated(seq, outcome),
                AppEvent::SaveFinished(result) => app.on_save_finished(result),
            }
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match app.on_key(key.code) {
                        Some(AppCommand::Quit) => break,
                        Some(AppCommand::Generate { seq, prompt }) => {
                            let tx = tx.clone();
                            let client = client.clone();
                            let user = user_id.clone();
                            tokio::spawn(async move {
                                let outcome = match client
                                    .generate(&prompt, user.as_deref())
                                    .await
                                {
                                    Ok(outcome) => outcome,
                                    Err(err) => {
                                        // Local rejection; surface as state.
                                        warn!(%err, "generation rejected");
                                        lpgen_client::GenerateOutcome::TransportError {
                                            message: err.to_string(),
                                        }
                                    }
                                };
                                let _ = tx.send(AppEvent::Generated { seq, outcome });
                            });
                        }
                        Some(AppCommand::Save(path)) => {
                            let tx = tx.clone();
                            let client = client.clone();
                            let user = user_id.clone();
                            tokio::spawn(async move {
                                let result = client
                                    .save(&path, user.as_deref())
                                    .await
                                    .map_err(|e| e.to_string());
                                let _ = tx.send(AppEvent::SaveFinished(result));
                            });
                        }
                        None => {}
                    }
                }
            }
        }

        app.on_tick();
    }

    Ok(())
}
