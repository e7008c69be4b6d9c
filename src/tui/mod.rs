//! TUI module
//!
//! Terminal dashboard over the watched cert-manager and external-secrets
//! collections, built with ratatui.

mod app;
mod theme;
pub mod views;

pub use app::*;
pub use theme::*;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::watcher::{ResourceWatcher, WatchEvent};
use crate::workflow::ResourceDeleter;

/// Run the TUI application
pub async fn run_tui(
    settings: AppSettings,
    config: &Config,
    watcher: ResourceWatcher,
    mut event_rx: tokio::sync::mpsc::UnboundedReceiver<WatchEvent>,
    deleter: Arc<dyn ResourceDeleter>,
) -> Result<()> {
    tracing::debug!("Initializing TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.ui.enable_mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(settings, Theme::default());
    app.set_watcher(watcher);
    app.set_deleter(deleter);

    let tick = Duration::from_millis(config.ui.tick_rate_ms.max(10));
    let result = main_loop(&mut terminal, &mut app, &mut event_rx, tick).await;

    tracing::debug!("TUI shutting down");

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if config.ui.enable_mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    result
}

async fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_rx: &mut tokio::sync::mpsc::UnboundedReceiver<WatchEvent>,
    tick: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if let Some(job) = app.trigger_delete() {
            tracing::debug!(
                "Deleting {} {}",
                job.request.model.kind,
                job.request.resource.name()
            );
            tokio::spawn(async move {
                let result = job
                    .deleter
                    .delete(&job.request.model, &job.request.resource)
                    .await;
                if let Err(ref e) = result {
                    tracing::warn!("Delete of {} failed: {}", job.request.resource.name(), e);
                }
                let _ = job.tx.send(result);
            });
        }

        if let Some(result) = app.try_get_delete_result() {
            app.complete_delete(result);
        }

        // Input is polled off the runtime thread so spawned tasks keep running
        let input = tokio::task::spawn_blocking(move || -> io::Result<Option<Event>> {
            if event::poll(tick)? {
                Ok(Some(event::read()?))
            } else {
                Ok(None)
            }
        })
        .await??;

        if let Some(Event::Key(key)) = input {
            if key.kind == KeyEventKind::Press && app.handle_key(key) == Some(true) {
                return Ok(());
            }
        }

        while let Ok(event) = event_rx.try_recv() {
            app.apply_watch_event(event);
        }
    }
}
