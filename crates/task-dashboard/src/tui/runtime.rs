/*
[INPUT]:  Initial DashboardState, Dispatcher, log buffer, TuiOptions
[OUTPUT]: Ratatui-based TUI run loop and shared styling helpers
[POS]:    TUI runtime loop
[UPDATE]: When changing TUI layout, event sources, or tick cadence
*/

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::LogBufferHandle;
use super::app::{Tab, TuiApp};
use super::events::handle_key_event;
use super::terminal::TerminalGuard;
use super::ui::*;
use crate::config::DashboardConfig;
use crate::dispatch::Dispatcher;
use crate::state::DashboardState;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);
pub const LOG_BUFFER_CAPACITY: usize = 2000;

enum UiEvent {
    Input(CrosstermEvent),
}

/// Runtime knobs for the interactive dashboard.
#[derive(Debug, Clone)]
pub struct TuiOptions {
    pub tick: Duration,
    pub download_dir: PathBuf,
}

impl TuiOptions {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            tick: Duration::from_millis(config.ui.tick_ms),
            download_dir: config.export.resolved_download_dir(),
        }
    }
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub async fn run_tui(
    state: DashboardState,
    dispatcher: Dispatcher,
    log_buffer: LogBufferHandle,
    options: TuiOptions,
) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    if event_tx.send(UiEvent::Input(event)).is_err() {
                        break;
                    }
                }
            }
        }
    });

    let mut app = TuiApp::new(
        state,
        dispatcher,
        completion_tx,
        log_buffer,
        options.download_dir,
    );
    info!(tasks = app.state.tasks.len(), mode = %app.state.mode, "dashboard started");

    let mut tick = tokio::time::interval(options.tick);
    let mut should_quit = false;

    while !should_quit {
        tokio::select! {
            _ = tick.tick() => {}
            maybe_event = event_rx.recv() => {
                match maybe_event {
                    Some(UiEvent::Input(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                        if handle_key_event(&mut app, key) {
                            should_quit = true;
                        }
                    }
                    Some(_) => {}
                    None => should_quit = true,
                }
            }
            Some(action) = completion_rx.recv() => {
                debug!("request completed");
                app.apply(action);
            }
        }

        terminal.draw(|frame| draw_ui(frame, &app))?;
    }

    input_shutdown.cancel();
    info!("dashboard stopped");
    Ok(())
}

fn draw_ui(frame: &mut ratatui::Frame, app: &TuiApp) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(area);

    match app.current_tab {
        Tab::Tasks => {
            let table_height = (app.state.tasks.len() as u16).saturating_add(4).max(6);
            let content = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(table_height), Constraint::Min(5)])
                .split(layout[0]);
            draw_task_table(frame, content[0], app);
            draw_result(frame, content[1], app);
        }
        Tab::Logs => draw_logs(frame, layout[0], &app.log_buffer),
    }

    draw_tabs(frame, layout[1], app.current_tab);
    draw_footer(frame, layout[2], app);
}
