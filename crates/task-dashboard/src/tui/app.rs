/*
[INPUT]:  DashboardState, Dispatcher, log buffer, export directory
[OUTPUT]: TuiApp holding view state plus cursor/editor/tab state
[POS]:    TUI app state - the only owner of DashboardState while the UI runs
[UPDATE]: When adding UI-only state or new user operations
*/

use std::path::PathBuf;

use task_dashboard_adapter::RequestKind;
use tokio::sync::mpsc;
use tui_input::{Input, InputRequest};

use crate::dispatch::Dispatcher;
use crate::export;
use crate::state::{Action, DashboardState, FieldKind, TaskField, reduce};
use crate::tui::LogBufferHandle;

const EFFORT_STEP: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tab {
    Tasks,
    Logs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResultView {
    Plain,
    Markdown,
}

/// In-progress edit of a single cell.
pub(crate) struct CellEditor {
    pub(crate) row: usize,
    pub(crate) field: FieldKind,
    pub(crate) input: Input,
}

pub(crate) struct TuiApp {
    pub(crate) state: DashboardState,
    pub(crate) selected_row: usize,
    pub(crate) selected_field: usize,
    pub(crate) editor: Option<CellEditor>,
    pub(crate) current_tab: Tab,
    pub(crate) result_view: ResultView,
    pub(crate) result_scroll: u16,
    pub(crate) status_message: String,
    pub(crate) log_buffer: LogBufferHandle,
    dispatcher: Dispatcher,
    completions: mpsc::UnboundedSender<Action>,
    download_dir: PathBuf,
    clipboard: Option<arboard::Clipboard>,
}

impl TuiApp {
    pub(crate) fn new(
        state: DashboardState,
        dispatcher: Dispatcher,
        completions: mpsc::UnboundedSender<Action>,
        log_buffer: LogBufferHandle,
        download_dir: PathBuf,
    ) -> Self {
        Self {
            state,
            selected_row: 0,
            selected_field: 0,
            editor: None,
            current_tab: Tab::Tasks,
            result_view: ResultView::Markdown,
            result_scroll: 0,
            status_message: "Ready".to_string(),
            log_buffer,
            dispatcher,
            completions,
            download_dir,
            clipboard: None,
        }
    }

    /// Fold an action into the view state.
    pub(crate) fn apply(&mut self, action: Action) {
        let finished = matches!(
            action,
            Action::RequestSucceeded(_) | Action::RequestFailed(_)
        );
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
        self.clamp_selection();
        if finished {
            self.result_scroll = 0;
            self.status_message = match &self.state.error {
                Some(_) => "Request failed".to_string(),
                None => "Done".to_string(),
            };
        }
    }

    pub(crate) fn selected_field(&self) -> FieldKind {
        FieldKind::ALL[self.selected_field % FieldKind::ALL.len()]
    }

    pub(crate) fn move_row(&mut self, delta: isize) {
        let len = self.state.tasks.len();
        if len == 0 {
            self.selected_row = 0;
            return;
        }
        let next = self.selected_row as isize + delta;
        self.selected_row = next.clamp(0, len as isize - 1) as usize;
    }

    pub(crate) fn move_field(&mut self, delta: isize) {
        let count = FieldKind::ALL.len() as isize;
        self.selected_field = (self.selected_field as isize + delta).rem_euclid(count) as usize;
    }

    fn clamp_selection(&mut self) {
        let len = self.state.tasks.len();
        if len == 0 {
            self.selected_row = 0;
        } else if self.selected_row >= len {
            self.selected_row = len - 1;
        }
    }

    pub(crate) fn add_task(&mut self) {
        self.apply(Action::AddTask);
        self.selected_row = self.state.tasks.len().saturating_sub(1);
        self.selected_field = 0;
        self.status_message = "Task added".to_string();
    }

    pub(crate) fn remove_selected(&mut self) {
        if self.state.tasks.is_empty() {
            return;
        }
        self.apply(Action::RemoveTask(self.selected_row));
        self.status_message = "Task removed".to_string();
    }

    pub(crate) fn cycle_mode(&mut self) {
        let mode = self.state.mode.cycle();
        self.apply(Action::SetMode(mode));
        self.status_message = format!("Mode: {mode}");
    }

    pub(crate) fn begin_edit(&mut self) {
        let Some(task) = self.state.tasks.get(self.selected_row) else {
            return;
        };
        let field = self.selected_field();
        self.editor = Some(CellEditor {
            row: self.selected_row,
            field,
            input: Input::new(field.read(task)),
        });
    }

    pub(crate) fn edit_input(&mut self, request: InputRequest) {
        if let Some(editor) = self.editor.as_mut() {
            editor.input.handle(request);
        }
    }

    pub(crate) fn cancel_edit(&mut self) {
        self.editor = None;
    }

    /// Parse the editor buffer; a parse failure leaves the task unchanged.
    pub(crate) fn commit_edit(&mut self) {
        let Some(editor) = self.editor.take() else {
            return;
        };
        match editor.field.parse(editor.input.value()) {
            Ok(field) => {
                self.apply(Action::UpdateTask {
                    index: editor.row,
                    field,
                });
                self.status_message = format!("{} updated", editor.field.label());
            }
            Err(message) => {
                self.status_message = message;
            }
        }
    }

    /// Step the focused numeric field up or down by one unit.
    pub(crate) fn step_selected(&mut self, up: bool) {
        let Some(task) = self.state.tasks.get(self.selected_row) else {
            return;
        };
        let field = match self.selected_field() {
            FieldKind::Title => return,
            FieldKind::Urgency => TaskField::Urgency(step_score(task.urgency, up)),
            FieldKind::Impact => TaskField::Impact(step_score(task.impact, up)),
            FieldKind::EffortHours => {
                let next = if up {
                    task.effort_hours + EFFORT_STEP
                } else {
                    task.effort_hours - EFFORT_STEP
                };
                TaskField::EffortHours(next.max(EFFORT_STEP))
            }
        };
        self.apply(Action::UpdateTask {
            index: self.selected_row,
            field,
        });
    }

    pub(crate) fn request(&mut self, kind: RequestKind) {
        let state = std::mem::take(&mut self.state);
        let (state, started) = self.dispatcher.start(state, kind, self.completions.clone());
        self.state = state;
        if started {
            self.status_message = format!("{} requested ({})", kind.label(), self.state.mode);
        }
    }

    pub(crate) fn toggle_result_view(&mut self) {
        self.result_view = match self.result_view {
            ResultView::Plain => ResultView::Markdown,
            ResultView::Markdown => ResultView::Plain,
        };
    }

    pub(crate) fn scroll_result(&mut self, delta: i32) {
        let next = i32::from(self.result_scroll) + delta;
        self.result_scroll = next.clamp(0, i32::from(u16::MAX)) as u16;
    }

    pub(crate) fn copy_result(&mut self) {
        if export::copy_result(&mut self.clipboard, &self.state) {
            self.status_message = "Result copied".to_string();
        }
    }

    pub(crate) fn download_result(&mut self) {
        if let Some(path) = export::download_result(&self.state, &self.download_dir) {
            self.status_message = format!("Saved {}", path.display());
        }
    }

    pub(crate) fn next_tab(&mut self) {
        self.current_tab = match self.current_tab {
            Tab::Tasks => Tab::Logs,
            Tab::Logs => Tab::Tasks,
        };
    }

    pub(crate) fn set_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
    }
}

fn step_score(value: u8, up: bool) -> u8 {
    use task_dashboard_adapter::{MAX_SCORE, MIN_SCORE};
    let next = if up {
        value.saturating_add(1)
    } else {
        value.saturating_sub(1)
    };
    next.clamp(MIN_SCORE, MAX_SCORE)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::tui::LogBuffer;
    use task_dashboard_adapter::{ClientConfig, DashboardClient, RequestMode, Task};

    pub(crate) fn test_app() -> (TuiApp, mpsc::UnboundedReceiver<Action>) {
        let client = DashboardClient::with_config_and_base_url(
            ClientConfig::default(),
            "http://127.0.0.1:9",
        )
        .expect("client init");
        let dispatcher = Dispatcher::new(Arc::new(client), true);
        let (tx, rx) = mpsc::unbounded_channel();
        let app = TuiApp::new(
            DashboardState::default(),
            dispatcher,
            tx,
            Arc::new(Mutex::new(LogBuffer::new(16))),
            std::env::temp_dir(),
        );
        (app, rx)
    }

    #[test]
    fn test_edit_commit_updates_only_focused_cell() {
        let (mut app, _rx) = test_app();
        app.move_row(1);
        app.move_field(1);
        app.begin_edit();
        app.edit_input(InputRequest::DeletePrevChar);
        app.edit_input(InputRequest::InsertChar('2'));
        app.commit_edit();

        assert_eq!(app.state.tasks[1].urgency, 2);
        assert_eq!(app.state.tasks[0], Task::starter_list()[0]);
        assert!(app.editor.is_none());
    }

    #[test]
    fn test_edit_parse_failure_keeps_task() {
        let (mut app, _rx) = test_app();
        app.move_field(3);
        app.begin_edit();
        app.edit_input(InputRequest::InsertChar('x'));
        app.commit_edit();

        assert_eq!(app.state.tasks, Task::starter_list());
        assert!(app.status_message.contains("effort"));
    }

    #[test]
    fn test_cancel_edit_discards_buffer() {
        let (mut app, _rx) = test_app();
        app.begin_edit();
        app.edit_input(InputRequest::InsertChar('!'));
        app.cancel_edit();
        assert_eq!(app.state.tasks[0].title, "Prepare report");
    }

    #[test]
    fn test_step_clamps_scores() {
        let (mut app, _rx) = test_app();
        app.move_row(1);
        app.move_field(1);
        app.step_selected(true);
        assert_eq!(app.state.tasks[1].urgency, 5);

        app.move_field(2);
        app.step_selected(false);
        app.step_selected(false);
        app.step_selected(false);
        assert_eq!(app.state.tasks[1].effort_hours, 1.5);
    }

    #[test]
    fn test_remove_last_row_moves_selection() {
        let (mut app, _rx) = test_app();
        app.move_row(1);
        app.remove_selected();
        assert_eq!(app.state.tasks.len(), 1);
        assert_eq!(app.selected_row, 0);

        app.remove_selected();
        app.remove_selected();
        assert!(app.state.tasks.is_empty());
        assert_eq!(app.selected_row, 0);
    }

    #[test]
    fn test_add_selects_new_row_and_cycle_mode() {
        let (mut app, _rx) = test_app();
        app.add_task();
        assert_eq!(app.selected_row, 2);
        app.cycle_mode();
        assert_eq!(app.state.mode, RequestMode::Heuristic);
    }

    #[test]
    fn test_copy_without_result_leaves_clipboard_closed() {
        let (mut app, _rx) = test_app();
        app.copy_result();
        assert!(app.clipboard.is_none());
        assert_eq!(app.status_message, "Ready");
    }

    #[test]
    fn test_move_field_wraps() {
        let (mut app, _rx) = test_app();
        app.move_field(-1);
        assert_eq!(app.selected_field(), FieldKind::EffortHours);
        app.move_field(1);
        assert_eq!(app.selected_field(), FieldKind::Title);
    }
}
