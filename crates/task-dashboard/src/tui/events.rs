/*
[INPUT]:  Crossterm key events
[OUTPUT]: TuiApp operations (edit, add/remove, mode, requests, export)
[POS]:    TUI key routing
[UPDATE]: When changing keybindings
*/

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use task_dashboard_adapter::RequestKind;
use tui_input::InputRequest;

use super::app::{Tab, TuiApp};

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) fn handle_key_event(app: &mut TuiApp, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    if app.editor.is_some() {
        handle_editor_key(app, key);
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Tab => app.next_tab(),
        KeyCode::Char('1') => app.set_tab(Tab::Tasks),
        KeyCode::Char('2') => app.set_tab(Tab::Logs),
        KeyCode::Up | KeyCode::Char('k') => app.move_row(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_row(1),
        KeyCode::Left | KeyCode::Char('h') => app.move_field(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_field(1),
        KeyCode::Enter | KeyCode::Char('e') => app.begin_edit(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.step_selected(true),
        KeyCode::Char('-') => app.step_selected(false),
        KeyCode::Char('a') => app.add_task(),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),
        KeyCode::Char('m') => app.cycle_mode(),
        KeyCode::Char('s') => app.request(RequestKind::Suggest),
        KeyCode::Char('A') => app.request(RequestKind::Automate),
        KeyCode::Char('v') => app.toggle_result_view(),
        KeyCode::Char('c') => app.copy_result(),
        KeyCode::Char('w') => app.download_result(),
        KeyCode::PageDown => app.scroll_result(5),
        KeyCode::PageUp => app.scroll_result(-5),
        _ => {}
    }
    false
}

fn handle_editor_key(app: &mut TuiApp, key: KeyEvent) {
    let request = match key.code {
        KeyCode::Enter => {
            app.commit_edit();
            return;
        }
        KeyCode::Esc => {
            app.cancel_edit();
            return;
        }
        KeyCode::Char(ch) => InputRequest::InsertChar(ch),
        KeyCode::Backspace => InputRequest::DeletePrevChar,
        KeyCode::Delete => InputRequest::DeleteNextChar,
        KeyCode::Left => InputRequest::GoToPrevChar,
        KeyCode::Right => InputRequest::GoToNextChar,
        KeyCode::Home => InputRequest::GoToStart,
        KeyCode::End => InputRequest::GoToEnd,
        _ => return,
    };
    app.edit_input(request);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::tests::test_app;

    fn press(app: &mut TuiApp, code: KeyCode) -> bool {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut TuiApp, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, _rx) = test_app();
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn test_q_inside_editor_is_text() {
        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "quarterly review");
        assert!(!press(&mut app, KeyCode::Enter));
        assert_eq!(app.state.tasks[2].title, "quarterly review");
    }

    #[test]
    fn test_keyboard_edit_of_impact() {
        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "1");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.tasks[0].impact, 1);
    }

    #[test]
    fn test_esc_cancels_edit() {
        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, " draft");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state.tasks[0].title, "Prepare report");
    }

    #[test]
    fn test_delete_and_mode_keys() {
        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.state.tasks.len(), 1);
        assert_eq!(app.state.tasks[0].title, "Customer meeting");

        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.state.mode.as_str(), "llm");
    }
}
