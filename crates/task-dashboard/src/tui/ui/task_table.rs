/*
[INPUT]:  TuiApp task list, selection, and active cell editor
[OUTPUT]: Editable task table rendered into Ratatui frame
[POS]:    TUI UI task table rendering
[UPDATE]: When task columns change
*/

use ratatui::layout::Constraint;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use unicode_width::UnicodeWidthChar;

use crate::state::FieldKind;
use crate::tui::app::{CellEditor, TuiApp};
use crate::tui::runtime::{border_style, header_style};

const TITLE_MIN_WIDTH: u16 = 20;

pub(in crate::tui) fn draw_task_table(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &TuiApp,
) {
    let header = Row::new(
        FieldKind::ALL
            .iter()
            .map(|field| Cell::from(field.label()))
            .collect::<Vec<_>>(),
    )
    .style(header_style());

    let title_width = area.width.saturating_sub(2 + 9 + 8 + 11 + 3).max(TITLE_MIN_WIDTH) as usize;
    let focused = app.selected_field();

    let rows = app
        .state
        .tasks
        .iter()
        .enumerate()
        .map(|(row_index, task)| {
            let cells = FieldKind::ALL.iter().map(|field| {
                let editing = app
                    .editor
                    .as_ref()
                    .filter(|editor| editor.row == row_index && editor.field == *field);
                let is_focused = row_index == app.selected_row && *field == focused;

                match editing {
                    Some(editor) => Cell::from(editor_line(editor)),
                    None => {
                        let mut text = field.read(task);
                        if *field == FieldKind::Title {
                            text = fit_width(&text, title_width);
                        }
                        let style = if is_focused {
                            Style::default().add_modifier(Modifier::REVERSED)
                        } else {
                            Style::default()
                        };
                        Cell::from(Span::styled(text, style))
                    }
                }
            });
            let row = Row::new(cells.collect::<Vec<_>>());
            if task.validate().iter().any(|warning| warning != "title is empty") {
                row.style(Style::default().fg(Color::LightRed))
            } else {
                row
            }
        })
        .collect::<Vec<_>>();

    let title = format!(
        "Tasks ({}) | mode: {}",
        app.state.tasks.len(),
        app.state.mode
    );
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(title);
    if let Some(task) = app.state.tasks.get(app.selected_row) {
        let warnings = task.validate();
        if !warnings.is_empty() {
            block = block.title_bottom(Line::styled(
                format!(" {} ", warnings.join("; ")),
                Style::default().fg(Color::LightRed),
            ));
        }
    }

    let table = Table::new(
        rows,
        [
            Constraint::Min(TITLE_MIN_WIDTH),
            Constraint::Length(9),
            Constraint::Length(8),
            Constraint::Length(11),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Style::default().bg(Color::DarkGray))
    .highlight_symbol("> ");

    let mut state = TableState::default();
    if !app.state.tasks.is_empty() {
        state.select(Some(app.selected_row));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

fn editor_line(editor: &CellEditor) -> Line<'static> {
    let value = editor.input.value();
    let cursor = editor.input.cursor();
    let split = value
        .char_indices()
        .nth(cursor)
        .map(|(index, _)| index)
        .unwrap_or(value.len());
    let edit_style = Style::default().fg(Color::Black).bg(Color::Yellow);
    Line::from(vec![
        Span::styled(value[..split].to_string(), edit_style),
        Span::styled("▏", edit_style.add_modifier(Modifier::BOLD)),
        Span::styled(value[split..].to_string(), edit_style),
    ])
}

/// Truncate to `width` terminal columns, marking the cut with an ellipsis.
pub(in crate::tui) fn fit_width(text: &str, width: usize) -> String {
    let total: usize = text.chars().filter_map(UnicodeWidthChar::width).sum();
    if total <= width {
        return text.to_string();
    }
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_width_keeps_short_text() {
        assert_eq!(fit_width("Prepare report", 20), "Prepare report");
    }

    #[test]
    fn test_fit_width_truncates_wide_chars() {
        assert_eq!(fit_width("準備レポート", 7), "準備レ…");
        assert_eq!(fit_width("abcdefgh", 5), "abcd…");
    }
}
