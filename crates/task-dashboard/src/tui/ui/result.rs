/*
[INPUT]:  DashboardState result/error/loading and the chosen ResultView
[OUTPUT]: Result panel rendered into Ratatui frame
[POS]:    TUI UI result panel rendering
[UPDATE]: When changing result presentation
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use task_dashboard_adapter::ApiOutcome;

use crate::markdown;
use crate::tui::app::{ResultView, TuiApp};
use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_result(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &TuiApp,
) {
    let state = &app.state;
    let view_label = match app.result_view {
        ResultView::Plain => "text",
        ResultView::Markdown => "markdown",
    };
    let title = match state.in_flight {
        Some(kind) if state.loading => format!("Result | {} in progress...", kind.label()),
        _ => format!("Result | {view_label}"),
    };

    let text = if let Some(error) = state.error.as_deref() {
        Text::from(vec![
            Line::from(Span::styled(
                "Request failed",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(Color::Red),
            )),
        ])
    } else {
        match state.result.as_ref() {
            None => Text::from(Line::from(Span::styled(
                "No result yet. Press [s] to suggest or [A] to automate.",
                Style::default().fg(Color::DarkGray),
            ))),
            // Raw payloads are always shown as preformatted JSON.
            Some(outcome @ ApiOutcome::Raw(_)) => Text::raw(outcome.display_text()),
            Some(ApiOutcome::Text(body)) => match app.result_view {
                ResultView::Plain => Text::raw(body.clone()),
                ResultView::Markdown => markdown::render(body),
            },
        }
    };

    let widget = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(title),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.result_scroll, 0));
    frame.render_widget(widget, area);
}
