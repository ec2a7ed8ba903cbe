/*
[INPUT]:  Current tab and TuiApp status
[OUTPUT]: Tab bar and hotkey footer
[POS]:    TUI UI layout chrome
[UPDATE]: When adding tabs or hotkeys
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};

use crate::tui::app::{Tab, TuiApp};
use crate::tui::runtime::{border_style, header_style};

pub(in crate::tui) fn draw_tabs(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    current_tab: Tab,
) {
    let titles = vec![Line::from("Tasks"), Line::from("Logs")];
    let selected = match current_tab {
        Tab::Tasks => 0,
        Tab::Logs => 1,
    };

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Tabs"),
        )
        .highlight_style(header_style())
        .select(selected);

    frame.render_widget(tabs, area);
}

pub(in crate::tui) fn draw_footer(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &TuiApp,
) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let line1 = if app.editor.is_some() {
        Line::from(vec![
            Span::styled("[Enter]", key_style),
            Span::raw(" Save  "),
            Span::styled("[Esc]", key_style),
            Span::raw(" Cancel"),
        ])
    } else {
        Line::from(vec![
            Span::styled("[Arrows]", key_style),
            Span::raw(" Move  "),
            Span::styled("[Enter]", key_style),
            Span::raw(" Edit  "),
            Span::styled("[+/-]", key_style),
            Span::raw(" Step  "),
            Span::styled("[a/d]", key_style),
            Span::raw(" Add/Remove  "),
            Span::styled("[m]", key_style),
            Span::raw(" Mode  "),
            Span::styled("[s]", key_style),
            Span::raw(" Suggest  "),
            Span::styled("[A]", key_style),
            Span::raw(" Automate"),
        ])
    };

    let status = if app.state.loading {
        Span::styled(
            "Working...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw(app.status_message.clone())
    };
    let line2 = Line::from(vec![
        Span::styled("[v]", key_style),
        Span::raw(" View  "),
        Span::styled("[c]", key_style),
        Span::raw(" Copy  "),
        Span::styled("[w]", key_style),
        Span::raw(" Save  "),
        Span::styled("[Tab]", key_style),
        Span::raw(" Logs  "),
        Span::styled("[q]", key_style),
        Span::raw(" Quit  "),
        Span::raw("Status: "),
        status,
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Hotkeys");
    let widget = Paragraph::new(Text::from(vec![line1, line2]))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}
