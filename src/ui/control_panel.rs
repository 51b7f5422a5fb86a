use crate::app::App;
use crate::core::time_format::format_elapsed;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws battle count, elapsed time and the auto-battle switch
pub fn draw_control_panel(frame: &mut Frame, area: Rect, app: &App) {
    let store = &app.store;

    let auto = if app.auto.is_running() {
        Span::styled(
            "Running",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("Stopped", Style::default().fg(Color::DarkGray))
    };

    let text = vec![
        Line::from(vec![
            Span::raw("Battles: "),
            Span::styled(
                store.battles_count().to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::raw("Time:    "),
            Span::styled(
                format_elapsed(store.battles_count(), store.settings()),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::raw("Auto:    "),
            auto,
            Span::raw(format!(" ({} ms/win)", app.auto.interval().as_millis())),
        ]),
    ];

    let panel =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Panel"));

    frame.render_widget(panel, area);
}
