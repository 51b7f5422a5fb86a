use crate::app::App;
use crate::core::settings::SettingKey;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the four settings, with the inline editor on the selected row
pub fn draw_settings_panel(frame: &mut Frame, area: Rect, app: &App) {
    let selected = app.selected_setting_key();

    let lines: Vec<Line> = SettingKey::all()
        .into_iter()
        .map(|key| {
            let is_selected = key == selected;
            let value = match (&app.setting_edit, is_selected) {
                (Some(buffer), true) => format!("{}_", buffer),
                _ => app.store.settings().get(key).to_string(),
            };
            let style = if is_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(if is_selected { "> " } else { "  " }, style),
                Span::styled(format!("{:<14}", key.label()), style),
                Span::styled(format!("{} {}", value, key.unit()), style),
            ])
        })
        .collect();

    let panel =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Settings"));

    frame.render_widget(panel, area);
}
