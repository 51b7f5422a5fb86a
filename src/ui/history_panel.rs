use crate::core::store::GameStore;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draws the history log, newest first. Only as many lines as fit are built.
pub fn draw_history_panel(frame: &mut Frame, area: Rect, store: &GameStore) {
    let block = Block::default().borders(Borders::ALL).title(format!(
        "History ({})",
        store.history().len()
    ));

    let visible = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = store
        .history()
        .iter()
        .take(visible)
        .map(|entry| Line::from(entry.as_str()))
        .collect();

    let history = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(history, area);
}
