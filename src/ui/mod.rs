mod control_panel;
mod history_panel;
mod items_panel;
mod settings_panel;

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let size = frame.size();

    // Title, body, key help
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(size);

    let title = Paragraph::new("Game System Calculator")
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    frame.render_widget(title, v_chunks[0]);

    // History on the left, everything else on the right
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(v_chunks[1]);

    history_panel::draw_history_panel(frame, h_chunks[0], &app.store);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(h_chunks[1]);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(right[0]);

    control_panel::draw_control_panel(frame, top[0], app);
    settings_panel::draw_settings_panel(frame, top[1], app);
    items_panel::draw_items_panel(frame, right[1], app);

    draw_footer(frame, v_chunks[2], app);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let help = if app.is_editing() {
        "[0-9 . -] type  [Backspace] delete  [Enter] save  [Esc] cancel"
    } else {
        "[w] win  [1-4] +10/+100/+1000/+5000  [a] auto  [r] reset  [Tab] item  [+] +25 lvl  [↑↓ e] settings  [q] quit"
    };

    let footer = Paragraph::new(Line::from(help))
        .block(Block::default().borders(Borders::ALL).title("Controls"))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
