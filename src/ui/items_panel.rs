use crate::app::App;
use crate::core::battle::display_chance;
use crate::core::items::{modifier_status, Item, ModifierStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draws one card per leveled item, side by side
pub fn draw_items_panel(frame: &mut Frame, area: Rect, app: &App) {
    let items = app.store.items();
    if items.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = items
        .iter()
        .map(|_| Constraint::Ratio(1, items.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (index, item) in items.iter().enumerate() {
        draw_item_card(frame, chunks[index], app, item, index == app.selected_item);
    }
}

fn draw_item_card(frame: &mut Frame, area: Rect, app: &App, item: &Item, selected: bool) {
    let border_style = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!("{}: {}", item.item_type.name(), item.name));

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("Lvl {}", item.level),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "  Chance {}%  Last roll: {}",
                display_chance(item.level),
                item.last_chance
            )),
        ]),
        Line::from(item.description()),
        Line::from(format!("Uses: {}", item.uses)),
        Line::from(format!("Improves {}", item.strategy.describe())),
        Line::from(""),
    ];

    let step = app.store.settings().modifier_step_level;
    for (k, modifier) in app.store.modifiers().iter().enumerate() {
        let status = match modifier_status(item.level, k, step) {
            ModifierStatus::Active => {
                Span::styled("Active", Style::default().fg(Color::Green))
            }
            ModifierStatus::RequiresLevel(level) => Span::styled(
                format!("Requires level {}", level),
                Style::default().fg(Color::DarkGray),
            ),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", modifier.name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("lvl {}  ", modifier.level)),
            status,
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", modifier.description()),
            Style::default().fg(Color::Gray),
        )));
    }

    let card = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(card, area);
}
