//! Template chooser list.

use aw_protocol::template_models::Template;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

/// Render the template list with the details of the selected entry.
pub fn render_template_chooser(frame: &mut Frame, area: Rect, templates: &[Template], selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let items: Vec<ListItem> = templates
        .iter()
        .map(|t| {
            let mut spans = vec![
                Span::raw(t.name.clone()),
                Span::styled(format!("  {}", t.category), Style::default().fg(Color::DarkGray)),
            ];
            if t.popular {
                spans.push(Span::styled("  Popular", Style::default().fg(Color::Yellow)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Choose a Template (Enter: use, Esc: cancel) "),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut list_state = ListState::default();
    if !templates.is_empty() {
        list_state.select(Some(selected.min(templates.len() - 1)));
    }
    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    let detail_block = Block::default().borders(Borders::ALL).title(" Details ");
    let detail = match templates.get(selected) {
        Some(t) => {
            let mut lines = vec![
                Line::from(Span::styled(t.name.clone(), Style::default().add_modifier(Modifier::BOLD))),
                Line::from(t.description.clone()),
                Line::from(""),
            ];
            lines.extend(t.features.iter().map(|f| Line::from(format!("  - {f}"))));
            if !t.notes.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    t.notes.clone(),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines
        }
        None => vec![Line::from("No templates available.")],
    };
    frame.render_widget(
        Paragraph::new(detail).block(detail_block).wrap(Wrap { trim: true }),
        chunks[1],
    );
}
