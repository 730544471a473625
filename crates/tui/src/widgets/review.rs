//! Review screen: profile summary table and terminal actions.

use aw_core::wizard::ProfileSummary;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

/// Render the summary and the action bar.
///
/// # Arguments
/// * `frame` - The frame to render into
/// * `area` - The area to render the review in
/// * `title` - Title of the review step
/// * `summary` - Facts to show
/// * `preview_mode` - Whether preview mode is on
pub fn render_review(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    summary: &ProfileSummary,
    preview_mode: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let rows: Vec<Row> = summary
        .rows()
        .into_iter()
        .map(|(label, value)| {
            Row::new(vec![
                Cell::from(label).style(Style::default().fg(Color::Cyan)),
                Cell::from(value),
            ])
        })
        .collect();

    let mode = if preview_mode { "preview" } else { "editing" };
    let table = Table::new(rows, [Constraint::Length(16), Constraint::Min(10)]).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} ({mode}) ")),
    );
    frame.render_widget(table, chunks[0]);

    let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let preview_label = if preview_mode { " edit  " } else { " preview  " };
    let actions = Line::from(vec![
        Span::styled("t", key),
        Span::raw(" test agent  "),
        Span::styled("p", key),
        Span::raw(preview_label),
        Span::styled("u", key),
        Span::raw(" publish  "),
        Span::styled("Esc", key),
        Span::raw(" back"),
    ]);
    frame.render_widget(
        Paragraph::new(actions).block(Block::default().borders(Borders::ALL).title(" Actions ")),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn summary() -> ProfileSummary {
        ProfileSummary {
            business_name: "Acme Co".to_string(),
            industry: "General Business".to_string(),
            agent_type: "Virtual Receptionist".to_string(),
            agent_name: "Chris".to_string(),
            greeting: "Hi".to_string(),
            voice: "Voice 1 (female)".to_string(),
            personality: "Professional",
            features_enabled: 3,
            channels: vec!["Voice Calls"],
            template: "Custom".to_string(),
        }
    }

    #[test]
    fn test_review_shows_summary_rows() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_review(frame, area, "Review & Launch", &summary(), false);
            })
            .unwrap();

        let content = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        assert!(content.contains("Acme Co"));
        assert!(content.contains("3 enabled"));
        assert!(content.contains("publish"));
    }
}
