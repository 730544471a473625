//! Progress header: step titles plus a completion gauge.

use aw_core::wizard::StepSequence;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

/// Render the step strip and the gauge for 1-based `current`.
///
/// # Arguments
/// * `frame` - The frame to render into
/// * `area` - Needs at least 5 rows
/// * `sequence` - Steps of the running variant
/// * `current` - Current step number
pub fn render_step_indicator(frame: &mut Frame, area: Rect, sequence: &StepSequence, current: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Create AI Agent ({}) ", sequence.variant().as_str()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let mut spans = Vec::with_capacity(sequence.len() * 2);
    for (i, step) in sequence.steps().iter().enumerate() {
        let number = i + 1;
        let style = if number == current {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else if number < current {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if i > 0 {
            spans.push(Span::raw(" > "));
        }
        spans.push(Span::styled(format!("{number}. {}", step.title), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let total = sequence.len().max(1);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(current.min(total) as f64 / total as f64)
        .label(format!("Step {current} of {total}"));
    frame.render_widget(gauge, chunks[1]);
}
