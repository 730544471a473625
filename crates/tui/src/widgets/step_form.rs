//! Generic form for one wizard step.
//!
//! Every step is rendered from its [`StepDescriptor`] item list, so a new
//! step only needs a new descriptor.

use aw_core::catalog::industries::{find_agent_type, find_industry};
use aw_core::catalog::voices::voices_for;
use aw_core::wizard::{StepItem, WizardController};
use aw_protocol::field_models::Field;
use aw_protocol::profile_models::AgentProfile;
use aw_protocol::step_models::StepKind;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const PLACEHOLDER: &str = "(empty)";

/// Label shown in front of an item.
pub fn item_label(item: StepItem) -> &'static str {
    match item {
        StepItem::Field(field) => field.label(),
        StepItem::Feature(feature) => feature.label(),
        StepItem::Channel(channel) => channel.label(),
    }
}

/// Display value of an item for `profile`.
pub fn item_value(item: StepItem, profile: &AgentProfile) -> String {
    match item {
        StepItem::Field(field) => field_value(field, profile),
        StepItem::Feature(feature) => checkbox(profile.features.get(feature)),
        StepItem::Channel(channel) => checkbox(profile.channels.get(channel)),
    }
}

fn checkbox(on: bool) -> String {
    if on { "[x]" } else { "[ ]" }.to_string()
}

fn field_value(field: Field, profile: &AgentProfile) -> String {
    if let Some(text) = field.text_in(profile) {
        return text.to_string();
    }

    match field {
        Field::Industry => profile
            .business
            .industry
            .as_deref()
            .map(|id| find_industry(id).map_or(id, |i| i.name).to_string())
            .unwrap_or_default(),
        Field::AgentType => profile
            .agent
            .agent_type
            .as_deref()
            .map(|id| find_agent_type(id).map_or(id, |t| t.name).to_string())
            .unwrap_or_default(),
        Field::Voice => profile
            .voice
            .voice_id
            .as_deref()
            .map(|id| {
                voices_for(profile.voice.gender)
                    .iter()
                    .find(|v| v.id == id)
                    .map_or_else(|| id.to_string(), |v| format!("{} ({})", v.name, v.provider))
            })
            .unwrap_or_default(),
        Field::Personality => profile.agent.personality.label().to_string(),
        Field::VoiceGender => profile.voice.gender.label().to_string(),
        Field::Creativity => format!("{}%", profile.advanced.creativity),
        Field::MaxTokens => format!("{} tokens", profile.advanced.max_tokens),
        Field::WorkingHours => profile.advanced.working_hours.label().to_string(),
        _ => String::new(),
    }
}

/// Render the current step's items.
///
/// # Arguments
/// * `frame` - The frame to render into
/// * `area` - The area to render the form in
/// * `wizard` - Source of the step descriptor and profile
/// * `focus` - Index of the focused visible item
/// * `refusal` - Fields reported missing by the last refused advance
pub fn render_step_form(
    frame: &mut Frame,
    area: Rect,
    wizard: &WizardController,
    focus: usize,
    refusal: Option<&[Field]>,
) {
    let descriptor = wizard.current_descriptor();
    let profile = wizard.profile();
    let show_advanced = wizard.state().show_advanced;
    let items = descriptor.visible_items(show_advanced);
    let required = descriptor.kind.required_fields();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", descriptor.title));

    let mut lines: Vec<Line> = Vec::new();

    if descriptor.kind == StepKind::TemplateIntro {
        lines.push(Line::from("Start from a template or build your agent from scratch."));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Ctrl+T: browse templates   Enter: start from scratch",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (i, item) in items.iter().enumerate() {
        let focused = i == focus;
        let mut label = item_label(*item).to_string();
        if matches!(item, StepItem::Field(f) if required.contains(f)) {
            label.push_str(" *");
        }

        let value = item_value(*item, profile);
        let is_choice = matches!(item, StepItem::Field(f) if !f.is_text());
        let value = match (value.is_empty(), focused, is_choice) {
            (true, false, _) => PLACEHOLDER.to_string(),
            (_, true, true) => format!("< {value} >"),
            (_, true, false) if matches!(item, StepItem::Field(_)) => format!("{value}_"),
            _ => value,
        };

        let marker = if focused { "> " } else { "  " };
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let value_style = if value == PLACEHOLDER {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{label:<24}"), label_style),
            Span::styled(value, value_style),
        ]));
    }

    if !descriptor.advanced_items.is_empty() {
        lines.push(Line::from(""));
        let hint = if show_advanced {
            "Ctrl+A: hide advanced settings"
        } else {
            "Ctrl+A: show advanced settings"
        };
        lines.push(Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))));
    }

    if let Some(missing) = refusal.filter(|m| !m.is_empty()) {
        let names: Vec<&str> = missing.iter().map(|f| f.label()).collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Please fill in: {}", names.join(", ")),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use aw_protocol::profile_models::{Feature, VoiceGender};

    #[test]
    fn test_field_values_use_display_names() {
        let mut profile = AgentProfile::default();
        profile.business.industry = Some("4".to_string());
        profile.agent.agent_type = Some("sales".to_string());
        profile.voice.gender = VoiceGender::Male;
        profile.voice.voice_id = Some("Voice 2".to_string());

        assert_eq!(item_value(StepItem::Field(Field::Industry), &profile), "Restaurant");
        assert_eq!(item_value(StepItem::Field(Field::AgentType), &profile), "Sales/Marketing");
        assert_eq!(item_value(StepItem::Field(Field::Voice), &profile), "Voice 2 (ElevenLabs)");
        assert_eq!(item_value(StepItem::Field(Field::Creativity), &profile), "70%");
        assert_eq!(item_value(StepItem::Field(Field::MaxTokens), &profile), "150 tokens");
    }

    #[test]
    fn test_feature_checkbox() {
        let profile = AgentProfile::default();
        assert_eq!(item_value(StepItem::Feature(Feature::AutoResponse), &profile), "[x]");
        assert_eq!(item_value(StepItem::Feature(Feature::VoiceMail), &profile), "[ ]");
    }
}
