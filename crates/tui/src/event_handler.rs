//! Event handling utilities for the TUI.
//!
//! This module provides functions for handling different types of events:
//! - Core events (from the wizard controller)
//! - Keyboard events, routed through a chain of handlers that each return
//!   an [`EventStatus`]
//! - Bracketed paste into the focused text field

use aw_core::catalog::industries::INDUSTRIES;
use aw_core::catalog::voices::voices_for;
use aw_core::wizard::{StepItem, WizardController};
use aw_protocol::field_models::{Field, FieldUpdate};
use aw_protocol::ipc::{Event, Op};
use aw_protocol::profile_models::{Personality, VoiceGender, WorkingHours};
use aw_protocol::step_models::StepKind;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::ViewState;
use crate::event::EventStatus;
use crate::widgets::Toast;

const CREATIVITY_STEP: u8 = 10;
const MAX_TOKENS_STEP: u16 = 50;

/// What a key press asks the app to do.
#[derive(Debug, Default, PartialEq)]
pub struct KeyOutcome {
    /// Operations to apply to the controller, in order.
    pub ops: Vec<Op>,
    pub quit: bool,
}

/// Handle an event received from the controller.
pub fn handle_core_event(view: &mut ViewState, event: Event) {
    match event {
        Event::StepChanged { .. } => {
            view.focus = 0;
            view.refusal = None;
        }
        Event::AdvanceRefused { missing, .. } => {
            view.refusal = Some(missing);
        }
        Event::FieldChanged { field, .. } => {
            if let Some(missing) = view.refusal.as_mut() {
                missing.retain(|f| *f != field);
            }
        }
        Event::TemplateChooserOpened { .. } => {
            view.chooser_index = 0;
        }
        Event::Notification(notification) => {
            view.toasts.push(Toast::new(notification));
        }
        Event::FeatureChanged { .. }
        | Event::ChannelChanged { .. }
        | Event::AgentTypeOptionsChanged { .. }
        | Event::TemplateChooserClosed { .. }
        | Event::TemplateApplied { .. }
        | Event::TemplateNotFound { .. } => {}
    }
}

/// Handle a keyboard event from the user.
pub fn handle_keyboard_event(
    key_event: KeyEvent,
    view: &mut ViewState,
    wizard: &WizardController,
) -> KeyOutcome {
    let mut outcome = KeyOutcome::default();

    if key_event.kind != KeyEventKind::Press {
        return outcome;
    }

    let handlers: [fn(KeyEvent, &mut ViewState, &WizardController, &mut KeyOutcome) -> EventStatus;
        5] = [
        handle_quit_key,
        handle_chooser_key,
        handle_navigation_key,
        handle_review_key,
        handle_item_key,
    ];

    for handler in handlers {
        if handler(key_event, view, wizard, &mut outcome).is_consumed() {
            break;
        }
    }

    outcome
}

/// Turn pasted text into an edit of the focused text field.
pub fn handle_paste(text: &str, view: &ViewState, wizard: &WizardController) -> Option<Op> {
    if wizard.state().is_choosing_template() {
        return None;
    }
    let StepItem::Field(field) = focused_item(view, wizard)? else {
        return None;
    };
    let current = field.text_in(wizard.profile())?;
    let pasted = text.replace(['\r', '\n'], " ");
    FieldUpdate::text(field, format!("{current}{pasted}")).map(|update| Op::SetField { update })
}

/// Items of the current step that are visible right now.
pub fn visible_items(wizard: &WizardController) -> Vec<StepItem> {
    wizard
        .current_descriptor()
        .visible_items(wizard.state().show_advanced)
}

fn focused_item(view: &ViewState, wizard: &WizardController) -> Option<StepItem> {
    visible_items(wizard).get(view.focus).copied()
}

fn is_ctrl(key_event: &KeyEvent, c: char) -> bool {
    key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char(c)
}

fn handle_quit_key(
    key_event: KeyEvent,
    _view: &mut ViewState,
    _wizard: &WizardController,
    outcome: &mut KeyOutcome,
) -> EventStatus {
    if is_ctrl(&key_event, 'c') || is_ctrl(&key_event, 'q') {
        outcome.quit = true;
        return EventStatus::Consumed;
    }
    EventStatus::NotConsumed
}

/// The chooser is modal: it consumes every key while open.
fn handle_chooser_key(
    key_event: KeyEvent,
    view: &mut ViewState,
    wizard: &WizardController,
    outcome: &mut KeyOutcome,
) -> EventStatus {
    if !wizard.state().is_choosing_template() {
        return EventStatus::NotConsumed;
    }

    let templates = wizard.catalog().templates();
    match key_event.code {
        KeyCode::Up | KeyCode::BackTab => {
            view.chooser_index = view.chooser_index.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Tab => {
            if view.chooser_index + 1 < templates.len() {
                view.chooser_index += 1;
            }
        }
        KeyCode::Enter => {
            if let Some(template) = templates.get(view.chooser_index) {
                outcome.ops.push(Op::ChooseTemplate {
                    template_id: template.id.clone(),
                });
            }
        }
        KeyCode::Esc => outcome.ops.push(Op::CancelTemplateChooser),
        _ => {}
    }
    EventStatus::Consumed
}

fn handle_navigation_key(
    key_event: KeyEvent,
    view: &mut ViewState,
    wizard: &WizardController,
    outcome: &mut KeyOutcome,
) -> EventStatus {
    if is_ctrl(&key_event, 't') {
        outcome.ops.push(Op::OpenTemplateChooser);
        return EventStatus::Consumed;
    }
    if is_ctrl(&key_event, 'a') {
        outcome.ops.push(Op::ToggleAdvanced);
        return EventStatus::Consumed;
    }

    let count = visible_items(wizard).len();
    match key_event.code {
        KeyCode::Enter => outcome.ops.push(Op::Advance),
        KeyCode::Esc => outcome.ops.push(Op::Retreat),
        KeyCode::Tab | KeyCode::Down => {
            if count > 0 {
                view.focus = (view.focus + 1) % count;
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if count > 0 {
                view.focus = (view.focus + count - 1) % count;
            }
        }
        _ => return EventStatus::NotConsumed,
    }
    EventStatus::Consumed
}

fn handle_review_key(
    key_event: KeyEvent,
    _view: &mut ViewState,
    wizard: &WizardController,
    outcome: &mut KeyOutcome,
) -> EventStatus {
    if wizard.current_descriptor().kind != StepKind::Review {
        return EventStatus::NotConsumed;
    }

    let op = match key_event.code {
        KeyCode::Char('t') => Op::TestAgent,
        KeyCode::Char('p') => Op::TogglePreview,
        KeyCode::Char('u') | KeyCode::Char('P') => Op::PublishAgent,
        _ => return EventStatus::NotConsumed,
    };
    outcome.ops.push(op);
    EventStatus::Consumed
}

fn handle_item_key(
    key_event: KeyEvent,
    view: &mut ViewState,
    wizard: &WizardController,
    outcome: &mut KeyOutcome,
) -> EventStatus {
    let Some(item) = focused_item(view, wizard) else {
        return EventStatus::NotConsumed;
    };
    let profile = wizard.profile();

    let op = match item {
        StepItem::Field(field) if field.is_text() => {
            if key_event.modifiers.contains(KeyModifiers::CONTROL) {
                return EventStatus::NotConsumed;
            }
            let Some(current) = field.text_in(profile) else {
                return EventStatus::NotConsumed;
            };
            let mut value = current.to_string();
            match key_event.code {
                KeyCode::Char(c) => value.push(c),
                KeyCode::Backspace => {
                    if value.pop().is_none() {
                        return EventStatus::Consumed;
                    }
                }
                _ => return EventStatus::NotConsumed,
            }
            FieldUpdate::text(field, value).map(|update| Op::SetField { update })
        }
        StepItem::Field(field) => {
            let forward = match key_event.code {
                KeyCode::Right | KeyCode::Char(' ') => true,
                KeyCode::Left => false,
                _ => return EventStatus::NotConsumed,
            };
            next_choice(field, wizard, forward).map(|update| Op::SetField { update })
        }
        StepItem::Feature(feature) => match key_event.code {
            KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => Some(Op::SetFeature {
                feature,
                enabled: !profile.features.get(feature),
            }),
            _ => return EventStatus::NotConsumed,
        },
        StepItem::Channel(channel) => match key_event.code {
            KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => Some(Op::SetChannel {
                channel,
                enabled: !profile.channels.get(channel),
            }),
            _ => return EventStatus::NotConsumed,
        },
    };

    outcome.ops.extend(op);
    EventStatus::Consumed
}

/// Next value of a choice field when cycling forward or backward.
fn next_choice(field: Field, wizard: &WizardController, forward: bool) -> Option<FieldUpdate> {
    let profile = wizard.profile();

    match field {
        Field::Industry => {
            let ids: Vec<&str> = INDUSTRIES.iter().map(|i| i.id).collect();
            cycle(&ids, profile.business.industry.as_deref(), forward)
                .map(|id| FieldUpdate::Industry(id.to_string()))
        }
        Field::AgentType => {
            let ids: Vec<&str> = wizard.agent_type_options().iter().map(|t| t.id).collect();
            cycle(&ids, profile.agent.agent_type.as_deref(), forward)
                .map(|id| FieldUpdate::AgentType(id.to_string()))
        }
        Field::Voice => {
            let ids: Vec<&str> = voices_for(profile.voice.gender).iter().map(|v| v.id).collect();
            cycle(&ids, profile.voice.voice_id.as_deref(), forward)
                .map(|id| FieldUpdate::Voice(id.to_string()))
        }
        Field::Personality => cycle(&Personality::ALL, Some(profile.agent.personality), forward)
            .map(FieldUpdate::Personality),
        Field::VoiceGender => cycle(&VoiceGender::ALL, Some(profile.voice.gender), forward)
            .map(FieldUpdate::VoiceGender),
        Field::WorkingHours => {
            cycle(&WorkingHours::ALL, Some(profile.advanced.working_hours), forward)
                .map(FieldUpdate::WorkingHours)
        }
        Field::Creativity => {
            let current = profile.advanced.creativity;
            let next = if forward {
                current.saturating_add(CREATIVITY_STEP).min(100)
            } else {
                current.saturating_sub(CREATIVITY_STEP)
            };
            Some(FieldUpdate::Creativity(next))
        }
        Field::MaxTokens => {
            let current = profile.advanced.max_tokens;
            let next = if forward {
                current.saturating_add(MAX_TOKENS_STEP)
            } else {
                current.saturating_sub(MAX_TOKENS_STEP).max(MAX_TOKENS_STEP)
            };
            Some(FieldUpdate::MaxTokens(next))
        }
        _ => None,
    }
}

/// Neighbor of `current` in `options`, wrapping at both ends.
///
/// With no current value, forward picks the first option and backward the last.
fn cycle<T: Copy + PartialEq>(options: &[T], current: Option<T>, forward: bool) -> Option<T> {
    if options.is_empty() {
        return None;
    }
    let len = options.len();
    let next = match current.and_then(|c| options.iter().position(|o| *o == c)) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    Some(options[next])
}
