//! Assertion helpers over emitted events.

use aw_protocol::field_models::Field;
use aw_protocol::ipc::{Event, NotificationKind};

/// Whether `events` contains a FieldChanged event for `field`.
#[allow(dead_code)]
pub fn has_field_changed(events: &[Event], field: Field) -> bool {
    events
        .iter()
        .any(|e| matches!(e, Event::FieldChanged { field: f, .. } if *f == field))
}

/// Titles of every notification in `events`, in order.
#[allow(dead_code)]
pub fn notification_titles(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::Notification(n) => Some(n.title.clone()),
            _ => None,
        })
        .collect()
}

/// Kinds of every notification in `events`, in order.
#[allow(dead_code)]
pub fn notification_kinds(events: &[Event]) -> Vec<NotificationKind> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::Notification(n) => Some(n.kind),
            _ => None,
        })
        .collect()
}

/// `(from, to)` pairs of every StepChanged event, in order.
#[allow(dead_code)]
pub fn step_changes(events: &[Event]) -> Vec<(usize, usize)> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::StepChanged { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
        .collect()
}
