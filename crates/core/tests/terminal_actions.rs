//! Integration tests for review-step actions and their notifications.

mod common;

use aw_protocol::ipc::{NotificationKind, Op};
use aw_protocol::step_models::WizardVariant;
use common::*;

#[test]
fn test_actions_ignored_before_review() {
    let mut h = harness(WizardVariant::Enhanced);

    assert!(!h.wizard.test_agent());
    assert!(!h.wizard.toggle_preview());
    assert!(!h.wizard.publish_agent());

    assert!(notification_titles(&h.drain()).is_empty());
    assert!(!h.wizard.state().preview_mode);
}

#[test]
fn test_review_actions_emit_notifications() {
    let mut h = harness(WizardVariant::Classic);
    advance_to_review(&mut h.wizard);
    h.drain();

    assert!(h.wizard.test_agent());
    assert!(h.wizard.toggle_preview());
    assert!(h.wizard.toggle_preview());
    assert!(h.wizard.publish_agent());

    assert_eq!(
        notification_titles(&h.drain()),
        vec![
            "Testing Agent",
            "Preview Mode",
            "Editing Mode",
            "Publishing Agent"
        ]
    );
}

#[test]
fn test_preview_flag_follows_toggle() {
    let mut h = harness(WizardVariant::Compact);
    advance_to_review(&mut h.wizard);

    h.wizard.handle(Op::TogglePreview);
    assert!(h.wizard.state().preview_mode);

    h.wizard.handle(Op::TogglePreview);
    assert!(!h.wizard.state().preview_mode);
}

#[test]
fn test_ops_route_to_actions() {
    let mut h = harness(WizardVariant::Enhanced);
    advance_to_review(&mut h.wizard);
    h.drain();

    h.wizard.handle(Op::TestAgent);
    h.wizard.handle(Op::PublishAgent);

    assert_eq!(
        notification_kinds(&h.drain()),
        vec![NotificationKind::Testing, NotificationKind::Publishing]
    );
}

#[test]
fn test_actions_ignored_while_choosing_on_review() {
    let mut h = harness(WizardVariant::Enhanced);
    advance_to_review(&mut h.wizard);
    h.wizard.open_template_chooser();
    h.drain();

    assert!(!h.wizard.publish_agent());
    assert!(notification_titles(&h.drain()).is_empty());
}

#[test]
fn test_summary_on_review() {
    let mut h = harness(WizardVariant::Classic);
    advance_to_review(&mut h.wizard);

    let summary = h.wizard.summary();

    assert_eq!(summary.business_name, "Acme Co");
    assert_eq!(summary.industry, "General Business");
    assert_eq!(summary.agent_type, "Virtual Receptionist");
    assert_eq!(summary.agent_name, "Alex");
    assert_eq!(summary.voice, "Voice 1 (female)");
    assert_eq!(summary.template, "Custom");
}
