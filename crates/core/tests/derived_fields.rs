//! Integration tests for derived-field recomputation.

mod common;

use aw_core::catalog::industries::{DEFAULT_AGENT_TYPES, HOTEL_AGENT_TYPES};
use aw_protocol::field_models::{Field, FieldUpdate};
use aw_protocol::ipc::{AgentTypeSet, Event};
use aw_protocol::profile_models::{Channel, Feature, FeatureFlags, VoiceGender};
use aw_protocol::step_models::WizardVariant;
use common::*;

const ACME_GREETING: &str = "Hi, this is Chris from Acme. How can I help you?";

#[test]
fn test_greeting_generated_from_names() {
    let mut h = harness(WizardVariant::Classic);
    h.wizard.set_field(FieldUpdate::AgentName("Chris".to_string()));
    h.wizard
        .set_field(FieldUpdate::BusinessName("Acme".to_string()));

    assert_eq!(h.wizard.profile().agent.greeting, ACME_GREETING);
    assert!(has_field_changed(&h.drain(), Field::Greeting));
}

#[test]
fn test_default_agent_name_depends_on_variant() {
    for (variant, name) in [
        (WizardVariant::Classic, "Alex"),
        (WizardVariant::Compact, "Chris"),
        (WizardVariant::Enhanced, "Chris"),
    ] {
        let mut h = harness(variant);
        assert_eq!(h.wizard.profile().agent.name, name, "{variant:?}");

        h.wizard
            .set_field(FieldUpdate::BusinessName("Acme".to_string()));
        assert_eq!(
            h.wizard.profile().agent.greeting,
            format!("Hi, this is {name} from Acme. How can I help you?")
        );
    }
}

#[test]
fn test_greeting_waits_for_both_names() {
    let mut h = harness(WizardVariant::Classic);
    h.wizard.set_field(FieldUpdate::AgentName(String::new()));
    h.wizard
        .set_field(FieldUpdate::BusinessName("Acme".to_string()));

    assert_eq!(h.wizard.profile().agent.greeting, "");
}

#[test]
fn test_regenerate_policy_overwrites_manual_greeting() {
    let mut h = harness(WizardVariant::Classic);
    h.wizard
        .set_field(FieldUpdate::BusinessName("Acme".to_string()));
    h.wizard
        .set_field(FieldUpdate::Greeting("Welcome to Acme!".to_string()));
    assert_eq!(h.wizard.profile().agent.greeting, "Welcome to Acme!");

    h.wizard.set_field(FieldUpdate::AgentName("Sam".to_string()));

    assert_eq!(
        h.wizard.profile().agent.greeting,
        "Hi, this is Sam from Acme. How can I help you?"
    );
}

#[test]
fn test_sticky_policy_preserves_manual_greeting() {
    let mut h = sticky_harness(WizardVariant::Classic);
    h.wizard
        .set_field(FieldUpdate::BusinessName("Acme".to_string()));
    h.wizard
        .set_field(FieldUpdate::Greeting("Welcome to Acme!".to_string()));

    h.wizard.set_field(FieldUpdate::AgentName("Sam".to_string()));
    assert_eq!(h.wizard.profile().agent.greeting, "Welcome to Acme!");

    // Clearing the greeting hands it back to the generator.
    h.wizard.set_field(FieldUpdate::Greeting(String::new()));
    h.wizard.set_field(FieldUpdate::AgentName("Chris".to_string()));
    assert_eq!(h.wizard.profile().agent.greeting, ACME_GREETING);
}

#[test]
fn test_hotel_industry_switches_agent_types() {
    let mut h = harness(WizardVariant::Classic);
    h.wizard.set_field(FieldUpdate::Industry("5".to_string()));

    assert_eq!(h.wizard.state().agent_type_set, AgentTypeSet::Hotel);
    assert_eq!(h.wizard.agent_type_options(), HOTEL_AGENT_TYPES);
    assert_eq!(h.wizard.agent_type_options().len(), 4);
    assert_eq!(
        h.wizard.profile().agent.agent_type.as_deref(),
        Some(HOTEL_AGENT_TYPES[0].id)
    );
    assert!(h.drain().iter().any(|e| matches!(
        e,
        Event::AgentTypeOptionsChanged {
            set: AgentTypeSet::Hotel,
            ..
        }
    )));
}

#[test]
fn test_leaving_hotel_restores_defaults() {
    let mut h = harness(WizardVariant::Classic);
    h.wizard.set_field(FieldUpdate::Industry("5".to_string()));
    h.wizard.set_field(FieldUpdate::AgentType(
        HOTEL_AGENT_TYPES[2].id.to_string(),
    ));

    h.wizard.set_field(FieldUpdate::Industry("2".to_string()));

    assert_eq!(h.wizard.agent_type_options(), DEFAULT_AGENT_TYPES);
    assert_eq!(
        h.wizard.profile().agent.agent_type.as_deref(),
        Some("receptionist")
    );
}

#[test]
fn test_industry_change_resets_manual_agent_type() {
    let mut h = harness(WizardVariant::Classic);
    h.wizard.set_field(FieldUpdate::Industry("1".to_string()));
    h.wizard
        .set_field(FieldUpdate::AgentType("sales".to_string()));

    h.wizard.set_field(FieldUpdate::Industry("4".to_string()));

    assert_eq!(
        h.wizard.profile().agent.agent_type.as_deref(),
        Some("receptionist")
    );
}

#[test]
fn test_reselecting_same_industry_keeps_agent_type() {
    let mut h = harness(WizardVariant::Classic);
    h.wizard.set_field(FieldUpdate::Industry("1".to_string()));
    h.wizard
        .set_field(FieldUpdate::AgentType("sales".to_string()));

    h.wizard.set_field(FieldUpdate::Industry("1".to_string()));

    assert_eq!(h.wizard.profile().agent.agent_type.as_deref(), Some("sales"));
}

#[test]
fn test_toggling_one_feature_leaves_others() {
    let mut h = harness(WizardVariant::Enhanced);

    for feature in Feature::ALL {
        let before: FeatureFlags = h.wizard.profile().features;
        let target = !before.get(feature);

        h.wizard.set_feature(feature, target);

        let after = h.wizard.profile().features;
        assert_eq!(after.get(feature), target);
        for other in Feature::ALL.into_iter().filter(|f| *f != feature) {
            assert_eq!(after.get(other), before.get(other), "{other:?} changed");
        }
    }
}

#[test]
fn test_feature_and_channel_toggles_are_announced() {
    let mut h = harness(WizardVariant::Classic);
    h.drain();

    h.wizard.set_feature(Feature::HumanHandoff, true);
    h.wizard.set_channel(Channel::Sms, true);
    // Already in that state: nothing to announce.
    h.wizard.set_feature(Feature::AutoResponse, true);
    h.wizard.set_channel(Channel::Email, true);

    let events = h.drain();
    assert_eq!(events.len(), 2);
    assert!(matches!(
        events[0],
        Event::FeatureChanged {
            feature: Feature::HumanHandoff,
            enabled: true,
            ..
        }
    ));
    assert!(matches!(
        events[1],
        Event::ChannelChanged {
            channel: Channel::Sms,
            enabled: true,
            ..
        }
    ));
}

#[test]
fn test_gender_switch_rearms_voice_gate() {
    let mut h = harness(WizardVariant::Enhanced);
    h.wizard
        .set_field(FieldUpdate::VoiceGender(VoiceGender::Male));
    h.wizard.set_field(FieldUpdate::Voice("Voice 2".to_string()));
    h.drain();

    h.wizard
        .set_field(FieldUpdate::VoiceGender(VoiceGender::Female));

    assert_eq!(h.wizard.profile().voice.voice_id, None);
    assert!(has_field_changed(&h.drain(), Field::Voice));
}
