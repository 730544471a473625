//! Field identifiers and typed field updates.
//!
//! [`Field`] names an editable value of an [`AgentProfile`]; [`FieldUpdate`]
//! carries a new value for exactly one of them. Writing through
//! `FieldUpdate` keeps every edit typed instead of going through a string map.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::profile_models::{AgentProfile, Personality, VoiceGender, WorkingHours};

/// An editable scalar field of the agent profile.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    BusinessName,
    BusinessDescription,
    Website,
    Industry,
    AgentType,
    AgentName,
    Greeting,
    Personality,
    PhoneNumber,
    Voice,
    VoiceGender,
    Creativity,
    MaxTokens,
    WorkingHours,
    Timezone,
}

impl Field {
    /// Form label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::BusinessName => "Business Name",
            Field::BusinessDescription => "Business Description",
            Field::Website => "Website",
            Field::Industry => "Industry",
            Field::AgentType => "Agent Type",
            Field::AgentName => "Agent Name",
            Field::Greeting => "Greeting Message",
            Field::Personality => "Personality",
            Field::PhoneNumber => "Phone Number",
            Field::Voice => "Voice",
            Field::VoiceGender => "Voice Gender",
            Field::Creativity => "Response Creativity",
            Field::MaxTokens => "Max Response Length",
            Field::WorkingHours => "Working Hours",
            Field::Timezone => "Timezone",
        }
    }

    /// Whether the field is edited as free text (as opposed to a choice).
    pub fn is_text(self) -> bool {
        matches!(
            self,
            Field::BusinessName
                | Field::BusinessDescription
                | Field::Website
                | Field::AgentName
                | Field::Greeting
                | Field::PhoneNumber
                | Field::Timezone
        )
    }

    /// Whether the field currently holds an empty value in `profile`.
    ///
    /// Choice fields with a default value are never empty.
    pub fn is_empty_in(self, profile: &AgentProfile) -> bool {
        match self {
            Field::BusinessName => profile.business.name.is_empty(),
            Field::BusinessDescription => profile.business.description.is_empty(),
            Field::Website => profile.business.website.is_empty(),
            Field::Industry => is_blank(profile.business.industry.as_deref()),
            Field::AgentType => is_blank(profile.agent.agent_type.as_deref()),
            Field::AgentName => profile.agent.name.is_empty(),
            Field::Greeting => profile.agent.greeting.is_empty(),
            Field::PhoneNumber => profile.agent.phone_number.is_empty(),
            Field::Voice => is_blank(profile.voice.voice_id.as_deref()),
            Field::Timezone => profile.advanced.timezone.is_empty(),
            Field::Personality
            | Field::VoiceGender
            | Field::Creativity
            | Field::MaxTokens
            | Field::WorkingHours => false,
        }
    }

    /// Current text of a free-text field. `None` for choice fields.
    pub fn text_in(self, profile: &AgentProfile) -> Option<&str> {
        let text = match self {
            Field::BusinessName => &profile.business.name,
            Field::BusinessDescription => &profile.business.description,
            Field::Website => &profile.business.website,
            Field::AgentName => &profile.agent.name,
            Field::Greeting => &profile.agent.greeting,
            Field::PhoneNumber => &profile.agent.phone_number,
            Field::Timezone => &profile.advanced.timezone,
            _ => return None,
        };
        Some(text.as_str())
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

/// A new value for one [`Field`].
///
/// ```json
/// { "field": "businessName", "value": "Acme Co" }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldUpdate {
    BusinessName(String),
    BusinessDescription(String),
    Website(String),
    Industry(String),
    AgentType(String),
    AgentName(String),
    Greeting(String),
    Personality(Personality),
    PhoneNumber(String),
    Voice(String),
    VoiceGender(VoiceGender),
    Creativity(u8),
    MaxTokens(u16),
    WorkingHours(WorkingHours),
    Timezone(String),
}

impl FieldUpdate {
    /// The field this update writes to.
    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::BusinessName(_) => Field::BusinessName,
            FieldUpdate::BusinessDescription(_) => Field::BusinessDescription,
            FieldUpdate::Website(_) => Field::Website,
            FieldUpdate::Industry(_) => Field::Industry,
            FieldUpdate::AgentType(_) => Field::AgentType,
            FieldUpdate::AgentName(_) => Field::AgentName,
            FieldUpdate::Greeting(_) => Field::Greeting,
            FieldUpdate::Personality(_) => Field::Personality,
            FieldUpdate::PhoneNumber(_) => Field::PhoneNumber,
            FieldUpdate::Voice(_) => Field::Voice,
            FieldUpdate::VoiceGender(_) => Field::VoiceGender,
            FieldUpdate::Creativity(_) => Field::Creativity,
            FieldUpdate::MaxTokens(_) => Field::MaxTokens,
            FieldUpdate::WorkingHours(_) => Field::WorkingHours,
            FieldUpdate::Timezone(_) => Field::Timezone,
        }
    }

    /// Build a text update for a free-text field.
    ///
    /// Returns `None` when `field` is not a text field.
    pub fn text(field: Field, value: String) -> Option<Self> {
        let update = match field {
            Field::BusinessName => FieldUpdate::BusinessName(value),
            Field::BusinessDescription => FieldUpdate::BusinessDescription(value),
            Field::Website => FieldUpdate::Website(value),
            Field::AgentName => FieldUpdate::AgentName(value),
            Field::Greeting => FieldUpdate::Greeting(value),
            Field::PhoneNumber => FieldUpdate::PhoneNumber(value),
            Field::Timezone => FieldUpdate::Timezone(value),
            _ => return None,
        };
        Some(update)
    }

    /// Write the value into `profile`. No validation or derivation happens here.
    pub fn apply_to(self, profile: &mut AgentProfile) {
        match self {
            FieldUpdate::BusinessName(v) => profile.business.name = v,
            FieldUpdate::BusinessDescription(v) => profile.business.description = v,
            FieldUpdate::Website(v) => profile.business.website = v,
            FieldUpdate::Industry(v) => profile.business.industry = Some(v),
            FieldUpdate::AgentType(v) => profile.agent.agent_type = Some(v),
            FieldUpdate::AgentName(v) => profile.agent.name = v,
            FieldUpdate::Greeting(v) => profile.agent.greeting = v,
            FieldUpdate::Personality(v) => profile.agent.personality = v,
            FieldUpdate::PhoneNumber(v) => profile.agent.phone_number = v,
            FieldUpdate::Voice(v) => profile.voice.voice_id = Some(v),
            FieldUpdate::VoiceGender(v) => profile.voice.gender = v,
            FieldUpdate::Creativity(v) => profile.advanced.creativity = v.min(100),
            FieldUpdate::MaxTokens(v) => profile.advanced.max_tokens = v,
            FieldUpdate::WorkingHours(v) => profile.advanced.working_hours = v,
            FieldUpdate::Timezone(v) => profile.advanced.timezone = v,
        }
    }
}
