//! Agent profile models.
//!
//! This module defines the typed configuration record that the wizard fills
//! in step by step. Every field the wizard can edit lives here, grouped by the
//! screen that owns it.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Personality style the agent speaks with.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, TS)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    #[default]
    Professional,
    Friendly,
    Casual,
    Formal,
}

impl Personality {
    /// All personalities in display order.
    pub const ALL: [Personality; 4] = [
        Personality::Professional,
        Personality::Friendly,
        Personality::Casual,
        Personality::Formal,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Personality::Professional => "Professional",
            Personality::Friendly => "Friendly",
            Personality::Casual => "Casual",
            Personality::Formal => "Formal",
        }
    }
}

/// Gender grouping used by the voice catalog.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, TS)]
#[serde(rename_all = "lowercase")]
pub enum VoiceGender {
    #[default]
    Female,
    Male,
}

impl VoiceGender {
    pub const ALL: [VoiceGender; 2] = [VoiceGender::Female, VoiceGender::Male];

    pub fn label(self) -> &'static str {
        match self {
            VoiceGender::Female => "female",
            VoiceGender::Male => "male",
        }
    }
}

/// Hours during which the agent answers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, TS)]
pub enum WorkingHours {
    #[serde(rename = "24-7")]
    AlwaysOn,
    #[default]
    #[serde(rename = "9-17")]
    NineToFive,
    #[serde(rename = "8-18")]
    EightToSix,
    #[serde(rename = "custom")]
    Custom,
}

impl WorkingHours {
    pub const ALL: [WorkingHours; 4] = [
        WorkingHours::AlwaysOn,
        WorkingHours::NineToFive,
        WorkingHours::EightToSix,
        WorkingHours::Custom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WorkingHours::AlwaysOn => "24/7 Available",
            WorkingHours::NineToFive => "9 AM - 5 PM",
            WorkingHours::EightToSix => "8 AM - 6 PM",
            WorkingHours::Custom => "Custom Hours",
        }
    }
}

/// One of the fixed optional agent capabilities.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    AutoResponse,
    KnowledgeBase,
    HumanHandoff,
    Analytics,
    VoiceMail,
    Escalation,
}

impl Feature {
    /// Every feature, in display order.
    pub const ALL: [Feature; 6] = [
        Feature::AutoResponse,
        Feature::KnowledgeBase,
        Feature::HumanHandoff,
        Feature::Analytics,
        Feature::VoiceMail,
        Feature::Escalation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Feature::AutoResponse => "Auto Response",
            Feature::KnowledgeBase => "Knowledge Base",
            Feature::HumanHandoff => "Human Handoff",
            Feature::Analytics => "Analytics",
            Feature::VoiceMail => "Voicemail",
            Feature::Escalation => "Escalation",
        }
    }

    /// Voicemail and escalation live in the advanced panel.
    pub fn is_advanced(self) -> bool {
        matches!(self, Feature::VoiceMail | Feature::Escalation)
    }
}

/// Boolean toggles for every [`Feature`].
///
/// The set of keys is fixed by the struct shape: toggling a feature only ever
/// flips one of these fields.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    pub auto_response: bool,
    pub knowledge_base: bool,
    pub human_handoff: bool,
    pub analytics: bool,
    pub voice_mail: bool,
    pub escalation: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            auto_response: true,
            knowledge_base: true,
            human_handoff: false,
            analytics: true,
            voice_mail: false,
            escalation: false,
        }
    }
}

impl FeatureFlags {
    pub fn get(&self, feature: Feature) -> bool {
        match feature {
            Feature::AutoResponse => self.auto_response,
            Feature::KnowledgeBase => self.knowledge_base,
            Feature::HumanHandoff => self.human_handoff,
            Feature::Analytics => self.analytics,
            Feature::VoiceMail => self.voice_mail,
            Feature::Escalation => self.escalation,
        }
    }

    pub fn set(&mut self, feature: Feature, enabled: bool) {
        let slot = match feature {
            Feature::AutoResponse => &mut self.auto_response,
            Feature::KnowledgeBase => &mut self.knowledge_base,
            Feature::HumanHandoff => &mut self.human_handoff,
            Feature::Analytics => &mut self.analytics,
            Feature::VoiceMail => &mut self.voice_mail,
            Feature::Escalation => &mut self.escalation,
        };
        *slot = enabled;
    }

    /// Number of features currently switched on.
    pub fn enabled_count(&self) -> usize {
        Feature::ALL.iter().filter(|f| self.get(**f)).count()
    }
}

/// Communication channel the agent can answer on.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "camelCase")]
pub enum Channel {
    VoiceCalls,
    Email,
    Sms,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::VoiceCalls, Channel::Email, Channel::Sms];

    pub fn label(self) -> &'static str {
        match self {
            Channel::VoiceCalls => "Voice Calls",
            Channel::Email => "Email",
            Channel::Sms => "SMS",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
pub struct ChannelToggles {
    pub voice_calls: bool,
    pub email: bool,
    pub sms: bool,
}

impl Default for ChannelToggles {
    fn default() -> Self {
        Self {
            voice_calls: true,
            email: true,
            sms: false,
        }
    }
}

impl ChannelToggles {
    pub fn get(&self, channel: Channel) -> bool {
        match channel {
            Channel::VoiceCalls => self.voice_calls,
            Channel::Email => self.email,
            Channel::Sms => self.sms,
        }
    }

    pub fn set(&mut self, channel: Channel, enabled: bool) {
        match channel {
            Channel::VoiceCalls => self.voice_calls = enabled,
            Channel::Email => self.email = enabled,
            Channel::Sms => self.sms = enabled,
        }
    }

    /// Labels of the enabled channels, in display order.
    pub fn enabled_labels(&self) -> Vec<&'static str> {
        Channel::ALL
            .iter()
            .filter(|c| self.get(**c))
            .map(|c| c.label())
            .collect()
    }
}

/// Business identity entered on the first form screen.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, TS)]
pub struct BusinessInfo {
    pub name: String,
    pub description: String,
    /// Optional website URL; never validated.
    pub website: String,
    /// Industry id from the industry catalog.
    pub industry: Option<String>,
}

/// Who the agent is and how it greets callers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct AgentPersona {
    /// Agent type id from the currently offered option set.
    pub agent_type: Option<String>,
    pub name: String,
    pub greeting: String,
    pub personality: Personality,
    pub phone_number: String,
}

impl Default for AgentPersona {
    fn default() -> Self {
        Self {
            agent_type: None,
            name: "Chris".to_string(),
            greeting: String::new(),
            personality: Personality::default(),
            phone_number: String::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, TS)]
pub struct VoiceSelection {
    /// Voice label from the voice catalog, e.g. "Voice 1".
    pub voice_id: Option<String>,
    pub gender: VoiceGender,
}

/// Optional settings shown only in the advanced panel.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct AdvancedSettings {
    /// Response creativity, 0 (conservative) to 100 (creative).
    pub creativity: u8,
    /// Upper bound on the length of one reply, in tokens.
    pub max_tokens: u16,
    pub working_hours: WorkingHours,
    pub timezone: String,
}

impl Default for AdvancedSettings {
    fn default() -> Self {
        Self {
            creativity: 70,
            max_tokens: 150,
            working_hours: WorkingHours::default(),
            timezone: "EST".to_string(),
        }
    }
}

/// The full agent configuration being built by the wizard.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, TS)]
pub struct AgentProfile {
    pub business: BusinessInfo,
    pub agent: AgentPersona,
    pub voice: VoiceSelection,
    pub features: FeatureFlags,
    pub channels: ChannelToggles,
    pub advanced: AdvancedSettings,
}
