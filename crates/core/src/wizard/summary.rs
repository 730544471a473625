//! Review-step summary of a profile.

use crate::catalog::industries::{find_agent_type, find_industry};
use crate::wizard::state::WizardState;

const NOT_SELECTED: &str = "Not selected";

/// Display-ready facts shown on the review step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSummary {
    pub business_name: String,
    pub industry: String,
    pub agent_type: String,
    pub agent_name: String,
    pub greeting: String,
    pub voice: String,
    pub personality: &'static str,
    pub features_enabled: usize,
    pub channels: Vec<&'static str>,
    pub template: String,
}

impl ProfileSummary {
    pub fn from_state(state: &WizardState) -> Self {
        let profile = &state.profile;

        let industry = profile
            .business
            .industry
            .as_deref()
            .map(|id| find_industry(id).map_or(id, |i| i.name))
            .unwrap_or(NOT_SELECTED)
            .to_string();

        let agent_type = profile
            .agent
            .agent_type
            .as_deref()
            .map(|id| find_agent_type(id).map_or(id, |t| t.name))
            .unwrap_or(NOT_SELECTED)
            .to_string();

        let voice = match profile.voice.voice_id.as_deref() {
            Some(id) => format!("{id} ({})", profile.voice.gender.label()),
            None => NOT_SELECTED.to_string(),
        };

        Self {
            business_name: profile.business.name.clone(),
            industry,
            agent_type,
            agent_name: profile.agent.name.clone(),
            greeting: profile.agent.greeting.clone(),
            voice,
            personality: profile.agent.personality.label(),
            features_enabled: profile.features.enabled_count(),
            channels: profile.channels.enabled_labels(),
            template: state
                .selected_template
                .as_ref()
                .map_or_else(|| "Custom".to_string(), |t| t.name.clone()),
        }
    }

    /// Label/value rows in display order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let channels = if self.channels.is_empty() {
            "None".to_string()
        } else {
            self.channels.join(", ")
        };

        vec![
            ("Business Name", self.business_name.clone()),
            ("Industry", self.industry.clone()),
            ("Agent Type", self.agent_type.clone()),
            ("Agent Name", self.agent_name.clone()),
            ("Greeting", self.greeting.clone()),
            ("Voice", self.voice.clone()),
            ("Personality", self.personality.to_string()),
            ("Features", format!("{} enabled", self.features_enabled)),
            ("Channels", channels),
            ("Template", self.template.clone()),
        ]
    }
}
