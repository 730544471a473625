//! Derived-field rules.
//!
//! Pure functions that compute dependent profile values. The wizard
//! controller calls them after each mutation that touches their inputs.

use aw_protocol::{AgentTypeSet, VoiceGender};

use crate::catalog::industries::{
    agent_types, find_industry, DEFAULT_AGENT_TYPE_ID, HOTEL_AI,
};
use crate::catalog::voices::is_offered;

/// Greeting generated from the agent and business names.
///
/// Returns `None` until both names are non-empty.
pub fn greeting_for(agent_name: &str, business_name: &str) -> Option<String> {
    if agent_name.is_empty() || business_name.is_empty() {
        return None;
    }
    Some(format!(
        "Hi, this is {agent_name} from {business_name}. How can I help you?"
    ))
}

/// Agent-type list offered for the selected industry.
pub fn agent_type_set_for(industry: Option<&str>) -> AgentTypeSet {
    match industry.and_then(find_industry) {
        Some(found) if found.name == HOTEL_AI => AgentTypeSet::Hotel,
        _ => AgentTypeSet::Default,
    }
}

/// Agent type selected whenever `set` is (re)offered.
pub fn initial_agent_type(set: AgentTypeSet) -> &'static str {
    match set {
        AgentTypeSet::Default => DEFAULT_AGENT_TYPE_ID,
        AgentTypeSet::Hotel => agent_types(AgentTypeSet::Hotel)
            .first()
            .map_or(DEFAULT_AGENT_TYPE_ID, |t| t.id),
    }
}

/// Voice selection after a gender change: kept when still offered, cleared otherwise.
pub fn voice_after_gender_change(gender: VoiceGender, voice_id: Option<&str>) -> Option<String> {
    voice_id
        .filter(|id| is_offered(gender, id))
        .map(str::to_string)
}
