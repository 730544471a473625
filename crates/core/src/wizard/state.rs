//! In-memory state of one wizard session.

use aw_protocol::{AgentProfile, AgentTypeSet, Template};
use uuid::Uuid;

/// Open template chooser sub-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChooserState {
    /// Step that was current when the chooser opened.
    pub return_to: usize,
}

/// Everything a session knows. Created on start, dropped on exit.
#[derive(Debug, Clone)]
pub struct WizardState {
    pub session_id: Uuid,
    /// 1-based, always within the sequence bounds.
    pub current_step: usize,
    pub profile: AgentProfile,
    pub selected_template: Option<Template>,
    pub agent_type_set: AgentTypeSet,
    pub show_advanced: bool,
    pub preview_mode: bool,
    pub chooser: Option<ChooserState>,
    /// Set when the user typed a greeting that differs from the generated one.
    pub greeting_customized: bool,
}

impl WizardState {
    pub fn new(profile: AgentProfile) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            current_step: 1,
            profile,
            selected_template: None,
            agent_type_set: AgentTypeSet::Default,
            show_advanced: false,
            preview_mode: false,
            chooser: None,
            greeting_customized: false,
        }
    }

    pub fn is_choosing_template(&self) -> bool {
        self.chooser.is_some()
    }
}
