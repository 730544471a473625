//! Project configuration models for `.agent-wizard/config.toml`.
//!
//! This module defines the structure of the optional configuration file that
//! picks the wizard variant and overrides a few profile defaults.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::profile_models::Personality;
use crate::step_models::WizardVariant;

/// How the greeting message reacts to name changes after a manual edit.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, TS)]
#[serde(rename_all = "lowercase")]
pub enum GreetingPolicy {
    /// Every agent or business name change regenerates the greeting,
    /// replacing any manual edit.
    #[default]
    Regenerate,
    /// A manual edit sticks until the greeting is cleared.
    Sticky,
}

/// Initial values applied to a fresh profile.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
#[serde(default)]
pub struct ProfileDefaults {
    pub agent_name: Option<String>,
    pub personality: Option<Personality>,
    pub timezone: Option<String>,
    /// Industry id preselected on the business step.
    pub industry: Option<String>,
}

/// Represents settings from `.agent-wizard/config.toml`.
///
/// # Example
///
/// ```toml
/// # .agent-wizard/config.toml
/// variant = "classic"
/// greeting_policy = "sticky"
///
/// [defaults]
/// agent_name = "Alex"
/// personality = "friendly"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
#[serde(default)]
pub struct WizardConfig {
    /// Step sequence to run.
    pub variant: WizardVariant,

    /// Greeting regeneration behavior.
    pub greeting_policy: GreetingPolicy,

    /// Profile defaults.
    pub defaults: ProfileDefaults,
}
