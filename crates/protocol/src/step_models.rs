//! Step sequencing models.
//!
//! A wizard run walks a linear list of steps. Each step has a [`StepKind`]
//! which decides the fields that must be filled before the user may move on.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::field_models::Field;
use crate::profile_models::AgentProfile;

/// Which step sequence the wizard runs.
///
/// - `Classic`: five steps starting at business info.
/// - `Compact`: four steps with a template intro and a combined configuration step.
/// - `Enhanced`: six steps with a template intro and separate voice and feature steps.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, TS)]
#[serde(rename_all = "lowercase")]
pub enum WizardVariant {
    Classic,
    Compact,
    #[default]
    Enhanced,
}

impl WizardVariant {
    pub const ALL: [WizardVariant; 3] = [
        WizardVariant::Classic,
        WizardVariant::Compact,
        WizardVariant::Enhanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WizardVariant::Classic => "classic",
            WizardVariant::Compact => "compact",
            WizardVariant::Enhanced => "enhanced",
        }
    }
}

impl std::str::FromStr for WizardVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WizardVariant::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown wizard variant '{s}' (expected classic, compact or enhanced)"))
    }
}

/// The concern a step covers. Gating is keyed on this, not on the index.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepKind {
    /// Offers the template chooser or a blank start.
    TemplateIntro,
    BusinessInfo,
    AgentType,
    VoicePersona,
    /// Agent type and voice & persona on one screen.
    AgentConfiguration,
    Features,
    Review,
}

impl StepKind {
    /// Fields that must be non-empty before advancing past this step.
    pub fn required_fields(self) -> &'static [Field] {
        match self {
            StepKind::BusinessInfo => &[
                Field::BusinessName,
                Field::BusinessDescription,
                Field::Industry,
            ],
            StepKind::AgentType => &[Field::AgentType],
            StepKind::VoicePersona => &[Field::AgentName, Field::Voice],
            StepKind::AgentConfiguration => &[Field::AgentType, Field::AgentName, Field::Voice],
            StepKind::TemplateIntro | StepKind::Features | StepKind::Review => &[],
        }
    }

    /// Evaluate the gate for this step against `profile`.
    pub fn check(self, profile: &AgentProfile) -> StepCheck {
        let missing: Vec<Field> = self
            .required_fields()
            .iter()
            .copied()
            .filter(|f| f.is_empty_in(profile))
            .collect();

        if missing.is_empty() {
            StepCheck::Ready
        } else {
            StepCheck::Incomplete { missing }
        }
    }
}

/// Outcome of a gate evaluation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum StepCheck {
    /// All required fields are filled.
    Ready,
    /// The listed required fields are still empty.
    Incomplete { missing: Vec<Field> },
}

impl StepCheck {
    pub fn is_ready(&self) -> bool {
        matches!(self, StepCheck::Ready)
    }
}

/// Result of a navigation request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Transition {
    /// The step index changed.
    Moved { from: usize, to: usize },
    /// The gate for the current step is not satisfied.
    Refused { missing: Vec<Field> },
    /// Already at the first or last step, or the template chooser is open.
    Blocked,
}

impl Transition {
    pub fn moved(&self) -> bool {
        matches!(self, Transition::Moved { .. })
    }
}
