//! UI ↔ controller message protocol.
//!
//! This module defines the message types exchanged between the TUI (user
//! interface) and the wizard controller (business logic).
//!
//! The protocol follows an Operation/Event pattern:
//! - `Op`: Commands sent from the UI to the controller
//! - `Event`: State changes and notifications sent back to the UI
//!
//! The controller applies every `Op` synchronously. Events are fire-and-forget:
//! nothing in the controller waits for them to be consumed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::field_models::{Field, FieldUpdate};
use crate::profile_models::{Channel, Feature};
use crate::step_models::StepKind;

/// Operations sent from the UI to the controller.
///
/// Uses tagged enum serialization for TypeScript compatibility:
/// ```json
/// {
///   "type": "setFeature",
///   "payload": { "feature": "humanHandoff", "enabled": true }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Op {
    /// Move to the next step if the current step's gate passes.
    Advance,

    /// Move to the previous step.
    Retreat,

    /// Replace the value of one profile field.
    SetField { update: FieldUpdate },

    /// Switch one feature flag on or off.
    SetFeature { feature: Feature, enabled: bool },

    /// Switch one communication channel on or off.
    SetChannel { channel: Channel, enabled: bool },

    /// Show or hide the advanced settings panel.
    ToggleAdvanced,

    /// Suspend the step sequence and show the template chooser.
    OpenTemplateChooser,

    /// Apply a template from the chooser and jump to the first form step.
    ChooseTemplate { template_id: String },

    /// Close the chooser without applying anything.
    CancelTemplateChooser,

    /// Run the stubbed agent test.
    TestAgent,

    /// Flip between preview and editing mode.
    TogglePreview,

    /// Run the stubbed publish action.
    PublishAgent,
}

/// What a toast notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    Testing,
    Preview,
    Editing,
    Publishing,
}

impl NotificationKind {
    pub fn title(self) -> &'static str {
        match self {
            NotificationKind::Testing => "Testing Agent",
            NotificationKind::Preview => "Preview Mode",
            NotificationKind::Editing => "Editing Mode",
            NotificationKind::Publishing => "Publishing Agent",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            NotificationKind::Testing => "Your AI agent is being tested with sample scenarios...",
            NotificationKind::Preview => "See how your agent will appear to users.",
            NotificationKind::Editing => "You can now edit your agent configuration.",
            NotificationKind::Publishing => {
                "Your AI agent is being deployed and will be live shortly!"
            }
        }
    }
}

/// A transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub issued_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(kind: NotificationKind) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            description: kind.description().to_string(),
            issued_at: Utc::now(),
        }
    }
}

/// Which agent-type list is currently offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
pub enum AgentTypeSet {
    Default,
    Hotel,
}

/// Events sent from the controller to the UI.
///
/// ```json
/// {
///   "type": "stepChanged",
///   "payload": { "session_id": "uuid-here", "from": 1, "to": 2 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Event {
    /// The current step index changed.
    StepChanged {
        #[ts(type = "string")]
        session_id: Uuid,
        from: usize,
        to: usize,
    },

    /// An advance was refused because required fields are empty.
    AdvanceRefused {
        #[ts(type = "string")]
        session_id: Uuid,
        step: usize,
        kind: StepKind,
        missing: Vec<Field>,
    },

    /// A field value changed, directly or through derivation.
    FieldChanged {
        #[ts(type = "string")]
        session_id: Uuid,
        field: Field,
    },

    /// One feature flag was switched on or off.
    FeatureChanged {
        #[ts(type = "string")]
        session_id: Uuid,
        feature: Feature,
        enabled: bool,
    },

    /// One communication channel was switched on or off.
    ChannelChanged {
        #[ts(type = "string")]
        session_id: Uuid,
        channel: Channel,
        enabled: bool,
    },

    /// The offered agent types were recomputed from the industry.
    AgentTypeOptionsChanged {
        #[ts(type = "string")]
        session_id: Uuid,
        set: AgentTypeSet,
    },

    /// The template chooser was opened.
    TemplateChooserOpened {
        #[ts(type = "string")]
        session_id: Uuid,
    },

    /// The template chooser was closed; `applied` is false on cancel.
    TemplateChooserClosed {
        #[ts(type = "string")]
        session_id: Uuid,
        applied: bool,
    },

    /// A template seeded the profile.
    TemplateApplied {
        #[ts(type = "string")]
        session_id: Uuid,
        template_id: String,
    },

    /// The chooser was asked for a template id that does not exist.
    TemplateNotFound {
        #[ts(type = "string")]
        session_id: Uuid,
        template_id: String,
    },

    /// A toast to show to the user.
    Notification(Notification),
}
