//! Test fixtures for creating controllers and sample project directories.

use aw_core::catalog::TemplateCatalog;
use aw_core::wizard::{WizardController, WizardOptions};
use aw_protocol::config_models::GreetingPolicy;
use aw_protocol::field_models::FieldUpdate;
use aw_protocol::ipc::Event;
use aw_protocol::step_models::WizardVariant;
use tempfile::TempDir;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

/// A controller plus the receiving end of its event channel.
#[allow(dead_code)]
pub struct Harness {
    pub wizard: WizardController,
    pub events_rx: UnboundedReceiver<Event>,
}

impl Harness {
    /// Take every event emitted so far.
    #[allow(dead_code)]
    pub fn drain(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        while let Ok(event) = self.events_rx.try_recv() {
            events.push(event);
        }
        events
    }
}

/// Create a harness with the built-in templates.
#[allow(dead_code)]
pub fn harness_with(options: WizardOptions) -> Harness {
    let (events_tx, events_rx) = unbounded_channel();
    let catalog = TemplateCatalog::builtin().expect("builtin templates should parse");
    Harness {
        wizard: WizardController::new(options, catalog, events_tx),
        events_rx,
    }
}

/// Create a harness for `variant` with default options.
#[allow(dead_code)]
pub fn harness(variant: WizardVariant) -> Harness {
    harness_with(WizardOptions {
        variant,
        ..Default::default()
    })
}

/// Create a harness for `variant` using the sticky greeting policy.
#[allow(dead_code)]
pub fn sticky_harness(variant: WizardVariant) -> Harness {
    harness_with(WizardOptions {
        variant,
        greeting_policy: GreetingPolicy::Sticky,
        ..Default::default()
    })
}

/// Fill the three business-step fields.
#[allow(dead_code)]
pub fn fill_business(wizard: &mut WizardController, industry: &str) {
    wizard.set_field(FieldUpdate::BusinessName("Acme Co".to_string()));
    wizard.set_field(FieldUpdate::BusinessDescription(
        "We sell widgets".to_string(),
    ));
    wizard.set_field(FieldUpdate::Industry(industry.to_string()));
}

/// Walk a fresh controller forward to its review step.
#[allow(dead_code)]
pub fn advance_to_review(wizard: &mut WizardController) {
    fill_business(wizard, "1");
    wizard.set_field(FieldUpdate::Voice("Voice 1".to_string()));
    while !wizard.is_terminal() {
        assert!(
            wizard.advance().moved(),
            "stuck at step {}",
            wizard.current_step()
        );
    }
}

/// Create a temporary project directory with `.agent-wizard/` configuration.
///
/// Returns a TempDir that must be kept alive for the test duration.
#[allow(dead_code)]
pub fn create_test_project() -> std::io::Result<TempDir> {
    let temp_dir = tempfile::tempdir()?;
    let root = temp_dir.path();

    std::fs::create_dir_all(root.join(".agent-wizard/templates"))?;

    let config_toml = r#"
variant = "compact"
greeting_policy = "regenerate"

[defaults]
agent_name = "Robin"
timezone = "PST"
"#;
    std::fs::write(root.join(".agent-wizard/config.toml"), config_toml)?;

    let template_md = r#"---
id: customer-support
name: Tier 1 Support Desk
description: Answers account questions before handing off to staff
category: Support
features:
  - Account lookup
---
Overrides the built-in customer support preset."#;
    std::fs::write(
        root.join(".agent-wizard/templates/support.md"),
        template_md,
    )?;

    let extra_md = r#"---
id: clinic-intake
name: Clinic Intake
description: Collects patient details before a visit
category: Healthcare
---
"#;
    std::fs::write(root.join(".agent-wizard/templates/clinic.md"), extra_md)?;

    Ok(temp_dir)
}
