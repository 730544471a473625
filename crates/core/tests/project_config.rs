//! Integration tests for running a wizard from a project directory.

mod common;

use aw_core::catalog::TemplateCatalog;
use aw_core::config::load_config;
use aw_core::wizard::{WizardController, WizardOptions};
use aw_protocol::step_models::WizardVariant;
use common::*;
use tokio::sync::mpsc::unbounded_channel;

#[tokio::test]
async fn test_project_config_drives_controller() {
    let project = create_test_project().expect("Failed to create test project");
    let config = load_config(project.path())
        .await
        .expect("Failed to load config");

    let mut catalog = TemplateCatalog::builtin().expect("builtin templates");
    catalog.merge(config.templates.clone());

    let (tx, _rx) = unbounded_channel();
    let mut wizard = WizardController::new(WizardOptions::from(&config.wizard), catalog, tx);

    assert_eq!(wizard.sequence().variant(), WizardVariant::Compact);
    assert_eq!(wizard.total_steps(), 4);
    assert_eq!(wizard.profile().agent.name, "Robin");
    assert_eq!(wizard.profile().advanced.timezone, "PST");

    assert!(wizard.choose_template("clinic-intake"));
    assert_eq!(wizard.profile().business.name, "Clinic Intake");

    assert!(wizard.choose_template("customer-support"));
    assert_eq!(wizard.profile().business.name, "Tier 1 Support Desk");
}

#[tokio::test]
async fn test_user_templates_extend_builtin_catalog() {
    let project = create_test_project().expect("Failed to create test project");
    let config = load_config(project.path())
        .await
        .expect("Failed to load config");

    let mut catalog = TemplateCatalog::builtin().expect("builtin templates");
    let builtin_len = catalog.len();
    catalog.merge(config.templates);

    // One override, one addition.
    assert_eq!(catalog.len(), builtin_len + 1);
}
