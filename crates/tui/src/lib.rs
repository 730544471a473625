//! # aw-tui
//!
//! Terminal User Interface for agent-wizard.
//!
//! This crate renders the wizard and maps key presses onto the `Op`s defined
//! in `aw-protocol`. The `WizardController` from `aw-core` applies them and
//! reports back through `Event`s.

pub mod app;
pub mod event;
pub mod event_handler;
pub mod tui;
pub mod widgets;

pub use app::App;
pub use tui::Tui;

use anyhow::{anyhow, Context, Result};
use aw_core::catalog::TemplateCatalog;
use aw_core::config::load_config;
use aw_core::wizard::{WizardController, WizardOptions};
use aw_protocol::step_models::WizardVariant;
use std::path::PathBuf;
use tokio::sync::mpsc::unbounded_channel;

/// How to start a wizard session.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// Directory searched for `.agent-wizard/`.
    pub root: PathBuf,
    /// Overrides the configured variant.
    pub variant: Option<WizardVariant>,
    /// Template id that seeds the profile.
    pub template: Option<String>,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            variant: None,
            template: None,
        }
    }
}

/// Load configuration and templates, then build the app.
///
/// # Errors
///
/// Returns an error if the project configuration is invalid or the
/// requested template does not exist.
pub async fn build_app(options: &LaunchOptions) -> Result<App> {
    let config = load_config(&options.root)
        .await
        .with_context(|| format!("failed to load configuration from {}", options.root.display()))?;

    let mut catalog = TemplateCatalog::builtin().context("built-in templates are malformed")?;
    catalog.merge(config.templates);

    let mut wizard_options = WizardOptions::from(&config.wizard);
    if let Some(variant) = options.variant {
        wizard_options.variant = variant;
    }
    if let Some(id) = &options.template {
        let template = catalog
            .get(id)
            .cloned()
            .ok_or_else(|| anyhow!("unknown template '{id}'"))?;
        wizard_options.initial_template = Some(template);
    }

    let (events_tx, events_rx) = unbounded_channel();
    let wizard = WizardController::new(wizard_options, catalog, events_tx);
    Ok(App::new(wizard, events_rx))
}

/// Run the wizard in the current terminal until the user quits.
pub async fn run_app(options: LaunchOptions) -> Result<()> {
    let mut app = build_app(&options).await?;

    let mut tui = Tui::init()?;
    let result = app.run(&mut tui).await;
    tui.restore()?;

    result
}
