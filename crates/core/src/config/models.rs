//! Configuration models that aggregate all settings.
//!
//! `AppConfig` combines the parsed `config.toml` with any project-local
//! templates found next to it.

use aw_protocol::config_models::WizardConfig;
use aw_protocol::template_models::Template;

/// Unified application configuration loaded from `.agent-wizard/`.
///
/// - `config.toml`: Wizard variant, greeting policy and profile defaults
/// - `templates/*.md`: Extra or overriding templates
///
/// # Example
///
/// ```rust,no_run
/// use aw_core::config::loader::load_config;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new(".")).await?;
/// println!("Running the {} wizard with {} project templates",
///          config.wizard.variant.as_str(),
///          config.templates.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Settings from `config.toml`.
    pub wizard: WizardConfig,

    /// Templates loaded from `templates/*.md`.
    pub templates: Vec<Template>,
}
