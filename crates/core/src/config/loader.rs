//! Configuration file loader for the `.agent-wizard/` directory structure.
//!
//! This module provides functionality to load and parse the project
//! configuration, including:
//! - `config.toml`: Wizard variant, greeting policy and profile defaults
//! - `templates/*.md`: Template presets with YAML front matter

use crate::catalog::industries::find_industry;
use crate::catalog::templates::parse_template;
use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use crate::config::models::AppConfig;
use aw_protocol::config_models::WizardConfig;
use aw_protocol::template_models::Template;
use std::path::Path;
use walkdir::WalkDir;

/// Name of the project configuration directory.
pub const CONFIG_DIR: &str = ".agent-wizard";

/// Loads all configuration from the `.agent-wizard/` directory.
///
/// # Arguments
///
/// * `root` - Directory containing the `.agent-wizard/` folder
///
/// # Returns
///
/// An `AppConfig` with everything found. Missing directories or files yield
/// defaults rather than an error.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - Files exist but cannot be read
/// - `config.toml` has invalid syntax or unknown values
/// - A template file has missing or invalid front matter
/// - The configured default industry does not exist
pub async fn load_config(root: &Path) -> ConfigResult<AppConfig> {
    let aw_dir = root.join(CONFIG_DIR);

    if !aw_dir.exists() {
        tracing::debug!(path = %aw_dir.display(), "no project config directory, using defaults");
        return Ok(AppConfig::default());
    }

    let wizard = load_wizard_config(&aw_dir)?;
    let templates = load_templates(&aw_dir)?;

    tracing::info!(
        variant = wizard.variant.as_str(),
        templates = templates.len(),
        "loaded project configuration"
    );

    Ok(AppConfig { wizard, templates })
}

/// Loads wizard settings from `config.toml`.
fn load_wizard_config(aw_dir: &Path) -> ConfigResult<WizardConfig> {
    let config_path = aw_dir.join("config.toml");

    if !config_path.exists() {
        return Ok(WizardConfig::default());
    }

    let content =
        std::fs::read_to_string(&config_path).map_err(|source| ConfigError::FileRead {
            path: config_path.clone(),
            source,
        })?;

    let config: WizardConfig =
        toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
            path: config_path.clone(),
            source,
        })?;

    if let Some(industry) = config.defaults.industry.as_deref() {
        if find_industry(industry).is_none() {
            return Err(ConfigError::InvalidConfig {
                path: config_path,
                reason: format!("unknown default industry '{industry}'"),
            });
        }
    }

    Ok(config)
}

/// Loads all template files from `templates/*.md`, sorted by file name.
fn load_templates(aw_dir: &Path) -> ConfigResult<Vec<Template>> {
    let templates_dir = aw_dir.join("templates");

    if !templates_dir.exists() {
        return Ok(Vec::new());
    }

    let mut templates = Vec::new();

    for entry in WalkDir::new(&templates_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| ConfigError::DirectoryWalk {
            path: templates_dir.clone(),
            source,
        })?;

        let path = entry.path();

        if path.extension().and_then(|s| s.to_str()) != Some("md") {
            continue;
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let source_name = path.display().to_string();
        let template =
            parse_template(&source_name, &content).map_err(|source| ConfigError::Template {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(id = %template.id, path = %path.display(), "loaded project template");
        templates.push(template);
    }

    Ok(templates)
}
