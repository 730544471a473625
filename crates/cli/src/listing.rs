//! Catalog listings for the `templates` and `voices` subcommands.

use aw_core::catalog::voices::voices_for;
use aw_core::catalog::TemplateCatalog;
use aw_core::config::load_config;
use aw_protocol::profile_models::VoiceGender;
use color_eyre::eyre::Result;
use colored::Colorize;
use std::path::Path;

/// Built-in templates merged with those under `root`.
pub async fn load_catalog(root: &Path) -> Result<TemplateCatalog> {
    let config = load_config(root).await?;
    let mut catalog = TemplateCatalog::builtin()?;
    catalog.merge(config.templates);
    Ok(catalog)
}

pub fn print_templates(catalog: &TemplateCatalog, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog.templates())?);
        return Ok(());
    }

    for template in catalog.templates() {
        let popular = if template.popular {
            format!(" {}", "popular".yellow())
        } else {
            String::new()
        };
        println!(
            "{}  {} [{}]{}",
            template.id.cyan().bold(),
            template.name,
            template.category.dimmed(),
            popular
        );
        println!("    {}", template.description);
        for feature in &template.features {
            println!("    - {feature}");
        }
    }
    Ok(())
}

pub fn print_voices(genders: &[VoiceGender]) {
    for gender in genders {
        println!("{}", gender.label().bold());
        for voice in voices_for(*gender) {
            println!("  {}  {}", voice.id.green(), voice.provider.dimmed());
        }
    }
}
