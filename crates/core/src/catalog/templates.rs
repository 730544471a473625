//! Template catalog.
//!
//! Built-in templates are Markdown files with YAML front matter in the
//! workspace `templates/` directory, embedded into the binary with
//! `rust-embed`. Projects can add or override templates through
//! `.agent-wizard/templates/*.md` (see [`crate::config::loader`]).

use aw_protocol::Template;
use gray_matter::engine::YAML;
use gray_matter::Matter;
use rust_embed::RustEmbed;
use thiserror::Error;

/// Embedded template files from the `templates/` directory.
///
/// - `CARGO_MANIFEST_DIR` = `crates/core`
/// - `../../templates` = workspace root `templates/`
///
/// With the `debug-embed` feature the files are embedded in debug builds too,
/// so tests see the same catalog as release binaries.
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../templates"]
struct TemplateAssets;

/// Built-in template files in chooser order.
const BUILTIN_TEMPLATE_FILES: &[&str] = &[
    "customer-support.md",
    "sales-assistant.md",
    "content-creator.md",
    "appointment-booking.md",
    "hr-assistant.md",
    "general-chatbot.md",
];

/// Errors raised while reading template files.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// A built-in template listed for embedding is missing.
    #[error("Embedded template not found: {0}")]
    NotEmbedded(String),

    /// The file has no YAML front matter block.
    #[error("Template {source_name} is missing YAML front matter")]
    MissingFrontMatter { source_name: String },

    /// The front matter does not match the template shape.
    #[error("Template {source_name} has invalid front matter: {reason}")]
    InvalidFrontMatter { source_name: String, reason: String },

    /// The front matter parsed but a required value is blank.
    #[error("Template {source_name} has an empty `{key}`")]
    EmptyValue {
        source_name: String,
        key: &'static str,
    },
}

/// Parse one template file.
///
/// `source_name` is only used in error messages.
pub fn parse_template(source_name: &str, content: &str) -> Result<Template, TemplateError> {
    let matter = Matter::<YAML>::new();
    let result = matter.parse(content);

    let mut template: Template = result
        .data
        .ok_or_else(|| TemplateError::MissingFrontMatter {
            source_name: source_name.to_string(),
        })?
        .deserialize()
        .map_err(|e| TemplateError::InvalidFrontMatter {
            source_name: source_name.to_string(),
            reason: e.to_string(),
        })?;

    for (key, value) in [
        ("id", &template.id),
        ("name", &template.name),
        ("description", &template.description),
    ] {
        if value.trim().is_empty() {
            return Err(TemplateError::EmptyValue {
                source_name: source_name.to_string(),
                key,
            });
        }
    }

    template.notes = result.content.trim().to_string();
    Ok(template)
}

/// Ordered, id-unique collection of templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    /// Create a catalog from an ordered list. Later duplicates replace earlier ones.
    pub fn new(templates: Vec<Template>) -> Self {
        let mut catalog = Self::default();
        catalog.merge(templates);
        catalog
    }

    /// Load the embedded built-in templates.
    pub fn builtin() -> Result<Self, TemplateError> {
        let mut templates = Vec::with_capacity(BUILTIN_TEMPLATE_FILES.len());
        for file in BUILTIN_TEMPLATE_FILES {
            let asset = TemplateAssets::get(file)
                .ok_or_else(|| TemplateError::NotEmbedded(file.to_string()))?;
            let content = String::from_utf8_lossy(asset.data.as_ref());
            templates.push(parse_template(file, &content)?);
        }
        Ok(Self::new(templates))
    }

    /// Add templates, replacing any existing entry with the same id in place.
    pub fn merge(&mut self, templates: Vec<Template>) {
        for template in templates {
            match self.templates.iter_mut().find(|t| t.id == template.id) {
                Some(existing) => {
                    tracing::debug!(id = %template.id, "overriding template");
                    *existing = template;
                }
                None => self.templates.push(template),
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
