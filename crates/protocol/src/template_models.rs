//! Template models for `templates/*.md` and `.agent-wizard/templates/*.md`.
//!
//! Templates are predefined presets that seed the business name and
//! description of a new agent profile. They are written as Markdown files
//! with YAML front matter.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A preset offered by the template chooser.
///
/// # Example
///
/// ```markdown
/// ---
/// id: customer-support
/// name: Customer Support
/// description: Handle customer inquiries, resolve issues, and provide 24/7 support
/// category: Support
/// features:
///   - Auto-responses
///   - Ticket routing
/// popular: true
/// ---
///
/// Longer notes shown under the template card.
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct Template {
    /// Unique identifier used by `--template` and the chooser.
    pub id: String,

    /// Display name; seeds the business name field.
    pub name: String,

    /// One-line summary; seeds the business description field.
    pub description: String,

    /// Grouping label, e.g. "Support" or "Sales".
    #[serde(default)]
    pub category: String,

    /// Short bullet list of what the template is tuned for.
    #[serde(default)]
    pub features: Vec<String>,

    /// Highlighted in the chooser when set.
    #[serde(default)]
    pub popular: bool,

    /// Markdown body below the front matter.
    ///
    /// Not part of the front matter, so it is skipped during serialization.
    #[serde(skip)]
    pub notes: String,
}
