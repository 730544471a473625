//! Static catalogs the wizard offers choices from.
//!
//! - [`industries`]: industries and the agent-type lists derived from them
//! - [`voices`]: voice labels grouped by gender
//! - [`templates`]: embedded and project-local template presets

pub mod industries;
pub mod templates;
pub mod voices;

pub use industries::{AgentTypeOption, Industry};
pub use templates::{TemplateCatalog, TemplateError};
pub use voices::VoiceOption;
