//! # aw-protocol
//!
//! Core data models and message definitions for agent-wizard.
//!
//! This crate defines all shared data structures used for:
//! - The typed agent profile the wizard builds
//! - Template presets parsed from Markdown front matter
//! - Project configuration parsed from TOML
//! - Step gating results and navigation outcomes
//! - Communication between the TUI and the wizard controller
//!
//! ## Modules
//!
//! - [`config_models`]: Project settings from `.agent-wizard/config.toml`
//! - [`profile_models`]: Agent profile, feature flags and channel toggles
//! - [`field_models`]: Field identifiers and typed field updates
//! - [`step_models`]: Wizard variants, step kinds and gate results
//! - [`template_models`]: Template presets
//! - [`ipc`]: Operations and Events for UI-controller communication
//!
//! ## Design Principles
//!
//! - Minimal dependencies: serde, ts-rs, uuid and chrono
//! - TypeScript generation: All types derive `TS` for client compatibility
//! - Independent compilation: No dependencies on other agent-wizard crates

pub mod config_models;
pub mod field_models;
pub mod ipc;
pub mod profile_models;
pub mod step_models;
pub mod template_models;

// Re-export all public types for convenience
pub use config_models::*;
pub use field_models::*;
pub use ipc::*;
pub use profile_models::*;
pub use step_models::*;
pub use template_models::*;
