//! # aw-core
//!
//! Wizard engine and catalogs for agent-wizard.
//!
//! This crate provides:
//! - Configuration loading from the `.agent-wizard/` directory
//! - Industry, agent-type, voice and template catalogs
//! - Derived-field rules (greeting, agent-type options, voice coherence)
//! - The step sequences and the wizard form controller
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading and management
//! - [`catalog`]: Static option lists and the template catalog
//! - [`derive`]: Pure derivation functions
//! - [`wizard`]: Step engine, session state and controller

pub mod catalog;
pub mod config;
pub mod derive;
pub mod wizard;
