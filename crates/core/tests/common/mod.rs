//! Common test utilities and helpers for wizard integration tests.
//!
//! This module provides shared functionality across the integration tests:
//! - Test fixtures (controllers, filled profiles, project directories)
//! - Event assertions

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
