//! The wizard: step sequences, session state and the form controller.
//!
//! - [`steps`]: per-variant step sequences and the items each step shows
//! - [`state`]: the mutable state of one session
//! - [`controller`]: applies operations and emits events
//! - [`summary`]: review-step facts derived from the state

pub mod controller;
pub mod state;
pub mod steps;
pub mod summary;

pub use controller::{WizardController, WizardOptions};
pub use state::{ChooserState, WizardState};
pub use steps::{StepDescriptor, StepItem, StepSequence};
pub use summary::ProfileSummary;
