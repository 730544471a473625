//! TUI widgets module.
//!
//! Each widget is a render function over core state.

pub mod review;
pub mod step_form;
pub mod step_indicator;
pub mod template_chooser;
pub mod toast;

pub use review::render_review;
pub use step_form::render_step_form;
pub use step_indicator::render_step_indicator;
pub use template_chooser::render_template_chooser;
pub use toast::{next_toast_expiry, prune_toasts, render_toasts, Toast, TOAST_TTL};
