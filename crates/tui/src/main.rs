//! Main entry point for the aw-tui binary.
//!
//! Runs the wizard against the current directory with its project settings.

use anyhow::Result;
use aw_tui::{run_app, LaunchOptions};

#[tokio::main]
async fn main() -> Result<()> {
    run_app(LaunchOptions::default()).await
}
