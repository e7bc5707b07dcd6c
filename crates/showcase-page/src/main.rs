//! fOS Showcase - Main Entry Point
//!
//! Replays a scripted session against the showcase page and prints the
//! final page state as JSON.

use anyhow::Context;
use showcase_page::{Page, PageConfig, ScriptStep, demo_script};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = PageConfig::from_env().context("Failed to load page config")?;

    let steps: Vec<ScriptStep> = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read script {path}"))?;
            serde_json::from_str(&json).with_context(|| format!("Invalid script {path}"))?
        }
        None => demo_script(),
    };

    let mut page = Page::new(config).context("Failed to build page")?;
    tracing::info!("Replaying {} steps", steps.len());

    for (n, step) in steps.iter().enumerate() {
        page.run_step(step)
            .with_context(|| format!("Step {} ({step:?}) failed", n + 1))?;
    }

    let state = page.state().context("Failed to read page state")?;
    println!("{}", serde_json::to_string_pretty(&state)?);

    Ok(())
}
