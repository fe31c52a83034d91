mod config;
mod data;
mod errors;
mod models;
mod output;
mod page;
mod sections;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

fn main() -> Result<()> {
    // Load configuration first (all variables are optional, so this only
    // fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Rendering CV page v{}", env!("CARGO_PKG_VERSION"));

    // Build the curriculum once; everything downstream borrows it.
    let curriculum = data::curriculum();
    info!(
        companies = curriculum.experience.companies.len(),
        education = curriculum.education.len(),
        links = curriculum.links.len(),
        "Curriculum loaded"
    );

    let document = page::render(&curriculum);
    output::write_page(&document.into_string(), config.output_path.as_deref())?;

    Ok(())
}
