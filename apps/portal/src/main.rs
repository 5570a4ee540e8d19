mod catalog;
mod config;
mod errors;
mod facets;
mod models;
mod pages;
mod presentation;
mod state;
mod stats;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, OutputFormat};
use crate::errors::AppError;
use crate::pages::Page;
use crate::state::AppState;

fn main() {
    // Configuration comes first; a malformed variable is a caller mistake.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => fail(AppError::Validation(format!("{e:#}"))),
    };

    // Initialize structured logging. stdout carries the page view only.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting placement portal v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(config) {
        fail(e);
    }
}

fn run(config: Config) -> Result<(), AppError> {
    let page = config
        .page
        .clone()
        .unwrap_or_else(|| Page::home(config.role).as_str().to_string());
    let selection = config.selection.clone();
    let output = config.output;

    let state = AppState::new(config)?;
    let view = pages::render(&state, &page, &selection)?;

    let json = match output {
        OutputFormat::Pretty => serde_json::to_string_pretty(&view),
        OutputFormat::Compact => serde_json::to_string(&view),
    }
    .context("Failed to serialize page view")?;

    println!("{json}");
    Ok(())
}

fn fail(err: AppError) -> ! {
    println!("{}", err.to_body());
    std::process::exit(err.exit_code())
}
