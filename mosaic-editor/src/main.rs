//! Mosaic - block editor engine.
//!
//! Command-line entry point: replays surface event scripts and prints saved layouts.

// Binary-only modules (not part of the library)
mod cli;
mod logging;

use anyhow::{Context, Result};

use mosaic_editor::export;
use mosaic_editor::replay::ReplayHost;
use mosaic_editor::templates;
use mosaic_editor::{Editor, EditorConfig};

use crate::cli::{Args, Command};
use crate::logging::setup_logging;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EditorConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => EditorConfig::discover().context("failed to load config")?,
    };

    setup_logging(args.verbose, &config.log_level);
    tracing::info!(title = %config.title, "Starting Mosaic");

    match args.command {
        Command::Templates => {
            for template in templates::templates() {
                println!("{}\t{}\t{}", template.kind, template.label, template.icon);
            }
        }
        Command::Replay { script, compact } => {
            let text = std::fs::read_to_string(&script)
                .with_context(|| format!("failed to read script {}", script.display()))?;
            let pretty = config.pretty_export && !compact;

            let mut host = ReplayHost::new(Editor::new(config));
            let saved = host
                .run_script(&text)
                .with_context(|| format!("failed to replay {}", script.display()))?;

            for document in &saved {
                println!("{}", export::to_json(document, pretty)?);
            }
            if let Some(message) = host.editor().empty_state() {
                tracing::info!("{message}");
            }
        }
    }

    Ok(())
}
