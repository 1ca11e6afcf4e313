//! # nutri
//!
//! Writes the static nutrition dashboard as an HTML document (or its data as
//! JSON) to a file or stdout.
//!
//! ## Usage
//!
//! ```bash
//! nutri -o nutrition.html
//! nutri --format json > nutrition.json
//! ```

mod args;
mod config;

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use args::{Args, Format};
use config::NutriConfig;
use nutrition_report::{data, render_dashboard};

fn init_logging(level: &str) {
    // stderr only: stdout may carry the document
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.parse().unwrap_or_default()),
        )
        .init();
}

fn run(args: Args) -> Result<()> {
    let loaded = match &args.config {
        Some(path) => NutriConfig::load_required(path)?,
        None => NutriConfig::load(Path::new(".")),
    };
    debug!(base_dir = %loaded.base_dir.display(), "config loaded");

    let rendered = match args.format {
        Format::Html => {
            let options = loaded.render_options(args.title)?;
            render_dashboard(&options)
        }
        Format::Json => data::bread_slice()
            .to_json_pretty()
            .context("failed to serialize dashboard data")?,
    };

    match args.output.or(loaded.config.render.output) {
        Some(path) => {
            std::fs::write(&path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = rendered.len(), "dashboard written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write to stdout")?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[nutri] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
