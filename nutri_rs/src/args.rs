use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Output document kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Static HTML page
    Html,
    /// The literal dashboard data as pretty JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "nutri")]
#[command(about = "Render the static nutrition dashboard")]
#[command(version)]
pub struct Args {
    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Html)]
    pub format: Format,

    /// Config file (default: .nutri/config.toml in the current directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Document title, overrides the config file
    #[arg(long)]
    pub title: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
