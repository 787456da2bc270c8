use std::path::PathBuf;

use clap::Parser;

/// Crossword helper: serves the grid editor and relays help lookups
#[derive(Parser, Debug, Default)]
#[command(name = "kryds", version, about)]
pub struct Cli {
    /// Host to serve the app on [default: 127.0.0.1]
    #[arg(long)]
    pub host: Option<String>,

    /// Port to serve the app on [default: 5000]
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory to store the grid and dictionary files [default: current directory]
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Directory holding index.html and the editor scripts
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// JSON config profile; env vars are ignored when given
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter when RUST_LOG is unset, e.g. "debug" or "kryds=trace"
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}
