//! Command line argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Film Organizer - sort video files into genre folders
#[derive(Parser, Debug)]
#[command(name = "film-organizer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source directory to scan (overrides config)
    #[arg(value_name = "SOURCE")]
    pub source: Option<PathBuf>,

    /// Destination directory for sorted files (overrides config)
    #[arg(short, long, value_name = "DEST")]
    pub dest: Option<PathBuf>,

    /// Path to the JSON config file (default: conf.json)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Print planned moves without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip preflight checks
    #[arg(long)]
    pub skip_preflight: bool,
}
