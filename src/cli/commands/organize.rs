//! Organize command implementation.
//!
//! Loads configuration, applies CLI overrides and drives the pipeline:
//! scan, guess, enrich, rank, place, move.

use crate::cli::args::Cli;
use crate::core::pipeline::Pipeline;
use crate::models::config;
use crate::Result;
use colored::Colorize;

/// Execute the organize run.
pub async fn organize(cli: &Cli) -> Result<()> {
    let mut config = config::load_config(cli.config.as_deref());

    if let Some(ref source) = cli.source {
        config.source_dir = source.clone();
    }
    if let Some(ref dest) = cli.dest {
        config.dest_dir = dest.clone();
    }
    if cli.dry_run {
        config.test_mode = true;
    }

    // Validate source path up front; an unreadable source aborts the batch.
    if !config.source_dir.exists() {
        return Err(crate::Error::PathNotFound(
            config.source_dir.display().to_string(),
        ));
    }
    if !config.source_dir.is_dir() {
        return Err(crate::Error::NotADirectory(
            config.source_dir.display().to_string(),
        ));
    }

    println!("{}", "Organizing films by genre...".bold().cyan());
    println!();
    println!("  {} {}", "Source:".bold(), config.source_dir.display());
    println!("  {} {}", "Target:".bold(), config.dest_dir.display());
    if config.test_mode {
        println!("  {} {}", "Mode:".bold(), "dry-run".yellow());
    }
    println!();

    let test_mode = config.test_mode;
    let pipeline = Pipeline::new(config);
    let summary = pipeline.run().await?;

    println!();
    println!("{}", "Summary".bold().green());
    println!("  {} {}", "Files scanned:".bold(), summary.scanned);
    if test_mode {
        println!("  {} {}", "Moves planned:".bold(), summary.planned);
    } else {
        println!("  {} {}", "Files moved:".bold(), summary.moved);
        println!(
            "  {} {}",
            "Skipped (already present):".bold(),
            summary.skipped
        );
    }

    Ok(())
}
