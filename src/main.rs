//! Film Organizer CLI
//!
//! A command-line tool that sorts video files into genre folders using
//! filename guessing (guessit) and OMDb metadata.

use clap::Parser;
use film_organizer::cli::{args::Cli, commands::organize};
use film_organizer::models::config;
use film_organizer::preflight;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Run preflight checks unless skipped
    if !cli.skip_preflight {
        let config = config::load_config(cli.config.as_deref());
        run_preflight_checks(&config).await?;
    }

    organize::organize(&cli).await?;

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("film_organizer=debug")
    } else {
        EnvFilter::new("film_organizer=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

/// Run preflight checks and exit if any fail.
async fn run_preflight_checks(config: &config::Config) -> anyhow::Result<()> {
    use colored::Colorize;

    println!("{}", "Running preflight checks...".bold());
    println!();

    let results = preflight::run_preflight_checks(config).await?;
    preflight::print_results(&results);

    println!();

    if !preflight::all_passed(&results) {
        anyhow::bail!("Preflight checks failed. Fix the issues above and try again.");
    }

    Ok(())
}
