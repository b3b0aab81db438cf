//! Pipeline orchestration.
//!
//! Coordinates the whole run:
//! 1. Scan the source tree for files (blocking pre-pass)
//! 2. Guess title/year per filename (parallel, joined)
//! 3. Enrich each guess from OMDb (parallel, joined)
//! 4. Rank genres across the batch (synchronous join point)
//! 5. Name destinations and move files (sequential)
//!
//! Each fan-out phase is issued without a parallelism cap and awaited
//! jointly before the next phase begins; the genre ranking is the hard
//! synchronization point, since it is a function of the whole batch. An
//! individual lookup failure never cancels its siblings.

use crate::core::enricher;
use crate::core::mover::{self, MoveOutcome};
use crate::core::namer;
use crate::core::ranker::rank_genres;
use crate::core::scanner;
use crate::models::config::Config;
use crate::models::film::{EnrichedRecord, FileRef, Guess, GuessRecord};
use crate::services::guessit::GuessitClient;
use crate::services::omdb::{OmdbClient, OmdbConfig};
use crate::Result;
use futures::future;
use indicatif::{ProgressBar, ProgressStyle};

/// Outcome counts for one run.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    /// Files found under the source root.
    pub scanned: usize,
    /// Files renamed to their destination.
    pub moved: usize,
    /// Files skipped because the destination already existed.
    pub skipped: usize,
    /// Planned moves printed in dry-run mode.
    pub planned: usize,
}

/// The organizing pipeline.
pub struct Pipeline {
    config: Config,
    guesser: GuessitClient,
    omdb: Option<OmdbClient>,
}

impl Pipeline {
    /// Create a pipeline from configuration.
    pub fn new(config: Config) -> Self {
        let omdb = config
            .omdb_api_key
            .clone()
            .map(|key| OmdbClient::new(OmdbConfig::new(key)));
        Self {
            config,
            guesser: GuessitClient::new(),
            omdb,
        }
    }

    /// Run the pipeline to completion.
    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Scanning {:?}", self.config.source_dir);
        let files = scanner::list_files(&self.config.source_dir)?;

        let mut summary = RunSummary {
            scanned: files.len(),
            ..Default::default()
        };
        if files.is_empty() {
            tracing::warn!("No files found in {:?}", self.config.source_dir);
            return Ok(summary);
        }

        let guesses = self.guess_all(files).await;
        let records = self.enrich_all(guesses).await;

        let priorities = rank_genres(&records);
        tracing::debug!("Genre priorities: {:?}", priorities.as_slice());

        for record in &records {
            let decision = namer::place(
                record,
                &priorities,
                &self.config.dest_dir,
                self.config.test_mode,
            )?;
            match mover::move_film(record.display_title(), &decision, self.config.test_mode)? {
                MoveOutcome::Moved => summary.moved += 1,
                MoveOutcome::SkippedExists => summary.skipped += 1,
                MoveOutcome::Planned => summary.planned += 1,
            }
        }

        Ok(summary)
    }

    /// Guess title/year for every file, all in flight at once.
    ///
    /// Guessing never fails a record outward: an unusable parser result
    /// degrades to an empty guess and the record continues.
    async fn guess_all(&self, files: Vec<FileRef>) -> Vec<GuessRecord> {
        let tasks = files.into_iter().map(|file_ref| {
            let guesser = self.guesser.clone();
            async move {
                let guess = match guesser.parse_name(&file_ref.file).await {
                    Ok(guess) => guess,
                    Err(e) => {
                        tracing::warn!("guessit failed for {}: {}", file_ref.file, e);
                        Guess::default()
                    }
                };
                GuessRecord::from_guess(file_ref, guess)
            }
        });

        future::join_all(tasks).await
    }

    /// Enrich every guess from OMDb, all in flight at once.
    ///
    /// Without an API key the whole phase degrades to guess-only records.
    async fn enrich_all(&self, guesses: Vec<GuessRecord>) -> Vec<EnrichedRecord> {
        let Some(client) = self.omdb.as_ref() else {
            tracing::warn!("No OMDb API key configured; keeping guess-only data");
            return guesses
                .into_iter()
                .map(EnrichedRecord::from_guess)
                .collect();
        };

        let pb = ProgressBar::new(guesses.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("=>-"),
        );
        pb.set_message("Querying OMDb...");

        let tasks = guesses.into_iter().map(|guess| {
            let pb = pb.clone();
            async move {
                let record = enricher::enrich(client, guess).await;
                pb.inc(1);
                record
            }
        });

        let records = future::join_all(tasks).await;
        pb.finish_with_message("Done");
        records
    }
}
