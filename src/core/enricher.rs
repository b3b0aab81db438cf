//! Metadata enrichment.
//!
//! Looks each guessed record up on OMDb by title and merges the result
//! under the guess. Lookup failures of any kind (timeout, not found,
//! network error) are swallowed: the record continues with its guess-only
//! fields and never aborts the batch.

use crate::models::film::{EnrichedRecord, GuessRecord};
use crate::services::omdb::OmdbClient;

/// Enrich a single record.
///
/// The merge precedence is fixed in [`EnrichedRecord::merge`]: guessed
/// title/year/genres win over the metadata values, metadata fills the
/// gaps and supplies the official `name`.
pub async fn enrich(client: &OmdbClient, guess: GuessRecord) -> EnrichedRecord {
    let title = match guess.title.as_deref() {
        Some(title) => title.to_string(),
        None => {
            tracing::debug!("No guessed title for {}, skipping lookup", guess.file);
            return EnrichedRecord::from_guess(guess);
        }
    };

    match client.get_by_title(&title).await {
        Ok(film) => {
            tracing::debug!("OMDb match for '{}'", title);
            EnrichedRecord::merge(guess, film.metadata_fields())
        }
        Err(e) => {
            tracing::debug!("OMDb lookup failed for '{}': {}", title, e);
            EnrichedRecord::from_guess(guess)
        }
    }
}
