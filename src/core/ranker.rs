//! Genre priority ranking.
//!
//! A pure, batch-wide reduction over the enriched records: count how often
//! each genre name occurs across the whole batch and rank the distinct
//! names by descending count. The resulting list decides which single
//! genre a multi-genre film is filed under, so it must be built only after
//! every record has finished enrichment.

use crate::models::film::EnrichedRecord;
use std::collections::HashMap;

/// The synthetic bucket for records with no genre information.
pub const UNKNOWN_GENRE: &str = "unknown";

/// Batch-scoped ranking of genre names, most frequent first. Immutable
/// after construction; threaded explicitly to the namer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenrePriorityList {
    genres: Vec<String>,
}

impl GenrePriorityList {
    /// Genre names in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.genres.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.genres
    }

    #[cfg(test)]
    pub fn from_names<S: Into<String>>(names: Vec<S>) -> Self {
        Self {
            genres: names.into_iter().map(Into::into).collect(),
        }
    }
}

/// Split a comma-delimited genres field into trimmed tokens.
///
/// Shared by the ranker and the selector so the two sides can never
/// disagree on tokenization.
pub fn split_genres(genres: &str) -> Vec<&str> {
    genres.split(',').map(str::trim).collect()
}

/// The genre tokens a record contributes to the count: its own, or one
/// "unknown" when it has none.
fn record_genres(record: &EnrichedRecord) -> Vec<&str> {
    match record.genres.as_deref() {
        Some(genres) => split_genres(genres),
        None => vec![UNKNOWN_GENRE],
    }
}

/// Rank genres by descending occurrence count across the batch.
///
/// Ties are broken by the order in which genre names were first
/// encountered during the counting pass.
pub fn rank_genres(records: &[EnrichedRecord]) -> GenrePriorityList {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for record in records {
        for genre in record_genres(record) {
            match counts.get_mut(genre) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(genre, 1);
                    first_seen.push(genre);
                }
            }
        }
    }

    let mut ranked: Vec<(usize, &str)> = first_seen
        .iter()
        .enumerate()
        .map(|(index, &genre)| (index, genre))
        .collect();
    ranked.sort_by(|a, b| counts[b.1].cmp(&counts[a.1]).then(a.0.cmp(&b.0)));

    GenrePriorityList {
        genres: ranked.into_iter().map(|(_, genre)| genre.to_string()).collect(),
    }
}
