//! Destination naming.
//!
//! Picks the genre a record is filed under and builds its destination
//! path: `<destDir>/<genre>/<title> (<year>).<ext>`, with the year segment
//! omitted when unknown. Titles and genre names are used verbatim; no
//! sanitization of filesystem-unsafe characters is attempted.

use crate::core::ranker::{split_genres, GenrePriorityList, UNKNOWN_GENRE};
use crate::models::film::{EnrichedRecord, PlacementDecision};
use crate::utils::fs::extension_of;
use crate::Result;
use std::path::Path;

/// Select the genre a record belongs to.
///
/// A record with no genres goes to "unknown" unconditionally. Otherwise
/// the record is filed under the first entry of the batch-wide priority
/// list that appears among its own genre tokens, i.e. its highest
/// global-priority genre rather than its first-listed one. If no token
/// matches any ranked entry the record falls back to "unknown".
pub fn select_genre<'a>(
    record: &EnrichedRecord,
    priorities: &'a GenrePriorityList,
) -> &'a str {
    let genres = match record.genres.as_deref() {
        Some(genres) => split_genres(genres),
        None => return UNKNOWN_GENRE,
    };

    priorities
        .iter()
        .find(|ranked| genres.contains(ranked))
        .unwrap_or(UNKNOWN_GENRE)
}

/// Build the placement decision for one record.
///
/// Side effect: creates the destination root and the genre subdirectory
/// when missing, unless `dry_run` is set.
pub fn place(
    record: &EnrichedRecord,
    priorities: &GenrePriorityList,
    dest_dir: &Path,
    dry_run: bool,
) -> Result<PlacementDecision> {
    let genre = select_genre(record, priorities);
    let genre_dir = dest_dir.join(genre);

    if !dry_run && !genre_dir.exists() {
        std::fs::create_dir_all(&genre_dir)?;
    }

    let title = record.display_title();
    let year_suffix = record
        .year
        .map(|year| format!(" ({})", year))
        .unwrap_or_default();
    let extension = extension_of(&record.file);

    let file_name = match extension {
        Some(ext) => format!("{}{}.{}", title, year_suffix, ext),
        None => format!("{}{}", title, year_suffix),
    };

    Ok(PlacementDecision {
        source: record.source_path(),
        dest: genre_dir.join(file_name),
    })
}
