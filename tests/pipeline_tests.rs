//! Integration tests for ranking, naming and moving.
//!
//! Tests cover:
//! - Genre ranking across a batch
//! - Genre selection and destination naming
//! - Mover skip-on-exists and dry-run behavior
//! - The end-to-end placement scenarios

use film_organizer::core::mover::{move_film, MoveOutcome};
use film_organizer::core::namer::{place, select_genre};
use film_organizer::core::ranker::{rank_genres, UNKNOWN_GENRE};
use film_organizer::models::film::{EnrichedRecord, GuessRecord, MetadataFields};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn record(file: &str, title: &str, year: Option<u16>, genres: Option<&str>) -> EnrichedRecord {
    EnrichedRecord {
        dir: PathBuf::from("/videos"),
        file: file.to_string(),
        title: Some(title.to_string()),
        year,
        genres: genres.map(String::from),
        name: None,
    }
}

// ========== RANKING + SELECTION ==========

#[test]
fn test_ranker_orders_by_batch_frequency() {
    // Two comedies, one drama: Comedy must outrank Drama.
    let records = vec![
        record("a.mkv", "A", None, Some("Comedy")),
        record("b.mkv", "B", None, Some("Comedy")),
        record("c.mkv", "C", None, Some("Drama")),
    ];

    let priorities = rank_genres(&records);
    assert_eq!(priorities.as_slice(), &["Comedy", "Drama"]);
}

#[test]
fn test_selection_uses_global_priority_not_listing_order() {
    let records = vec![
        record("a.mkv", "A", None, Some("Drama")),
        record("b.mkv", "B", None, Some("Drama")),
        record("c.mkv", "C", None, Some("Crime, Drama")),
    ];

    let priorities = rank_genres(&records);
    // "Crime, Drama" lists Crime first, but Drama has the higher global count.
    assert_eq!(select_genre(&records[2], &priorities), "Drama");
}

#[test]
fn test_selection_never_returns_no_genre() {
    let records = vec![record("a.mkv", "A", None, None)];
    let priorities = rank_genres(&records);

    assert_eq!(select_genre(&records[0], &priorities), UNKNOWN_GENRE);
}

// ========== ENRICHMENT MERGE ==========

#[test]
fn test_failed_lookup_preserves_guess_exactly() {
    let guess = GuessRecord {
        dir: PathBuf::from("/videos"),
        file: "inception.mp4".to_string(),
        title: Some("Inception".to_string()),
        year: Some(2010),
        genres: None,
    };

    let unchanged = EnrichedRecord::from_guess(guess.clone());
    let expected = EnrichedRecord {
        dir: guess.dir,
        file: guess.file,
        title: guess.title,
        year: guess.year,
        genres: guess.genres,
        name: None,
    };
    assert_eq!(unchanged, expected);
}

// ========== END-TO-END PLACEMENT SCENARIOS ==========

#[test]
fn test_scenario_guess_only_goes_to_unknown() {
    // Parser guessed title and year; the metadata lookup failed.
    let guess = GuessRecord {
        dir: PathBuf::from("/videos"),
        file: "Inception (2010).mp4".to_string(),
        title: Some("Inception".to_string()),
        year: Some(2010),
        genres: None,
    };
    let records = vec![EnrichedRecord::from_guess(guess)];

    let priorities = rank_genres(&records);
    let decision = place(&records[0], &priorities, &PathBuf::from("/dest"), true).unwrap();

    assert_eq!(
        decision.dest,
        PathBuf::from("/dest/unknown/Inception (2010).mp4")
    );
}

#[test]
fn test_scenario_metadata_genres_and_name() {
    // Parser guessed a title but no year; OMDb supplied genres and the
    // official title.
    let guess = GuessRecord {
        dir: PathBuf::from("/videos"),
        file: "dark_knight.mkv".to_string(),
        title: Some("The Dark Knight".to_string()),
        year: None,
        genres: None,
    };
    let meta = MetadataFields {
        name: Some("The Dark Knight".to_string()),
        year: None,
        genres: Some("Action, Crime, Drama".to_string()),
    };
    let enriched = EnrichedRecord::merge(guess, meta);

    // Make Action the highest-frequency genre in the batch.
    let records = vec![
        enriched.clone(),
        record("a.mkv", "A", None, Some("Action")),
    ];
    let priorities = rank_genres(&records);

    let decision = place(&enriched, &priorities, &PathBuf::from("/dest"), true).unwrap();
    assert_eq!(
        decision.dest,
        PathBuf::from("/dest/Action/The Dark Knight.mkv")
    );
}

// ========== MOVER ==========

#[test]
fn test_move_relocates_file() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("movie.mkv");
    fs::write(&source, "fake video").unwrap();
    let dest_dir = temp_dir.path().join("Action");
    fs::create_dir_all(&dest_dir).unwrap();
    let dest = dest_dir.join("Movie (2020).mkv");

    let decision = film_organizer::models::film::PlacementDecision {
        source: source.clone(),
        dest: dest.clone(),
    };

    let outcome = move_film("Movie", &decision, false).unwrap();
    assert_eq!(outcome, MoveOutcome::Moved);
    assert!(!source.exists());
    assert!(dest.exists());
}

#[test]
fn test_move_skips_existing_destination() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("movie.mkv");
    fs::write(&source, "new content").unwrap();
    let dest = temp_dir.path().join("Movie.mkv");
    fs::write(&dest, "old content").unwrap();

    let decision = film_organizer::models::film::PlacementDecision {
        source: source.clone(),
        dest: dest.clone(),
    };

    let outcome = move_film("Movie", &decision, false).unwrap();
    assert_eq!(outcome, MoveOutcome::SkippedExists);
    // No overwrite: both files untouched.
    assert!(source.exists());
    assert_eq!(fs::read_to_string(&dest).unwrap(), "old content");
}

#[test]
fn test_move_twice_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("movie.mkv");
    fs::write(&source, "fake video").unwrap();
    let dest = temp_dir.path().join("Movie.mkv");

    let decision = film_organizer::models::film::PlacementDecision {
        source: source.clone(),
        dest: dest.clone(),
    };

    assert_eq!(move_film("Movie", &decision, false).unwrap(), MoveOutcome::Moved);
    // Second run: the destination now exists, so nothing happens.
    assert_eq!(
        move_film("Movie", &decision, false).unwrap(),
        MoveOutcome::SkippedExists
    );
    assert_eq!(fs::read_to_string(&dest).unwrap(), "fake video");
}

#[test]
fn test_dry_run_touches_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("movie.mkv");
    fs::write(&source, "fake video").unwrap();
    let dest_root = temp_dir.path().join("sorted");

    let rec = record("movie.mkv", "Movie", Some(2020), Some("Action"));
    let rec = EnrichedRecord {
        dir: temp_dir.path().to_path_buf(),
        ..rec
    };
    let priorities = rank_genres(&[rec.clone()]);

    let decision = place(&rec, &priorities, &dest_root, true).unwrap();
    let outcome = move_film("Movie", &decision, true).unwrap();

    assert_eq!(outcome, MoveOutcome::Planned);
    assert!(source.exists());
    // Dry-run must not create the destination tree either.
    assert!(!dest_root.exists());
}

#[test]
fn test_place_creates_genre_directory_in_live_mode() {
    let temp_dir = TempDir::new().unwrap();
    let dest_root = temp_dir.path().join("sorted");

    let rec = record("movie.mkv", "Movie", None, Some("Action"));
    let priorities = rank_genres(&[rec.clone()]);

    place(&rec, &priorities, &dest_root, false).unwrap();
    assert!(dest_root.join("Action").is_dir());
}
