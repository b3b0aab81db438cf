//! Film-related data models.
//!
//! The pipeline threads a file through three shapes: a bare directory
//! listing entry (`FileRef`), the filename parser's hypothesis layered on
//! top (`GuessRecord`), and the OMDb overlay (`EnrichedRecord`). Each is
//! immutable once built; the next stage constructs the next shape.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A regular file found by the scanner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRef {
    /// Directory containing the file.
    pub dir: PathBuf,
    /// Bare filename, no path components.
    pub file: String,
}

impl FileRef {
    /// Full path to the source file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file)
    }
}

/// Structured hypothesis produced by the external filename parser.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Guess {
    /// Guessed title.
    pub title: Option<String>,
    /// Guessed release year.
    pub year: Option<u16>,
    /// Comma-delimited genre names, if the parser supplied any.
    pub genres: Option<String>,
}

/// A file plus its filename guess. Parser fields win on collision with the
/// `FileRef`, but `dir`/`file` always survive since the parser never
/// supplies them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessRecord {
    pub dir: PathBuf,
    pub file: String,
    pub title: Option<String>,
    pub year: Option<u16>,
    pub genres: Option<String>,
}

impl GuessRecord {
    /// Layer a parser guess over a scanned file.
    pub fn from_guess(file_ref: FileRef, guess: Guess) -> Self {
        Self {
            dir: file_ref.dir,
            file: file_ref.file,
            title: guess.title,
            year: guess.year,
            genres: guess.genres,
        }
    }

    /// Full path to the source file.
    pub fn source_path(&self) -> PathBuf {
        self.dir.join(&self.file)
    }
}

/// A guess record with the metadata lookup merged in.
///
/// Field precedence is fixed by [`EnrichedRecord::merge`]: the guess wins
/// for `title`, `year` and `genres`, metadata fills the gaps, and `name`
/// (the database's official title) comes from metadata alone. On lookup
/// failure the record is field-for-field identical to the guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub dir: PathBuf,
    pub file: String,
    pub title: Option<String>,
    pub year: Option<u16>,
    /// Comma-delimited genre names.
    pub genres: Option<String>,
    /// Official title from the metadata service, when the lookup succeeded.
    pub name: Option<String>,
}

/// Fields the metadata service can contribute to a record.
#[derive(Debug, Clone, Default)]
pub struct MetadataFields {
    pub name: Option<String>,
    pub year: Option<u16>,
    pub genres: Option<String>,
}

impl EnrichedRecord {
    /// A record enriched by nothing: the guess carried over unchanged.
    pub fn from_guess(guess: GuessRecord) -> Self {
        Self {
            dir: guess.dir,
            file: guess.file,
            title: guess.title,
            year: guess.year,
            genres: guess.genres,
            name: None,
        }
    }

    /// Merge metadata under a guess.
    ///
    /// | field  | winner                      |
    /// |--------|-----------------------------|
    /// | title  | guess, metadata as fallback |
    /// | year   | guess, metadata as fallback |
    /// | genres | guess, metadata as fallback |
    /// | name   | metadata only               |
    pub fn merge(guess: GuessRecord, meta: MetadataFields) -> Self {
        Self {
            dir: guess.dir,
            file: guess.file,
            title: guess.title.or(meta.name.clone()),
            year: guess.year.or(meta.year),
            genres: guess.genres.or(meta.genres),
            name: meta.name,
        }
    }

    /// Full path to the source file.
    pub fn source_path(&self) -> PathBuf {
        self.dir.join(&self.file)
    }

    /// Display title: the official metadata name when known, otherwise the
    /// guessed title, otherwise the raw filename.
    pub fn display_title(&self) -> &str {
        self.name
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or(&self.file)
    }
}

/// A planned relocation of one file. Consumed immediately by the mover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementDecision {
    pub source: PathBuf,
    pub dest: PathBuf,
}
