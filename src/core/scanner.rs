//! Directory scanner module.
//!
//! Lists every regular file under a source root by unbounded recursive
//! descent. Directories are traversed, not returned; there is no filtering
//! by extension or hidden-file status. An unreadable root (or any
//! unreadable directory below it) aborts the batch.

use crate::models::film::FileRef;
use crate::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively list all regular files under `root`.
///
/// Each result carries the containing directory and the bare filename so
/// the full path can be reconstructed later. Results are sorted by path
/// for deterministic output.
pub fn list_files(root: &Path) -> Result<Vec<FileRef>> {
    if !root.exists() {
        return Err(crate::Error::PathNotFound(root.display().to_string()));
    }
    if !root.is_dir() {
        return Err(crate::Error::NotADirectory(root.display().to_string()));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let dir = path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        files.push(FileRef { dir, file });
    }

    files.sort_by(|a, b| a.path().cmp(&b.path()));

    tracing::info!("Found {} files under {:?}", files.len(), root);

    Ok(files)
}
