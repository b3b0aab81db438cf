//! File relocation.
//!
//! Consumes placement decisions one at a time. Dry-run mode only prints
//! the planned `source -> destination` pair. Live mode skips the move when
//! the destination already exists (the check is advisory; a race between
//! check and rename is accepted) and otherwise renames the file. A failed
//! rename is fatal for the run.

use crate::models::film::PlacementDecision;
use crate::Result;
use colored::Colorize;

/// What the mover did with one decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// File was renamed to its destination.
    Moved,
    /// Destination already existed; nothing was touched.
    SkippedExists,
    /// Dry-run: the pair was printed, nothing was touched.
    Planned,
}

/// Apply one placement decision.
///
/// `title` is only used for the confirmation line.
pub fn move_film(
    title: &str,
    decision: &PlacementDecision,
    dry_run: bool,
) -> Result<MoveOutcome> {
    if dry_run {
        println!(
            "{} -> {}",
            decision.source.display(),
            decision.dest.display()
        );
        return Ok(MoveOutcome::Planned);
    }

    if decision.dest.exists() {
        tracing::debug!("Destination exists, skipping: {:?}", decision.dest);
        return Ok(MoveOutcome::SkippedExists);
    }

    std::fs::rename(&decision.source, &decision.dest).map_err(|e| {
        crate::Error::MoveFailed {
            from: decision.source.display().to_string(),
            source: e,
        }
    })?;

    println!(
        "{} moved to {}",
        title.bold(),
        decision.dest.display()
    );

    Ok(MoveOutcome::Moved)
}
