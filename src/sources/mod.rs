//! Loaders for the three input tables. They own all parsing and defaulting;
//! the engine only ever sees well-formed models.

pub mod boxscore;
pub mod entries;
pub mod salary;

pub use boxscore::load_boxscore;
pub use entries::{RosterSlots, load_entries};
pub use salary::load_salaries;

use crate::errors::{AppError, AppResult};
use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::Path;

/// CSV reader tolerant to ragged rows and padded cells.
pub(crate) fn open_csv(path: &Path) -> AppResult<Reader<File>> {
    let rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)?;
    Ok(rdr)
}

/// Index of the first header matching one of `names`.
pub(crate) fn find_column(headers: &StringRecord, names: &[&str]) -> Option<usize> {
    headers.iter().position(|h| names.contains(&h))
}

/// Fails with `MissingColumn` unless one of `names` is in the header.
pub(crate) fn require_column(headers: &StringRecord, names: &[&str], path: &Path) -> AppResult<usize> {
    find_column(headers, names).ok_or_else(|| AppError::MissingColumn {
        column: names.join("|"),
        file: path.display().to_string(),
    })
}
