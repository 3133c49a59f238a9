//! Lineup-entries table with an explicit roster-slot schema.

use crate::errors::{AppError, AppResult};
use crate::models::LineupEntry;
use crate::sources::{open_csv, require_column};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

/// DraftKings NBA classic roster.
pub const DEFAULT_SLOTS: [&str; 8] = ["PG", "SG", "SF", "PF", "C", "G", "F", "UTIL"];

/// Declared roster-slot column names, in slot order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSlots(Vec<String>);

impl RosterSlots {
    /// Rejects an empty declaration, blank names and duplicates.
    pub fn new<I, S>(slots: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slots: Vec<String> = slots.into_iter().map(|s| s.into().trim().to_string()).collect();

        if slots.is_empty() {
            return Err(AppError::InvalidSlots("no roster slot declared".into()));
        }
        if slots.iter().any(|s| s.is_empty()) {
            return Err(AppError::InvalidSlots("blank roster slot name".into()));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = slots.iter().find(|s| !seen.insert(s.as_str())) {
            return Err(AppError::InvalidSlots(format!("duplicate slot '{dup}'")));
        }

        Ok(Self(slots))
    }

    /// Parses a comma separated list such as `PG,SG,UTIL`.
    pub fn parse(list: &str) -> AppResult<Self> {
        Self::new(list.split(','))
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}

impl Default for RosterSlots {
    fn default() -> Self {
        Self(DEFAULT_SLOTS.iter().map(|s| s.to_string()).collect())
    }
}

/// Reads one lineup per row from the declared slot columns.
///
/// Every declared slot must exist in the header. Blank cells are skipped and
/// other columns ignored; unreadable rows are skipped with a warning.
/// Lineup ids are the 1-based data row positions.
pub fn load_entries(path: &Path, slots: &RosterSlots) -> AppResult<Vec<LineupEntry>> {
    let mut rdr = open_csv(path)?;
    let headers = rdr.headers()?.clone();

    let columns = slots
        .names()
        .iter()
        .map(|slot| require_column(&headers, &[slot.as_str()], path))
        .collect::<AppResult<Vec<usize>>>()?;

    let mut entries = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        // the id stays the row position even when earlier rows are skipped
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                warn!(row = i + 1, error = %e, "lineup row skipped");
                continue;
            }
        };

        let players = columns
            .iter()
            .filter_map(|&c| record.get(c))
            .filter(|cell| !cell.is_empty())
            .map(str::to_string)
            .collect();

        entries.push(LineupEntry::new(i as u32 + 1, players));
    }

    debug!(lineups = entries.len(), file = %path.display(), "entries loaded");
    Ok(entries)
}
