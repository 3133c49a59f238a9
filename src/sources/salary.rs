use crate::errors::AppResult;
use crate::models::{SalaryBook, SalaryEntry};
use crate::sources::{find_column, open_csv, require_column};
use csv::StringRecord;
use std::path::Path;
use tracing::{debug, warn};

/// Header names accepted for the player column. `PLAYER` wins when a
/// DraftKings export (`Name`) carries both.
const PLAYER_COLUMNS: [&str; 2] = ["PLAYER", "Name"];

/// Resolved column positions of the salary table.
struct SalaryColumns {
    player: usize,
    salary: usize,
}

impl SalaryColumns {
    fn resolve(headers: &StringRecord, path: &Path) -> AppResult<Self> {
        let player = match find_column(headers, &PLAYER_COLUMNS[..1]) {
            Some(i) => i,
            None => require_column(headers, &PLAYER_COLUMNS, path)?,
        };
        let salary = require_column(headers, &["Salary"], path)?;
        Ok(Self { player, salary })
    }

    /// `None` when the row has no player name; an unreadable salary keeps
    /// the player with no salary.
    fn entry(&self, record: &StringRecord) -> Option<SalaryEntry> {
        let player = record.get(self.player).filter(|p| !p.is_empty())?;
        let salary = record
            .get(self.salary)
            .and_then(|s| s.replace(',', "").parse::<u32>().ok());

        if salary.is_none() {
            debug!(player, "salary missing or unreadable");
        }
        Some(SalaryEntry::new(player, salary))
    }
}

/// Reads the salary table. Rows with an unreadable salary keep the player
/// with no salary; unreadable rows and rows without a name are skipped.
pub fn load_salaries(path: &Path) -> AppResult<SalaryBook> {
    let mut rdr = open_csv(path)?;

    let headers = rdr.headers()?.clone();
    let columns = SalaryColumns::resolve(&headers, path)?;

    let mut entries = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        match record {
            Ok(r) => match columns.entry(&r) {
                Some(entry) => entries.push(entry),
                None => warn!(row = i + 1, "salary row without player skipped"),
            },
            Err(e) => warn!(row = i + 1, error = %e, "salary row skipped"),
        }
    }

    debug!(rows = entries.len(), file = %path.display(), "salaries loaded");
    Ok(SalaryBook::from_entries(entries))
}
