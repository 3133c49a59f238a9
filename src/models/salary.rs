use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

/// One row of the contest salary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryEntry {
    pub player_name: String,
    /// `None` when the cell was empty or not a number.
    pub salary: Option<u32>,
}

impl SalaryEntry {
    pub fn new(player_name: impl Into<String>, salary: Option<u32>) -> Self {
        Self {
            player_name: player_name.into(),
            salary,
        }
    }
}

/// Salary lookup keyed by exact player name.
///
/// The first row for a name wins; later duplicates are ignored so that the
/// left join against the boxscore never multiplies a player.
#[derive(Debug, Clone, Default)]
pub struct SalaryBook {
    by_name: HashMap<String, Option<u32>>,
}

impl SalaryBook {
    pub fn from_entries(entries: impl IntoIterator<Item = SalaryEntry>) -> Self {
        let mut by_name = HashMap::new();

        for entry in entries {
            if by_name.contains_key(&entry.player_name) {
                warn!(player = %entry.player_name, "duplicate salary row ignored");
                continue;
            }
            by_name.insert(entry.player_name, entry.salary);
        }

        Self { by_name }
    }

    /// Salary for `player`, `None` if the player is unknown or has no salary.
    pub fn salary_of(&self, player: &str) -> Option<u32> {
        self.by_name.get(player).copied().flatten()
    }

    pub fn contains(&self, player: &str) -> bool {
        self.by_name.contains_key(player)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }
}
