use serde::Serialize;
use std::fmt;

/// Stable lineup identifier, assigned once at ingestion (1-based row
/// position) and never affected by later sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LineupId(pub u32);

impl fmt::Display for LineupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One submitted (or synthesized) lineup: player references, one per roster slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineupEntry {
    pub id: LineupId,
    pub players: Vec<String>,
}

impl LineupEntry {
    pub fn new(id: u32, players: Vec<String>) -> Self {
        Self {
            id: LineupId(id),
            players,
        }
    }
}
