pub mod lineup;
pub mod lineup_metrics;
pub mod quarter;
pub mod report;
pub mod salary;
pub mod scored_player;
pub mod stat_line;

pub use lineup::{LineupEntry, LineupId};
pub use lineup_metrics::{ImpactMetrics, LineupMetrics};
pub use quarter::QuarterPoints;
pub use salary::{SalaryBook, SalaryEntry};
pub use scored_player::ScoredPlayer;
pub use stat_line::PlayerStatLine;
