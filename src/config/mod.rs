use crate::core::calculator::impact::SyntheticParams;
use crate::errors::{AppError, AppResult};
use crate::sources::RosterSlots;
use crate::sources::entries::DEFAULT_SLOTS;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Roster-slot columns of the lineup-entries table
    #[serde(default = "default_roster_slots")]
    pub roster_slots: Vec<String>,
    /// Synthetic pool floor: players must be priced above it
    #[serde(default = "default_min_salary")]
    pub min_salary: u32,
    #[serde(default = "default_synthetic_lineups")]
    pub synthetic_lineups: usize,
    #[serde(default = "default_lineup_size")]
    pub lineup_size: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_value_alert_threshold")]
    pub value_alert_threshold: f64,
    #[serde(default = "default_impact_top_n")]
    pub impact_top_n: usize,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_roster_slots() -> Vec<String> {
    DEFAULT_SLOTS.iter().map(|s| s.to_string()).collect()
}
fn default_min_salary() -> u32 {
    3000
}
fn default_synthetic_lineups() -> usize {
    50
}
fn default_lineup_size() -> usize {
    8
}
fn default_seed() -> u64 {
    42
}
fn default_value_alert_threshold() -> f64 {
    5.0
}
fn default_impact_top_n() -> usize {
    5
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_slots: default_roster_slots(),
            min_salary: default_min_salary(),
            synthetic_lineups: default_synthetic_lineups(),
            lineup_size: default_lineup_size(),
            seed: default_seed(),
            value_alert_threshold: default_value_alert_threshold(),
            impact_top_n: default_impact_top_n(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dfsflow")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("dfsflow.yaml")
    }

    /// Load configuration from `path` (or the standard file).
    /// A missing standard file means defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = match path {
            Some(p) if !p.exists() => {
                return Err(AppError::Config(format!("{} not found", p.display())));
            }
            Some(p) => p.to_path_buf(),
            None => Self::config_file(),
        };

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // un file vuoto equivale ai default
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> AppResult<()> {
        if self.lineup_size == 0 {
            return Err(AppError::Config("lineup_size must be at least 1".into()));
        }
        if !self.value_alert_threshold.is_finite() {
            return Err(AppError::Config("value_alert_threshold must be a number".into()));
        }
        self.roster_slots()?;
        Ok(())
    }

    /// Write the default configuration to `path`.
    /// An existing file is kept unless `force` is set.
    pub fn init(path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = format!(
            "# dfsflow configuration, generated {}\n{}",
            Local::now().format("%Y-%m-%d %H:%M"),
            Config::default().to_yaml()?
        );
        fs::write(path, content)?;
        Ok(())
    }

    pub fn roster_slots(&self) -> AppResult<RosterSlots> {
        RosterSlots::new(self.roster_slots.iter().cloned())
    }

    pub fn synthetic_params(&self) -> SyntheticParams {
        SyntheticParams {
            lineups: self.synthetic_lineups,
            lineup_size: self.lineup_size,
            min_salary: self.min_salary,
            top_n: self.impact_top_n,
        }
    }
}
