pub mod config;
pub mod export;
pub mod inputs;
pub mod lineups;
pub mod score;
