//! # ACIS Engine
//!
//! Alliance combat index scoring and matchup analysis for warzone rosters.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (players, tiers, alliances, matchups)
//! - **calculate**: The scoring pipeline (grouping, squads, classification,
//!   aggregation, scoring, matchups)
//! - **storage**: Roster loading and analysis history (JSON / JSONL)
//! - **config**: Configuration loading and validation

pub mod calculate;
pub mod config;
pub mod models;
pub mod storage;

pub use calculate::{analyze_warzone, AnalysisError};
pub use config::AcisConfig;
pub use models::*;
