//! Core data models for the scoring pipeline.

mod alliance;
mod analysis;
mod matchup;
mod player;
mod tier;

pub use alliance::*;
pub use analysis::*;
pub use matchup::*;
pub use player::*;
pub use tier::*;
