//! Type-safe parameter wrappers for FantasyData endpoints.

pub mod ids;
pub mod time;

pub use ids::{PlayerId, TeamKey};
pub use time::{GameDate, Season, SeasonKey, SeasonType, Week};
