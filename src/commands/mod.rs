//! Command implementations for the FantasyData CLI

pub mod common;
pub mod nba;
pub mod nfl;


pub use nba::handle_nba;
pub use nfl::handle_nfl;
