//! FantasyData API Client Library
//!
//! A Rust client for the FantasyData sports statistics API (NFL and NBA).
//! Every endpoint is one GET against a versioned REST path with the API key
//! sent as the `subscription-key` query parameter; the JSON response comes
//! back as a `serde_json::Value` or a typed [`FantasyDataError`].
//!
//! ## Features
//!
//! - **Three URL layouts**: `/standard/`, `/{game}/v2/` and `/v3/{game}/{category}/`
//! - **Typed parameters**: seasons, season types, weeks, dates and team keys are
//!   validated before anything is sent
//! - **Typed errors**: [`ErrorKind`] separates transport trouble, bad keys,
//!   upstream failures and bad arguments
//! - **Optional models**: serde structs for schedules, teams, players and more
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fantasy_data::{FantasyData, Season, SeasonType};
//!
//! # async fn example() -> fantasy_data::Result<()> {
//! let client = FantasyData::new("your-subscription-key")?;
//!
//! let season = client.nfl().get_upcoming_season().await?;
//! let games = client
//!     .nfl()
//!     .get_schedules_for_season(Season::new(2014), SeasonType::Regular)
//!     .await?;
//! println!("{season}: {} games", games.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! The `fantasy-data` binary reads the key from `--api-key` or:
//! ```bash
//! export FANTASYDATA_API_KEY=your-subscription-key
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fantasy;
pub mod logging;

// Re-export commonly used types
pub use cli::types::{GameDate, PlayerId, Season, SeasonKey, SeasonType, TeamKey, Week};
pub use config::{Category, ClientConfig, Game, UrlLayout};
pub use error::{ErrorKind, FantasyDataError, Result};
pub use fantasy::{ApiRequest, FantasyData};

pub const API_KEY_ENV_VAR: &str = "FANTASYDATA_API_KEY";
