//! Serde models for the payloads the CLI renders.
//!
//! Endpoints return raw `serde_json::Value`s; these models are an opt-in view
//! over them. Fields the API sometimes omits or nulls are `Option`s.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FantasyDataError, Result};


/// Decode every element of a list payload as `T`, keeping order.
pub fn decode_list<T: DeserializeOwned>(items: Vec<Value>) -> Result<Vec<T>> {
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(FantasyDataError::from))
        .collect()
}

/// One NFL game from `Schedules/{season}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NflSchedule {
    #[serde(default)]
    pub game_key: Option<String>,
    pub season: u16,
    /// 1 = regular, 2 = preseason, 3 = postseason
    #[serde(default)]
    pub season_type: Option<u8>,
    pub week: u16,
    /// Kickoff; `/Date(...)/` on the legacy host, ISO-8601 on later ones.
    #[serde(default)]
    pub date: Option<String>,
    pub away_team: String,
    pub home_team: String,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub point_spread: Option<f64>,
    #[serde(default)]
    pub over_under: Option<f64>,
}

impl NflSchedule {
    /// Bye weeks come back as games against `BYE`.
    pub fn is_bye(&self) -> bool {
        self.away_team == "BYE" || self.home_team == "BYE"
    }
}

/// Team record, shared by the NFL and NBA `Teams` endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Team {
    pub key: String,
    #[serde(default, rename = "TeamID")]
    pub team_id: Option<u32>,
    #[serde(default)]
    pub city: Option<String>,
    pub name: String,
    #[serde(default)]
    pub conference: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
}

/// Player record from rosters, free agents and `Player/{playerid}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Player {
    #[serde(rename = "PlayerID")]
    pub player_id: u32,
    pub name: String,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub number: Option<u16>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub injury_status: Option<String>,
    #[serde(default)]
    pub depth_order: Option<u16>,
}

/// One NBA game from `Games/{season}` or `GamesByDate/{date}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NbaGame {
    #[serde(rename = "GameID")]
    pub game_id: u32,
    pub season: u16,
    pub status: String,
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub date_time: Option<String>,
    pub away_team: String,
    pub home_team: String,
    #[serde(default)]
    pub away_team_score: Option<u16>,
    #[serde(default)]
    pub home_team_score: Option<u16>,
    #[serde(default)]
    pub point_spread: Option<f64>,
    #[serde(default)]
    pub over_under: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Standing {
    #[serde(rename = "TeamID")]
    pub team_id: u32,
    #[serde(default)]
    pub city: Option<String>,
    pub name: String,
    pub wins: u16,
    pub losses: u16,
    #[serde(default)]
    pub conference: Option<String>,
}

impl Standing {
    /// Win fraction, 0.0 before any games are played.
    pub fn win_percentage(&self) -> f64 {
        let played = u32::from(self.wins) + u32::from(self.losses);
        if played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(played)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Stadium {
    #[serde(rename = "StadiumID")]
    pub stadium_id: u32,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
}
