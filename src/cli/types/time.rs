//! Time-related types for FantasyData seasons, weeks and game dates.

use crate::error::{FantasyDataError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = FantasyDataError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Part of the year a game belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonType {
    #[default]
    #[serde(rename = "REG")]
    Regular,
    #[serde(rename = "PRE")]
    Preseason,
    #[serde(rename = "POST")]
    Postseason,
}

impl SeasonType {
    pub const ALL: [SeasonType; 3] = [
        SeasonType::Regular,
        SeasonType::Preseason,
        SeasonType::Postseason,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonType::Regular => "REG",
            SeasonType::Preseason => "PRE",
            SeasonType::Postseason => "POST",
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeasonType {
    type Err = FantasyDataError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "REG" => Ok(SeasonType::Regular),
            "PRE" => Ok(SeasonType::Preseason),
            "POST" => Ok(SeasonType::Postseason),
            other => Err(FantasyDataError::invalid_parameters(format!(
                "season type must be one of REG, PRE, POST (got '{other}')"
            ))),
        }
    }
}

/// Season year plus season type, rendered the way the API expects: `2014REG`.
///
/// Parsing accepts a bare year (`2014`), which means the regular season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeasonKey {
    pub season: Season,
    pub season_type: SeasonType,
}

impl SeasonKey {
    pub fn new(season: Season, season_type: SeasonType) -> Self {
        Self {
            season,
            season_type,
        }
    }

    pub fn regular(season: Season) -> Self {
        Self::new(season, SeasonType::Regular)
    }
}

impl fmt::Display for SeasonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.season, self.season_type)
    }
}

impl FromStr for SeasonKey {
    type Err = FantasyDataError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let split = s
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(s.len());
        let (year, suffix) = s.split_at(split);
        let season = year.parse::<Season>()?;
        let season_type = if suffix.is_empty() {
            SeasonType::default()
        } else {
            suffix.parse()?
        };
        Ok(Self::new(season, season_type))
    }
}

/// Type-safe wrapper for Week numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = FantasyDataError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Calendar date of a game, sent as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameDate(pub NaiveDate);

impl GameDate {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for GameDate {
    type Err = FantasyDataError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(NaiveDate::parse_from_str(s.trim(), Self::FORMAT)?))
    }
}
