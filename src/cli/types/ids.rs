//! ID types for FantasyData players and teams.

use crate::error::{FantasyDataError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for FantasyData Player IDs
///
/// # Examples
///
/// ```rust
/// use fantasy_data::PlayerId;
///
/// let player_id: PlayerId = "732".parse().unwrap();
/// assert_eq!(player_id.as_u32(), 732);
/// assert_eq!(player_id.to_string(), "732");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = FantasyDataError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Team abbreviation as used by the API (`WAS`, `NE`, `GS`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamKey(String);

impl TeamKey {
    /// Build a team key, rejecting empty or non-alphanumeric input.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(FantasyDataError::invalid_parameters(format!(
                "team key must be a non-empty alphanumeric abbreviation (got '{key}')"
            )));
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TeamKey {
    type Err = FantasyDataError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_player_id_parsing() {
        assert_eq!("14536".parse::<PlayerId>().unwrap(), PlayerId::new(14536));
        let err = "abc".parse::<PlayerId>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameters);
    }

    #[test]
    fn test_team_key_accepts_abbreviations() {
        assert_eq!(TeamKey::new("WAS").unwrap().as_str(), "WAS");
        assert_eq!("ne".parse::<TeamKey>().unwrap().to_string(), "ne");
    }

    #[test]
    fn test_team_key_rejects_path_characters() {
        for bad in ["", "WAS/NYG", "W S", "../x", "?key"] {
            let err = TeamKey::new(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidParameters, "{bad:?}");
        }
    }
}
