//! Client configuration: credentials, host, URL layout and timeouts.

use crate::error::{FantasyDataError, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Current FantasyData API host.
pub const DEFAULT_BASE_URL: &str = "https://api.fantasydata.net";

/// Host served by the original `/standard/` layout.
pub const LEGACY_BASE_URL: &str = "http://api.nfldata.apiphany.com";

/// Name of the query parameter that carries the API key.
pub const SUBSCRIPTION_KEY_PARAM: &str = "subscription-key";

pub const DEFAULT_USER_AGENT: &str = concat!("fantasy-data/", env!("CARGO_PKG_VERSION"));

/// How method paths are laid out under the host.
///
/// - `Standard`: `/standard/{format}/{method}`
/// - `V2`: `/{game}/v2/{format}/{method}`
/// - `V3`: `/v3/{game}/{category}/{format}/{method}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlLayout {
    Standard,
    V2,
    #[default]
    V3,
}

impl fmt::Display for UrlLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UrlLayout::Standard => "standard",
            UrlLayout::V2 => "v2",
            UrlLayout::V3 => "v3",
        })
    }
}

impl FromStr for UrlLayout {
    type Err = FantasyDataError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(UrlLayout::Standard),
            "v2" => Ok(UrlLayout::V2),
            "v3" => Ok(UrlLayout::V3),
            other => Err(FantasyDataError::invalid_parameters(format!(
                "unknown URL layout '{other}' (expected standard, v2 or v3)"
            ))),
        }
    }
}

/// Sport served by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    Nfl,
    Nba,
}

impl Game {
    pub fn as_str(&self) -> &'static str {
        match self {
            Game::Nfl => "nfl",
            Game::Nba => "nba",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Endpoint group, a path segment in the `V3` layout only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Scores,
    Stats,
    Projections,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Scores => "scores",
            Category::Stats => "stats",
            Category::Projections => "projections",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable settings for a [`crate::FantasyData`] client.
///
/// ```rust
/// use fantasy_data::{ClientConfig, UrlLayout};
/// use std::time::Duration;
///
/// let config = ClientConfig::new("my-key")
///     .with_layout(UrlLayout::V2)
///     .with_timeout(Duration::from_secs(10));
/// assert_eq!(config.layout(), UrlLayout::V2);
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    base_url: String,
    layout: UrlLayout,
    format: &'static str,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: String,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            layout: UrlLayout::default(),
            format: "json",
            timeout: None,
            connect_timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_layout(mut self, layout: UrlLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Overall deadline for one request, connect through last body byte.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn layout(&self) -> UrlLayout {
        self.layout
    }

    pub fn format(&self) -> &'static str {
        self.format
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Check the key and parse the base URL, which must be absolute http(s).
    pub fn validate(&self) -> Result<Url> {
        if self.api_key.trim().is_empty() {
            return Err(FantasyDataError::invalid_parameters("API key is empty"));
        }

        let url = Url::parse(&self.base_url).map_err(|e| {
            FantasyDataError::invalid_parameters(format!(
                "base URL '{}' is not valid: {e}",
                self.base_url
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(FantasyDataError::invalid_parameters(format!(
                "base URL '{}' must be an absolute http(s) URL",
                self.base_url
            )));
        }

        Ok(url)
    }
}

// Keep the key out of debug output.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("layout", &self.layout)
            .field("format", &self.format)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
