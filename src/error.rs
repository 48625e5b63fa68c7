//! Error types for the FantasyData client

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, FantasyDataError>;

/// Coarse classification of a [`FantasyDataError`], stable enough to match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Transport failure or a response that could not be understood.
    Unavailable,
    /// Upstream rejected the subscription key (HTTP 401).
    InvalidApiKey,
    /// Upstream answered with some other non-success status.
    RequestFailed,
    /// A caller-supplied argument failed local validation; nothing was sent.
    InvalidParameters,
}

#[derive(Error, Debug)]
pub enum FantasyDataError {
    #[error("Cannot connect to the FantasyData API: {0}")]
    Unavailable(#[from] reqwest::Error),

    #[error("FantasyData API returned a body that is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("FantasyData API returned an unexpected payload: expected {expected}, found {found}")]
    UnexpectedPayload {
        expected: &'static str,
        found: String,
    },

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Failed to get response (HTTP {status}){}", message_suffix(.message))]
    RequestFailed { status: u16, message: Option<String> },

    #[error("Invalid method parameters: {reason}")]
    InvalidParameters { reason: String },
}

impl FantasyDataError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FantasyDataError::Unavailable(_)
            | FantasyDataError::Malformed(_)
            | FantasyDataError::UnexpectedPayload { .. } => ErrorKind::Unavailable,
            FantasyDataError::InvalidApiKey => ErrorKind::InvalidApiKey,
            FantasyDataError::RequestFailed { .. } => ErrorKind::RequestFailed,
            FantasyDataError::InvalidParameters { .. } => ErrorKind::InvalidParameters,
        }
    }

    pub(crate) fn invalid_parameters(reason: impl Into<String>) -> Self {
        FantasyDataError::InvalidParameters {
            reason: reason.into(),
        }
    }
}

fn message_suffix(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {m}"),
        None => String::new(),
    }
}

impl From<std::num::ParseIntError> for FantasyDataError {
    fn from(err: std::num::ParseIntError) -> Self {
        FantasyDataError::InvalidParameters {
            reason: err.to_string(),
        }
    }
}

impl From<chrono::ParseError> for FantasyDataError {
    fn from(err: chrono::ParseError) -> Self {
        FantasyDataError::InvalidParameters {
            reason: err.to_string(),
        }
    }
}
