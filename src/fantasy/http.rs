//! HTTP client for FantasyData: the single request/classify/decode path
//! every endpoint goes through.

use std::sync::Arc;

use reqwest::{header::ACCEPT, Client, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{Category, ClientConfig, Game, SUBSCRIPTION_KEY_PARAM};
use crate::error::{FantasyDataError, Result};
use crate::fantasy::nba::Nba;
use crate::fantasy::nfl::Nfl;
use crate::fantasy::request::{ApiRequest, TemplateParams};

#[cfg(test)]
mod tests;

/// FantasyData API client.
///
/// Cheap to clone; clones share the connection pool and configuration.
#[derive(Debug, Clone)]
pub struct FantasyData {
    http: Client,
    config: Arc<ClientConfig>,
    base_url: Url,
}

impl FantasyData {
    /// Client for the current API with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = config.validate()?;

        let mut builder = Client::builder().user_agent(config.user_agent());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            config: Arc::new(config),
            base_url,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// NFL endpoints.
    pub fn nfl(&self) -> Nfl<'_> {
        Nfl::new(self)
    }

    /// NBA endpoints.
    pub fn nba(&self) -> Nba<'_> {
        Nba::new(self)
    }

    /// URL a request would be sent to.
    pub fn url_for(&self, request: &ApiRequest) -> Result<Url> {
        request.to_url(&self.base_url, &self.config)
    }

    /// Call an API method by template, e.g. `Schedules/{season}`.
    ///
    /// Fails with `InvalidParameters` before anything is sent when a placeholder
    /// has no value or the layout needs a category that was not given.
    pub async fn call(
        &self,
        game: Game,
        method_template: &str,
        category: Option<Category>,
        params: &TemplateParams<'_>,
    ) -> Result<Value> {
        let request = ApiRequest::from_template(game, method_template, category, params)?;
        self.send(&request).await
    }

    /// Issue one GET and classify the response.
    pub async fn send(&self, request: &ApiRequest) -> Result<Value> {
        let url = self.url_for(request)?;
        let shown = redacted(&url);
        debug!(url = %shown, "GET");

        let outcome = async {
            let response = self
                .http
                .get(url)
                .header(ACCEPT, "application/json")
                .send()
                .await?;
            let status = response.status();
            let body = response.bytes().await?;
            debug!(url = %shown, status = status.as_u16(), bytes = body.len(), "response");
            classify_response(status, &body)
        }
        .await;

        outcome.inspect_err(|err| warn!(url = %shown, error = %err, "FantasyData request failed"))
    }
}

/// Turn a status code and raw body into a payload or a typed error.
///
/// The transport status decides first. A successful response whose body is an
/// object carrying a non-2xx `statusCode` is classified by that code as well;
/// `statusCode: 200` in a body is never treated as a failure.
pub fn classify_response(status: StatusCode, body: &[u8]) -> Result<Value> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(FantasyDataError::InvalidApiKey);
    }
    if !status.is_success() {
        let message = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|v| upstream_message(&v));
        return Err(FantasyDataError::RequestFailed {
            status: status.as_u16(),
            message,
        });
    }

    let value: Value = serde_json::from_slice(body)?;

    let embedded = value
        .get("statusCode")
        .and_then(Value::as_u64)
        .and_then(|code| u16::try_from(code).ok());
    match embedded {
        Some(401) => Err(FantasyDataError::InvalidApiKey),
        Some(code) if !(200..300).contains(&code) => Err(FantasyDataError::RequestFailed {
            status: code,
            message: upstream_message(&value),
        }),
        _ => Ok(value),
    }
}

fn upstream_message(value: &Value) -> Option<String> {
    ["message", "Message"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

/// Coerce a scalar payload to an integer: JSON integers, whole floats and
/// decimal strings are accepted.
pub fn coerce_integer(value: &Value) -> Result<i64> {
    let coerced = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    coerced.ok_or_else(|| FantasyDataError::UnexpectedPayload {
        expected: "an integer",
        found: value.to_string(),
    })
}

/// Unwrap an array payload, keeping the upstream order.
pub fn into_list(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(FantasyDataError::UnexpectedPayload {
            expected: "a JSON array",
            found: summarize(&other),
        }),
    }
}

fn summarize(value: &Value) -> String {
    let text = value.to_string();
    if text.chars().count() > 80 {
        let cut: String = text.chars().take(80).collect();
        format!("{cut}...")
    } else {
        text
    }
}

/// Request URL with the subscription key masked, for logs.
pub fn redacted(url: &Url) -> String {
    let mut shown = url.clone();
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    if pairs.is_empty() {
        return shown.to_string();
    }

    shown.query_pairs_mut().clear().extend_pairs(pairs.iter().map(|(k, v)| {
        if k == SUBSCRIPTION_KEY_PARAM {
            (k.as_str(), "REDACTED")
        } else {
            (k.as_str(), v.as_str())
        }
    }));
    shown.to_string()
}
