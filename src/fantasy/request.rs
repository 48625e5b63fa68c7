//! Typed request descriptors and method-path template substitution.

use std::fmt;

use reqwest::Url;

use crate::config::{Category, ClientConfig, Game, UrlLayout, SUBSCRIPTION_KEY_PARAM};
use crate::error::{FantasyDataError, Result};

/// Placeholder values for [`ApiRequest::from_template`], stringified with `Display`.
pub type TemplateParams<'p> = [(&'p str, &'p (dyn fmt::Display + Sync))];

/// One GET against the API: which game, which category, which method path.
///
/// Method path segments are stored unencoded and percent-encoded only when the
/// URL is composed, so a value can never introduce extra path segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    game: Game,
    category: Option<Category>,
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(game: Game, category: Option<Category>) -> Self {
        Self {
            game,
            category,
            segments: Vec::new(),
            query: Vec::new(),
        }
    }

    /// Append one method path segment.
    pub fn segment(mut self, segment: impl fmt::Display) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    /// Append an extra query parameter after the subscription key.
    pub fn query(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Build a request from a template such as `PlayerGameStatsByWeek/{season}/{week}`.
    ///
    /// `/` separates path segments. Every `{name}` must have a matching entry in
    /// `params`; entries without a placeholder are ignored.
    pub fn from_template(
        game: Game,
        template: &str,
        category: Option<Category>,
        params: &TemplateParams<'_>,
    ) -> Result<Self> {
        let mut request = Self::new(game, category);
        for raw in template.split('/') {
            if raw.is_empty() {
                return Err(FantasyDataError::invalid_parameters(format!(
                    "method template '{template}' contains an empty path segment"
                )));
            }
            request.segments.push(substitute(template, raw, params)?);
        }
        Ok(request)
    }

    pub fn game(&self) -> Game {
        self.game
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Method path as it appears after the format segment, e.g. `Schedules/2014REG`.
    pub fn method_path(&self) -> String {
        self.segments.join("/")
    }

    /// Compose the full request URL under `base` using the configured layout.
    pub fn to_url(&self, base: &Url, config: &ClientConfig) -> Result<Url> {
        if self.segments.is_empty() {
            return Err(FantasyDataError::invalid_parameters(
                "request has no method path",
            ));
        }

        let prefix: Vec<&str> = match config.layout() {
            UrlLayout::Standard => vec!["standard"],
            UrlLayout::V2 => vec![self.game.as_str(), "v2"],
            UrlLayout::V3 => {
                let category = self.category.ok_or_else(|| {
                    FantasyDataError::invalid_parameters(format!(
                        "method '{}' needs a category for the v3 URL layout",
                        self.method_path()
                    ))
                })?;
                vec!["v3", self.game.as_str(), category.as_str()]
            }
        };

        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| {
                FantasyDataError::invalid_parameters(format!("base URL '{base}' cannot hold a path"))
            })?
            .pop_if_empty()
            .extend(prefix)
            .push(config.format())
            .extend(&self.segments);

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair(SUBSCRIPTION_KEY_PARAM, config.api_key());
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }
}

fn substitute(template: &str, segment: &str, params: &TemplateParams<'_>) -> Result<String> {
    let mut out = String::with_capacity(segment.len());
    let mut rest = segment;

    while let Some(open) = rest.find(['{', '}']) {
        if rest.as_bytes()[open] == b'}' {
            return Err(unbalanced(template));
        }
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| unbalanced(template))?;
        let name = &after[..close];
        if name.is_empty() || name.contains('{') {
            return Err(unbalanced(template));
        }

        let value = params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
            .ok_or_else(|| {
                FantasyDataError::invalid_parameters(format!(
                    "no value supplied for '{{{name}}}' in '{template}'"
                ))
            })?;
        if value.is_empty() {
            return Err(FantasyDataError::invalid_parameters(format!(
                "empty value supplied for '{{{name}}}' in '{template}'"
            )));
        }
        out.push_str(&value);
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

fn unbalanced(template: &str) -> FantasyDataError {
    FantasyDataError::invalid_parameters(format!(
        "method template '{template}' has unbalanced or empty braces"
    ))
}
