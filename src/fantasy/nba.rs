//! NBA endpoints.

use serde_json::Value;

use crate::cli::types::{GameDate, Season};
use crate::config::{Category, Game};
use crate::error::{FantasyDataError, Result};
use crate::fantasy::http::{coerce_integer, into_list, FantasyData};
use crate::fantasy::request::TemplateParams;

/// NBA view over a [`FantasyData`] client, from [`FantasyData::nba`].
#[derive(Debug, Clone, Copy)]
pub struct Nba<'a> {
    client: &'a FantasyData,
}

impl<'a> Nba<'a> {
    pub(crate) fn new(client: &'a FantasyData) -> Self {
        Self { client }
    }

    async fn fetch(
        &self,
        template: &str,
        category: Category,
        params: &TemplateParams<'_>,
    ) -> Result<Value> {
        self.client
            .call(Game::Nba, template, Some(category), params)
            .await
    }

    async fn fetch_list(
        &self,
        template: &str,
        category: Category,
        params: &TemplateParams<'_>,
    ) -> Result<Vec<Value>> {
        into_list(self.fetch(template, category, params).await?)
    }

    /// Year of the current season, read from the `Season` field of the
    /// season record.
    pub async fn get_current_season(&self) -> Result<i64> {
        let record = self.fetch("CurrentSeason", Category::Scores, &[]).await?;
        let season = record
            .get("Season")
            .ok_or_else(|| FantasyDataError::UnexpectedPayload {
                expected: "an object with a Season field",
                found: record.to_string(),
            })?;
        coerce_integer(season)
    }

    pub async fn get_games_by_season(&self, season: Season) -> Result<Vec<Value>> {
        self.fetch_list("Games/{season}", Category::Scores, &[("season", &season)])
            .await
    }

    pub async fn get_games_by_date(&self, date: GameDate) -> Result<Vec<Value>> {
        self.fetch_list("GamesByDate/{date}", Category::Scores, &[("date", &date)])
            .await
    }

    pub async fn get_players_game_stats_by_date(&self, date: GameDate) -> Result<Vec<Value>> {
        self.fetch_list(
            "PlayerGameStatsByDate/{date}",
            Category::Stats,
            &[("date", &date)],
        )
        .await
    }

    pub async fn get_team_game_stats_by_date(&self, date: GameDate) -> Result<Vec<Value>> {
        self.fetch_list(
            "TeamGameStatsByDate/{date}",
            Category::Stats,
            &[("date", &date)],
        )
        .await
    }

    pub async fn get_standings(&self, season: Season) -> Result<Vec<Value>> {
        self.fetch_list("Standings/{season}", Category::Scores, &[("season", &season)])
            .await
    }

    pub async fn get_teams_active(&self) -> Result<Vec<Value>> {
        self.fetch_list("teams", Category::Scores, &[]).await
    }

    pub async fn get_stadiums(&self) -> Result<Vec<Value>> {
        self.fetch_list("Stadiums", Category::Scores, &[]).await
    }
}
