//! NFL endpoints.

use serde_json::Value;

use crate::cli::types::{PlayerId, Season, SeasonKey, SeasonType, TeamKey, Week};
use crate::config::{Category, Game};
use crate::error::Result;
use crate::fantasy::http::{coerce_integer, into_list, FantasyData};
use crate::fantasy::request::TemplateParams;

/// NFL view over a [`FantasyData`] client, from [`FantasyData::nfl`].
#[derive(Debug, Clone, Copy)]
pub struct Nfl<'a> {
    client: &'a FantasyData,
}

impl<'a> Nfl<'a> {
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
            .call(Game::Nfl, template, Some(category), params)
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

    /// Year of the current season during the season; during the off-season,
    /// the next one. Rolls over right after the Super Bowl.
    pub async fn get_upcoming_season(&self) -> Result<i64> {
        coerce_integer(&self.fetch("UpcomingSeason", Category::Scores, &[]).await?)
    }

    /// Current week number (1-17 regular season, 18-21 postseason).
    pub async fn get_current_week(&self) -> Result<i64> {
        coerce_integer(&self.fetch("CurrentWeek", Category::Scores, &[]).await?)
    }

    /// Game schedule for a season, one element per game.
    pub async fn get_schedules_for_season(
        &self,
        season: Season,
        season_type: SeasonType,
    ) -> Result<Vec<Value>> {
        let key = SeasonKey::new(season, season_type);
        self.fetch_list("Schedules/{season}", Category::Scores, &[("season", &key)])
            .await
    }

    pub async fn get_teams_active(&self) -> Result<Vec<Value>> {
        self.fetch_list("Teams", Category::Scores, &[]).await
    }

    pub async fn get_free_agents(&self) -> Result<Vec<Value>> {
        self.fetch_list("FreeAgents", Category::Stats, &[]).await
    }

    pub async fn get_team_roster_and_depth_charts(&self, team: &TeamKey) -> Result<Vec<Value>> {
        self.fetch_list("Players/{team}", Category::Stats, &[("team", team)])
            .await
    }

    pub async fn get_player(&self, player_id: PlayerId) -> Result<Value> {
        self.fetch("Player/{playerid}", Category::Stats, &[("playerid", &player_id)])
            .await
    }

    pub async fn get_players_game_stats_for_season_for_week(
        &self,
        season: Season,
        week: Week,
        season_type: SeasonType,
    ) -> Result<Vec<Value>> {
        let key = SeasonKey::new(season, season_type);
        self.fetch_list(
            "PlayerGameStatsByWeek/{season}/{week}",
            Category::Stats,
            &[("season", &key), ("week", &week)],
        )
        .await
    }

    pub async fn get_injuries(&self, season: SeasonKey, week: Week) -> Result<Vec<Value>> {
        self.fetch_list(
            "Injuries/{season}/{week}",
            Category::Stats,
            &[("season", &season), ("week", &week)],
        )
        .await
    }

    pub async fn get_injuries_by_team(
        &self,
        season: SeasonKey,
        week: Week,
        team: &TeamKey,
    ) -> Result<Vec<Value>> {
        self.fetch_list(
            "Injuries/{season}/{week}/{team}",
            Category::Stats,
            &[("season", &season), ("week", &week), ("team", team)],
        )
        .await
    }

    pub async fn get_box_score_by_team(
        &self,
        season: SeasonKey,
        week: Week,
        team: &TeamKey,
    ) -> Result<Value> {
        self.fetch(
            "BoxScoreV3/{season}/{week}/{team}",
            Category::Stats,
            &[("season", &season), ("week", &week), ("team", team)],
        )
        .await
    }

    pub async fn get_projected_player_game_stats_by_player(
        &self,
        season: SeasonKey,
        week: Week,
        player_id: PlayerId,
    ) -> Result<Value> {
        self.fetch(
            "PlayerGameProjectionStatsByPlayerID/{season}/{week}/{playerid}",
            Category::Projections,
            &[("season", &season), ("week", &week), ("playerid", &player_id)],
        )
        .await
    }

    pub async fn get_projected_player_game_stats_by_team(
        &self,
        season: SeasonKey,
        week: Week,
        team: &TeamKey,
    ) -> Result<Vec<Value>> {
        self.fetch_list(
            "PlayerGameProjectionStatsByTeam/{season}/{week}/{team}",
            Category::Projections,
            &[("season", &season), ("week", &week), ("team", team)],
        )
        .await
    }

    pub async fn get_projected_player_game_stats_by_week(
        &self,
        season: SeasonKey,
        week: Week,
    ) -> Result<Vec<Value>> {
        self.fetch_list(
            "PlayerGameProjectionStatsByWeek/{season}/{week}",
            Category::Projections,
            &[("season", &season), ("week", &week)],
        )
        .await
    }

    pub async fn get_projected_fantasy_defense_game_stats_by_week(
        &self,
        season: SeasonKey,
        week: Week,
    ) -> Result<Vec<Value>> {
        self.fetch_list(
            "FantasyDefenseProjectionsByGame/{season}/{week}",
            Category::Projections,
            &[("season", &season), ("week", &week)],
        )
        .await
    }
}
