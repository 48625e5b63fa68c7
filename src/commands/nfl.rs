//! NFL command implementation

use tracing::debug;

use super::common::{player_line, render_json, render_list, schedule_line, team_line};
use crate::{cli::NflCmd, fantasy::FantasyData, Result};

/// Run one NFL command and return what should be printed.
pub async fn handle_nfl(client: &FantasyData, cmd: NflCmd, as_json: bool) -> Result<String> {
    debug!(?cmd, "nfl command");
    let nfl = client.nfl();

    match cmd {
        NflCmd::UpcomingSeason => Ok(nfl.get_upcoming_season().await?.to_string()),

        NflCmd::CurrentWeek => Ok(nfl.get_current_week().await?.to_string()),

        NflCmd::Schedules {
            season,
            season_type,
        } => render_list(
            nfl.get_schedules_for_season(season, season_type).await?,
            as_json,
            schedule_line,
        ),

        NflCmd::Teams => render_list(nfl.get_teams_active().await?, as_json, team_line),

        NflCmd::FreeAgents => render_list(nfl.get_free_agents().await?, as_json, player_line),

        NflCmd::Roster { team } => render_list(
            nfl.get_team_roster_and_depth_charts(&team).await?,
            as_json,
            player_line,
        ),

        NflCmd::Player { player_id } => render_json(&nfl.get_player(player_id).await?),

        NflCmd::PlayerGameStats {
            season,
            week,
            season_type,
        } => render_json(&serde_json::Value::Array(
            nfl.get_players_game_stats_for_season_for_week(season, week, season_type)
                .await?,
        )),

        NflCmd::Injuries { week, team } => {
            let injuries = match team {
                Some(team) => nfl.get_injuries_by_team(week.season, week.week, &team).await?,
                None => nfl.get_injuries(week.season, week.week).await?,
            };
            render_json(&serde_json::Value::Array(injuries))
        }

        NflCmd::BoxScore { week, team } => render_json(
            &nfl.get_box_score_by_team(week.season, week.week, &team)
                .await?,
        ),

        NflCmd::Projections {
            week,
            player_id,
            team,
        } => {
            let projections = match (player_id, team) {
                (Some(player_id), _) => {
                    nfl.get_projected_player_game_stats_by_player(week.season, week.week, player_id)
                        .await?
                }
                (None, Some(team)) => serde_json::Value::Array(
                    nfl.get_projected_player_game_stats_by_team(week.season, week.week, &team)
                        .await?,
                ),
                (None, None) => serde_json::Value::Array(
                    nfl.get_projected_player_game_stats_by_week(week.season, week.week)
                        .await?,
                ),
            };
            render_json(&projections)
        }

        NflCmd::DefenseProjections { week } => render_json(&serde_json::Value::Array(
            nfl.get_projected_fantasy_defense_game_stats_by_week(week.season, week.week)
                .await?,
        )),
    }
}
