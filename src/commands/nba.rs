//! NBA command implementation

use serde_json::Value;
use tracing::debug;

use super::common::{nba_game_line, render_json, render_list, stadium_line, standing_line, team_line};
use crate::{cli::NbaCmd, fantasy::FantasyData, FantasyDataError, Result};

/// Run one NBA command and return what should be printed.
pub async fn handle_nba(client: &FantasyData, cmd: NbaCmd, as_json: bool) -> Result<String> {
    debug!(?cmd, "nba command");
    let nba = client.nba();

    match cmd {
        NbaCmd::CurrentSeason => Ok(nba.get_current_season().await?.to_string()),

        NbaCmd::Games { season, date } => {
            let games = match (season, date) {
                (_, Some(date)) => nba.get_games_by_date(date).await?,
                (Some(season), None) => nba.get_games_by_season(season).await?,
                (None, None) => {
                    return Err(FantasyDataError::invalid_parameters(
                        "games needs a season or a date",
                    ))
                }
            };
            render_list(games, as_json, nba_game_line)
        }

        NbaCmd::PlayerStats { date } => render_json(&Value::Array(
            nba.get_players_game_stats_by_date(date).await?,
        )),

        NbaCmd::TeamStats { date } => {
            render_json(&Value::Array(nba.get_team_game_stats_by_date(date).await?))
        }

        NbaCmd::Standings { season } => {
            render_list(nba.get_standings(season).await?, as_json, standing_line)
        }

        NbaCmd::Teams => render_list(nba.get_teams_active().await?, as_json, team_line),

        NbaCmd::Stadiums => render_list(nba.get_stadiums().await?, as_json, stadium_line),
    }
}
