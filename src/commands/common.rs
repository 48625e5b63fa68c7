//! Output rendering shared by the NFL and NBA commands.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    fantasy::types::{decode_list, NbaGame, NflSchedule, Player, Stadium, Standing, Team},
    Result,
};

/// Pretty-printed JSON for any payload.
pub fn render_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Render a list either as raw JSON or one text line per decoded item.
pub fn render_list<T, F>(items: Vec<Value>, as_json: bool, line: F) -> Result<String>
where
    T: DeserializeOwned,
    F: Fn(&T) -> String,
{
    if as_json {
        return render_json(&Value::Array(items));
    }
    if items.is_empty() {
        return Ok("No results".to_string());
    }

    let decoded: Vec<T> = decode_list(items)?;
    Ok(decoded.iter().map(line).collect::<Vec<_>>().join("\n"))
}

pub fn schedule_line(game: &NflSchedule) -> String {
    if game.is_bye() {
        let team = if game.home_team == "BYE" {
            &game.away_team
        } else {
            &game.home_team
        };
        return format!("Week {:>2}  {} BYE", game.week, team);
    }

    let mut line = format!("Week {:>2}  {} @ {}", game.week, game.away_team, game.home_team);
    if let Some(channel) = &game.channel {
        line.push_str(&format!("  {channel}"));
    }
    if let Some(spread) = game.point_spread {
        line.push_str(&format!("  spread {spread:+}"));
    }
    if let Some(total) = game.over_under {
        line.push_str(&format!("  o/u {total}"));
    }
    line
}

pub fn team_line(team: &Team) -> String {
    match &team.city {
        Some(city) => format!("{:<4} {} {}", team.key, city, team.name),
        None => format!("{:<4} {}", team.key, team.name),
    }
}

pub fn player_line(player: &Player) -> String {
    let mut line = format!(
        "{:>6}  {:<3} {}",
        player.player_id,
        player.position.as_deref().unwrap_or("-"),
        player.name
    );
    if let Some(team) = &player.team {
        line.push_str(&format!(" ({team})"));
    }
    if let Some(injury) = &player.injury_status {
        line.push_str(&format!(" [{injury}]"));
    }
    line
}

pub fn nba_game_line(game: &NbaGame) -> String {
    let when = game
        .date_time
        .as_deref()
        .or(game.day.as_deref())
        .unwrap_or("TBD");
    let mut line = format!("{when}  {} @ {}  {}", game.away_team, game.home_team, game.status);
    if let (Some(away), Some(home)) = (game.away_team_score, game.home_team_score) {
        line.push_str(&format!("  {away}-{home}"));
    }
    line
}

pub fn standing_line(standing: &Standing) -> String {
    let name = match &standing.city {
        Some(city) => format!("{city} {}", standing.name),
        None => standing.name.clone(),
    };
    format!(
        "{:<28} {:>2}-{:<2} {:.3}",
        name,
        standing.wins,
        standing.losses,
        standing.win_percentage()
    )
}

pub fn stadium_line(stadium: &Stadium) -> String {
    let mut line = format!("{}, {}", stadium.name, stadium.city);
    if let Some(state) = &stadium.state {
        line.push_str(&format!(", {state}"));
    }
    if let Some(capacity) = stadium.capacity {
        line.push_str(&format!("  ({capacity} seats)"));
    }
    line
}
