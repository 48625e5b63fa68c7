//! CLI argument definitions and parsing.

pub mod types;

use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use types::{GameDate, PlayerId, Season, SeasonKey, SeasonType, TeamKey, Week};

use crate::config::{ClientConfig, UrlLayout, DEFAULT_BASE_URL};

/// How to reach the API.
#[derive(Debug, Args)]
pub struct ConnectionArgs {
    /// FantasyData subscription key (or set `FANTASYDATA_API_KEY`).
    #[clap(long, env = "FANTASYDATA_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Scheme and host of the API.
    #[clap(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// URL layout: standard, v2 or v3.
    #[clap(long, default_value_t = UrlLayout::V3)]
    pub layout: UrlLayout,

    /// Per-request timeout in seconds.
    #[clap(long)]
    pub timeout: Option<u64>,
}

impl ConnectionArgs {
    pub fn to_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.api_key.clone())
            .with_base_url(self.base_url.clone())
            .with_layout(self.layout);
        match self.timeout {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }
}

/// Season and week shared by the weekly NFL endpoints.
#[derive(Debug, Args)]
pub struct WeekArgs {
    /// Season with optional type suffix, e.g. 2016 or 2016POST.
    #[clap(long, short)]
    pub season: SeasonKey,

    /// Week number.
    #[clap(long, short)]
    pub week: Week,
}

#[derive(Debug, Subcommand)]
pub enum NflCmd {
    /// Year of the current or next season
    UpcomingSeason,

    /// Number of the current week
    CurrentWeek,

    /// Game schedule for a season
    Schedules {
        /// Season year (e.g. 2014).
        #[clap(long, short)]
        season: Season,

        /// REG, PRE or POST.
        #[clap(long, short = 't', default_value_t = SeasonType::Regular)]
        season_type: SeasonType,
    },

    /// Active teams
    Teams,

    /// Players not on a roster
    FreeAgents,

    /// Roster and depth chart for one team
    Roster {
        /// Team abbreviation (e.g. WAS).
        #[clap(long, short)]
        team: TeamKey,
    },

    /// Details for one player
    Player {
        #[clap(long, short)]
        player_id: PlayerId,
    },

    /// Player game stats for a season and week
    PlayerGameStats {
        /// Season year (e.g. 2014).
        #[clap(long, short)]
        season: Season,

        /// Week number.
        #[clap(long, short)]
        week: Week,

        /// REG, PRE or POST.
        #[clap(long, short = 't', default_value_t = SeasonType::Regular)]
        season_type: SeasonType,
    },

    /// Injury report for a week, optionally for one team
    Injuries {
        #[clap(flatten)]
        week: WeekArgs,

        #[clap(long)]
        team: Option<TeamKey>,
    },

    /// Box score for one team's game in a week
    BoxScore {
        #[clap(flatten)]
        week: WeekArgs,

        #[clap(long)]
        team: TeamKey,
    },

    /// Projected player stats for a week, by player, by team, or all players
    Projections {
        #[clap(flatten)]
        week: WeekArgs,

        #[clap(long, conflicts_with = "team")]
        player_id: Option<PlayerId>,

        #[clap(long)]
        team: Option<TeamKey>,
    },

    /// Projected fantasy defense stats for a week
    DefenseProjections {
        #[clap(flatten)]
        week: WeekArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum NbaCmd {
    /// Year of the current season
    CurrentSeason,

    /// Games for a season or for a single date
    Games {
        /// Season year (e.g. 2016).
        #[clap(long, short, conflicts_with = "date", required_unless_present = "date")]
        season: Option<Season>,

        /// Game date as YYYY-MM-DD.
        #[clap(long, short)]
        date: Option<GameDate>,
    },

    /// Player game stats for a date
    PlayerStats {
        /// Game date as YYYY-MM-DD.
        #[clap(long, short)]
        date: GameDate,
    },

    /// Team game stats for a date
    TeamStats {
        /// Game date as YYYY-MM-DD.
        #[clap(long, short)]
        date: GameDate,
    },

    /// Standings for a season
    Standings {
        /// Season year (e.g. 2016).
        #[clap(long, short)]
        season: Season,
    },

    /// Active teams
    Teams,

    /// Arenas
    Stadiums,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// NFL endpoints
    Nfl {
        #[clap(subcommand)]
        cmd: NflCmd,
    },

    /// NBA endpoints
    Nba {
        #[clap(subcommand)]
        cmd: NbaCmd,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "fantasy-data", about = "FantasyData sports statistics CLI", version)]
pub struct FantasyDataCli {
    #[clap(flatten)]
    pub connection: ConnectionArgs,

    /// Print the raw JSON payload instead of text lines.
    #[clap(long, global = true)]
    pub json: bool,

    /// More logging on stderr (-v debug, -vv trace).
    #[clap(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Commands,
}
