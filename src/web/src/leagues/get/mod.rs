pub mod routes;

use crate::{ApiError, ApiResult, AppData};
use askama::Template;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use serde::Deserialize;
use stats_core::{latest_season, League, Standing, Team};

#[derive(Deserialize)]
pub struct LeagueGetRequest {
    pub league_slug: String,
}

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "leagues/get/index.html")]
pub struct LeagueGetTemplate {
    pub css_version: &'static str,
    pub title: String,
    pub league: LeagueDetailsDto,
    pub teams: Vec<TeamDto>,
    pub season: Option<String>,
    pub standings: Vec<StandingRowDto>,
}

pub struct LeagueDetailsDto {
    pub id: u32,
    pub slug: String,
    pub name: String,
    pub logo_url: Option<String>,
    pub description: Option<String>,
    pub source_platform: Option<String>,
    pub source_url: Option<String>,
    pub active: bool,
}

impl From<League> for LeagueDetailsDto {
    fn from(league: League) -> Self {
        LeagueDetailsDto {
            id: league.id,
            logo_url: league.logo().map(str::to_string),
            description: league.summary().map(str::to_string),
            source_platform: league.platform().map(str::to_string),
            source_url: league.source().map(str::to_string),
            active: league.active,
            slug: league.slug,
            name: league.name,
        }
    }
}

pub struct TeamDto {
    pub id: u32,
    pub name: String,
    pub abbreviation: Option<String>,
}

pub struct StandingRowDto {
    pub rank: u32,
    pub team_name: String,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points: u32,
}

impl StandingRowDto {
    fn new(standing: &Standing, teams: &[Team]) -> Self {
        let team_name = teams
            .iter()
            .find(|t| t.id == standing.team_id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| format!("Team #{}", standing.team_id));

        StandingRowDto {
            rank: standing.rank,
            team_name,
            games_played: standing.games_played,
            wins: standing.wins,
            losses: standing.losses,
            ties: standing.ties,
            points: standing.points,
        }
    }
}

pub async fn league_get_action(
    State(state): State<AppData>,
    Path(route_params): Path<LeagueGetRequest>,
) -> ApiResult<impl IntoResponse> {
    let league = state
        .leagues
        .league_by_slug(&route_params.league_slug)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("League with slug {} not found", route_params.league_slug)))?;

    let teams = state.leagues.teams(league.id).await?.unwrap_or_default();
    let all_standings = state.leagues.standings(league.id, None).await?.unwrap_or_default();

    // only the most recent season is shown
    let season = latest_season(&all_standings).map(str::to_string);

    let standings = all_standings
        .iter()
        .filter(|s| Some(s.season.as_str()) == season.as_deref())
        .map(|s| StandingRowDto::new(s, &teams))
        .collect();

    Ok(LeagueGetTemplate {
        css_version: crate::common::default_handler::CSS_VERSION,
        title: league.name.clone(),
        league: league.into(),
        teams: teams
            .into_iter()
            .map(|t| TeamDto {
                id: t.id,
                name: t.name,
                abbreviation: t.abbreviation.filter(|a| !a.trim().is_empty()),
            })
            .collect(),
        season,
        standings,
    })
}
