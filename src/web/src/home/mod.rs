pub mod routes;

use crate::{ApiResult, AppData};
use askama::Template;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Router;
use log::debug;
use stats_core::{League, LeagueFilter};

pub const TITLE: &str = "Stats Aggregation Platform";
pub const SUB_TITLE: &str = "Centralized stats for multiple leagues";

pub fn home_routes() -> Router<AppData> {
    routes::routes()
}

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "home/index.html")]
pub struct HomeTemplate {
    pub css_version: &'static str,
    pub title: String,
    pub sub_title: String,
    pub leagues: Vec<LeagueCardDto>,
}

pub struct LeagueCardDto {
    pub id: u32,
    pub url: String,
    pub name: String,
    pub logo_url: Option<String>,
    pub description: Option<String>,
}

impl From<&League> for LeagueCardDto {
    fn from(league: &League) -> Self {
        LeagueCardDto {
            id: league.id,
            url: league.url(),
            name: league.name.clone(),
            logo_url: league.logo().map(str::to_string),
            description: league.summary().map(str::to_string),
        }
    }
}

impl HomeTemplate {
    pub fn new(leagues: &[League]) -> Self {
        HomeTemplate {
            css_version: crate::common::default_handler::CSS_VERSION,
            title: TITLE.to_string(),
            sub_title: SUB_TITLE.to_string(),
            leagues: leagues.iter().map(LeagueCardDto::from).collect(),
        }
    }
}

pub async fn home_action(State(state): State<AppData>) -> ApiResult<impl IntoResponse> {
    let leagues = state.leagues.leagues(&LeagueFilter::default()).await?;

    debug!("rendering home page with {} leagues", leagues.len());

    Ok(HomeTemplate::new(&leagues))
}
