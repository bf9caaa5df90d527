pub mod league;
pub mod repository;

pub use league::{
    latest_season, league_standings, League, LeagueFilter, Standing, Team, DEFAULT_LEAGUE_LIMIT,
    MAX_LEAGUE_LIMIT,
};
pub use repository::{LeagueRepository, RepositoryError, RepositoryResult};
