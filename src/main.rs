use env_logger::Env;
use log::info;
use web::{AppData, ServerConfig, StatsPlatformServer};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let config = ServerConfig::from_env()?;

    info!("league source: {:?}", config.league_source);

    let leagues = config.league_source.build()?;

    let data = AppData::new(leagues);

    StatsPlatformServer::new(data, config).run().await?;

    Ok(())
}
