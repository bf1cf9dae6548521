use price_checker::{
    AppState, Config, Server, Station, StationMode, print_banner, setup_environment,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, then logging)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    setup_environment(&config);

    tracing::info!(
        mode = ?config.mode,
        environment = %config.environment,
        "Price checker starting..."
    );

    // 2. Catalog, pipeline and registration
    let state = AppState::initialize(&config)?;

    // 3. Front-end
    match config.mode {
        StationMode::Terminal => {
            print_banner();
            let mut station = Station::new(state, tokio::io::stdin(), tokio::io::stdout());
            station.run().await?;
        }
        StationMode::Http => {
            Server::new(config, state).run().await?;
        }
    }

    tracing::info!("Price checker stopped");
    Ok(())
}
