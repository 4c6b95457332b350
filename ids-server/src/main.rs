use ids_server::{AppState, Config, build_router, logger};

use std::error::Error;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;

    logger::initialize(&config)?;

    info!("Opening database at {}", config.database_path);
    let options = SqliteConnectOptions::new()
        .filename(&config.database_path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    ids_db::run_migrations(&pool).await?;

    let app = build_router(AppState { pool });

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Identity sync server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
