use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use hotels_server::config::Config;
use hotels_server::seed::seed;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let database_url = Config::database_url_from_env();
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await?;

    sqlx::migrate!().run(&pool).await?;

    let summary = seed(&pool).await?;
    tracing::info!(
        events = summary.events,
        ticket_types = summary.ticket_types,
        hotels = summary.hotels,
        rooms = summary.rooms,
        "Seed complete"
    );

    pool.close().await;
    Ok(())
}
