use anyhow::Result;
use mealdeck::Config;

pub async fn migrate(config: Config) -> Result<()> {
    tracing::info!("Migrating database {}", config.database.url);

    let pool = mealdeck::prepare(&config.database.url, config.database.max_connections).await?;
    pool.close().await;

    tracing::info!("Migrations completed");

    Ok(())
}

/// Drop the database if it exists and recreate it with migrations
pub async fn reset(config: Config) -> Result<()> {
    if mealdeck::db::drop_database(&config.database.url).await? {
        tracing::info!("Dropped database: {}", config.database.url);
    }

    migrate(config).await
}
