use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx_migrator::{Migrate, Plan};
use std::str::FromStr;

/// WAL journal, a busy timeout instead of immediate SQLITE_BUSY, and foreign
/// keys on.
async fn configure_pragmas(pool: &SqlitePool) -> Result<()> {
    sqlx::query("PRAGMA journal_mode = WAL").execute(pool).await?;
    sqlx::query("PRAGMA busy_timeout = 5000").execute(pool).await?;
    sqlx::query("PRAGMA synchronous = NORMAL").execute(pool).await?;
    sqlx::query("PRAGMA foreign_keys = true").execute(pool).await?;

    Ok(())
}

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?;

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    configure_pragmas(&pool).await?;

    tracing::debug!("Created pool with {} max connections", max_connections);

    Ok(pool)
}

/// Creates the database file when missing and applies pending migrations.
pub async fn prepare(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    if !sqlx::Sqlite::database_exists(database_url).await? {
        tracing::info!("Database does not exist, creating: {}", database_url);
        sqlx::Sqlite::create_database(database_url).await?;
    }

    let pool = create_pool(database_url, max_connections).await?;
    run_migrations(&pool).await?;

    Ok(pool)
}

#[tracing::instrument(skip(pool))]
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    let mut conn = pool.acquire().await?;
    mealdeck_db::migrator()?.run(&mut *conn, &Plan::apply_all()).await?;

    Ok(())
}

pub async fn drop_database(database_url: &str) -> Result<bool> {
    if !sqlx::Sqlite::database_exists(database_url).await? {
        return Ok(false);
    }

    sqlx::Sqlite::drop_database(database_url).await?;

    Ok(true)
}
