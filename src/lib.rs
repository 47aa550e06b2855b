pub mod config;
pub mod db;
pub mod observability;
pub mod render;

pub use config::Config;
pub use db::{create_pool, prepare};

use mealdeck_db::SqliteStorage;
use mealdeck_mealplan::Planner;

/// Prepares the configured database and opens a planner on it.
pub async fn open_planner(config: &Config) -> anyhow::Result<Planner<SqliteStorage>> {
    let pool = prepare(&config.database.url, config.database.max_connections).await?;

    Ok(Planner::open(SqliteStorage::new(pool), config.planner.options()).await?)
}
