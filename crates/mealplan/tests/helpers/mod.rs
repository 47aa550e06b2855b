use std::{path::PathBuf, str::FromStr, sync::Arc};

use mealdeck_db::{MemoryStorage, SqliteStorage, Storage};
use mealdeck_mealplan::{Planner, PlannerOptions};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use time::macros::date;

#[allow(dead_code)]
pub async fn setup_storage(path: PathBuf) -> anyhow::Result<SqliteStorage> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    mealdeck_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    Ok(SqliteStorage::new(pool))
}

#[allow(dead_code)]
/// Wednesday, so week 0 runs from Sunday January 5 to Saturday January 11.
pub fn options() -> PlannerOptions {
    PlannerOptions {
        today: Some(date!(2025 - 01 - 08)),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub async fn open<S: Storage>(storage: S, seed: u64) -> Planner<S> {
    Planner::open_with_rng(storage, options(), StdRng::seed_from_u64(seed))
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn open_memory(seed: u64) -> (Arc<MemoryStorage>, Planner<Arc<MemoryStorage>>) {
    let storage = Arc::new(MemoryStorage::new());
    let planner = open(storage.clone(), seed).await;

    (storage, planner)
}
