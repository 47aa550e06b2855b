use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};

use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqlitePool;

use crate::table::StorageEntry;

/// Durable text blobs addressed by fixed keys.
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

#[async_trait::async_trait]
impl<T: Storage + ?Sized> Storage for Arc<T> {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).set(key, value).await
    }
}

#[derive(Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Storage for SqliteStorage {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let statement = Query::select()
            .column(StorageEntry::Value)
            .from(StorageEntry::Table)
            .and_where(Expr::col(StorageEntry::Key).eq(key))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|(value,)| value))
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let updated_at = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64;

        let statement = Query::insert()
            .into_table(StorageEntry::Table)
            .columns([
                StorageEntry::Key,
                StorageEntry::Value,
                StorageEntry::UpdatedAt,
            ])
            .values_panic([key.into(), value.into(), updated_at.into()])
            .on_conflict(
                OnConflict::column(StorageEntry::Key)
                    .update_columns([StorageEntry::Value, StorageEntry::UpdatedAt])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        tracing::debug!(key, bytes = value.len(), "storage entry written");

        Ok(())
    }
}

/// Process-local storage. With a quota, a write that would push the total size
/// of keys and values past it fails the way a full browser store does.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: RwLock::default(),
            quota: Some(quota),
        }
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| anyhow::anyhow!("storage lock poisoned: {e}"))?;

        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| anyhow::anyhow!("storage lock poisoned: {e}"))?;

        if let Some(quota) = self.quota {
            let used: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();

            if used + key.len() + value.len() > quota {
                anyhow::bail!("storage quota of {quota} bytes exceeded");
            }
        }

        entries.insert(key.to_owned(), value.to_owned());

        Ok(())
    }
}
