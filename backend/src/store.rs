use std::collections::HashMap;
use std::sync::Mutex;
use sqlx::PgPool;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Failed to acquire counter lock")]
    LockFailed,
}

/// Per-site visitor counters.
#[rocket::async_trait]
pub trait CountStore: Send + Sync {
    /// Adds one to the counter for `site_id`, creating it at 1, and returns the new value.
    async fn increment(&self, site_id: &str) -> Result<i64, StoreError>;

    async fn current(&self, site_id: &str) -> Result<Option<i64>, StoreError>;
}

pub struct PgCountStore {
    pool: PgPool,
}

impl PgCountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[rocket::async_trait]
impl CountStore for PgCountStore {
    async fn increment(&self, site_id: &str) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO visitor_counts (site_id, count) VALUES ($1, 1)
             ON CONFLICT (site_id) DO UPDATE
             SET count = visitor_counts.count + 1, updated_at = NOW()
             RETURNING count",
        )
        .bind(site_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))
    }

    async fn current(&self, site_id: &str) -> Result<Option<i64>, StoreError> {
        sqlx::query_scalar::<_, i64>("SELECT count FROM visitor_counts WHERE site_id = $1")
            .bind(site_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))
    }
}

#[derive(Default)]
pub struct MemoryCountStore {
    counts: Mutex<HashMap<String, i64>>,
}

impl MemoryCountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[rocket::async_trait]
impl CountStore for MemoryCountStore {
    async fn increment(&self, site_id: &str) -> Result<i64, StoreError> {
        let mut counts = self.counts.lock().map_err(|_| StoreError::LockFailed)?;
        let count = counts.entry(site_id.to_string()).or_insert(0);
        *count += 1;
        Ok(*count)
    }

    async fn current(&self, site_id: &str) -> Result<Option<i64>, StoreError> {
        let counts = self.counts.lock().map_err(|_| StoreError::LockFailed)?;
        Ok(counts.get(site_id).copied())
    }
}
