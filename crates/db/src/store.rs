//! PostgreSQL implementation of the core content store interface.

use async_trait::async_trait;

use generalis_core::store::{ContentStore, StoreError};

use crate::repositories::SiteContentRepo;
use crate::DbPool;

/// Fixed key of the single content row in `site_settings`.
pub const CONTENT_KEY: &str = "generalis_data";

/// [`ContentStore`] backed by the `site_settings` table.
pub struct PgContentStore {
    pool: DbPool,
}

impl PgContentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentStore for PgContentStore {
    async fn fetch(&self) -> Result<Option<serde_json::Value>, StoreError> {
        let row = SiteContentRepo::find(&self.pool, CONTENT_KEY)
            .await
            .map_err(|e| StoreError::Unavailable(format!("content fetch failed: {e}")))?;
        Ok(row.map(|r| r.content))
    }

    async fn put(&self, content: &serde_json::Value) -> Result<(), StoreError> {
        let row = SiteContentRepo::upsert(&self.pool, CONTENT_KEY, content)
            .await
            .map_err(|e| StoreError::Unavailable(format!("content save failed: {e}")))?;

        tracing::info!(updated_at = %row.updated_at, "Content document saved");
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(|e| StoreError::Unavailable(format!("database unreachable: {e}")))
    }
}
