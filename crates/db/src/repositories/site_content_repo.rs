//! Repository for the `site_settings` table.

use sqlx::PgPool;

use crate::models::site_content::SiteContentRow;

/// Column list for site_settings queries.
const COLUMNS: &str = "key, content, updated_at";

/// Provides fetch and upsert operations for the single content row.
pub struct SiteContentRepo;

impl SiteContentRepo {
    /// Find the content row by its key. Returns `None` if no document
    /// has been saved yet.
    pub async fn find(pool: &PgPool, key: &str) -> Result<Option<SiteContentRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_settings WHERE key = $1");
        sqlx::query_as::<_, SiteContentRow>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace the content row, returning the stored row.
    ///
    /// Idempotent and safe to retry: the row is keyed by a constant and
    /// the whole document is replaced in one statement.
    pub async fn upsert(
        pool: &PgPool,
        key: &str,
        content: &serde_json::Value,
    ) -> Result<SiteContentRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_settings (key, content) \
             VALUES ($1, $2) \
             ON CONFLICT (key) DO UPDATE \
                SET content = EXCLUDED.content, \
                    updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteContentRow>(&query)
            .bind(key)
            .bind(content)
            .fetch_one(pool)
            .await
    }
}
