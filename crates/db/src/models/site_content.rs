//! Row model for the `site_settings` table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A `site_settings` row from the database.
///
/// There is exactly one content row in the whole system, keyed by a
/// fixed constant; `content` is the serialized content document.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SiteContentRow {
    pub key: String,
    pub content: serde_json::Value,
    pub updated_at: Timestamp,
}
