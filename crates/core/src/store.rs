//! Content persistence seam and load/save policy.
//!
//! [`ContentStore`] abstracts whatever holds the single persisted
//! content document (PostgreSQL in production, [`MemoryStore`] in tests
//! and local development). [`ContentGateway`] layers the policy on top:
//! loading is total and resolves to the default document whenever the
//! store is empty, unreachable, or holds an unusable record; saving
//! propagates failures to the caller so edits are never silently lost.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::content::ContentDocument;
use crate::defaults::default_content;

/// Failures at the store boundary.
///
/// "No document yet" is not a failure; stores report it as
/// `Ok(None)` from [`ContentStore::fetch`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store is unreachable or rejected the operation.
    #[error("Content store unavailable: {0}")]
    Unavailable(String),

    /// Data is present but unusable as a content document.
    #[error("Stored content malformed: {0}")]
    Malformed(String),
}

/// A backing store holding at most one persisted content document.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch the raw persisted document, or `Ok(None)` if none exists yet.
    async fn fetch(&self) -> Result<Option<serde_json::Value>, StoreError>;

    /// Atomically replace the persisted document. Insert if absent,
    /// overwrite if present; safe to retry.
    async fn put(&self, content: &serde_json::Value) -> Result<(), StoreError>;

    /// Cheap reachability probe for health reporting.
    async fn ping(&self) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// Gateway
// ---------------------------------------------------------------------------

/// Mediates all loads and saves of the content document.
#[derive(Clone)]
pub struct ContentGateway {
    store: Arc<dyn ContentStore>,
}

impl ContentGateway {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Load the current content document. Never fails outward.
    ///
    /// An empty store, an unreachable store, and a stored record that
    /// does not parse as a complete document all resolve to the full
    /// default document. Partial records are never repaired or merged
    /// field-by-field: mixing stale defaults into edited content could
    /// resurrect entries the operator deleted.
    pub async fn load(&self) -> ContentDocument {
        let raw = match self.store.fetch().await {
            Ok(Some(raw)) => raw,
            Ok(None) => return default_content(),
            Err(_) => return default_content(),
        };

        match serde_json::from_value(raw) {
            Ok(document) => document,
            Err(_) => default_content(),
        }
    }

    /// Replace the persisted document with `document`.
    ///
    /// Unlike [`load`](Self::load), failures here propagate: the caller
    /// keeps its in-memory copy and surfaces the cause to the operator.
    pub async fn save(&self, document: &ContentDocument) -> Result<(), StoreError> {
        let raw = serde_json::to_value(document).map_err(|e| {
            StoreError::Malformed(format!("content document failed to serialize: {e}"))
        })?;
        self.store.put(&raw).await
    }

    /// Probe the underlying store.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }
}

// ---------------------------------------------------------------------------
// In-process store
// ---------------------------------------------------------------------------

/// In-process [`ContentStore`] used by tests and local development.
///
/// Holds the document behind a mutex. [`set_unavailable`](Self::set_unavailable)
/// makes subsequent operations fail with [`StoreError::Unavailable`],
/// simulating an unreachable backend.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    content: Option<serde_json::Value>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a raw persisted value.
    pub fn with_content(content: serde_json::Value) -> Self {
        Self {
            inner: Mutex::new(MemoryInner {
                content: Some(content),
                unavailable: false,
            }),
        }
    }

    /// Toggle simulated outage.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.lock().expect("memory store lock poisoned").unavailable = unavailable;
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn fetch(&self) -> Result<Option<serde_json::Value>, StoreError> {
        let inner = self.inner.lock().expect("memory store lock poisoned");
        if inner.unavailable {
            return Err(StoreError::Unavailable("simulated outage".to_string()));
        }
        Ok(inner.content.clone())
    }

    async fn put(&self, content: &serde_json::Value) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().expect("memory store lock poisoned");
        if inner.unavailable {
            return Err(StoreError::Unavailable("simulated outage".to_string()));
        }
        inner.content = Some(content.clone());
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let inner = self.inner.lock().expect("memory store lock poisoned");
        if inner.unavailable {
            return Err(StoreError::Unavailable("simulated outage".to_string()));
        }
        Ok(())
    }
}
