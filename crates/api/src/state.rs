use std::sync::Arc;

use tokio::sync::RwLock;

use generalis_captions::CaptionClient;
use generalis_core::gate::AccessGate;
use generalis_core::session::EditableSession;
use generalis_core::store::ContentGateway;

use crate::config::ServerConfig;

/// Operator-facing state: the access gate plus the editing session it
/// guards. Single-operator model, so one of each for the whole process.
pub struct AdminState {
    pub gate: AccessGate,
    pub session: Option<EditableSession>,
}

impl AdminState {
    pub fn new(admin_secret: &str) -> Self {
        Self {
            gate: AccessGate::new(admin_secret),
            session: None,
        }
    }
}

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Gateway mediating all content loads and saves.
    pub gateway: ContentGateway,
    /// Best-effort caption generation client.
    pub captions: Arc<CaptionClient>,
    /// Access gate and editing session.
    pub admin: Arc<RwLock<AdminState>>,
}
