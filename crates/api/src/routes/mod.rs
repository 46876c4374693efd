//! Route table assembly.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{admin, captions, content};
use crate::state::AppState;

pub mod health;

/// All routes mounted under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public read path.
        .route("/content", get(content::get_content))
        // Operator editing flow.
        .route("/admin/unlock", post(admin::unlock))
        .route(
            "/admin/session",
            post(admin::begin_session)
                .get(admin::get_session)
                .delete(admin::discard_session),
        )
        .route("/admin/session/edits", post(admin::apply_edit))
        .route("/admin/session/captions", post(admin::fill_captions))
        .route("/admin/session/commit", post(admin::commit_session))
        .route("/admin/captions/suggest", post(captions::suggest))
}
