//! Handler for the public content read path.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /content
// ---------------------------------------------------------------------------

/// Return the current content document.
///
/// Total: an empty, unreachable, or corrupt store resolves to the full
/// default document, so visitors never see a broken page.
pub async fn get_content(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let document = state.gateway.load().await;

    tracing::debug!("Served content document");

    Ok(Json(DataResponse { data: document }))
}
