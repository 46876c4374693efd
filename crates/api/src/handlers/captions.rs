//! Handler for per-image caption suggestions.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use generalis_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    /// Image payload: a data URL or raw base64.
    pub image: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub captions: Vec<String>,
}

// ---------------------------------------------------------------------------
// POST /admin/captions/suggest
// ---------------------------------------------------------------------------

/// Suggest captions for one image.
///
/// Always succeeds with a non-empty list; a failing caption service
/// resolves to the fixed fallback suggestions.
pub async fn suggest(
    State(state): State<AppState>,
    Json(body): Json<SuggestRequest>,
) -> AppResult<impl IntoResponse> {
    {
        let admin = state.admin.read().await;
        if !admin.gate.is_unlocked() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Unlock the editing panel first".to_string(),
            )));
        }
    }

    let captions = state.captions.suggest_captions(&body.image).await;

    tracing::debug!(count = captions.len(), "Caption suggestions ready");

    Ok(Json(DataResponse {
        data: SuggestResponse { captions },
    }))
}
