//! Handlers for the operator editing flow.
//!
//! The access gate guards every session endpoint; the session itself is
//! a single in-memory working copy mutated through typed edits and
//! committed as one whole-document replacement.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use generalis_core::error::CoreError;
use generalis_core::session::{ContentEdit, EditableSession};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::{AdminState, AppState};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reject with 403 unless the gate has been unlocked.
fn ensure_unlocked(admin: &AdminState) -> Result<(), AppError> {
    if admin.gate.is_unlocked() {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "Unlock the editing panel first".to_string(),
        )))
    }
}

fn no_session() -> AppError {
    AppError::Core(CoreError::Conflict(
        "No editing session in progress".to_string(),
    ))
}

// ---------------------------------------------------------------------------
// POST /admin/unlock
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct UnlockRequest {
    pub secret: String,
}

#[derive(Debug, Serialize)]
pub struct UnlockResponse {
    pub granted: bool,
}

/// Attempt to unlock the editing panel with the shared secret.
pub async fn unlock(
    State(state): State<AppState>,
    Json(body): Json<UnlockRequest>,
) -> AppResult<impl IntoResponse> {
    let mut admin = state.admin.write().await;

    if admin.gate.unlock(&body.secret) {
        tracing::info!("Editing panel unlocked");
        Ok(Json(DataResponse {
            data: UnlockResponse { granted: true },
        }))
    } else {
        Err(AppError::Core(CoreError::Unauthorized(
            "Incorrect secret key".to_string(),
        )))
    }
}

// ---------------------------------------------------------------------------
// POST /admin/session
// ---------------------------------------------------------------------------

/// Begin an editing session over the currently loaded document.
pub async fn begin_session(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    // Load before taking the lock; the read path must not wait on the
    // store.
    let document = state.gateway.load().await;

    let mut admin = state.admin.write().await;
    ensure_unlocked(&admin)?;

    if admin.session.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "An editing session is already in progress".to_string(),
        )));
    }

    let session = EditableSession::new(document);
    let working = session.working().clone();
    admin.session = Some(session);

    tracing::info!("Editing session started");

    Ok((StatusCode::CREATED, Json(DataResponse { data: working })))
}

// ---------------------------------------------------------------------------
// GET /admin/session
// ---------------------------------------------------------------------------

/// Return the session's working copy.
pub async fn get_session(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let admin = state.admin.read().await;
    ensure_unlocked(&admin)?;

    let session = admin.session.as_ref().ok_or_else(no_session)?;
    Ok(Json(DataResponse {
        data: session.working().clone(),
    }))
}

// ---------------------------------------------------------------------------
// POST /admin/session/edits
// ---------------------------------------------------------------------------

/// Apply one typed edit to the working copy.
pub async fn apply_edit(
    State(state): State<AppState>,
    Json(edit): Json<ContentEdit>,
) -> AppResult<impl IntoResponse> {
    let mut admin = state.admin.write().await;
    ensure_unlocked(&admin)?;

    let session = admin.session.as_mut().ok_or_else(no_session)?;
    session.apply(edit)?;

    Ok(Json(DataResponse {
        data: session.working().clone(),
    }))
}

// ---------------------------------------------------------------------------
// POST /admin/session/captions
// ---------------------------------------------------------------------------

/// Fill in missing captions on the working gallery.
///
/// The admin lock is released while the caption service runs; if the
/// session was closed in the meantime the result is discarded.
pub async fn fill_captions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let gallery = {
        let admin = state.admin.read().await;
        ensure_unlocked(&admin)?;
        let session = admin.session.as_ref().ok_or_else(no_session)?;
        session.working().gallery.clone()
    };

    let filled = state.captions.fill_missing_captions(gallery).await;

    let mut admin = state.admin.write().await;
    ensure_unlocked(&admin)?;
    let session = admin.session.as_mut().ok_or_else(no_session)?;
    session.set_gallery(filled);

    tracing::info!("Gallery captions filled");

    Ok(Json(DataResponse {
        data: session.working().clone(),
    }))
}

// ---------------------------------------------------------------------------
// POST /admin/session/commit
// ---------------------------------------------------------------------------

/// Persist the working copy as the new site content.
///
/// On failure the session is preserved unchanged so the operator can
/// retry without losing edits.
pub async fn commit_session(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut admin = state.admin.write().await;
    ensure_unlocked(&admin)?;

    let session = admin.session.as_mut().ok_or_else(no_session)?;
    session.commit(&state.gateway).await?;

    tracing::info!("Editing session committed");

    Ok(Json(DataResponse {
        data: session.working().clone(),
    }))
}

// ---------------------------------------------------------------------------
// DELETE /admin/session
// ---------------------------------------------------------------------------

/// Discard the session and all uncommitted edits.
pub async fn discard_session(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut admin = state.admin.write().await;
    ensure_unlocked(&admin)?;

    if admin.session.take().is_none() {
        return Err(no_session());
    }

    tracing::info!("Editing session discarded");

    Ok(StatusCode::NO_CONTENT)
}
