//! Integration tests for the operator editing flow: unlock, session
//! lifecycle, typed edits, commit, and failure recovery.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, delete, get, post, post_json, unlock};
use generalis_core::defaults::default_content;
use generalis_core::store::MemoryStore;
use serde_json::json;

// ---------------------------------------------------------------------------
// Access gate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn wrong_secret_is_rejected_and_gate_stays_locked() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));

    let response = post_json(
        app.clone(),
        "/api/v1/admin/unlock",
        json!({ "secret": "wrong" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // The gate is still locked: session endpoints refuse.
    let response = post(app, "/api/v1/admin/session").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn grant_is_sticky_across_later_wrong_attempts() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));
    unlock(&app).await;

    // A wrong secret after a grant does not re-lock the gate.
    let response = post_json(
        app.clone(),
        "/api/v1/admin/unlock",
        json!({ "secret": "wrong" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["granted"], true);

    let response = post(app, "/api/v1/admin/session").await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Session lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn session_endpoints_require_an_open_session() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));
    unlock(&app).await;

    let response = post_json(
        app.clone(),
        "/api/v1/admin/session/edits",
        json!({ "op": "set_about", "about": "New about" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = post(app, "/api/v1/admin/session/commit").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn beginning_a_second_session_conflicts() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));
    unlock(&app).await;

    let response = post(app.clone(), "/api/v1/admin/session").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post(app, "/api/v1/admin/session").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn discard_drops_uncommitted_edits() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));
    unlock(&app).await;

    post(app.clone(), "/api/v1/admin/session").await;
    post_json(
        app.clone(),
        "/api/v1/admin/session/edits",
        json!({ "op": "set_about", "about": "Unsaved" }),
    )
    .await;

    let response = delete(app.clone(), "/api/v1/admin/session").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The session is gone and the public document is untouched.
    let response = get(app.clone(), "/api/v1/admin/session").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let content = body_json(get(app, "/api/v1/content").await).await;
    assert_eq!(content["data"]["about"], default_content().about);
}

// ---------------------------------------------------------------------------
// Edit and commit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn edit_subtitle_commit_and_reload_end_to_end() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));

    // Starting from an empty store the default document is served.
    let content = body_json(get(app.clone(), "/api/v1/content").await).await;
    assert_eq!(
        content["data"]["hero"]["title"],
        r#"Where Kilifi Comes Alive — <span class="text-primary">Eat. Sip. Vibe.</span>"#
    );

    unlock(&app).await;
    post(app.clone(), "/api/v1/admin/session").await;

    let response = post_json(
        app.clone(),
        "/api/v1/admin/session/edits",
        json!({ "op": "set_hero_subtitle", "subtitle": "New subtitle" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Uncommitted edits are not visible on the public read path.
    let content = body_json(get(app.clone(), "/api/v1/content").await).await;
    assert_eq!(
        content["data"]["hero"]["subtitle"],
        default_content().hero.subtitle
    );

    let response = post(app.clone(), "/api/v1/admin/session/commit").await;
    assert_eq!(response.status(), StatusCode::OK);

    // A fresh load returns the edit with all other fields unchanged.
    let content = body_json(get(app, "/api/v1/content").await).await;
    assert_eq!(content["data"]["hero"]["subtitle"], "New subtitle");

    let mut expected = default_content();
    expected.hero.subtitle = "New subtitle".to_string();
    assert_eq!(
        content["data"],
        serde_json::to_value(&expected).expect("document serializes")
    );
}

#[tokio::test]
async fn removing_a_gallery_image_shifts_later_indices_down() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));
    unlock(&app).await;

    let created = body_json(post(app.clone(), "/api/v1/admin/session").await).await;
    let before = created["data"]["gallery"]
        .as_array()
        .expect("gallery is an array")
        .clone();
    assert_eq!(before.len(), 4);

    let response = post_json(
        app.clone(),
        "/api/v1/admin/session/edits",
        json!({ "op": "remove_gallery_image", "index": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let after = body_json(get(app, "/api/v1/admin/session").await).await;
    let gallery = after["data"]["gallery"]
        .as_array()
        .expect("gallery is an array");
    assert_eq!(gallery.len(), 3);
    assert_eq!(gallery[0], before[0]);
    assert_eq!(gallery[1], before[2]);
    assert_eq!(gallery[2], before[3]);
}

#[tokio::test]
async fn out_of_range_edit_returns_400() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));
    unlock(&app).await;
    post(app.clone(), "/api/v1/admin/session").await;

    let response = post_json(
        app,
        "/api/v1/admin/session/edits",
        json!({ "op": "remove_event", "index": 99 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Commit failure recovery
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failed_commit_surfaces_the_cause_and_preserves_the_session() {
    let store = Arc::new(MemoryStore::new());
    let app = common::build_test_app(Arc::clone(&store));
    unlock(&app).await;
    post(app.clone(), "/api/v1/admin/session").await;

    post_json(
        app.clone(),
        "/api/v1/admin/session/edits",
        json!({ "op": "set_about", "about": "Edited while offline" }),
    )
    .await;

    store.set_unavailable(true);
    let response = post(app.clone(), "/api/v1/admin/session/commit").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["code"], "STORE_UNAVAILABLE");

    // The working copy still carries the edit.
    let session = body_json(get(app.clone(), "/api/v1/admin/session").await).await;
    assert_eq!(session["data"]["about"], "Edited while offline");

    // The store recovers; the retry succeeds and the edit persists.
    store.set_unavailable(false);
    let response = post(app.clone(), "/api/v1/admin/session/commit").await;
    assert_eq!(response.status(), StatusCode::OK);

    let content = body_json(get(app, "/api/v1/content").await).await;
    assert_eq!(content["data"]["about"], "Edited while offline");
}
