//! End-to-end tests for the relay HTTP API.
//!
//! Tests exercise the full stack: HTTP request -> axum router -> handler ->
//! RelayService -> collaborator -> HTTP response. Collaborators are the
//! in-memory backends from careerviz-google so calls can be counted, and the
//! clock is pinned to 2024-01-05.
//!
//! Tests use `tower::ServiceExt::oneshot` to send requests directly to the
//! router without starting a network server.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use serde_json::json;
use tower::ServiceExt;

use careerviz_core::{CredentialTable, FixedClock};
use careerviz_google::{GoogleBackends, RecordingSheet, ScriptedRecognizer};
use careerviz_server::router::build_router;
use careerviz_server::state::AppState;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

struct Harness {
    app: Router,
    sheet: Arc<RecordingSheet>,
    speech: Arc<ScriptedRecognizer>,
}

fn harness_with(sheet: RecordingSheet, speech: ScriptedRecognizer) -> Harness {
    let sheet = Arc::new(sheet);
    let speech = Arc::new(speech);
    let backends = GoogleBackends {
        sheet: sheet.clone(),
        speech: speech.clone(),
    };
    let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    let state = AppState::new(CredentialTable::builtin(), backends, Arc::new(clock));
    Harness {
        app: build_router(state),
        sheet,
        speech,
    }
}

fn harness() -> Harness {
    harness_with(RecordingSheet::new(), ScriptedRecognizer::silence())
}

/// Sends a POST request with a raw body and returns (status, json).
async fn post_raw(
    app: &Router,
    path: &str,
    content_type: &str,
    body: Vec<u8>,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("content-type", content_type)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

/// Sends a POST request with a JSON body and returns (status, json).
async fn post_json(
    app: &Router,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    post_raw(app, path, "application/json", serde_json::to_vec(&body).unwrap()).await
}

fn webm_data_uri() -> String {
    // First bytes of an EBML header; the recognizer stand-in never parses it.
    "data:audio/webm;codecs=opus;base64,GkXfo59ChoEBQveBAULygQRC84EIQoKEd2VibQ==".to_string()
}

// ---------------------------------------------------------------------------
// /login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_login_admin() {
    let h = harness();
    let (status, body) = post_json(
        &h.app,
        "/login",
        json!({ "email": "admin@school.com", "password": "password123" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "role": "admin" }));
}

#[tokio::test]
async fn test_login_every_builtin_user_gets_stored_role() {
    let h = harness();
    for (email, user) in CredentialTable::builtin().iter() {
        let (status, body) = post_json(
            &h.app,
            "/login",
            json!({ "email": email, "password": user.password }),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "login failed for {}", email);
        assert_eq!(body["role"], json!(user.role));
    }
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let h = harness();
    let (status, body) = post_json(
        &h.app,
        "/login",
        json!({ "email": "teacher1@school.com", "password": "password123" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body,
        json!({ "success": false, "message": "Invalid credentials" })
    );
}

#[tokio::test]
async fn test_login_unknown_email_is_unauthorized() {
    let h = harness();
    let (status, body) = post_json(
        &h.app,
        "/login",
        json!({ "email": "ADMIN@school.com", "password": "password123" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_login_missing_fields_is_unauthorized() {
    let h = harness();
    let (status, _) = post_json(&h.app, "/login", json!({})).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_non_string_fields_are_unauthorized() {
    let h = harness();
    for body in [
        json!({ "email": 5, "password": "x" }),
        json!({ "email": "admin@school.com", "password": 123 }),
        json!({ "email": null, "password": ["password123"] }),
    ] {
        let (status, resp) = post_json(&h.app, "/login", body).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            resp,
            json!({ "success": false, "message": "Invalid credentials" })
        );
    }
}

#[tokio::test]
async fn test_custom_credential_table_replaces_builtin() {
    let table = CredentialTable::from_json_str(
        r#"{"head@school.com": {"password": "s3cret", "role": "admin"}}"#,
    )
    .unwrap();
    let state = AppState::new(
        table,
        GoogleBackends::unavailable("not needed"),
        Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())),
    );
    let app = build_router(state);

    let (status, body) = post_json(
        &app,
        "/login",
        json!({ "email": "head@school.com", "password": "s3cret" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "admin");

    let (status, _) = post_json(
        &app,
        "/login",
        json!({ "email": "admin@school.com", "password": "password123" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// /record
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_record_appends_row_with_todays_date() {
    let h = harness();
    let (status, body) = post_json(
        &h.app,
        "/record",
        json!({ "name": "Asha", "career": "Engineer" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "message": "Record saved" }));
    assert_eq!(h.sheet.calls(), 1);
    assert_eq!(
        h.sheet.rows(),
        vec![vec![
            "Asha".to_string(),
            "Engineer".to_string(),
            "05-01-2024".to_string()
        ]]
    );
}

#[tokio::test]
async fn test_record_missing_fields_never_calls_sheet() {
    let h = harness();
    for body in [
        json!({ "career": "Engineer" }),
        json!({ "name": "Asha" }),
        json!({ "name": "", "career": "Engineer" }),
        json!({}),
    ] {
        let (status, resp) = post_json(&h.app, "/record", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            resp,
            json!({ "success": false, "message": "Missing name or career" })
        );
    }
    assert_eq!(h.sheet.calls(), 0);
}

#[tokio::test]
async fn test_record_sheet_failure_is_generic_500() {
    let h = harness_with(
        RecordingSheet::failing("PERMISSION_DENIED: caller lacks access"),
        ScriptedRecognizer::silence(),
    );
    let (status, body) = post_json(
        &h.app,
        "/record",
        json!({ "name": "Asha", "career": "Engineer" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "success": false, "message": "Failed to save record" })
    );
    assert_eq!(h.sheet.calls(), 1);
}

#[tokio::test]
async fn test_record_unavailable_backend_is_500() {
    let state = AppState::new(
        CredentialTable::builtin(),
        GoogleBackends::unavailable("key file missing"),
        Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())),
    );
    let app = build_router(state);
    let (status, body) = post_json(
        &app,
        "/record",
        json!({ "name": "A", "career": "B" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to save record");
}

// ---------------------------------------------------------------------------
// /transcribe
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_transcribe_returns_top_transcript() {
    let h = harness_with(
        RecordingSheet::new(),
        ScriptedRecognizer::hearing("I want to be an astronaut"),
    );
    let (status, body) = post_json(
        &h.app,
        "/transcribe",
        json!({ "audioData": webm_data_uri() }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "transcript": "I want to be an astronaut" })
    );
    assert_eq!(h.speech.calls(), 1);
    assert_eq!(h.speech.last_audio_len(), Some(28));
}

#[tokio::test]
async fn test_transcribe_no_results_is_soft_success() {
    let h = harness();
    let (status, body) = post_json(
        &h.app,
        "/transcribe",
        json!({ "audioData": webm_data_uri() }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "transcript": "" }));
}

#[tokio::test]
async fn test_transcribe_missing_audio_never_calls_recognizer() {
    let h = harness();
    let (status, body) = post_json(&h.app, "/transcribe", json!({ "audio": "x" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "success": false, "message": "No audio data" }));
    assert_eq!(h.speech.calls(), 0);
}

#[tokio::test]
async fn test_transcribe_undecodable_audio_is_500() {
    let h = harness();
    let (status, body) = post_json(
        &h.app,
        "/transcribe",
        json!({ "audioData": "data:audio/webm;base64,!!not-base64!!" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "success": false, "message": "Failed to transcribe audio" })
    );
    assert_eq!(h.speech.calls(), 0);
}

#[tokio::test]
async fn test_transcribe_recognizer_failure_is_500() {
    let h = harness_with(
        RecordingSheet::new(),
        ScriptedRecognizer::failing("RESOURCE_EXHAUSTED"),
    );
    let (status, body) = post_json(
        &h.app,
        "/transcribe",
        json!({ "audioData": webm_data_uri() }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to transcribe audio");
    assert_eq!(h.speech.calls(), 1);
}

// ---------------------------------------------------------------------------
// Envelope and limits
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_malformed_json_uses_error_envelope() {
    let h = harness();
    let (status, body) =
        post_raw(&h.app, "/login", "application/json", b"{not json".to_vec()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let sheet = Arc::new(RecordingSheet::new());
    let backends = GoogleBackends {
        sheet: sheet.clone(),
        speech: Arc::new(ScriptedRecognizer::silence()),
    };
    let state = AppState::new(
        CredentialTable::builtin(),
        backends,
        Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())),
    )
    .with_body_limit(64);
    let app = build_router(state);

    let big_name = "x".repeat(256);
    let (status, body) = post_json(
        &app,
        "/record",
        json!({ "name": big_name, "career": "B" }),
    )
    .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["success"], false);
    assert_eq!(sheet.calls(), 0);
}

#[tokio::test]
async fn test_in_memory_state_serves_login() {
    let app = build_router(AppState::in_memory());
    let (status, _) = post_json(
        &app,
        "/login",
        json!({ "email": "teacher3@school.com", "password": "user123" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
