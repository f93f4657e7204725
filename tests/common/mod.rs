// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::Response;
use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;
use token_studio::config::Config;
use token_studio::db::{FirestoreDb, MemoryDb, ProfileRepository};
use token_studio::middleware::auth::create_session_token;
use token_studio::models::{ImageSummary, TransformationType, UserRecord};
use token_studio::routes::create_router;
use token_studio::AppState;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Build a router over the given store.
#[allow(dead_code)]
pub fn create_test_app_with(repo: Arc<dyn ProfileRepository>) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        repo,
    });

    (create_router(state.clone()), state)
}

/// Create a test app over an empty in-memory store.
/// Returns the router, the store (for seeding) and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, MemoryDb, Arc<AppState>) {
    let db = MemoryDb::new();
    let (app, state) = create_test_app_with(Arc::new(db.clone()));
    (app, db, state)
}

/// Create a test app whose store is offline; every fetch fails.
#[allow(dead_code)]
pub fn create_offline_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with(Arc::new(FirestoreDb::new_mock()))
}

/// Create a session token signed with the test key.
#[allow(dead_code)]
pub fn create_test_token(subject: &str, signing_key: &[u8]) -> String {
    create_session_token(subject, signing_key).expect("Failed to create session token")
}

#[allow(dead_code)]
pub fn test_user(id: &str, subject: &str, token_balance: f64) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        clerk_id: subject.to_string(),
        email: Some("grace@example.com".to_string()),
        username: Some("grace".to_string()),
        photo: None,
        first_name: Some("Grace".to_string()),
        last_name: Some("Hopper".to_string()),
        token_balance,
        created_at: Utc.with_ymd_and_hms(2023, 12, 9, 15, 0, 0).unwrap(),
    }
}

/// `count` images for `author`, with increasing update times.
#[allow(dead_code)]
pub fn test_images(author: &str, count: usize) -> Vec<ImageSummary> {
    let base = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
    (0..count)
        .map(|i| ImageSummary {
            id: format!("{author}-img-{i}"),
            title: format!("Edit number {i}"),
            transformation_type: TransformationType::RemoveBackground,
            secure_url: format!("https://cdn.example.com/{author}/{i}.png"),
            width: Some(800),
            height: Some(600),
            author: author.to_string(),
            updated_at: base + Duration::minutes(i as i64),
        })
        .collect()
}

/// Read a response body as UTF-8.
#[allow(dead_code)]
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}
