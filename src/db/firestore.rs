// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (looked up by identity provider subject)
//! - Images (saved transformations, paged per author)

use crate::db::{collections, ProfileRepository};
use crate::error::AppError;
use crate::models::{ImagePage, ImageSummary, PageNumber, UserRecord};
use async_trait::async_trait;
use serde::Deserialize;

/// Result row of the per-author image count aggregation.
#[derive(Debug, Deserialize)]
struct ImageCount {
    count: usize,
}

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // The emulator takes unauthenticated connections; skip credential lookup.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── Seeding (emulator and tooling) ──────────────────────────

    /// Create or update a user, keyed by internal ID.
    pub async fn upsert_user(&self, user: &UserRecord) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(&user.id)
            .object(user)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Create or update an image, keyed by image ID.
    pub async fn upsert_image(&self, image: &ImageSummary) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::IMAGES)
            .document_id(&image.id)
            .object(image)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for FirestoreDb {
    async fn get_user_by_subject(&self, subject: &str) -> Result<Option<UserRecord>, AppError> {
        let users: Vec<UserRecord> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::USERS)
            .filter(|q| q.for_all([q.field("clerk_id").eq(subject)]))
            .limit(1)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(users.into_iter().next())
    }

    async fn get_user_images(
        &self,
        author_id: &str,
        page: PageNumber,
        per_page: u32,
    ) -> Result<ImagePage, AppError> {
        let client = self.get_client()?;

        let items: Vec<ImageSummary> = client
            .fluent()
            .select()
            .from(collections::IMAGES)
            .filter(|q| q.for_all([q.field("author").eq(author_id)]))
            // Newest first
            .order_by([("updated_at", firestore::FirestoreQueryDirection::Descending)])
            .limit(per_page)
            .offset(page.offset(per_page))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        // Count server-side so paging never reads the whole gallery.
        let counts: Vec<ImageCount> = client
            .fluent()
            .select()
            .from(collections::IMAGES)
            .filter(|q| q.for_all([q.field("author").eq(author_id)]))
            .aggregate(|a| a.fields([a.field(firestore::path!(ImageCount::count)).count()]))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        let total_items = counts.first().map_or(0, |c| c.count);

        Ok(ImagePage {
            items,
            total_pages: ImagePage::page_count(total_items, per_page),
        })
    }
}
