// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process profile store.
//!
//! Backs local development (`DATA_BACKEND=memory`) and the test suite.

use crate::db::ProfileRepository;
use crate::error::AppError;
use crate::models::{ImagePage, ImageSummary, PageNumber, UserRecord};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory user and image store, cheap to clone.
#[derive(Clone, Default)]
pub struct MemoryDb {
    /// Users keyed by identity provider subject
    users: Arc<DashMap<String, UserRecord>>,
    /// Images keyed by image ID
    images: Arc<DashMap<String, ImageSummary>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace a user.
    pub fn upsert_user(&self, user: UserRecord) {
        self.users.insert(user.clerk_id.clone(), user);
    }

    /// Create or replace an image.
    pub fn upsert_image(&self, image: ImageSummary) {
        self.images.insert(image.id.clone(), image);
    }
}

#[async_trait]
impl ProfileRepository for MemoryDb {
    async fn get_user_by_subject(&self, subject: &str) -> Result<Option<UserRecord>, AppError> {
        Ok(self.users.get(subject).map(|entry| entry.value().clone()))
    }

    async fn get_user_images(
        &self,
        author_id: &str,
        page: PageNumber,
        per_page: u32,
    ) -> Result<ImagePage, AppError> {
        let mut owned: Vec<ImageSummary> = self
            .images
            .iter()
            .filter(|entry| entry.author == author_id)
            .map(|entry| entry.value().clone())
            .collect();

        // Newest first; ID breaks ties so paging is stable
        owned.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        let total_pages = ImagePage::page_count(owned.len(), per_page);
        let items = owned
            .into_iter()
            .skip(page.offset(per_page) as usize)
            .take(per_page as usize)
            .collect();

        Ok(ImagePage { items, total_pages })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransformationType;
    use chrono::{Duration, TimeZone, Utc};

    fn image(id: &str, author: &str, minutes: i64) -> ImageSummary {
        ImageSummary {
            id: id.to_string(),
            title: format!("Image {id}"),
            transformation_type: TransformationType::Fill,
            secure_url: format!("https://cdn.example.com/{id}.png"),
            width: Some(1024),
            height: Some(768),
            author: author.to_string(),
            updated_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
                + Duration::minutes(minutes),
        }
    }

    #[tokio::test]
    async fn test_images_paged_newest_first() {
        let db = MemoryDb::new();
        for i in 0..5 {
            db.upsert_image(image(&format!("img-{i}"), "user-1", i));
        }
        db.upsert_image(image("other", "user-2", 100));

        let first = db
            .get_user_images("user-1", PageNumber::FIRST, 2)
            .await
            .unwrap();
        let ids: Vec<&str> = first.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["img-4", "img-3"]);
        assert_eq!(first.total_pages, 3);

        let last = db
            .get_user_images("user-1", PageNumber::new(3).unwrap(), 2)
            .await
            .unwrap();
        let ids: Vec<&str> = last.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["img-0"]);
    }

    #[tokio::test]
    async fn test_out_of_range_page_is_empty() {
        let db = MemoryDb::new();
        db.upsert_image(image("img-0", "user-1", 0));

        let page = db
            .get_user_images("user-1", PageNumber::new(7).unwrap(), 9)
            .await
            .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn test_unknown_subject() {
        let db = MemoryDb::new();
        assert!(db.get_user_by_subject("user_missing").await.unwrap().is_none());
    }
}
