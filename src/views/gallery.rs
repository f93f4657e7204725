// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Image gallery with page-based navigation.

use crate::models::{ImageSummary, PageNumber};

/// Detail page for a single saved image.
fn transformation_href(image_id: &str) -> String {
    format!("/transformations/{image_id}")
}

/// One gallery tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCard {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub width: u32,
    pub height: u32,
    pub transformation_label: &'static str,
    pub href: String,
}

impl From<ImageSummary> for ImageCard {
    fn from(image: ImageSummary) -> Self {
        Self {
            href: transformation_href(&image.id),
            transformation_label: image.transformation_type.label(),
            width: image.width.unwrap_or(1000),
            height: image.height.unwrap_or(1000),
            id: image.id,
            title: image.title,
            image_url: image.secure_url,
        }
    }
}

/// A page of image cards plus navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    pub images: Vec<ImageCard>,
    pub total_pages: u32,
    pub page: u32,
    /// Path the navigation links point back to
    base_path: &'static str,
}

impl GalleryView {
    pub fn new(
        images: Vec<ImageSummary>,
        total_pages: u32,
        page: PageNumber,
        base_path: &'static str,
    ) -> Self {
        Self {
            images: images.into_iter().map(ImageCard::from).collect(),
            total_pages,
            page: page.get(),
            base_path,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Navigation is only worth showing with more than one page.
    pub fn show_pagination(&self) -> bool {
        self.total_pages > 1
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn previous_href(&self) -> String {
        self.page_href(self.page.saturating_sub(1).max(1))
    }

    pub fn next_href(&self) -> String {
        self.page_href(self.page.saturating_add(1))
    }

    fn page_href(&self, page: u32) -> String {
        format!("{}?page={page}", self.base_path)
    }
}
