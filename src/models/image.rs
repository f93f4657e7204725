// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Saved image model for storage and the gallery.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of transformation that produced a saved image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransformationType {
    Restore,
    RemoveBackground,
    Fill,
    Remove,
    Recolor,
}

impl TransformationType {
    /// Human-readable label shown on gallery cards.
    pub fn label(self) -> &'static str {
        match self {
            TransformationType::Restore => "Restore Image",
            TransformationType::RemoveBackground => "Background Remove",
            TransformationType::Fill => "Generative Fill",
            TransformationType::Remove => "Object Remove",
            TransformationType::Recolor => "Object Recolor",
        }
    }
}

/// Saved image record in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSummary {
    /// Image ID (also used as document ID)
    pub id: String,
    pub title: String,
    pub transformation_type: TransformationType,
    /// Public URL of the stored image
    pub secure_url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    /// Internal ID of the owning user
    pub author: String,
    /// Last modification (gallery sort key)
    pub updated_at: DateTime<Utc>,
}

/// One page of a user's saved images.
#[derive(Debug, Clone, Default)]
pub struct ImagePage {
    pub items: Vec<ImageSummary>,
    pub total_pages: u32,
}

impl ImagePage {
    /// Number of pages needed to show `total_items` at `per_page` per page.
    pub fn page_count(total_items: usize, per_page: u32) -> u32 {
        let per_page = per_page.max(1) as usize;
        u32::try_from(total_items.div_ceil(per_page)).unwrap_or(u32::MAX)
    }
}
