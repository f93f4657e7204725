// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod image;
pub mod page;
pub mod user;

pub use image::{ImagePage, ImageSummary, TransformationType};
pub use page::PageNumber;
pub use user::UserRecord;
