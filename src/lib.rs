// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Token Studio: server-rendered account pages for the image studio.
//!
//! This crate serves the signed-in user's profile page: token balance,
//! account details and a paginated gallery of saved images.

pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod views;

use config::Config;
use db::ProfileRepository;
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub repo: Arc<dyn ProfileRepository>,
}
