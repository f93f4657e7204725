// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

/// Default number of gallery images per page.
pub const DEFAULT_IMAGES_PER_PAGE: u32 = 9;
const MAX_IMAGES_PER_PAGE: u32 = 50;

/// Which store backs the profile repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataBackend {
    Firestore,
    /// In-process store, for local development and tests.
    Memory,
}

impl FromStr for DataBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "firestore" => Ok(Self::Firestore),
            "memory" => Ok(Self::Memory),
            _ => Err(ConfigError::Invalid("DATA_BACKEND", s.to_string())),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GCP project ID
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
    /// Store backing user and image lookups
    pub data_backend: DataBackend,
    /// Where unauthenticated visitors are sent
    pub sign_in_path: String,
    /// Token purchase page linked from the top-up banner
    pub tokens_path: String,
    /// Gallery page size
    pub images_per_page: u32,

    // --- Secrets ---
    /// HS256 key used to verify session tokens (raw bytes)
    pub session_signing_key: Vec<u8>,
}

impl Config {
    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            gcp_project_id: "test-project".to_string(),
            port: 8080,
            data_backend: DataBackend::Memory,
            sign_in_path: "/sign-in".to_string(),
            tokens_path: "/tokens".to_string(),
            images_per_page: DEFAULT_IMAGES_PER_PAGE,
            session_signing_key: b"test_session_key_32_bytes_min!!!".to_vec(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let data_backend = match env::var("DATA_BACKEND") {
            Ok(raw) => raw.parse()?,
            Err(_) => DataBackend::Firestore,
        };

        Ok(Self {
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            data_backend,
            sign_in_path: env::var("SIGN_IN_PATH").unwrap_or_else(|_| "/sign-in".to_string()),
            tokens_path: env::var("TOKENS_PATH").unwrap_or_else(|_| "/tokens".to_string()),
            images_per_page: env::var("IMAGES_PER_PAGE")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_IMAGES_PER_PAGE)
                .clamp(1, MAX_IMAGES_PER_PAGE),

            session_signing_key: env::var("SESSION_SIGNING_KEY")
                .map_err(|_| ConfigError::Missing("SESSION_SIGNING_KEY"))?
                .trim()
                .as_bytes()
                .to_vec(),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
