//! User model for storage and display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User profile stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Internal user ID (also used as document ID)
    pub id: String,
    /// Identity provider subject (the session identity)
    pub clerk_id: String,
    /// Email address (may be None if not shared)
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    /// Profile picture URL
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Remaining image tokens, never negative
    pub token_balance: f64,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}
