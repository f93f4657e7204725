//! Database layer (Firestore, plus an in-process store for development).

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryDb;

use crate::error::AppError;
use crate::models::{ImagePage, PageNumber, UserRecord};
use async_trait::async_trait;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const IMAGES: &str = "images";
}

/// Read operations the profile page needs from the backing store.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Look up a user by identity provider subject.
    async fn get_user_by_subject(&self, subject: &str) -> Result<Option<UserRecord>, AppError>;

    /// One page of a user's images, newest first, with the total page count.
    async fn get_user_images(
        &self,
        author_id: &str,
        page: PageNumber,
        per_page: u32,
    ) -> Result<ImagePage, AppError>;
}
