// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile page assembly.
//!
//! Resolving the page is a two-way decision: anonymous visitors get a
//! redirect to sign-in, signed-in users get a fully populated
//! [`ProfileView`]. Fetch failures are returned as errors and abort the page.

use crate::config::Config;
use crate::db::ProfileRepository;
use crate::error::{AppError, Result};
use crate::format::{format_account_creation_date, format_token_balance};
use crate::middleware::SessionIdentity;
use crate::models::{ImagePage, PageNumber, UserRecord};
use crate::views::{GalleryView, Header, LowBalanceNotice, TopUpPromotion};
use askama::Template;

/// Route of the profile page.
pub const PROFILE_PATH: &str = "/profile";

const EMAIL_FALLBACK: &str = "Not provided";

/// Query parameters accepted by the profile page.
///
/// `page` stays a raw string so malformed values fall back to page 1
/// instead of rejecting the request.
#[derive(Debug, Clone, Default)]
pub struct ProfileQuery {
    pub page: Option<String>,
}

impl ProfileQuery {
    /// Build from decoded query pairs. A repeated `page` key is ambiguous
    /// and counts as malformed, so it lands on page 1.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut pages = pairs
            .into_iter()
            .filter(|(key, _)| key == "page")
            .map(|(_, value)| value);

        let page = match (pages.next(), pages.next()) {
            (Some(page), None) => Some(page),
            _ => None,
        };
        Self { page }
    }

    pub fn page_number(&self) -> PageNumber {
        PageNumber::from_query(self.page.as_deref())
    }
}

/// Everything the profile template displays.
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub header: Header,
    pub low_balance: Option<LowBalanceNotice>,
    /// Token balance, two decimals
    pub token_balance: String,
    /// Images on the current gallery page
    pub image_count: usize,
    pub top_up: TopUpPromotion,
    pub created_at: String,
    pub email: String,
    pub gallery: GalleryView,
}

impl ProfileView {
    pub fn new(user: UserRecord, images: ImagePage, page: PageNumber, config: &Config) -> Self {
        let email = non_empty(&user.email).unwrap_or(EMAIL_FALLBACK).to_string();

        Self {
            header: Header::new(display_title(&user)),
            low_balance: LowBalanceNotice::for_balance(user.token_balance),
            token_balance: format_token_balance(user.token_balance),
            image_count: images.items.len(),
            top_up: TopUpPromotion::new(config.tokens_path.clone()),
            created_at: format_account_creation_date(user.created_at),
            email,
            gallery: GalleryView::new(images.items, images.total_pages, page, PROFILE_PATH),
        }
    }
}

/// Result of resolving the profile page.
#[derive(Debug, Clone)]
pub enum ProfileOutcome {
    /// Send the visitor elsewhere (sign-in); nothing is rendered.
    Redirect(String),
    Render(Box<ProfileView>),
}

/// Profile page template.
#[derive(Template)]
#[template(path = "profile.html")]
pub struct ProfileTemplate<'a> {
    pub view: &'a ProfileView,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Page title: full name, then username, then a generic fallback.
pub fn display_title(user: &UserRecord) -> String {
    match (
        non_empty(&user.first_name),
        non_empty(&user.last_name),
        non_empty(&user.username),
    ) {
        (Some(first), Some(last), _) => format!("{first} {last} profile"),
        (_, _, Some(username)) => format!("{username}'s profile"),
        _ => "Profile".to_string(),
    }
}

/// Resolve the profile page for the current session.
///
/// The user record and image page are fetched one after the other; neither
/// is retried.
pub async fn assemble_profile(
    identity: Option<SessionIdentity>,
    query: &ProfileQuery,
    repo: &dyn ProfileRepository,
    config: &Config,
) -> Result<ProfileOutcome> {
    let Some(identity) = identity else {
        tracing::debug!(to = %config.sign_in_path, "No session, redirecting");
        return Ok(ProfileOutcome::Redirect(config.sign_in_path.clone()));
    };

    let page = query.page_number();
    tracing::debug!(
        subject = identity.as_str(),
        page = page.get(),
        "Assembling profile page"
    );

    let user = repo
        .get_user_by_subject(identity.as_str())
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let images = repo
        .get_user_images(&user.id, page, config.images_per_page)
        .await?;

    Ok(ProfileOutcome::Render(Box::new(ProfileView::new(
        user, images, page, config,
    ))))
}
