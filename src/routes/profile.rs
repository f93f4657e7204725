// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile page route.

use crate::error::Result;
use crate::middleware::MaybeSession;
use crate::views::profile::PROFILE_PATH;
use crate::views::{assemble_profile, ProfileOutcome, ProfileQuery, ProfileTemplate};
use crate::AppState;
use askama::Template;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(PROFILE_PATH, get(profile_page))
}

/// Render the signed-in user's profile, or send anonymous visitors to sign-in.
async fn profile_page(
    State(state): State<Arc<AppState>>,
    MaybeSession(identity): MaybeSession,
    pairs: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response> {
    // A query string that does not even decode is treated like no query.
    let query = match pairs {
        Ok(Query(pairs)) => ProfileQuery::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Ignoring undecodable query string");
            ProfileQuery::default()
        }
    };

    match assemble_profile(identity, &query, state.repo.as_ref(), &state.config).await? {
        ProfileOutcome::Redirect(to) => Ok(Redirect::to(&to).into_response()),
        ProfileOutcome::Render(view) => {
            let body = ProfileTemplate { view: &view }.render()?;
            Ok(Html(body).into_response())
        }
    }
}
