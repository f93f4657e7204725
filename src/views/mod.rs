// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! View models and page assembly.

pub mod fragments;
pub mod gallery;
pub mod profile;

pub use fragments::{Header, LowBalanceNotice, TopUpPromotion};
pub use gallery::{GalleryView, ImageCard};
pub use profile::{assemble_profile, ProfileOutcome, ProfileQuery, ProfileTemplate, ProfileView};
