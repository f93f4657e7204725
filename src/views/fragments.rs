// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Small page fragments shared by the account pages.

/// Balances at or below this many tokens trigger the low-balance alert.
pub const LOW_BALANCE_THRESHOLD: f64 = 5.0;

/// Page header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
}

impl Header {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Alert shown when the token balance runs low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LowBalanceNotice {
    /// Nothing left to spend.
    Exhausted,
    /// Some tokens left, at or below the threshold.
    Low,
}

impl LowBalanceNotice {
    /// The notice to show for `balance`, if any.
    pub fn for_balance(balance: f64) -> Option<Self> {
        if balance > LOW_BALANCE_THRESHOLD {
            None
        } else if balance <= 0.0 {
            Some(Self::Exhausted)
        } else {
            Some(Self::Low)
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Exhausted => "You've run out of tokens.",
            Self::Low => "Low token balance.",
        }
    }
}

/// Banner inviting the user to buy more tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopUpPromotion {
    /// Token purchase page
    pub href: String,
}

impl TopUpPromotion {
    pub const HEADING: &'static str = "Need more tokens?";
    pub const BODY: &'static str = "Unlock more image generation and manipulation capabilities!";
    pub const LINK_TEXT: &'static str = "Top up tokens";

    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    pub fn heading(&self) -> &'static str {
        Self::HEADING
    }

    pub fn body(&self) -> &'static str {
        Self::BODY
    }

    pub fn link_text(&self) -> &'static str {
        Self::LINK_TEXT
    }
}
