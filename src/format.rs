// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date and number display.

use chrono::{DateTime, Utc};

/// Separator between digit groups (no-break space, as in Polish grouping).
const GROUP_SEPARATOR: char = '\u{a0}';
/// Integer parts shorter than this are not grouped ("1234", but "12 345").
const MIN_GROUPED_DIGITS: usize = 5;

/// Format an account creation timestamp as "January 5, 2024".
pub fn format_account_creation_date(created_at: DateTime<Utc>) -> String {
    created_at.format("%B %-d, %Y").to_string()
}

/// Format a token balance with exactly two fraction digits.
///
/// Rounds half away from zero on the shortest decimal form of the value,
/// so 0.125 shows as "0.13" and 1.005 as "1.01".
pub fn format_token_balance(balance: f64) -> String {
    if !balance.is_finite() {
        return balance.to_string();
    }

    let (int_part, frac_part) = round_to_cents(balance.abs());
    let is_zero = int_part.bytes().chain(frac_part.bytes()).all(|d| d == b'0');
    let sign = if balance < 0.0 && !is_zero { "-" } else { "" };

    format!("{sign}{}.{frac_part}", group_digits(&int_part))
}

/// Integer and two-digit fraction of a non-negative finite value.
fn round_to_cents(value: f64) -> (String, String) {
    // Display never uses exponent notation and yields the shortest
    // representation that round-trips.
    let shortest = value.to_string();
    let (int_part, frac) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect();

    if frac.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        let mut carried = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carried = false;
                break;
            }
        }
        if carried {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - 2;
    let text: String = digits.iter().map(|&d| d as char).collect();
    (text[..split].to_string(), text[split..].to_string())
}

fn group_digits(digits: &str) -> String {
    if digits.len() < MIN_GROUPED_DIGITS {
        return digits.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() * 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}
