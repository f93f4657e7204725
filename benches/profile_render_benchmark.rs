// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use askama::Template;
use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use token_studio::config::Config;
use token_studio::models::{ImagePage, ImageSummary, PageNumber, TransformationType, UserRecord};
use token_studio::views::{ProfileTemplate, ProfileView};

fn bench_profile_render(c: &mut Criterion) {
    let config = Config::test_default();
    let created_at = Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap();
    let user = UserRecord {
        id: "user-1".to_string(),
        clerk_id: "user_bench".to_string(),
        email: Some("bench@example.com".to_string()),
        username: Some("bench".to_string()),
        photo: None,
        first_name: Some("Bench".to_string()),
        last_name: Some("Mark".to_string()),
        token_balance: 1234567.5,
        created_at,
    };
    let items: Vec<ImageSummary> = (0..config.images_per_page)
        .map(|i| ImageSummary {
            id: format!("img-{i}"),
            title: format!("Image <{i}> & friends"),
            transformation_type: TransformationType::Fill,
            secure_url: format!("https://cdn.example.com/img-{i}.png"),
            width: Some(1024),
            height: Some(1024),
            author: "user-1".to_string(),
            updated_at: created_at + Duration::days(i as i64),
        })
        .collect();

    c.bench_function("render_profile_page", |b| {
        b.iter(|| {
            let images = ImagePage {
                items: items.clone(),
                total_pages: 4,
            };
            let view = ProfileView::new(
                user.clone(),
                images,
                PageNumber::new(2).unwrap(),
                &config,
            );
            black_box(ProfileTemplate { view: &view }.render().unwrap())
        })
    });
}

criterion_group!(benches, bench_profile_render);
criterion_main!(benches);
