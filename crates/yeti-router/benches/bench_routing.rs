// SPDX-FileCopyrightText: 2026 YETI AI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Routing latency benchmarks.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use yeti_core::ModelCategory;
use yeti_router::{ModelRouter, RouteOptions};

const SHORT: &str = "Translate this document into French";
const MIXED: &str = "Write a python script that draws a diagram of our data pipeline, \
                     then explain why each step is needed (step by step)";

fn bench_analyze(c: &mut Criterion) {
    let router = ModelRouter::default();
    let long = vec!["lorem"; 400].join(" ");

    let mut group = c.benchmark_group("analyze");
    group.bench_function("short", |b| b.iter(|| router.analyze(black_box(SHORT))));
    group.bench_function("mixed", |b| b.iter(|| router.analyze(black_box(MIXED))));
    group.bench_function("long", |b| b.iter(|| router.analyze(black_box(&long))));
    group.finish();
}

fn bench_route(c: &mut Criterion) {
    let router = ModelRouter::default();
    let fast = RouteOptions {
        requires_fast_response: Some(true),
        ..Default::default()
    };
    let preferred = RouteOptions {
        user_preference: Some(ModelCategory::Action),
        ..Default::default()
    };

    let mut group = c.benchmark_group("route");
    group.bench_function("skill", |b| {
        b.iter(|| router.route(black_box(MIXED), Some("code"), RouteOptions::default()))
    });
    group.bench_function("analysis", |b| {
        b.iter(|| router.route(black_box(MIXED), None, RouteOptions::default()))
    });
    group.bench_function("fast_response", |b| {
        b.iter(|| router.route(black_box("generate an image of a mountain"), None, fast))
    });
    group.bench_function("preference", |b| {
        b.iter(|| router.route(black_box(SHORT), None, preferred))
    });
    group.bench_function("inline_prefix", |b| {
        b.iter(|| router.route_with_prefix(black_box("/vlm describe it"), None, RouteOptions::default()))
    });
    group.finish();
}

criterion_group!(benches, bench_analyze, bench_route);
criterion_main!(benches);
