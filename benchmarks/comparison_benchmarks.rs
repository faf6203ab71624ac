#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Comparison benchmarks: urlbuild vs url crate query mutation
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use url::Url as UrlCrate;
use urlbuild::{Settings, SettingsPatch, UrlBuilder};

const SIMPLE: &str = "http://example.com/";
const COMPLEX: &str = "https://example.com/path/to/resource?query=value&key=data&page=3&sort=desc";

fn bench_parse_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("urlbuild_simple", |b| {
        b.iter(|| UrlBuilder::new(black_box(SIMPLE), Settings::default()).unwrap());
    });

    group.bench_function("urlbuild_complex", |b| {
        b.iter(|| UrlBuilder::new(black_box(COMPLEX), Settings::default()).unwrap());
    });

    group.bench_function("url_crate_simple", |b| {
        b.iter(|| UrlCrate::parse(black_box(SIMPLE)).unwrap());
    });

    group.bench_function("url_crate_complex", |b| {
        b.iter(|| UrlCrate::parse(black_box(COMPLEX)).unwrap());
    });

    group.finish();
}

fn bench_add_and_render_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_and_render");

    group.bench_function("urlbuild", |b| {
        b.iter(|| {
            let mut url = UrlBuilder::new(black_box(COMPLEX), Settings::default()).unwrap();
            url.add_query_argument("page", 4)
                .unwrap()
                .add_query_argument("lang", "en")
                .unwrap();
            black_box(url.render().len());
        });
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            let mut url = UrlCrate::parse(black_box(COMPLEX)).unwrap();
            let pairs: Vec<(String, String)> = url
                .query_pairs()
                .filter(|(k, _)| k != "page")
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();
            url.query_pairs_mut()
                .clear()
                .extend_pairs(pairs)
                .append_pair("page", "4")
                .append_pair("lang", "en");
            black_box(url.as_str().len());
        });
    });

    group.finish();
}

fn bench_sorted_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorted_render");
    let url = UrlBuilder::new(COMPLEX, Settings::default().with_sort(true)).unwrap();

    group.bench_function("urlbuild_cached", |b| {
        b.iter(|| black_box(url.render().len()));
    });

    group.bench_function("urlbuild_uncached", |b| {
        b.iter(|| {
            let mut fresh = url.clone();
            fresh.update_settings(SettingsPatch::new());
            black_box(fresh.render().len())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_all,
    bench_add_and_render_all,
    bench_sorted_render
);

criterion_main!(benches);
