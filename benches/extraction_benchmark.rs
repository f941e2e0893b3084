use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use headline_scraper::{clean_and_dedupe, HeadlineExtractor};
use std::fs;
use std::path::Path;

fn load_test_case(name: &str) -> Option<String> {
    let path = Path::new("tests/test-pages").join(name).join("source.html");
    fs::read_to_string(&path).ok()
}

/// A front page with `promos` promo blocks, a third of them repeated.
fn synthetic_front_page(promos: usize) -> String {
    let mut html = String::from("<html><head><title>Front page</title></head><body><h1>News</h1>");
    for i in 0..promos {
        let n = if i % 3 == 0 { i / 3 } else { i };
        html.push_str(&format!(
            r#"<div class="gs-c-promo"><a class="gs-c-promo-heading" href="/news/{i}">
                <h3 class="gs-c-promo-heading__title">Story   number {n}</h3></a>
                <h2>Section {n}</h2><p>Summary text for story {i}.</p></div>"#
        ));
    }
    html.push_str("</body></html>");
    html
}

fn bench_extract_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    for (url, label) in [
        ("https://example.org/", "generic"),
        ("https://www.bbc.com/news", "bbc"),
    ] {
        for promos in [10, 100, 1000] {
            let html = synthetic_front_page(promos);
            group.throughput(Throughput::Bytes(html.len() as u64));
            group.bench_with_input(BenchmarkId::new(label, promos), &html, |b, html| {
                b.iter(|| {
                    let extractor =
                        HeadlineExtractor::new(std::hint::black_box(html), Some(url), None)
                            .unwrap();
                    std::hint::black_box(extractor.extract())
                });
            });
        }
    }

    group.finish();
}

fn bench_fixtures(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixtures");

    for (name, url) in [
        ("bbc-front-page", "https://www.bbc.co.uk/news"),
        ("generic-blog", "https://example.org/blog"),
    ] {
        let html = match load_test_case(name) {
            Some(h) => h,
            None => continue,
        };

        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("doc", name), &html, |b, html| {
            b.iter(|| {
                let extractor =
                    HeadlineExtractor::new(std::hint::black_box(html), Some(url), None).unwrap();
                std::hint::black_box(extractor.extract())
            });
        });
    }

    group.finish();
}

fn bench_dedupe(c: &mut Criterion) {
    let candidates: Vec<String> = (0..10_000)
        .map(|i| format!("  Headline \n number   {}  ", i % 2_500))
        .collect();

    c.bench_function("clean_and_dedupe_10k", |b| {
        b.iter(|| std::hint::black_box(clean_and_dedupe(std::hint::black_box(&candidates), 10_000)))
    });
}

criterion_group!(benches, bench_extract_by_size, bench_fixtures, bench_dedupe);
criterion_main!(benches);
