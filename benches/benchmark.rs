//! Performance benchmarks for lighthouse-summary.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Locating the embedded JSON in a padded HTML page
//! - Full extract, parse and render on synthetic reports of growing size

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lighthouse_summary::{extract_report_json, read_report, render_summary, Options};
use std::fmt::Write;

/// Build a report page with `categories` categories of `audits_per_category` audits each.
fn synthetic_report(categories: usize, audits_per_category: usize) -> String {
    let mut audits = String::new();
    let mut cats = String::new();

    for c in 0..categories {
        let mut refs = String::new();
        for a in 0..audits_per_category {
            let id = format!("audit-{c}-{a}");
            let score = (a % 5) as f64 / 4.0;
            let mode = ["numeric", "binary", "informative", "manual", "metricSavings"][a % 5];
            if !audits.is_empty() {
                audits.push(',');
            }
            let _ = write!(
                audits,
                r#""{id}":{{"title":"Audit {id}","score":{score},"scoreDisplayMode":"{mode}","displayValue":"{a} ms"}}"#
            );
            if !refs.is_empty() {
                refs.push(',');
            }
            let _ = write!(refs, r#"{{"id":"{id}","weight":1}}"#);
        }
        if !cats.is_empty() {
            cats.push(',');
        }
        let _ = write!(
            cats,
            r#""cat-{c}":{{"title":"Category {c}","score":0.73,"auditRefs":[{refs}]}}"#
        );
    }

    let padding = "<div class=\"lh-vars\"></div>\n".repeat(200);
    format!(
        "<!doctype html><html><body>{padding}<script>window.__LIGHTHOUSE_JSON__ = {{\"audits\":{{{audits}}},\"categories\":{{{cats}}}}};</script></body></html>"
    )
}

fn bench_extract_json(c: &mut Criterion) {
    let html = synthetic_report(5, 40);
    let options = Options::default();

    c.bench_function("extract_report_json", |b| {
        b.iter(|| extract_report_json(black_box(&html), black_box(&options)));
    });
}

fn bench_full_summary(c: &mut Criterion) {
    let options = Options::default();
    let mut group = c.benchmark_group("summary");

    for audits in [10, 100, 1000] {
        let html = synthetic_report(5, audits);
        let size_kb = html.len() / 1024;
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("read_and_render", format!("{audits} audits ({size_kb}KB)")),
            &html,
            |b, html| {
                b.iter(|| {
                    read_report(black_box(html), &options).map(|report| render_summary(&report, &options))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_extract_json, bench_full_summary);
criterion_main!(benches);
