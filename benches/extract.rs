// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use ql_scrape::{
    core::Document,
    specs::{summary, statistics::StatisticsSpec, PageSpec},
};

const SUMMARY: &str = include_str!("../tests/fixtures/summary.html");
const STATISTICS: &str = include_str!("../tests/fixtures/statistics.html");

fn bench_extract(c: &mut Criterion) {
    c.bench_function("parse_summary_page", |b| {
        b.iter(|| black_box(Document::parse(black_box(SUMMARY)).is_ok()))
    });

    let summary_doc = Document::parse(SUMMARY).expect("summary fixture");
    c.bench_function("extract_summary", |b| {
        b.iter(|| {
            let rec = summary::extract(black_box(&summary_doc)).expect("summary");
            black_box(rec.len())
        })
    });

    let stats_doc = Document::parse(STATISTICS).expect("statistics fixture");
    let full = StatisticsSpec::default();
    let reduced = StatisticsSpec { include_records_table: false };

    c.bench_function("extract_statistics", |b| {
        b.iter(|| {
            let rec = full.extract(black_box(&stats_doc)).expect("statistics");
            black_box(rec.len())
        })
    });

    c.bench_function("extract_statistics_weapons_only", |b| {
        b.iter(|| {
            let rec = reduced.extract(black_box(&stats_doc)).expect("statistics");
            black_box(rec.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
