#![allow(missing_docs)]
//! Shelf-list generation benchmarks.
//!
//! Exports are generated in memory so the benchmarks need no fixtures. Each
//! synthetic export cycles through books, yearbooks, articles and other
//! material so every layout is exercised.

use bibshelf::entry_scanner::split_entries;
use bibshelf::writers::{DocumentWriter, WordMlWriter};
use bibshelf::{build_shelf_list, Entry, ShelfConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a synthetic export with `count` entries.
fn synthetic_export(count: usize) -> String {
    let mut export = String::with_capacity(count * 300);
    for i in 0..count {
        let year = 1900 + (i * 7) % 120;
        let block = match i % 4 {
            0 => format!(
                "@book{{b{i},\n  item_type = {{KNG}},\n  main_sig = {{II {i}}},\n  \
                 sort_word = {{Автор}},\n  responsibility = {{Автор, Първи and Втори, Иван}},\n  \
                 title = {{Книга {i}}},\n  address = {{София}},\n  publisher = {{Наука}},\n  \
                 year = {{{year}}},\n  page_count = {{{i} с.}}\n}}\n"
            ),
            1 => format!(
                "@book{{y{i},\n  item_type = {{GOI}},\n  title = {{Годишник {i}}},\n  \
                 edition = {{{i} с.}},\n  year = {{{year}}},\n  about_person = {{Лице {i}}}\n}}\n"
            ),
            2 => format!(
                "@article{{a{i},\n  item_type = {{JOU}},\n  responsibility = {{Петров, Петър}},\n  \
                 title = {{Статия {i}}},\n  source = {{Списание}},\n  issue = {{{i}}},\n  \
                 year = {{{year}}},\n  also_source = {{A}},\n  also_source = {{B}},\n  \
                 also_description = {{d1; d2; d3}}\n}}\n"
            ),
            _ => format!(
                "@misc{{o{i},\n  item_type = {{MAP}},\n  title = {{Карта {i}}},\n  \
                 year = {{{year}}}\n}}\n"
            ),
        };
        export.push_str(&block);
    }
    export
}

fn benchmark_parse_entries(c: &mut Criterion) {
    let export = synthetic_export(1_000);

    c.bench_function("parse_1k_entries", |b| {
        b.iter(|| {
            split_entries(black_box(&export))
                .into_iter()
                .map(Entry::parse)
                .count()
        });
    });
}

fn benchmark_build_shelf_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_shelf_list");
    for count in [100, 1_000, 10_000] {
        let export = synthetic_export(count);
        for parallel in [false, true] {
            let label = if parallel { "parallel" } else { "sequential" };
            let config = ShelfConfig::default().with_parallel(parallel);
            group.bench_with_input(BenchmarkId::new(label, count), &export, |b, export| {
                b.iter(|| build_shelf_list(black_box(export), &config));
            });
        }
    }
    group.finish();
}

fn benchmark_wordml_writer(c: &mut Criterion) {
    let document = build_shelf_list(&synthetic_export(1_000), &ShelfConfig::default());

    c.bench_function("wordml_1k_entries", |b| {
        b.iter(|| {
            let mut buffer = Vec::new();
            let mut writer = WordMlWriter::new(&mut buffer, 24);
            writer.write_document(black_box(&document)).ok();
            writer.finish().ok();
            buffer.len()
        });
    });
}

criterion_group!(
    shelf_benches,
    benchmark_parse_entries,
    benchmark_build_shelf_list,
    benchmark_wordml_writer,
);
criterion_main!(shelf_benches);
