//! End-to-end shelf-list generation.
//!
//! [`build_shelf_list`] runs every stage on a raw catalogue export:
//! normalize, split, parse, classify, sort, format and assemble. Formatting is
//! the only per-entry work of any weight, so it is what runs on the rayon pool
//! when [`ShelfConfig::parallel`] is set. Rayon's indexed `collect` keeps input
//! order, which makes the parallel and sequential documents identical.
//!
//! # Examples
//!
//! ```
//! use bibshelf::{build_shelf_list, ShelfConfig};
//!
//! let blob = "@book{b1,\n item_type = {KNG},\n title = {Sample},\n \
//!             author = {Doe, John},\n year = {2020}\n}\n";
//! let document = build_shelf_list(blob, &ShelfConfig::default());
//!
//! let lines: Vec<String> = document.paragraphs().iter().map(|p| p.text()).collect();
//! assert!(lines.iter().any(|l| l.contains("Sample / John Doe") && l.contains("2020")));
//! ```

use crate::citation::{CitationFormatter, CitationRecord};
use crate::classify::{Bucket, Buckets, ClassifiedEntry};
use crate::config::ShelfConfig;
use crate::document::{assemble, Section, ShelfDocument};
use crate::entry::Entry;
use crate::entry_scanner::{normalize_export, split_entries};
use rayon::prelude::*;

/// Parse and classify every entry of a raw export, in input order.
#[must_use]
pub fn parse_export(blob: &str) -> Vec<ClassifiedEntry> {
    let normalized = normalize_export(blob);
    split_entries(&normalized)
        .into_iter()
        .enumerate()
        .map(|(index, block)| {
            let entry = Entry::parse(block);
            if entry.fields.is_empty() {
                log::warn!("Entry block {index} ('{}') has no fields", entry.key);
            }
            ClassifiedEntry::new(entry)
        })
        .collect()
}

/// Format the entries of one bucket, keeping their order.
#[must_use]
pub fn format_entries(
    formatter: &CitationFormatter,
    entries: &[ClassifiedEntry],
    parallel: bool,
) -> Vec<CitationRecord> {
    let format_one =
        |e: &ClassifiedEntry| formatter.format(&e.entry, e.classification.layout);
    if parallel {
        entries.par_iter().map(format_one).collect()
    } else {
        entries.iter().map(format_one).collect()
    }
}

/// Build formatted sections from classified entries.
#[must_use]
pub fn build_sections(entries: Vec<ClassifiedEntry>, config: &ShelfConfig) -> Vec<Section> {
    let formatter = CitationFormatter::from_config(config);
    let buckets = Buckets::partition(entries);
    log::debug!(
        "Partitioned {} entries: {} books, {} articles, {} other",
        buckets.total(),
        buckets.books.len(),
        buckets.articles.len(),
        buckets.other.len()
    );

    Bucket::ALL
        .iter()
        .map(|&bucket| {
            let records = format_entries(&formatter, buckets.get(bucket), config.parallel);
            Section::new(bucket, records)
        })
        .collect()
}

/// Convert a raw catalogue export into a shelf-list document.
///
/// The transform is total: malformed blocks contribute entries with no
/// fields, and a blob without entries yields a document holding only the
/// zero-count summary.
#[must_use]
pub fn build_shelf_list(blob: &str, config: &ShelfConfig) -> ShelfDocument {
    let entries = parse_export(blob);
    log::info!(
        "Parsed {} entries ({} formatting)",
        entries.len(),
        if config.parallel { "parallel" } else { "sequential" }
    );

    let sections = build_sections(entries, config);
    let mut document = ShelfDocument::new();
    assemble(&config.labels, &sections, &mut document);
    log::debug!("Assembled {} paragraphs", document.len());
    document
}
