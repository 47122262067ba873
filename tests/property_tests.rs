//! Property tests for extraction, merging, names and ordering.

use bibshelf::also_source::{flatten_descriptions, merge_also_sources, merge_pairs};
use bibshelf::classify::{parse_year, sort_for_print, ClassifiedEntry};
use bibshelf::names::{format_responsibility, normalize_name};
use bibshelf::{build_shelf_list, AlsoSourceTrailer, Entry, ShelfConfig};
use proptest::prelude::*;

/// Field values as catalogue exports carry them: no braces.
fn field_value() -> impl Strategy<Value = String> {
    "[A-Za-zА-Яа-я0-9 .,;:()-]{0,20}"
}

fn item_type() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["KNG", "CDD", "GOI", "JOU", "NSP", "MAP", ""])
}

proptest! {
    #[test]
    fn prop_extract_first_is_head_of_extract_all(
        values in prop::collection::vec(field_value(), 0..5),
        name in prop::sample::select(vec!["title", "source", "also_source", "item_type"]),
    ) {
        let mut block = String::from("@misc{k,\n");
        for value in &values {
            block.push_str(&format!("  {name} = {{{value}}},\n"));
        }
        block.push('}');
        let entry = Entry::parse(&block);

        let all = entry.extract_all(name);
        prop_assert_eq!(all.len(), values.len());
        match all.first() {
            Some(first) => prop_assert_eq!(entry.extract_first(name), first.as_str()),
            None => prop_assert_eq!(entry.extract_first(name), ""),
        }
    }

    #[test]
    fn prop_merge_yields_one_pair_per_source(
        sources in prop::collection::vec("[A-Z][a-z]{0,8}", 0..6),
        descriptions in prop::collection::vec(field_value(), 0..6),
    ) {
        let fragments = flatten_descriptions(&descriptions);
        let pairs = merge_pairs(&sources, &fragments);
        prop_assert_eq!(pairs.len(), sources.len());
        for (pair, source) in pairs.iter().zip(&sources) {
            prop_assert!(pair.starts_with(source.as_str()));
        }

        let joined = merge_also_sources(&sources, &descriptions, AlsoSourceTrailer::SemicolonSpace);
        if sources.is_empty() {
            prop_assert!(joined.is_empty());
        } else {
            prop_assert!(joined.ends_with("; "));
            prop_assert!(!joined.ends_with(";; "));
        }
    }

    #[test]
    fn prop_single_comma_names_reorder(last in "[B-Z][a-z]{1,9}", first in "[B-Z][a-z]{1,9}") {
        prop_assert_eq!(normalize_name(&format!("{last}, {first}")), format!("{first} {last}"));
        prop_assert_eq!(format_responsibility(&format!("{last}, {first}")), format!("{first} {last}"));
    }

    #[test]
    fn prop_parse_year_reads_leading_digits(year in 0i64..10_000, suffix in "[ .a-zа-я-]{0,5}") {
        prop_assert_eq!(parse_year(&format!("{year}{suffix}")), year);
    }

    #[test]
    fn prop_sort_puts_books_first_then_years(
        rows in prop::collection::vec((item_type(), 1900i64..2030), 0..20),
    ) {
        let mut entries: Vec<ClassifiedEntry> = rows
            .iter()
            .enumerate()
            .map(|(i, (code, year))| {
                ClassifiedEntry::new(
                    Entry::builder("misc", i.to_string())
                        .field("item_type", code)
                        .field("year", &year.to_string())
                        .build(),
                )
            })
            .collect();
        sort_for_print(&mut entries);

        for pair in entries.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.is_book() || !b.is_book());
            if a.is_book() == b.is_book() {
                prop_assert!(a.year <= b.year);
                if a.year == b.year {
                    let (ka, kb): (usize, usize) = (
                        a.entry.key.parse().unwrap_or_default(),
                        b.entry.key.parse().unwrap_or_default(),
                    );
                    prop_assert!(ka < kb);
                }
            }
        }
    }

    #[test]
    fn prop_pipeline_never_panics(blob in "[@{}=,a-z \\n]{0,200}") {
        let document = build_shelf_list(&blob, &ShelfConfig::default());
        prop_assert!(document.len() >= 2);
    }
}
