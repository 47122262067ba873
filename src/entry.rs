//! Catalogue entry structures and field extraction.
//!
//! This module provides [`Entry`], one catalogue record split out of an export,
//! with its `key = {value}` assignments stored in an insertion-ordered multimap.
//!
//! Field names are matched case-insensitively and must be whole words, so the
//! `source` field is never confused with `also_source`. A value is everything up
//! to the first closing brace. Nested braces are not supported: catalogue
//! exports guarantee flat values.
//!
//! Every assignment is scanned independently of its neighbours. A value that
//! is missing its closing brace runs on to the next `}`, but the assignments it
//! swallows are still found on their own, so only the broken field is affected.
//!
//! # Examples
//!
//! ```
//! use bibshelf::Entry;
//!
//! let entry = Entry::parse("@book{b1,\n item_type = {kng},\n title = {Sample},\n item_type = {CDD}\n}");
//!
//! assert_eq!(entry.entry_type, "book");
//! assert_eq!(entry.key, "b1");
//! assert_eq!(entry.extract_first("TITLE"), "Sample");
//! assert_eq!(entry.extract_all("item_type"), vec!["kng", "CDD"]);
//! assert_eq!(entry.extract_first("subtitle"), "");
//! ```

use crate::item_type::ItemTypeSet;
use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Write;

lazy_static! {
    /// Start of one `name = {` assignment; the name must start a word.
    static ref ASSIGNMENT_PATTERN: Regex =
        Regex::new(r"(?i)\b([a-z_][a-z0-9_]*)\s*=\s*\{").unwrap();

    /// Entry header such as `@book{key,`.
    static ref HEADER_PATTERN: Regex =
        Regex::new(r"^@\s*([A-Za-z]*)\s*\{\s*([^,\s}]*)").unwrap();
}

/// Field names understood by the formatter.
pub mod field {
    /// Main library signature.
    pub const MAIN_SIG: &str = "main_sig";
    /// Department signature.
    pub const DEP_SIG: &str = "dep_sig";
    /// Filing heading word.
    pub const SORT_WORD: &str = "sort_word";
    /// Author, used when no responsibility statement exists.
    pub const AUTHOR: &str = "author";
    /// Statement of responsibility.
    pub const RESPONSIBILITY: &str = "responsibility";
    /// Title proper.
    pub const TITLE: &str = "title";
    /// Other title information.
    pub const SUBTITLE: &str = "subtitle";
    /// Misspelled subtitle emitted by some catalogue templates.
    pub const SUBSTITLE: &str = "substitle";
    /// Edition statement (publication statement or extent for yearbooks).
    pub const EDITION: &str = "edition";
    /// Place of publication.
    pub const ADDRESS: &str = "address";
    /// Place of publication (alternate name).
    pub const PLACE: &str = "place";
    /// Publisher name.
    pub const PUBLISHER: &str = "publisher";
    /// Publication year.
    pub const YEAR: &str = "year";
    /// Page count.
    pub const PAGE_COUNT: &str = "page_count";
    /// Extent (alternate name for page count).
    pub const EXTENT: &str = "extent";
    /// Illustration statement.
    pub const ILLUSTRATIONS: &str = "illustrations";
    /// Dimensions.
    pub const DIMENSIONS: &str = "dimensions";
    /// Series statement.
    pub const SERIES: &str = "series";
    /// ISBN.
    pub const ISBN: &str = "isbn";
    /// Free-form extra book information.
    pub const BOOK_INFO: &str = "book_info";
    /// Item type code (repeatable).
    pub const ITEM_TYPE: &str = "item_type";
    /// Contents note (repeatable).
    pub const ABSTRACT: &str = "abstract";
    /// Host journal or collection of an article.
    pub const SOURCE: &str = "source";
    /// Issue number.
    pub const ISSUE: &str = "issue";
    /// Article page range.
    pub const ART_PAGES: &str = "art_pages";
    /// Newspaper column or rubric.
    pub const COLUMN: &str = "column";
    /// City of the host journal.
    pub const JOURNAL_CITY: &str = "journal_city";
    /// Cross-referenced source (repeatable).
    pub const ALSO_SOURCE: &str = "also_source";
    /// Descriptions for cross-referenced sources (repeatable, `;`-separated).
    pub const ALSO_DESCRIPTION: &str = "also_description";
    /// Person discussed in the item (repeatable).
    pub const ABOUT_PERSON: &str = "about_person";
}

/// One catalogue record.
///
/// Fields are stored in insertion order using `IndexMap`, keyed by the
/// lowercased field name; repeated names keep every value in the order they
/// appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Entry type from the header (`book` in `@book{...`), may be empty
    pub entry_type: String,
    /// Citation key from the header, may be empty
    pub key: String,
    /// Field name -> values, preserves first-occurrence order
    pub fields: IndexMap<String, Vec<String>>,
}

impl Entry {
    /// Create an empty entry with the given header values.
    #[must_use]
    pub fn new(entry_type: impl Into<String>, key: impl Into<String>) -> Self {
        Entry {
            entry_type: entry_type.into(),
            key: key.into(),
            fields: IndexMap::new(),
        }
    }

    /// Create a builder for fluently constructing entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use bibshelf::Entry;
    ///
    /// let entry = Entry::builder("book", "x1")
    ///     .field("title", "Sample")
    ///     .field("item_type", "KNG")
    ///     .build();
    /// assert_eq!(entry.extract_first("title"), "Sample");
    /// ```
    #[must_use]
    pub fn builder(entry_type: impl Into<String>, key: impl Into<String>) -> EntryBuilder {
        EntryBuilder {
            entry: Entry::new(entry_type, key),
        }
    }

    /// Parse one raw entry block.
    ///
    /// Never fails: a block without a header gets an empty type and key, and
    /// an assignment with no closing brace after it is skipped.
    ///
    /// Assignments found inside the value of an earlier field still count,
    /// unless they repeat that field's own name. Each name therefore sees
    /// exactly the matches of its own `name = {value}` scan.
    ///
    /// ```
    /// use bibshelf::Entry;
    ///
    /// let entry = Entry::parse("@book{k,\n title = {Broken,\n author = {Doe, John},\n}");
    /// assert_eq!(entry.extract_first("author"), "Doe, John");
    /// assert!(entry.extract_first("title").starts_with("Broken,"));
    /// ```
    #[must_use]
    pub fn parse(block: &str) -> Self {
        let trimmed = block.trim_start();
        let mut entry = match HEADER_PATTERN.captures(trimmed) {
            Some(caps) => Entry::new(&caps[1], &caps[2]),
            None => Entry::default(),
        };

        // Per field name, the offset where its previous value ended.
        let mut resume_at: HashMap<String, usize> = HashMap::new();
        for caps in ASSIGNMENT_PATTERN.captures_iter(trimmed) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let name = name.as_str().to_ascii_lowercase();
            if resume_at.get(&name).is_some_and(|&end| whole.start() < end) {
                continue;
            }
            let value_start = whole.end();
            let Some(len) = memchr::memchr(b'}', &trimmed.as_bytes()[value_start..]) else {
                continue;
            };
            entry.add_field(&name, trimmed[value_start..value_start + len].trim());
            resume_at.insert(name, value_start + len + 1);
        }

        entry
    }

    /// Append a value for a field. The name is stored lowercased.
    pub fn add_field(&mut self, name: &str, value: impl Into<String>) {
        self.fields
            .entry(name.to_ascii_lowercase())
            .or_default()
            .push(value.into());
    }

    /// All values of a field, in order. Empty when the field is absent.
    #[must_use]
    pub fn values(&self, name: &str) -> &[String] {
        match self.fields.get(name.to_ascii_lowercase().as_str()) {
            Some(values) => values,
            None => &[],
        }
    }

    /// Owned copy of all values of a field, in order.
    #[must_use]
    pub fn extract_all(&self, name: &str) -> Vec<String> {
        self.values(name).to_vec()
    }

    /// The first value of a field, or an empty string.
    #[must_use]
    pub fn extract_first(&self, name: &str) -> &str {
        self.values(name).first().map_or("", String::as_str)
    }

    /// The first non-empty value across a chain of alternative field names.
    ///
    /// ```
    /// use bibshelf::Entry;
    ///
    /// let entry = Entry::builder("book", "").field("place", "Sofia").build();
    /// assert_eq!(entry.extract_first_of(&["address", "place"]), "Sofia");
    /// ```
    #[must_use]
    pub fn extract_first_of(&self, names: &[&str]) -> &str {
        names
            .iter()
            .map(|name| self.extract_first(name))
            .find(|value| !value.is_empty())
            .unwrap_or("")
    }

    /// Distinct values of a field in first-seen order.
    #[must_use]
    pub fn extract_unique(&self, name: &str) -> Vec<&str> {
        let mut unique: Vec<&str> = Vec::new();
        for value in self.values(name) {
            if !unique.contains(&value.as_str()) {
                unique.push(value);
            }
        }
        unique
    }

    /// Distinct values of a field joined with `sep`.
    #[must_use]
    pub fn extract_joined_unique(&self, name: &str, sep: &str) -> String {
        self.extract_unique(name).join(sep)
    }

    /// Item type codes attached to this entry.
    #[must_use]
    pub fn item_types(&self) -> ItemTypeSet {
        ItemTypeSet::from_values(self.values(field::ITEM_TYPE))
    }

    /// Render the entry back to the export syntax.
    #[must_use]
    pub fn to_export_string(&self) -> String {
        let mut out = String::new();
        writeln!(out, "@{}{{{},", self.entry_type, self.key).ok();
        for (name, values) in &self.fields {
            for value in values {
                writeln!(out, "  {name} = {{{value}}},").ok();
            }
        }
        out.push('}');
        out
    }
}

/// Builder for fluently constructing [`Entry`] values.
#[derive(Debug)]
pub struct EntryBuilder {
    entry: Entry,
}

impl EntryBuilder {
    /// Append a field value.
    #[must_use]
    pub fn field(mut self, name: &str, value: &str) -> Self {
        self.entry.add_field(name, value);
        self
    }

    /// Append several values for the same field.
    #[must_use]
    pub fn fields(mut self, name: &str, values: &[&str]) -> Self {
        for value in values {
            self.entry.add_field(name, *value);
        }
        self
    }

    /// Build the entry.
    #[must_use]
    pub fn build(self) -> Entry {
        self.entry
    }
}
