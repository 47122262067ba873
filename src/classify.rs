//! Classification of entries into shelf-list buckets and print ordering.
//!
//! Bucket membership is decided by [`CLASSIFICATION_RULES`], a priority-ordered
//! table evaluated top to bottom where the first matching rule wins. The order
//! matters: a `GOI` record on its own is a yearbook (a book), but `GOI` next to
//! another code marks a contribution to a yearbook (an article).
//!
//! # Examples
//!
//! ```
//! use bibshelf::{classify, Bucket, ItemTypeSet, Layout};
//!
//! let types = ItemTypeSet::from_values(&["GOI"]);
//! let class = classify::classify(&types);
//! assert_eq!(class.bucket, Bucket::Books);
//! assert_eq!(class.layout, Layout::Yearbook);
//! ```

use crate::citation::Layout;
use crate::entry::{field, Entry};
use crate::item_type::{ItemTypeSet, ARTICLE_CODES, BOOK_CODES};
use serde::{Deserialize, Serialize};

/// Shelf-list section an entry is printed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// Books, CD-ROMs and yearbooks
    Books,
    /// Articles and yearbook contributions
    Articles,
    /// Everything else
    Other,
}

impl Bucket {
    /// All buckets in print order.
    pub const ALL: [Bucket; 3] = [Bucket::Books, Bucket::Articles, Bucket::Other];
}

/// Result of classifying one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Section the entry belongs to
    pub bucket: Bucket,
    /// Citation layout used to print it
    pub layout: Layout,
    /// Name of the rule that matched
    pub rule: &'static str,
}

/// One row of the classification table.
#[derive(Debug)]
pub struct ClassificationRule {
    /// Rule name, reported in [`Classification::rule`]
    pub name: &'static str,
    /// Whether the rule applies
    pub matches: fn(&ItemTypeSet) -> bool,
    /// Bucket assigned on match
    pub bucket: Bucket,
    /// Layout assigned on match
    pub layout: Layout,
}

/// Classification policy, first match wins.
pub const CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        name: "yearbook-only",
        matches: ItemTypeSet::is_yearbook_only,
        bucket: Bucket::Books,
        layout: Layout::Yearbook,
    },
    ClassificationRule {
        name: "book-primary",
        matches: |types| types.primary_in(BOOK_CODES),
        bucket: Bucket::Books,
        layout: Layout::Book,
    },
    ClassificationRule {
        name: "yearbook-part",
        matches: ItemTypeSet::is_yearbook_part,
        bucket: Bucket::Articles,
        layout: Layout::Article,
    },
    ClassificationRule {
        name: "article-primary",
        matches: |types| types.primary_in(ARTICLE_CODES),
        bucket: Bucket::Articles,
        layout: Layout::Article,
    },
];

/// Classification for entries no rule matches.
pub const FALLBACK: Classification = Classification {
    bucket: Bucket::Other,
    layout: Layout::Other,
    rule: "fallback",
};

/// Classify an entry by its item types.
#[must_use]
pub fn classify(types: &ItemTypeSet) -> Classification {
    CLASSIFICATION_RULES
        .iter()
        .find(|rule| (rule.matches)(types))
        .map_or(FALLBACK, |rule| Classification {
            bucket: rule.bucket,
            layout: rule.layout,
            rule: rule.name,
        })
}

/// Parse a publication year for sorting.
///
/// Reads an optional sign and the leading ASCII digits after trimming, so
/// `"1999."` and `"1999-2000"` both give 1999. Anything unparseable gives 0.
///
/// ```
/// use bibshelf::classify::parse_year;
///
/// assert_eq!(parse_year("1999"), 1999);
/// assert_eq!(parse_year(" 1985 г."), 1985);
/// assert_eq!(parse_year("[1920?]"), 0);
/// assert_eq!(parse_year(""), 0);
/// ```
#[must_use]
pub fn parse_year(raw: &str) -> i64 {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    let value = digits[..end].parse::<i64>().unwrap_or(0);
    if negative {
        -value
    } else {
        value
    }
}

/// An entry with everything the sorter and formatter need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedEntry {
    /// The parsed entry
    pub entry: Entry,
    /// Its item types
    pub item_types: ItemTypeSet,
    /// Its classification
    pub classification: Classification,
    /// Sort year (0 when missing or unparseable)
    pub year: i64,
}

impl ClassifiedEntry {
    /// Classify an entry.
    #[must_use]
    pub fn new(entry: Entry) -> Self {
        let item_types = entry.item_types();
        let classification = classify(&item_types);
        let year = parse_year(entry.extract_first(field::YEAR));
        ClassifiedEntry {
            entry,
            item_types,
            classification,
            year,
        }
    }

    /// Whether the entry ranks with the books.
    #[must_use]
    pub fn is_book(&self) -> bool {
        self.classification.bucket == Bucket::Books
    }
}

/// Order entries for printing: books first, then ascending year.
///
/// The sort is stable, so entries with equal keys keep their input order.
pub fn sort_for_print(entries: &mut [ClassifiedEntry]) {
    entries.sort_by_key(|e| (!e.is_book(), e.year));
}

/// Entries split into buckets, each in print order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buckets {
    /// Books bucket
    pub books: Vec<ClassifiedEntry>,
    /// Articles bucket
    pub articles: Vec<ClassifiedEntry>,
    /// Other bucket
    pub other: Vec<ClassifiedEntry>,
}

impl Buckets {
    /// Sort entries for print and partition them into buckets.
    #[must_use]
    pub fn partition(mut entries: Vec<ClassifiedEntry>) -> Self {
        sort_for_print(&mut entries);
        let mut buckets = Buckets::default();
        for entry in entries {
            match entry.classification.bucket {
                Bucket::Books => buckets.books.push(entry),
                Bucket::Articles => buckets.articles.push(entry),
                Bucket::Other => buckets.other.push(entry),
            }
        }
        buckets
    }

    /// Entries of one bucket.
    #[must_use]
    pub fn get(&self, bucket: Bucket) -> &[ClassifiedEntry] {
        match bucket {
            Bucket::Books => &self.books,
            Bucket::Articles => &self.articles,
            Bucket::Other => &self.other,
        }
    }

    /// Total number of entries.
    #[must_use]
    pub fn total(&self) -> usize {
        self.books.len() + self.articles.len() + self.other.len()
    }
}
