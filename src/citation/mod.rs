//! Citation formatting for shelf-list entries.
//!
//! One [`CitationFormatter`] handles every material layout. The layout is
//! chosen by the classifier ([`crate::classify`]) and each layout composes the
//! shared ISBD helpers from [`isbd`]. Every formatter is pure: an [`Entry`] goes
//! in, a fresh [`CitationRecord`] comes out.
//!
//! # Examples
//!
//! ```
//! use bibshelf::{CitationFormatter, Entry, Layout};
//!
//! let entry = Entry::builder("book", "b1")
//!     .field("item_type", "KNG")
//!     .field("title", "Sample")
//!     .field("author", "Doe, John")
//!     .field("year", "2020")
//!     .build();
//!
//! let record = CitationFormatter::default().format(&entry, Layout::Book);
//! assert!(record.main_lines.iter().any(|l| l.contains("Sample / John Doe")));
//! ```

mod article;
mod book;
pub mod isbd;
mod other;
mod yearbook;

use crate::also_source::{merge_also_sources, AlsoSourceTrailer};
use crate::config::{Labels, ShelfConfig};
use crate::entry::{field, Entry};
use crate::item_type::{ItemTypeSet, GOI};
use crate::names::{format_responsibility, sort_word_with_et_al};
use serde::{Deserialize, Serialize};

/// Which citation layout an entry is printed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Monograph with signature, sort word and full ISBD line
    Book,
    /// Contribution with an italic host-source clause
    Article,
    /// Yearbook with a single ISBD line and persons discussed
    Yearbook,
    /// Anything else: responsibility and title with year
    Other,
}

/// Run styling hints for one segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentStyle {
    /// Render in italics
    pub italic: bool,
    /// Render in bold
    pub bold: bool,
}

impl SegmentStyle {
    /// Unstyled text.
    pub const PLAIN: SegmentStyle = SegmentStyle {
        italic: false,
        bold: false,
    };
    /// Italic text.
    pub const ITALIC: SegmentStyle = SegmentStyle {
        italic: true,
        bold: false,
    };
    /// Bold text.
    pub const BOLD: SegmentStyle = SegmentStyle {
        italic: false,
        bold: true,
    };
}

/// A piece of text with its styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledSegment {
    /// Segment text
    pub text: String,
    /// Segment style
    pub style: SegmentStyle,
}

impl StyledSegment {
    /// Create a segment.
    #[must_use]
    pub fn new(text: impl Into<String>, style: SegmentStyle) -> Self {
        StyledSegment {
            text: text.into(),
            style,
        }
    }
}

/// Formatter output for one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationRecord {
    /// Plain lines in print order; blank lines are never included
    pub main_lines: Vec<String>,
    /// The one line that needs differential styling, printed after `main_lines`
    pub styled_line: Option<Vec<StyledSegment>>,
    /// Item type summary, or empty
    pub item_type_line: String,
    /// Contents notes with catalogue boilerplate stripped
    pub notes: Vec<String>,
    /// Merged cross-reference line, or empty
    pub other_sources: String,
}

impl CitationRecord {
    fn push_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        if !line.trim().is_empty() {
            self.main_lines.push(line);
        }
    }
}

/// Builder for a line of styled segments; adjacent runs of equal style merge.
#[derive(Debug, Default)]
pub(crate) struct SegmentLine {
    segments: Vec<StyledSegment>,
}

impl SegmentLine {
    pub(crate) fn push(&mut self, text: &str, style: SegmentStyle) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        match self.segments.last_mut() {
            Some(last) if last.style == style => last.text.push_str(text),
            _ => self.segments.push(StyledSegment::new(text, style)),
        }
        self
    }

    pub(crate) fn plain(&mut self, text: &str) -> &mut Self {
        self.push(text, SegmentStyle::PLAIN)
    }

    pub(crate) fn into_segments(self) -> Vec<StyledSegment> {
        self.segments
    }
}

/// Gap between the main and department signatures.
pub(crate) const SIGNATURE_GAP: &str = "       ";

/// Formats entries into [`CitationRecord`]s.
#[derive(Debug, Clone, Default)]
pub struct CitationFormatter {
    labels: Labels,
    trailer: AlsoSourceTrailer,
}

impl CitationFormatter {
    /// Create a formatter with explicit labels and cross-reference trailer.
    #[must_use]
    pub fn new(labels: Labels, trailer: AlsoSourceTrailer) -> Self {
        CitationFormatter { labels, trailer }
    }

    /// Create a formatter from a shelf configuration.
    #[must_use]
    pub fn from_config(config: &ShelfConfig) -> Self {
        Self::new(config.labels.clone(), config.also_source_trailer)
    }

    /// The labels this formatter prints.
    #[must_use]
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Format one entry with the given layout.
    #[must_use]
    pub fn format(&self, entry: &Entry, layout: Layout) -> CitationRecord {
        let types = entry.item_types();
        let mut record = self.common(entry, &types);
        match layout {
            Layout::Book => book::format(self, entry, &types, &mut record),
            Layout::Article => article::format(self, entry, &types, &mut record),
            Layout::Yearbook => yearbook::format(self, entry, &mut record),
            Layout::Other => other::format(self, entry, &types, &mut record),
        }
        record
    }

    /// Parts shared by every layout: notes, item types and cross-references.
    fn common(&self, entry: &Entry, types: &ItemTypeSet) -> CitationRecord {
        CitationRecord {
            main_lines: Vec::new(),
            styled_line: None,
            item_type_line: types.summary_line(&self.labels.item_types),
            notes: self.clean_notes(entry.values(field::ABSTRACT)),
            other_sources: merge_also_sources(
                entry.values(field::ALSO_SOURCE),
                entry.values(field::ALSO_DESCRIPTION),
                self.trailer,
            ),
        }
    }

    /// Strip the catalogue's leading "contains also" boilerplate from notes.
    fn clean_notes(&self, raw: &[String]) -> Vec<String> {
        raw.iter()
            .map(|note| {
                strip_prefix_ignore_case(note, &self.labels.note_prefix)
                    .unwrap_or(note.as_str())
                    .trim()
                    .to_string()
            })
            .filter(|note| !note.is_empty())
            .collect()
    }

    /// Filing heading, with the et-al suffix for multi-author non-yearbooks.
    fn sort_word(&self, entry: &Entry, types: &ItemTypeSet) -> String {
        sort_word_with_et_al(
            entry.extract_first_of(&[field::SORT_WORD, field::AUTHOR]),
            raw_responsibility(entry),
            types.contains(GOI),
            &self.labels.et_al,
        )
    }
}

/// Responsibility statement as catalogued, falling back to the author field.
fn raw_responsibility(entry: &Entry) -> &str {
    entry.extract_first_of(&[field::RESPONSIBILITY, field::AUTHOR])
}

/// Responsibility statement in direct name order.
fn responsibility(entry: &Entry) -> String {
    format_responsibility(raw_responsibility(entry))
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return None;
    }
    let mut chars = text.char_indices();
    for expected in prefix.chars() {
        let (_, actual) = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(chars.next().map_or("", |(i, _)| &text[i..]))
}
