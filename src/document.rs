//! Shelf-list document model and assembly.
//!
//! The assembler turns citation records into paragraphs of styled runs. It
//! only needs one capability from its destination, [`ParagraphSink`], so the
//! same assembly drives the in-memory [`ShelfDocument`] and any other sink.
//!
//! Paragraph order:
//!
//! 1. bold summary line, then a blank paragraph
//! 2. per non-empty bucket, a bold header followed by each entry:
//!    main lines, the styled line, the item-type line, italic notes, the
//!    cross-reference line and a blank separator
//!
//! # Examples
//!
//! ```
//! use bibshelf::document::{assemble, Section, ShelfDocument};
//! use bibshelf::{Bucket, CitationRecord, Labels};
//!
//! let record = CitationRecord {
//!     main_lines: vec!["  Sample".to_string()],
//!     ..CitationRecord::default()
//! };
//! let sections = vec![Section::new(Bucket::Books, vec![record])];
//!
//! let mut document = ShelfDocument::new();
//! assemble(&Labels::default(), &sections, &mut document);
//!
//! assert_eq!(document.paragraphs()[0].text(), "Общо записи: 1 (Книги: 1, Статии: 0, Други: 0)");
//! assert_eq!(document.paragraphs()[2].text(), "КНИГИ");
//! assert_eq!(document.paragraphs()[3].text(), "  Sample");
//! ```

use crate::citation::{CitationRecord, StyledSegment};
use crate::classify::Bucket;
use crate::config::Labels;
use serde::{Deserialize, Serialize};

/// A run of text with uniform styling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// Run text; may contain `\t`
    pub text: String,
    /// Bold flag
    pub bold: bool,
    /// Italic flag
    pub italic: bool,
}

impl Run {
    /// An unstyled run.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }

    /// A bold run.
    #[must_use]
    pub fn bold(text: impl Into<String>) -> Self {
        Run {
            bold: true,
            ..Run::plain(text)
        }
    }

    /// An italic run.
    #[must_use]
    pub fn italic(text: impl Into<String>) -> Self {
        Run {
            italic: true,
            ..Run::plain(text)
        }
    }
}

impl From<&StyledSegment> for Run {
    fn from(segment: &StyledSegment) -> Self {
        Run {
            text: segment.text.clone(),
            bold: segment.style.bold,
            italic: segment.style.italic,
        }
    }
}

/// One paragraph; an empty run list is a blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Runs in order
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Whether the paragraph is a blank separator.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.runs.is_empty()
    }

    /// Concatenated text of all runs.
    #[must_use]
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// Destination for assembled paragraphs.
pub trait ParagraphSink {
    /// Append one paragraph made of `runs`.
    fn append_paragraph(&mut self, runs: Vec<Run>);
}

/// The assembled shelf list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfDocument {
    paragraphs: Vec<Paragraph>,
}

impl ShelfDocument {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Paragraphs in order.
    #[must_use]
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Number of paragraphs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Whether the document has no paragraphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

impl ParagraphSink for ShelfDocument {
    fn append_paragraph(&mut self, runs: Vec<Run>) {
        self.paragraphs.push(Paragraph { runs });
    }
}

/// Formatted records of one bucket, in print order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Bucket the records belong to
    pub bucket: Bucket,
    /// Records in print order
    pub records: Vec<CitationRecord>,
}

impl Section {
    /// Create a section.
    #[must_use]
    pub fn new(bucket: Bucket, records: Vec<CitationRecord>) -> Self {
        Section { bucket, records }
    }
}

/// Header label for a bucket.
#[must_use]
pub fn bucket_header(labels: &Labels, bucket: Bucket) -> &str {
    match bucket {
        Bucket::Books => &labels.books_header,
        Bucket::Articles => &labels.articles_header,
        Bucket::Other => &labels.other_header,
    }
}

/// Assemble sections into `sink`.
///
/// Summary counts are taken from the section sizes. Sections are printed in
/// the order given; empty sections print nothing, not even their header.
pub fn assemble<S: ParagraphSink + ?Sized>(labels: &Labels, sections: &[Section], sink: &mut S) {
    let count = |bucket: Bucket| -> usize {
        sections
            .iter()
            .filter(|section| section.bucket == bucket)
            .map(|section| section.records.len())
            .sum()
    };
    let books = count(Bucket::Books);
    let articles = count(Bucket::Articles);
    let other = count(Bucket::Other);

    sink.append_paragraph(vec![Run::bold(labels.summary_line(
        books + articles + other,
        books,
        articles,
        other,
    ))]);
    sink.append_paragraph(Vec::new());

    for section in sections.iter().filter(|s| !s.records.is_empty()) {
        sink.append_paragraph(vec![Run::bold(bucket_header(labels, section.bucket))]);
        for record in &section.records {
            append_record(labels, record, sink);
        }
    }
}

/// Append the paragraphs of one entry, ending with a blank separator.
pub fn append_record<S: ParagraphSink + ?Sized>(
    labels: &Labels,
    record: &CitationRecord,
    sink: &mut S,
) {
    for line in record.main_lines.iter().filter(|l| !l.trim().is_empty()) {
        sink.append_paragraph(vec![Run::plain(line.as_str())]);
    }

    if let Some(segments) = record.styled_line.as_deref().filter(|s| !s.is_empty()) {
        sink.append_paragraph(segments.iter().map(Run::from).collect());
    }

    if !record.item_type_line.is_empty() {
        sink.append_paragraph(vec![Run::plain(record.item_type_line.as_str())]);
    }

    for note in &record.notes {
        sink.append_paragraph(vec![Run::italic(format!("\t{note}"))]);
    }

    if !record.other_sources.trim().is_empty() {
        sink.append_paragraph(vec![Run::plain(format!(
            "\t{}{}",
            labels.see_also, record.other_sources
        ))]);
    }

    sink.append_paragraph(Vec::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::citation::SegmentStyle;

    fn texts(document: &ShelfDocument) -> Vec<String> {
        document.paragraphs().iter().map(Paragraph::text).collect()
    }

    fn full_record() -> CitationRecord {
        CitationRecord {
            main_lines: vec!["II 1       Ч".to_string(), "   ".to_string()],
            styled_line: Some(vec![
                StyledSegment::new("  T. – В: ", SegmentStyle::PLAIN),
                StyledSegment::new("Journal", SegmentStyle::ITALIC),
            ]),
            item_type_line: "Item types: JOU".to_string(),
            notes: vec!["Бележка".to_string()],
            other_sources: "A, d1; ".to_string(),
        }
    }

    #[test]
    fn test_entry_paragraph_order() {
        let mut document = ShelfDocument::new();
        append_record(&Labels::default(), &full_record(), &mut document);

        assert_eq!(
            texts(&document),
            vec![
                "II 1       Ч",
                "  T. – В: Journal",
                "Item types: JOU",
                "\tБележка",
                "\tВж. и: A, d1; ",
                "",
            ]
        );
        let styled = &document.paragraphs()[1].runs;
        assert!(!styled[0].italic);
        assert!(styled[1].italic);
        assert!(document.paragraphs()[3].runs[0].italic);
        assert!(document.paragraphs()[5].is_blank());
    }

    #[test]
    fn test_empty_parts_omitted() {
        let mut document = ShelfDocument::new();
        let record = CitationRecord {
            main_lines: vec!["  Only".to_string()],
            styled_line: Some(Vec::new()),
            other_sources: "  ".to_string(),
            ..CitationRecord::default()
        };
        append_record(&Labels::default(), &record, &mut document);
        assert_eq!(texts(&document), vec!["  Only", ""]);
    }

    #[test]
    fn test_sections_and_summary() {
        let record = |title: &str| CitationRecord {
            main_lines: vec![title.to_string()],
            ..CitationRecord::default()
        };
        let sections = vec![
            Section::new(Bucket::Books, vec![record("b1"), record("b2")]),
            Section::new(Bucket::Articles, Vec::new()),
            Section::new(Bucket::Other, vec![record("o1")]),
        ];
        let mut document = ShelfDocument::new();
        assemble(&Labels::english(), &sections, &mut document);

        assert_eq!(
            texts(&document),
            vec![
                "Total records: 3 (Books: 2, Articles: 0, Other: 1)",
                "",
                "BOOKS",
                "b1",
                "",
                "b2",
                "",
                "OTHER",
                "o1",
                "",
            ]
        );
        assert!(document.paragraphs()[0].runs[0].bold);
        assert!(document.paragraphs()[2].runs[0].bold);
    }

    #[test]
    fn test_empty_input_has_only_summary() {
        let mut document = ShelfDocument::new();
        assemble(&Labels::default(), &[], &mut document);
        assert_eq!(document.len(), 2);
        assert_eq!(
            document.paragraphs()[0].text(),
            "Общо записи: 0 (Книги: 0, Статии: 0, Други: 0)"
        );
    }
}
