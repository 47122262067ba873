//! Article layout: the host source is a separate italic segment.

use super::{
    responsibility, CitationFormatter, CitationRecord, SegmentLine, SegmentStyle, SIGNATURE_GAP,
};
use crate::entry::{field, Entry};
use crate::item_type::{ItemTypeSet, GOI};

pub(super) fn format(
    formatter: &CitationFormatter,
    entry: &Entry,
    types: &ItemTypeSet,
    record: &mut CitationRecord,
) {
    let labels = &formatter.labels;
    let is_yearbook = types.contains(GOI);

    // Yearbook contributions carry the shelf signature of their volume.
    if types.len() == 2 && is_yearbook {
        record.push_line(format!(
            "{}{SIGNATURE_GAP}{}",
            entry.extract_first(field::MAIN_SIG),
            entry.extract_first(field::DEP_SIG)
        ));
    }
    if !is_yearbook {
        record.push_line(formatter.sort_word(entry, types));
    }

    let column = entry.extract_first(field::COLUMN);
    let source = entry.extract_first(field::SOURCE);
    let city = entry.extract_first(field::JOURNAL_CITY);
    let issue = entry.extract_first(field::ISSUE);
    let year = entry.extract_first(field::YEAR);
    let pages = entry.extract_first(field::ART_PAGES);

    let mut line = SegmentLine::default();
    line.plain("  ").plain(entry.extract_first(field::TITLE));
    if !column.is_empty() {
        line.plain(&format!(". ({column})"));
    }
    if !is_yearbook {
        let responsibility = responsibility(entry);
        if !responsibility.is_empty() {
            line.plain(" / ").plain(&responsibility);
        }
    }
    if !source.is_empty() {
        line.plain(&labels.source_clause).push(source, SegmentStyle::ITALIC);
    }
    if !city.is_empty() {
        line.plain(&format!(" ({city})"));
    }
    if !issue.is_empty() {
        line.plain(&labels.issue).plain(issue);
    }
    if !year.is_empty() {
        line.plain(&format!(", ({year})"));
    }
    if !pages.is_empty() {
        line.plain(", ").plain(pages);
    }

    record.styled_line = Some(line.into_segments());
}

#[cfg(test)]
mod tests {
    use crate::{CitationFormatter, Entry, Layout, SegmentStyle, StyledSegment};

    fn plain(text: &str) -> StyledSegment {
        StyledSegment::new(text, SegmentStyle::PLAIN)
    }

    fn italic(text: &str) -> StyledSegment {
        StyledSegment::new(text, SegmentStyle::ITALIC)
    }

    #[test]
    fn test_source_is_separate_italic_segment() {
        let entry = Entry::builder("article", "a1")
            .field("item_type", "JOU")
            .field("sort_word", "Петров")
            .field("responsibility", "Петров, Петър")
            .field("title", "Нови находки")
            .field("source", "Археология")
            .field("journal_city", "София")
            .field("issue", "3")
            .field("year", "1998")
            .field("art_pages", "с. 12-18")
            .build();
        let record = CitationFormatter::default().format(&entry, Layout::Article);

        assert_eq!(record.main_lines, vec!["Петров"]);
        assert_eq!(
            record.styled_line,
            Some(vec![
                plain("  Нови находки / Петър Петров. – В: "),
                italic("Археология"),
                plain(" (София), бр. 3, (1998), с. 12-18"),
            ])
        );
    }

    #[test]
    fn test_column_and_no_source() {
        let entry = Entry::builder("article", "a2")
            .field("item_type", "NSP")
            .field("title", "Хроника")
            .field("column", "Култура")
            .build();
        let record = CitationFormatter::default().format(&entry, Layout::Article);

        assert!(record.main_lines.is_empty());
        assert_eq!(record.styled_line, Some(vec![plain("  Хроника. (Култура)")]));
    }

    #[test]
    fn test_yearbook_part_has_signature_and_no_responsibility() {
        let entry = Entry::builder("article", "a3")
            .fields("item_type", &["JOU", "GOI"])
            .field("main_sig", "III 77")
            .field("dep_sig", "Г")
            .field("sort_word", "Иванов")
            .field("responsibility", "Иванов, Иван")
            .field("title", "Доклад")
            .build();
        let record = CitationFormatter::default().format(&entry, Layout::Article);

        assert_eq!(record.main_lines, vec!["III 77       Г"]);
        assert_eq!(record.styled_line, Some(vec![plain("  Доклад")]));
    }

    #[test]
    fn test_english_labels() {
        let config = crate::ShelfConfig::new().with_labels(crate::Labels::english());
        let entry = Entry::builder("article", "a4")
            .field("item_type", "JOU")
            .field("title", "Findings")
            .field("source", "Antiquity")
            .field("issue", "4")
            .build();
        let record = CitationFormatter::from_config(&config).format(&entry, Layout::Article);
        let text: String = record
            .styled_line
            .unwrap_or_default()
            .into_iter()
            .map(|s| s.text)
            .collect();
        assert_eq!(text, "  Findings. – In: Antiquity, no. 4");
    }
}
