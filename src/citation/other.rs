//! Layout for material that is neither book nor article.

use super::{responsibility, CitationFormatter, CitationRecord};
use crate::entry::{field, Entry};
use crate::item_type::{ItemTypeSet, GOI};

pub(super) fn format(
    _formatter: &CitationFormatter,
    entry: &Entry,
    types: &ItemTypeSet,
    record: &mut CitationRecord,
) {
    // Classified entries never reach here with GOI; direct callers can.
    if !types.contains(GOI) {
        record.push_line(responsibility(entry));
    }

    let mut line = format!("  {}", entry.extract_first(field::TITLE));
    let year = entry.extract_first(field::YEAR);
    if !year.is_empty() {
        line.push_str(&format!(" ({year})"));
    }
    record.push_line(line);
}

#[cfg(test)]
mod tests {
    use crate::{CitationFormatter, Entry, Layout};

    #[test]
    fn test_other_layout() {
        let entry = Entry::builder("misc", "o1")
            .field("item_type", "MAP")
            .field("author", "Doe, John and Roe, Jane")
            .field("title", "Карта на България")
            .field("year", "1936")
            .build();
        let record = CitationFormatter::default().format(&entry, Layout::Other);

        assert_eq!(
            record.main_lines,
            vec!["John Doe, Jane Roe", "  Карта на България (1936)"]
        );
        assert!(record.styled_line.is_none());
        assert_eq!(record.item_type_line, "Item types: MAP");
    }

    #[test]
    fn test_other_without_year_or_responsibility() {
        let entry = Entry::builder("misc", "o2").field("title", "Плакат").build();
        let record = CitationFormatter::default().format(&entry, Layout::Other);
        assert_eq!(record.main_lines, vec!["  Плакат"]);
    }

    #[test]
    fn test_yearbook_code_drops_responsibility() {
        let entry = Entry::builder("misc", "o3")
            .field("item_type", "GOI")
            .field("author", "Doe, John")
            .field("title", "Сборник")
            .build();
        let record = CitationFormatter::default().format(&entry, Layout::Other);
        assert_eq!(record.main_lines, vec!["  Сборник"]);
    }
}
