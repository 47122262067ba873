//! Book layout: signature line, sort word, full ISBD description.

use super::isbd::{IsbdLine, PhysicalDescription, PublicationInfo};
use super::{responsibility, CitationFormatter, CitationRecord, SIGNATURE_GAP};
use crate::entry::{field, Entry};
use crate::item_type::{ItemTypeSet, CDD, GOI};

pub(super) fn format(
    formatter: &CitationFormatter,
    entry: &Entry,
    types: &ItemTypeSet,
    record: &mut CitationRecord,
) {
    let is_yearbook = types.contains(GOI);

    record.push_line(format!(
        "{}{SIGNATURE_GAP}{}",
        entry.extract_first(field::MAIN_SIG),
        entry.extract_first(field::DEP_SIG)
    ));
    if !is_yearbook {
        record.push_line(formatter.sort_word(entry, types));
    }

    let mut title = entry.extract_first(field::TITLE).to_string();
    if types.contains(CDD) {
        title.push_str(&formatter.labels.cd_rom);
    }

    let responsibility = if is_yearbook {
        String::new()
    } else {
        responsibility(entry)
    };

    let publication = PublicationInfo::new(
        entry.extract_first_of(&[field::ADDRESS, field::PLACE]),
        entry.extract_first(field::PUBLISHER),
        entry.extract_first(field::YEAR),
    );
    let physical = PhysicalDescription::new(
        entry.extract_first_of(&[field::PAGE_COUNT, field::EXTENT]),
        entry.extract_first_of(&[field::ILLUSTRATIONS, field::DIMENSIONS]),
    );

    let mut line = IsbdLine::new("  ");
    line.append("", &title)
        .append(" : ", entry.extract_first_of(&[field::SUBTITLE, field::SUBSTITLE]))
        .append(" / ", &responsibility)
        .area(&entry.extract_joined_unique(field::EDITION, "; "))
        .area(entry.extract_first(field::BOOK_INFO))
        .area(&publication.format_statement())
        .area(&physical.format_statement())
        .wrap(". – (", entry.extract_first(field::SERIES), ")")
        .append(". – ISBN ", entry.extract_first(field::ISBN));

    record.push_line(line.into_string());
}

#[cfg(test)]
mod tests {
    use crate::{CitationFormatter, Entry, Layout};

    fn format(entry: &Entry) -> Vec<String> {
        CitationFormatter::default()
            .format(entry, Layout::Book)
            .main_lines
    }

    #[test]
    fn test_full_book() {
        let entry = Entry::builder("book", "k")
            .field("main_sig", "II 12345")
            .field("dep_sig", "Ч 3")
            .field("sort_word", "Вазов")
            .field("responsibility", "Вазов, Иван")
            .field("title", "Под игото")
            .field("subtitle", "роман из живота на българите в предвечерието на освобождението")
            .fields("edition", &["7 изд.", "7 изд."])
            .field("address", "София")
            .field("publisher", "Български писател")
            .field("year", "1983")
            .field("book_info", "с предговор")
            .field("page_count", "448 с.")
            .field("dimensions", "20 см")
            .field("series", "Библиотека Славянска")
            .field("isbn", "954-01-0001-1")
            .field("item_type", "KNG")
            .build();

        let lines = format(&entry);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "II 12345       Ч 3");
        assert_eq!(lines[1], "Вазов");
        assert_eq!(
            lines[2],
            "  Под игото : роман из живота на българите в предвечерието на освобождението \
             / Иван Вазов. – 7 изд.. – с предговор. – София : Български писател, 1983. – 448 с. ; 20 см. \
             – (Библиотека Славянска). – ISBN 954-01-0001-1"
        );
    }

    #[test]
    fn test_minimal_book_has_only_title_line() {
        let entry = Entry::builder("book", "k")
            .field("item_type", "KNG")
            .field("title", "Sample")
            .build();
        assert_eq!(format(&entry), vec!["  Sample"]);
    }

    #[test]
    fn test_author_fallback_and_year() {
        let entry = Entry::builder("book", "k")
            .field("item_type", "KNG")
            .field("title", "Sample")
            .field("author", "Doe, John")
            .field("year", "2020")
            .build();
        let lines = format(&entry);
        assert_eq!(lines[0], "Doe, John");
        assert_eq!(lines[1], "  Sample / John Doe. – 2020");
    }

    #[test]
    fn test_cd_rom_tag() {
        let entry = Entry::builder("book", "k")
            .field("item_type", "CDD")
            .field("title", "Encyclopedia")
            .build();
        assert_eq!(format(&entry), vec!["  Encyclopedia [CD-ROM]"]);
    }

    #[test]
    fn test_goi_suppresses_sort_word_and_responsibility() {
        let entry = Entry::builder("book", "k")
            .fields("item_type", &["KNG", "GOI"])
            .field("sort_word", "Годишник")
            .field("responsibility", "Doe, John and Smith, Jane")
            .field("title", "Годишник на СУ")
            .build();
        assert_eq!(format(&entry), vec!["  Годишник на СУ"]);
    }

    #[test]
    fn test_multi_author_sort_word() {
        let entry = Entry::builder("book", "k")
            .field("item_type", "KNG")
            .field("sort_word", "Doe")
            .field("responsibility", "Doe, John and Smith, Jane")
            .field("title", "T")
            .build();
        let lines = format(&entry);
        assert_eq!(lines[0], "Doe и др.");
        assert_eq!(lines[1], "  T / John Doe, Jane Smith");
    }

    #[test]
    fn test_physical_without_extent_and_place_fallback() {
        let entry = Entry::builder("book", "k")
            .field("item_type", "KNG")
            .field("title", "T")
            .field("place", "Пловдив")
            .field("illustrations", "ил.")
            .build();
        assert_eq!(format(&entry), vec!["  T. – Пловдив. – ил."]);
    }
}
