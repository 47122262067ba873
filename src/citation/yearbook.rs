//! Yearbook layout.
//!
//! Yearbook records are catalogued inconsistently: the `edition` field holds
//! either a publication statement or an extent. A value containing the page
//! marker `с.` is read as extent, anything else as the publication statement.

use super::isbd::{IsbdLine, PublicationInfo};
use super::{raw_responsibility, CitationFormatter, CitationRecord};
use crate::entry::{field, Entry};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PAGE_MARKER: Regex = Regex::new(r"(?i)с\.").unwrap();
}

/// How a yearbook's `edition` value is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditionReading<'a> {
    Absent,
    Publication(&'a str),
    Extent(&'a str),
}

fn read_edition(value: &str) -> EditionReading<'_> {
    if value.is_empty() {
        EditionReading::Absent
    } else if PAGE_MARKER.is_match(value) {
        EditionReading::Extent(value)
    } else {
        EditionReading::Publication(value)
    }
}

pub(super) fn format(formatter: &CitationFormatter, entry: &Entry, record: &mut CitationRecord) {
    record.push_line(entry.extract_first(field::MAIN_SIG));

    let edition = read_edition(entry.extract_first(field::EDITION));

    let mut line = IsbdLine::new(entry.extract_first(field::TITLE));
    line.append(" : ", entry.extract_first_of(&[field::SUBTITLE, field::SUBSTITLE]))
        .append(" / ", raw_responsibility(entry));

    match edition {
        EditionReading::Publication(statement) => {
            line.area(statement);
        },
        EditionReading::Absent | EditionReading::Extent(_) => {
            let publication = PublicationInfo::new(
                entry.extract_first_of(&[field::ADDRESS, field::PLACE]),
                entry.extract_first(field::PUBLISHER),
                entry.extract_first(field::YEAR),
            );
            line.area(&publication.format_statement());
        },
    }

    let extent = match edition {
        EditionReading::Extent(extent) => extent,
        _ => entry.extract_first_of(&[field::PAGE_COUNT, field::EXTENT]),
    };
    line.area(extent);

    let line = line.into_string();
    // A record without title still prints whatever areas it has.
    record.push_line(line.trim_start_matches(". – ").to_string());

    let persons = entry.extract_unique(field::ABOUT_PERSON);
    if !persons.is_empty() {
        record.push_line(format!(
            "{}{}",
            formatter.labels.about_persons,
            persons.join(", ")
        ));
    }
}
