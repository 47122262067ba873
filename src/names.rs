//! Responsibility statement and author name normalization.
//!
//! Catalogue exports store names inverted (`Last, First`) and separate several
//! names with the word `and` or with `;`. Citations print names in direct order
//! joined by commas.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Separator between names: the word `and` or `;`, any case, optional whitespace.
    static ref NAME_SEPARATOR: Regex = Regex::new(r"(?i)\s*(?:\band\b|;)\s*").unwrap();
}

/// Split a responsibility statement into trimmed, non-empty name tokens.
///
/// ```
/// use bibshelf::names::split_names;
///
/// assert_eq!(split_names("Doe, John and Smith, Jane"), vec!["Doe, John", "Smith, Jane"]);
/// assert_eq!(split_names("Петров, Петър; Иванов, Иван"), vec!["Петров, Петър", "Иванов, Иван"]);
/// ```
#[must_use]
pub fn split_names(raw: &str) -> Vec<&str> {
    NAME_SEPARATOR
        .split(raw)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Reorder one `Last, First` name into `First Last`.
///
/// Only a name with exactly one comma is reordered. Names without a comma and
/// multi-part names such as `Last, First, Jr.` are returned trimmed.
///
/// ```
/// use bibshelf::names::normalize_name;
///
/// assert_eq!(normalize_name("Doe, John"), "John Doe");
/// assert_eq!(normalize_name(" Doe, John, Jr. "), "Doe, John, Jr.");
/// assert_eq!(normalize_name("John Doe"), "John Doe");
/// ```
#[must_use]
pub fn normalize_name(name: &str) -> String {
    let parts: Vec<&str> = name.split(',').map(str::trim).collect();
    if let [last, first] = parts.as_slice() {
        format!("{first} {last}")
    } else {
        name.trim().to_string()
    }
}

/// Normalize every name of a responsibility statement and join with `", "`.
///
/// ```
/// use bibshelf::names::format_responsibility;
///
/// assert_eq!(
///     format_responsibility("Doe, John AND Smith, Jane"),
///     "John Doe, Jane Smith"
/// );
/// assert_eq!(format_responsibility(""), "");
/// ```
#[must_use]
pub fn format_responsibility(raw: &str) -> String {
    split_names(raw)
        .into_iter()
        .map(normalize_name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the filing heading for an entry.
///
/// When the responsibility statement names more than one person and the entry
/// is not a yearbook, `et_al` is appended to the base sort word.
#[must_use]
pub fn sort_word_with_et_al(
    base: &str,
    raw_responsibility: &str,
    is_yearbook: bool,
    et_al: &str,
) -> String {
    if !is_yearbook && split_names(raw_responsibility).len() > 1 {
        format!("{base}{et_al}")
    } else {
        base.to_string()
    }
}
