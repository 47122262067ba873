//! "See also" cross-reference merging.
//!
//! An entry lists its cross-referenced sources in repeated `also_source` fields
//! and their descriptions separately in `also_description` fields, where one
//! field may hold several `;`-separated fragments. The two lists are paired
//! positionally: each source takes the next fragment, and the last source takes
//! every fragment left over.

use serde::{Deserialize, Serialize};

/// Trailer appended after the joined cross-reference list.
///
/// Two catalogue export generations disagree on the trailing space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlsoSourceTrailer {
    /// `"; "` after the last pair
    #[default]
    SemicolonSpace,
    /// `";"` after the last pair
    Semicolon,
}

impl AlsoSourceTrailer {
    /// The literal trailer text.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SemicolonSpace => "; ",
            Self::Semicolon => ";",
        }
    }
}

/// Flatten captured description values into a fragment pool.
///
/// Every value is split on `;`, fragments are trimmed, and empty fragments are
/// dropped.
///
/// ```
/// use bibshelf::also_source::flatten_descriptions;
///
/// let values = vec!["d1; d2".to_string(), " ;d3".to_string()];
/// assert_eq!(flatten_descriptions(&values), vec!["d1", "d2", "d3"]);
/// ```
#[must_use]
pub fn flatten_descriptions<S: AsRef<str>>(values: &[S]) -> Vec<&str> {
    values
        .iter()
        .flat_map(|value| value.as_ref().split(';'))
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Pair sources with description fragments.
///
/// Returns one string per source. Sources past the end of the fragment pool get
/// no description; the last source absorbs all remaining fragments joined by
/// `;`. No sources means no pairs, whatever descriptions exist.
///
/// ```
/// use bibshelf::also_source::merge_pairs;
///
/// let pairs = merge_pairs(&["A", "B", "C"], &["d1", "d2", "d3", "d4"]);
/// assert_eq!(pairs, vec!["A, d1", "B, d2", "C, d3;d4"]);
/// ```
#[must_use]
pub fn merge_pairs<S: AsRef<str>, D: AsRef<str>>(sources: &[S], fragments: &[D]) -> Vec<String> {
    let mut pairs = Vec::with_capacity(sources.len());
    let mut cursor = 0;

    for (i, source) in sources.iter().enumerate() {
        let description = if cursor >= fragments.len() {
            String::new()
        } else if i + 1 == sources.len() {
            let rest = fragments[cursor..]
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .join(";");
            cursor = fragments.len();
            rest
        } else {
            cursor += 1;
            fragments[cursor - 1].as_ref().to_string()
        };

        pairs.push(pair_text(source.as_ref().trim(), &description));
    }

    pairs
}

/// Join pairs into the single printed line, or an empty string when there are none.
#[must_use]
pub fn join_pairs(pairs: &[String], trailer: AlsoSourceTrailer) -> String {
    if pairs.is_empty() {
        String::new()
    } else {
        format!("{}{}", pairs.join(";"), trailer.as_str())
    }
}

/// Merge raw `also_source` and `also_description` values into the printed line.
#[must_use]
pub fn merge_also_sources<S: AsRef<str>, D: AsRef<str>>(
    sources: &[S],
    descriptions: &[D],
    trailer: AlsoSourceTrailer,
) -> String {
    let fragments = flatten_descriptions(descriptions);
    join_pairs(&merge_pairs(sources, &fragments), trailer)
}

fn pair_text(source: &str, description: &str) -> String {
    let separator = if description.is_empty()
        || description.starts_with(',')
        || description.starts_with('(')
    {
        ""
    } else {
        ", "
    };
    format!("{source}{separator}{description}").trim().to_string()
}
