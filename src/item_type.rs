//! Item type codes attached to catalogue entries.
//!
//! Every entry carries zero or more `item_type` tags. The first tag (with its
//! original multiplicity) is the *primary* type used for classification; the
//! deduplicated list is what gets printed in the item-type summary line.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Book.
pub const KNG: &str = "KNG";
/// Yearbook or annual.
pub const GOI: &str = "GOI";
/// CD-ROM.
pub const CDD: &str = "CDD";
/// Journal article.
pub const JOU: &str = "JOU";
/// Short article.
pub const KRA: &str = "KRA";
/// Generic article.
pub const ARTICLE: &str = "ARTICLE";
/// Other periodical contribution.
pub const DRU: &str = "DRU";
/// Newspaper article.
pub const NSP: &str = "NSP";

/// Codes whose primary occurrence makes an entry a book.
pub const BOOK_CODES: &[&str] = &[KNG, CDD];

/// Codes whose primary occurrence makes an entry an article.
pub const ARTICLE_CODES: &[&str] = &[JOU, KRA, ARTICLE, DRU, NSP];

/// Ordered, uppercased item type codes of one entry.
///
/// Most entries carry one or two codes, so they are stored inline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTypeSet {
    codes: SmallVec<[String; 2]>,
}

impl ItemTypeSet {
    /// Build a set from raw field values, uppercasing and trimming each code.
    ///
    /// Blank values are kept as tokens: an entry whose first `item_type` is
    /// empty has an empty primary code and matches no code table.
    #[must_use]
    pub fn from_values<S: AsRef<str>>(values: &[S]) -> Self {
        ItemTypeSet {
            codes: values
                .iter()
                .map(|v| v.as_ref().trim().to_uppercase())
                .collect(),
        }
    }

    /// All codes in their original order, duplicates included.
    #[must_use]
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// Number of tokens, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the entry has no item types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The first code, if any.
    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        self.codes.first().map(String::as_str)
    }

    /// Whether any token equals `code`.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    /// Whether the primary code is one of `set`.
    #[must_use]
    pub fn primary_in(&self, set: &[&str]) -> bool {
        self.primary().is_some_and(|p| set.contains(&p))
    }

    /// Distinct codes in first-seen order.
    #[must_use]
    pub fn unique(&self) -> Vec<&str> {
        let mut unique: Vec<&str> = Vec::with_capacity(self.codes.len());
        for code in &self.codes {
            if !unique.contains(&code.as_str()) {
                unique.push(code);
            }
        }
        unique
    }

    /// Whether the entry is a yearbook and nothing else.
    #[must_use]
    pub fn is_yearbook_only(&self) -> bool {
        self.unique() == [GOI]
    }

    /// Whether the entry is a yearbook part (`GOI` alongside other tokens).
    #[must_use]
    pub fn is_yearbook_part(&self) -> bool {
        self.contains(GOI) && self.codes.len() > 1
    }

    /// Summary line listing the distinct non-blank codes, or an empty string.
    ///
    /// ```
    /// use bibshelf::ItemTypeSet;
    ///
    /// let types = ItemTypeSet::from_values(&["kng", "CDD", "KNG"]);
    /// assert_eq!(types.summary_line("Item types: "), "Item types: KNG, CDD");
    /// assert_eq!(ItemTypeSet::default().summary_line("Item types: "), "");
    /// ```
    #[must_use]
    pub fn summary_line(&self, prefix: &str) -> String {
        let listed: Vec<&str> = self.unique().into_iter().filter(|c| !c.is_empty()).collect();
        if listed.is_empty() {
            String::new()
        } else {
            format!("{prefix}{}", listed.join(", "))
        }
    }
}
