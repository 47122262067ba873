//! Configuration options for shelf-list generation.
//!
//! This module provides [`ShelfConfig`], which controls the printed labels, the
//! cross-reference trailer, run font size and whether entries are formatted in
//! parallel, and [`Labels`], the localizable text fragments used by the
//! formatter and document assembler.
//!
//! Configuration can be built in code or loaded from JSON; every field is
//! optional in the JSON form.
//!
//! ```
//! use bibshelf::ShelfConfig;
//!
//! let config = ShelfConfig::from_json_str(r#"{ "font_size": 22, "parallel": false }"#)?;
//! assert_eq!(config.font_size, 22);
//! assert_eq!(config.labels.books_header, "КНИГИ");
//! # Ok::<(), bibshelf::BibshelfError>(())
//! ```

use crate::also_source::AlsoSourceTrailer;
use crate::error::{BibshelfError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Localizable text used in formatted output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Summary line template; `{total}`, `{books}`, `{articles}`, `{other}` are substituted
    pub summary: String,
    /// Header above the books bucket
    pub books_header: String,
    /// Header above the articles bucket
    pub articles_header: String,
    /// Header above the other bucket
    pub other_header: String,
    /// Prefix of the cross-reference line
    pub see_also: String,
    /// Prefix of the item type summary line
    pub item_types: String,
    /// Suffix added to the sort word for multi-author works
    pub et_al: String,
    /// Separator introducing the host source of an article
    pub source_clause: String,
    /// Separator introducing an issue number
    pub issue: String,
    /// Prefix of the persons-discussed line of yearbooks
    pub about_persons: String,
    /// Tag appended to CD-ROM titles
    pub cd_rom: String,
    /// Leading boilerplate stripped from notes, matched case-insensitively
    pub note_prefix: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels::bulgarian()
    }
}

impl Labels {
    /// Labels of the Bulgarian library catalogue (default).
    #[must_use]
    pub fn bulgarian() -> Self {
        Labels {
            summary: "Общо записи: {total} (Книги: {books}, Статии: {articles}, Други: {other})"
                .to_string(),
            books_header: "КНИГИ".to_string(),
            articles_header: "СТАТИИ".to_string(),
            other_header: "ДРУГИ".to_string(),
            see_also: "Вж. и: ".to_string(),
            item_types: "Item types: ".to_string(),
            et_al: " и др.".to_string(),
            source_clause: ". – В: ".to_string(),
            issue: ", бр. ".to_string(),
            about_persons: "Имена на лица, за които става дума: ".to_string(),
            cd_rom: " [CD-ROM]".to_string(),
            note_prefix: "Съдържа и:".to_string(),
        }
    }

    /// English labels.
    ///
    /// The note prefix stays Bulgarian because it comes from catalogue data.
    #[must_use]
    pub fn english() -> Self {
        Labels {
            summary: "Total records: {total} (Books: {books}, Articles: {articles}, Other: {other})"
                .to_string(),
            books_header: "BOOKS".to_string(),
            articles_header: "ARTICLES".to_string(),
            other_header: "OTHER".to_string(),
            see_also: "See also: ".to_string(),
            et_al: " et al.".to_string(),
            source_clause: ". – In: ".to_string(),
            issue: ", no. ".to_string(),
            about_persons: "Persons discussed: ".to_string(),
            ..Labels::bulgarian()
        }
    }

    /// Render the summary line.
    ///
    /// ```
    /// use bibshelf::Labels;
    ///
    /// assert_eq!(
    ///     Labels::english().summary_line(5, 2, 2, 1),
    ///     "Total records: 5 (Books: 2, Articles: 2, Other: 1)"
    /// );
    /// ```
    #[must_use]
    pub fn summary_line(&self, total: usize, books: usize, articles: usize, other: usize) -> String {
        self.summary
            .replace("{total}", &total.to_string())
            .replace("{books}", &books.to_string())
            .replace("{articles}", &articles.to_string())
            .replace("{other}", &other.to_string())
    }
}

/// Configuration for shelf-list generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfConfig {
    /// Printed labels
    pub labels: Labels,
    /// Trailer after the cross-reference list
    pub also_source_trailer: AlsoSourceTrailer,
    /// Run font size in half-points (24 = 12pt)
    pub font_size: u32,
    /// Format entries on the rayon thread pool
    pub parallel: bool,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        ShelfConfig {
            labels: Labels::default(),
            also_source_trailer: AlsoSourceTrailer::default(),
            font_size: 24,
            parallel: true,
        }
    }
}

impl ShelfConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the labels.
    #[must_use]
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Set the cross-reference trailer.
    #[must_use]
    pub fn with_also_source_trailer(mut self, trailer: AlsoSourceTrailer) -> Self {
        self.also_source_trailer = trailer;
        self
    }

    /// Set the run font size in half-points.
    #[must_use]
    pub fn with_font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Enable or disable parallel formatting.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check that the configuration values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`BibshelfError::InvalidConfig`] if the font size is zero.
    pub fn validate(&self) -> Result<()> {
        if self.font_size == 0 {
            return Err(BibshelfError::InvalidConfig(
                "font_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the values are invalid.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ShelfConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading configuration from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
