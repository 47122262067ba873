//! Writers that render a [`ShelfDocument`] to an output format.
//!
//! All writers implement [`DocumentWriter`] and follow the same pattern:
//! create the writer over any [`std::io::Write`] destination, call
//! [`write_document`](DocumentWriter::write_document), then
//! [`finish`](DocumentWriter::finish) to flush.
//!
//! | Format | Writer | Output |
//! |--------|--------|--------|
//! | text   | [`TextWriter`] | one line per paragraph |
//! | json   | [`JsonWriter`] | serde serialization of the document |
//! | wordml | [`WordMlWriter`] | WordprocessingML `w:document` |
//!
//! # Example
//!
//! ```
//! use bibshelf::writers::{DocumentWriter, TextWriter};
//! use bibshelf::{build_shelf_list, ShelfConfig};
//!
//! let document = build_shelf_list("@book{b,\n title = {Sample}\n}", &ShelfConfig::default());
//!
//! let mut buffer = Vec::new();
//! let mut writer = TextWriter::new(&mut buffer);
//! writer.write_document(&document)?;
//! writer.finish()?;
//!
//! assert!(String::from_utf8_lossy(&buffer).contains("Sample"));
//! # Ok::<(), bibshelf::BibshelfError>(())
//! ```

mod json;
mod text;
mod wordml;

pub use json::JsonWriter;
pub use text::TextWriter;
pub use wordml::WordMlWriter;

use crate::config::ShelfConfig;
use crate::document::ShelfDocument;
use crate::error::{BibshelfError, Result};
use std::io::Write;
use std::str::FromStr;

/// Trait for writers that serialize a shelf document.
///
/// # Important: Always Call `finish`
///
/// Writers may buffer output; dropping one without calling
/// [`finish`](Self::finish) may lose data.
pub trait DocumentWriter: std::fmt::Debug {
    /// Write a complete document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying output fails, or if
    /// the writer was already finished.
    fn write_document(&mut self, document: &ShelfDocument) -> Result<()>;

    /// Flush buffered output. The writer accepts no further documents.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing the underlying output fails.
    fn finish(&mut self) -> Result<()>;

    /// Number of documents written so far.
    fn documents_written(&self) -> usize;
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text
    #[default]
    Text,
    /// JSON
    Json,
    /// WordprocessingML
    WordMl,
}

impl FromStr for OutputFormat {
    type Err = BibshelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "wordml" | "xml" => Ok(OutputFormat::WordMl),
            other => Err(BibshelfError::InvalidArgument(format!(
                "unknown output format '{other}' (expected text, json or wordml)"
            ))),
        }
    }
}

/// Create a boxed writer for `format` over `output`.
pub fn writer_for<'a, W: Write + std::fmt::Debug + 'a>(
    format: OutputFormat,
    output: W,
    config: &ShelfConfig,
) -> Box<dyn DocumentWriter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextWriter::new(output)),
        OutputFormat::Json => Box::new(JsonWriter::new(output)),
        OutputFormat::WordMl => Box::new(WordMlWriter::new(output, config.font_size)),
    }
}

fn finished_error() -> BibshelfError {
    BibshelfError::WriterError("cannot write to a finished writer".to_string())
}
