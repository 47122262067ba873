use super::{finished_error, DocumentWriter};
use crate::document::ShelfDocument;
use crate::error::Result;
use std::io::Write;

/// JSON writer: the document's serde representation, pretty-printed.
///
/// ```
/// use bibshelf::writers::{DocumentWriter, JsonWriter};
/// use bibshelf::ShelfDocument;
///
/// let mut buffer = Vec::new();
/// let mut writer = JsonWriter::new(&mut buffer);
/// writer.write_document(&ShelfDocument::new())?;
/// writer.finish()?;
///
/// let value: serde_json::Value = serde_json::from_slice(&buffer)?;
/// assert!(value["paragraphs"].as_array().is_some_and(Vec::is_empty));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct JsonWriter<W: Write> {
    writer: W,
    documents_written: usize,
    finished: bool,
}

impl<W: Write> JsonWriter<W> {
    /// Create a new JSON writer.
    pub fn new(writer: W) -> Self {
        JsonWriter {
            writer,
            documents_written: 0,
            finished: false,
        }
    }
}

impl<W: Write + std::fmt::Debug> DocumentWriter for JsonWriter<W> {
    fn write_document(&mut self, document: &ShelfDocument) -> Result<()> {
        if self.finished {
            return Err(finished_error());
        }
        serde_json::to_writer_pretty(&mut self.writer, document)?;
        self.writer.write_all(b"\n")?;
        self.documents_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }

    fn documents_written(&self) -> usize {
        self.documents_written
    }
}
