use super::{finished_error, DocumentWriter};
use crate::document::ShelfDocument;
use crate::error::Result;
use std::io::Write;

/// Plain text writer: one line per paragraph, run styling dropped.
#[derive(Debug)]
pub struct TextWriter<W: Write> {
    writer: W,
    documents_written: usize,
    finished: bool,
}

impl<W: Write> TextWriter<W> {
    /// Create a new text writer.
    pub fn new(writer: W) -> Self {
        TextWriter {
            writer,
            documents_written: 0,
            finished: false,
        }
    }
}

impl<W: Write + std::fmt::Debug> DocumentWriter for TextWriter<W> {
    fn write_document(&mut self, document: &ShelfDocument) -> Result<()> {
        if self.finished {
            return Err(finished_error());
        }
        for paragraph in document.paragraphs() {
            for run in &paragraph.runs {
                self.writer.write_all(run.text.as_bytes())?;
            }
            self.writer.write_all(b"\n")?;
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ParagraphSink, Run};
    use crate::BibshelfError;

    #[test]
    fn test_runs_concatenated_per_line() {
        let mut document = ShelfDocument::new();
        document.append_paragraph(vec![Run::plain("  T. – В: "), Run::italic("J")]);
        document.append_paragraph(Vec::new());
        document.append_paragraph(vec![Run::italic("\tnote")]);

        let mut buffer = Vec::new();
        let mut writer = TextWriter::new(&mut buffer);
        writer.write_document(&document).unwrap();
        writer.finish().unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "  T. – В: J\n\n\tnote\n");
    }

    #[test]
    fn test_write_after_finish_fails() {
        let mut writer = TextWriter::new(Vec::new());
        writer.finish().unwrap();
        let result = writer.write_document(&ShelfDocument::new());
        assert!(matches!(result, Err(BibshelfError::WriterError(_))));
    }
}
