//! WordprocessingML output.
//!
//! Produces a single `w:document` part. Each paragraph becomes a `w:p`, each
//! run a `w:r` carrying `w:b`/`w:i` and the configured `w:sz`. Tab characters
//! inside run text become `w:tab` elements.

use super::{finished_error, DocumentWriter};
use crate::document::{Paragraph, Run, ShelfDocument};
use crate::error::Result;
use quick_xml::escape::escape;
use std::fmt::Write as _;
use std::io::Write;

const WORDML_NAMESPACE: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// WordprocessingML writer.
#[derive(Debug)]
pub struct WordMlWriter<W: Write> {
    writer: W,
    font_size: u32,
    documents_written: usize,
    finished: bool,
}

impl<W: Write> WordMlWriter<W> {
    /// Create a writer using `font_size` half-points for every run.
    pub fn new(writer: W, font_size: u32) -> Self {
        WordMlWriter {
            writer,
            font_size,
            documents_written: 0,
            finished: false,
        }
    }
}

impl<W: Write + std::fmt::Debug> DocumentWriter for WordMlWriter<W> {
    fn write_document(&mut self, document: &ShelfDocument) -> Result<()> {
        if self.finished {
            return Err(finished_error());
        }
        let xml = document_to_wordml(document, self.font_size);
        self.writer.write_all(xml.as_bytes())?;
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

/// Render a document as a WordprocessingML string.
#[must_use]
pub fn document_to_wordml(document: &ShelfDocument, font_size: u32) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n");
    let _ = writeln!(xml, "<w:document xmlns:w=\"{WORDML_NAMESPACE}\">");
    xml.push_str("  <w:body>\n");
    for paragraph in document.paragraphs() {
        write_paragraph(&mut xml, paragraph, font_size);
    }
    xml.push_str("  </w:body>\n");
    xml.push_str("</w:document>\n");
    xml
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph, font_size: u32) {
    if paragraph.is_blank() {
        xml.push_str("    <w:p/>\n");
        return;
    }
    xml.push_str("    <w:p>");
    for run in &paragraph.runs {
        write_run(xml, run, font_size);
    }
    xml.push_str("</w:p>\n");
}

fn write_run(xml: &mut String, run: &Run, font_size: u32) {
    xml.push_str("<w:r><w:rPr>");
    if run.bold {
        xml.push_str("<w:b/>");
    }
    if run.italic {
        xml.push_str("<w:i/>");
    }
    let _ = write!(xml, "<w:sz w:val=\"{font_size}\"/></w:rPr>");

    for (i, piece) in run.text.split('\t').enumerate() {
        if i > 0 {
            xml.push_str("<w:tab/>");
        }
        if !piece.is_empty() {
            let _ = write!(
                xml,
                "<w:t xml:space=\"preserve\">{}</w:t>",
                escape(piece)
            );
        }
    }
    xml.push_str("</w:r>");
}
