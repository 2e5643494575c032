/// Report rendering for the linefind CLI
///
/// Formats search results and document dumps for a terminal:
/// - search report: header line, then one `Line <n>: ...` row per match,
///   or `No matches found.` when there are none
/// - document dump: the document's lines, optionally painted in one color
use std::io::Write;

use anyhow::Result;

use crate::document::Document;
use crate::highlight::HighlightStyle;
use crate::search::SearchResult;

pub struct ReportWriter<W: Write> {
    writer: W,
}

impl ReportWriter<std::io::Stdout> {
    /// Report writer targeting stdout.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the report for one search.
    pub fn write_report(&mut self, result: &SearchResult) -> Result<()> {
        writeln!(
            self.writer,
            "Searching for: '{}' in {}",
            result.query(),
            result.source()
        )?;

        if result.is_empty() {
            writeln!(self.writer, "No matches found.")?;
        } else {
            for m in result.matches() {
                writeln!(self.writer, "Line {}: {}", m.line_number, m.highlighted)?;
            }
        }

        self.writer.flush()?;
        Ok(())
    }

    /// Write a document's lines, painted when a style is given.
    pub fn write_document(&mut self, doc: &Document, style: Option<HighlightStyle>) -> Result<()> {
        for line in doc.lines() {
            match &style {
                Some(style) => writeln!(self.writer, "{}", style.paint(line))?,
                None => writeln!(self.writer, "{}", line)?,
            }
        }

        self.writer.flush()?;
        Ok(())
    }

    /// Consume the writer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
