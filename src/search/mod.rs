/// Case-insensitive line search with highlighted matches
///
/// `LineSearcher` scans a [`Document`] line by line and records every line
/// containing the query as a substring, ignoring case. Within a matching line,
/// all non-overlapping occurrences (left-to-right) are wrapped with the
/// searcher's highlight style; the matched text keeps its original casing.
pub mod error;

use std::path::Path;

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::document::Document;
use crate::highlight::{ColorName, HighlightStyle};
use error::Result;

/// One matching line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// 1-based line number, assigned in file order.
    pub line_number: usize,
    /// The line as read, without highlighting.
    pub text: String,
    /// The line with every occurrence of the query wrapped in emphasis.
    pub highlighted: String,
}

/// Ordered matches for one query against one document. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    query: String,
    source: String,
    matches: Vec<Match>,
}

impl SearchResult {
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Display name of the searched document.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Line numbers of all matches, strictly increasing.
    pub fn line_numbers(&self) -> Vec<usize> {
        self.matches.iter().map(|m| m.line_number).collect()
    }
}

/// Line searcher with an optional highlight capability.
///
/// Without a style, `Match::highlighted` is the line unchanged; with one,
/// matched spans are wrapped via [`HighlightStyle::paint`]. One concrete type
/// covers both, the colorized output being the only behavioral delta.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineSearcher {
    style: Option<HighlightStyle>,
}

impl LineSearcher {
    /// Searcher without highlighting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Searcher that wraps matches in the given color plus bold.
    pub fn with_color(color: ColorName) -> Self {
        Self {
            style: Some(HighlightStyle::new(color)),
        }
    }

    /// Search an already-read document.
    ///
    /// The empty query is contained in every line, so every line matches and
    /// its highlighted rendering equals the original line.
    pub fn search(&self, doc: &Document, query: &str) -> Result<SearchResult> {
        let pattern = literal_pattern(query)?;
        let mut matches = Vec::new();

        for (idx, line) in doc.lines().iter().enumerate() {
            if !pattern.is_match(line) {
                continue;
            }

            matches.push(Match {
                line_number: idx + 1,
                text: line.clone(),
                highlighted: self.wrap_occurrences(line, &pattern),
            });
        }

        debug!(
            "Found {} matching lines for '{}' in {}",
            matches.len(),
            query,
            doc.name()
        );

        Ok(SearchResult {
            query: query.to_string(),
            source: doc.name().to_string(),
            matches,
        })
    }

    /// Read the file fresh and search it. No cursor state is kept between
    /// invocations; two calls on an unchanged file yield identical results.
    pub fn search_path(&self, path: impl AsRef<Path>, query: &str) -> Result<SearchResult> {
        let doc = Document::read(path)?;
        self.search(&doc, query)
    }

    /// Wrap every occurrence in `line`, scanning left to right without
    /// overlap. Slices of the original line are painted, never the query, so
    /// matched text keeps its casing.
    fn wrap_occurrences(&self, line: &str, pattern: &Regex) -> String {
        let Some(style) = &self.style else {
            return line.to_string();
        };

        let mut out = String::with_capacity(line.len());
        let mut tail = 0;

        for m in pattern.find_iter(line) {
            out.push_str(&line[tail..m.start()]);
            out.push_str(&style.paint(m.as_str()));
            tail = m.end();
        }
        out.push_str(&line[tail..]);
        out
    }
}

/// Case-insensitive literal pattern for the query.
fn literal_pattern(query: &str) -> Result<Regex> {
    let pattern = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()?;
    Ok(pattern)
}
