/// Line-sequence view of a text file
///
/// A `Document` is read once and is immutable afterwards. Lines are stored with
/// trailing line-ending characters stripped; everything else (leading
/// whitespace, inner casing) is preserved verbatim for display.
use std::path::Path;

use crate::search::error::{Result, SearchError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: String,
    lines: Vec<String>,
}

impl Document {
    /// Read a document from a file path.
    ///
    /// The file is opened, read, and released before this returns, on error
    /// paths included. Unreadable paths (missing file, permissions, non-UTF-8
    /// content) surface as [`SearchError::FileUnreadable`].
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| SearchError::FileUnreadable {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            name: path.display().to_string(),
            lines: split_lines(&content),
        })
    }

    /// Build a document from in-memory lines.
    pub fn from_lines(name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }

    /// Concatenate documents into one logical document.
    ///
    /// The result's line sequence is each input's lines in order; its name
    /// joins the input names with `+`. Inputs are not modified.
    pub fn concat<'a>(docs: impl IntoIterator<Item = &'a Document>) -> Self {
        let mut name_parts = Vec::new();
        let mut lines = Vec::new();

        for doc in docs {
            name_parts.push(doc.name.as_str());
            lines.extend(doc.lines.iter().cloned());
        }

        Self {
            name: name_parts.join("+"),
            lines,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Split content into lines, stripping `\n` and `\r\n` terminators only.
fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(|line| line.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_strips_line_endings_only() {
        let lines = split_lines("  indented\r\nplain\nlast");
        assert_eq!(lines, vec!["  indented", "plain", "last"]);
    }

    #[test]
    fn test_read_missing_file_is_unreadable() {
        let err = Document::read("/nonexistent/linefind-test.txt").unwrap_err();
        assert!(matches!(err, SearchError::FileUnreadable { .. }));
    }

    #[test]
    fn test_concat_preserves_order() {
        let a = Document::from_lines("a.txt", vec!["one".into(), "two".into()]);
        let b = Document::from_lines("b.txt", vec!["three".into()]);

        let joined = Document::concat([&a, &b]);

        assert_eq!(joined.name(), "a.txt+b.txt");
        assert_eq!(joined.lines(), ["one", "two", "three"]);
        assert_eq!(joined.len(), 3);
    }

    #[test]
    fn test_concat_of_nothing_is_empty() {
        let joined = Document::concat([]);
        assert!(joined.is_empty());
        assert_eq!(joined.name(), "");
    }
}
