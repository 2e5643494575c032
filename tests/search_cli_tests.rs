// Integration tests for the linefind search pipeline
//
// These exercise the public API end to end: real files on disk, the searcher,
// and the rendered report.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use linefind::cli::ReportWriter;
use linefind::{ColorName, Document, LineSearcher};

/// Write the standard three-line fixture file and return its path
fn write_sample(dir: &Path) -> Result<PathBuf> {
    let path = dir.join("sample.txt");
    std::fs::write(
        &path,
        "This is a test line.\nAnother line with Python.\nEnd of file.",
    )?;
    Ok(path)
}

/// Render the report for one query against one file
fn report_for(path: &Path, query: &str, color: ColorName) -> Result<String> {
    let result = LineSearcher::with_color(color).search_path(path, query)?;
    let mut writer = ReportWriter::new(Vec::new());
    writer.write_report(&result)?;
    Ok(String::from_utf8(writer.into_inner())?)
}

mod search_tests {
    use super::*;

    #[test]
    fn test_query_present_reports_matching_line() -> Result<()> {
        colored::control::set_override(true);

        let temp_dir = TempDir::new()?;
        let sample = write_sample(temp_dir.path())?;

        let report = report_for(&sample, "Python", ColorName::Blue)?;

        assert!(report.contains("Searching for: 'Python'"));
        assert!(report.contains("Line 2:"));
        // Original casing survives highlighting
        assert!(report.contains("Python"));
        assert!(!report.contains("No matches found."));
        Ok(())
    }

    #[test]
    fn test_query_absent_reports_no_matches() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let sample = write_sample(temp_dir.path())?;

        let report = report_for(&sample, "Java", ColorName::Green)?;

        assert!(report.contains("No matches found."));
        assert!(!report.contains("Line "));
        Ok(())
    }

    #[test]
    fn test_substring_matches_across_lines_case_insensitively() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let sample = write_sample(temp_dir.path())?;

        let result = LineSearcher::new().search_path(&sample, "line")?;

        assert_eq!(result.line_numbers(), vec![1, 2]);
        Ok(())
    }

    #[test]
    fn test_rerunning_an_unchanged_file_is_idempotent() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let sample = write_sample(temp_dir.path())?;
        let searcher = LineSearcher::with_color(ColorName::Magenta);

        let first = searcher.search_path(&sample, "line")?;
        let second = searcher.search_path(&sample, "line")?;

        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_missing_file_fails_without_report() {
        let missing = PathBuf::from("definitely/not/here.txt");
        let err = LineSearcher::new().search_path(&missing, "x").unwrap_err();

        assert!(err.to_string().contains("File not found or unreadable"));
    }
}

mod concat_tests {
    use super::*;

    #[test]
    fn test_concatenated_documents_search_as_one() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let fruits = temp_dir.path().join("fruits.txt");
        let cities = temp_dir.path().join("cities.txt");
        std::fs::write(&fruits, "Apple\nBanana\nCarrot\n")?;
        std::fs::write(&cities, "London\nOrange\nTokyo\n")?;

        let docs = vec![Document::read(&fruits)?, Document::read(&cities)?];
        let joined = Document::concat(&docs);

        assert_eq!(joined.len(), 6);

        // Line numbers continue across the seam
        let result = LineSearcher::new().search(&joined, "an")?;
        assert_eq!(result.line_numbers(), vec![2, 5]);
        Ok(())
    }
}
