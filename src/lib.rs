// linefind - Line Search Library
//!
//! linefind reads text files as ordered line sequences and searches them for
//! case-insensitive substring matches, rendering matched spans with terminal
//! color/bold emphasis.

pub mod cli;
pub mod document;
pub mod highlight;
pub mod search;

// Re-export common types
pub use document::Document;
pub use highlight::{ColorCycle, ColorName, HighlightStyle};
pub use search::error::{Result, SearchError};
pub use search::{LineSearcher, Match, SearchResult};
