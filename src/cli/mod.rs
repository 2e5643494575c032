/// CLI utilities for the linefind binary
///
/// Modules:
/// - output: Renders search reports and document dumps to a writer
pub mod output;

pub use output::ReportWriter;
