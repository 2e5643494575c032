/// linefind: line-indexed substring search with colorized highlighting
///
/// Reads text files line by line and reports case-insensitive matches of a
/// query substring, wrapping each occurrence in color/bold emphasis.
///
/// Commands:
/// - search: Report matching lines per file, or across files concatenated
/// - cat: Print file contents, cycling colors per file when none is given
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use linefind::cli::ReportWriter;
use linefind::{ColorCycle, ColorName, Document, HighlightStyle, LineSearcher};
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(name = "linefind")]
#[command(about = "Line-indexed substring search with colorized highlighting", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search files for a substring, case-insensitively
    Search {
        /// Substring to search for
        #[arg(short, long)]
        query: String,

        /// Files to search, in order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Highlight color (red, green, yellow, blue, magenta, cyan, white, grey)
        #[arg(short, long)]
        color: Option<String>,

        /// Concatenate the files into one logical document before searching
        #[arg(long)]
        concat: bool,

        /// Optional log file path for debug logging
        #[arg(short, long)]
        log: Option<PathBuf>,
    },

    /// Print file contents, colorized
    Cat {
        /// Files to print, in order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Fixed color for all files (default: cycle per file)
        #[arg(short, long)]
        color: Option<String>,

        /// Optional log file path for debug logging
        #[arg(short, long)]
        log: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Extract log path from commands
    let log_path = match &cli.command {
        Commands::Search { log, .. } => log.clone(),
        Commands::Cat { log, .. } => log.clone(),
    };

    init_logging(log_path.as_ref())?;

    match cli.command {
        Commands::Search {
            query,
            files,
            color,
            concat,
            log: _,
        } => run_search(&query, &files, color.as_deref(), concat),
        Commands::Cat {
            files,
            color,
            log: _,
        } => run_cat(&files, color.as_deref()),
    }
}

/// Initialize logging with optional file output
fn init_logging(log_path: Option<&PathBuf>) -> Result<()> {
    use tracing_subscriber::fmt::writer::MakeWriterExt;

    if let Some(log_file) = log_path {
        // With log file: info+ to file, warn+ to stderr
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        let file_appender = tracing_appender::rolling::never(
            log_file
                .parent()
                .unwrap_or_else(|| std::path::Path::new(".")),
            log_file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("linefind.log"),
        );

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(file_appender.and(std::io::stderr.with_max_level(tracing::Level::WARN)))
            .init();

        eprintln!("📝 Debug logging enabled: {:?}", log_file);
    } else {
        // No log file: warn+ to stderr only (unless RUST_LOG overrides)
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

/// Parse a color spec, substituting the default on unknown names.
///
/// An invalid color is never fatal; it logs a warning and falls back to red.
fn resolve_color(spec: Option<&str>) -> Option<ColorName> {
    let spec = spec?;
    match spec.parse() {
        Ok(color) => Some(color),
        Err(err) => {
            warn!("{}. Defaulting to 'red'.", err);
            Some(ColorName::default())
        }
    }
}

fn run_search(query: &str, files: &[PathBuf], color: Option<&str>, concat: bool) -> Result<()> {
    let color = resolve_color(color).unwrap_or_default();
    let searcher = LineSearcher::with_color(color);
    let mut writer = ReportWriter::stdout();

    if concat {
        let docs = files
            .iter()
            .map(|file| Document::read(file))
            .collect::<linefind::Result<Vec<_>>>()
            .context("Failed to read input files")?;
        let joined = Document::concat(&docs);

        let result = searcher
            .search(&joined, query)
            .context("Search failed")?;
        writer.write_report(&result)?;
    } else {
        for file in files {
            let result = searcher
                .search_path(file, query)
                .with_context(|| format!("Failed to search {:?}", file))?;
            writer.write_report(&result)?;
        }
    }

    Ok(())
}

fn run_cat(files: &[PathBuf], color: Option<&str>) -> Result<()> {
    let fixed = resolve_color(color);
    let mut cycle = ColorCycle::new();
    let mut writer = ReportWriter::stdout();

    for file in files {
        let doc =
            Document::read(file).with_context(|| format!("Failed to read {:?}", file))?;

        // Fixed color when given, otherwise the next color in the cycle
        let color = fixed.or_else(|| cycle.next());
        writer.write_document(&doc, color.map(HighlightStyle::new))?;
    }

    Ok(())
}
