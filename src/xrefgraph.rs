use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, warn};

use crate::config::{load_config, save_config, XrefConfig};
use crate::errors::{Result, XrefError};
use crate::export;
use crate::graph::build_index;
use crate::resolution::BookNameTable;
use crate::types::*;

/// Central orchestrator: reads the corpus, builds the index and writes the
/// export for one project directory.
pub struct XrefGraph {
    config: XrefConfig,
    project_root: PathBuf,
    books: BookNameTable,
}

/// Result of a conversion run.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// The index that was written.
    pub index: CrossReferenceIndex,
    /// Counters gathered while building the index.
    pub stats: IndexStats,
    /// Where the index was written.
    pub output_path: PathBuf,
    /// SHA-256 of the written document, hex encoded.
    pub output_digest: String,
    /// Time taken in milliseconds.
    pub duration_ms: u64,
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

impl XrefGraph {
    /// Writes a default configuration into `project_root` and opens it.
    pub fn init(project_root: &Path) -> Result<Self> {
        save_config(project_root, &XrefConfig::default())?;
        Self::open(project_root)
    }

    /// Opens a project, loading its configuration (or the defaults) and its
    /// book name table.
    pub fn open(project_root: &Path) -> Result<Self> {
        let config = load_config(project_root)?;
        Self::with_config(project_root, config)
    }

    /// Opens a project with an explicit configuration.
    pub fn with_config(project_root: &Path, config: XrefConfig) -> Result<Self> {
        let books = load_books(project_root, &config)?;
        Ok(Self {
            config,
            project_root: project_root.to_path_buf(),
            books,
        })
    }

    pub fn config(&self) -> &XrefConfig {
        &self.config
    }

    pub fn books(&self) -> &BookNameTable {
        &self.books
    }
}

/// Loads the configured book name override, falling back to the built-in
/// table when none is configured or the file is missing.
fn load_books(project_root: &Path, config: &XrefConfig) -> Result<BookNameTable> {
    match config.book_names_path(project_root) {
        Some(path) if path.exists() => BookNameTable::load(&path),
        Some(path) => {
            warn!(path = %path.display(), "book name table not found, using built-in names");
            Ok(BookNameTable::builtin().clone())
        }
        None => Ok(BookNameTable::builtin().clone()),
    }
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

impl XrefGraph {
    /// Builds an index from corpus text already in memory.
    pub fn build(&self, corpus: &str) -> (CrossReferenceIndex, IndexStats) {
        build_index(&self.books, corpus.lines())
    }

    /// Reads the configured corpus, builds the index and writes the export.
    ///
    /// An unreadable input or a failed write aborts the run without touching
    /// any existing output.
    pub fn convert(&self) -> Result<ConvertResult> {
        let start = Instant::now();
        let input_path = self.config.input_path(&self.project_root);
        let output_path = self.config.output_path(&self.project_root);

        let corpus = std::fs::read_to_string(&input_path).map_err(|e| XrefError::File {
            message: format!("failed to read cross-reference corpus: {}", e),
            path: input_path.display().to_string(),
        })?;

        let (index, stats) = self.build(&corpus);
        let json = export::export_to_string(&index, self.config.pretty)?;
        export::write_atomic(&output_path, &json)?;

        let result = ConvertResult {
            index,
            stats,
            output_digest: export::content_digest(&json),
            output_path,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            sources = result.stats.source_count,
            references = result.stats.reference_count,
            ranges = result.stats.range_count,
            skipped = result.stats.skipped_lines,
            output = %result.output_path.display(),
            "conversion complete"
        );

        Ok(result)
    }

    /// Loads the exported index written by a previous `convert`.
    pub fn load_index(&self) -> Result<CrossReferenceIndex> {
        export::load_index_file(&self.config.output_path(&self.project_root))
    }
}
