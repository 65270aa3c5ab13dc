use std::path::{Path, PathBuf};

use crate::document::{OpenError, PdfDocument};
use crate::{IntakeConfig, Result};

// ── Report types ─────────────────────────────────────────────────────────────

/// Per-page accounting retained after the page text itself has been folded
/// into the full-text accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageReport {
    /// 0-based physical page index.
    pub index: usize,
    /// Characters extracted from this page; 0 when extraction degraded to
    /// empty text.
    pub char_count: usize,
}

/// What happened to one file of a batch.
#[derive(Debug)]
pub enum FileOutcome {
    /// The document opened and every page was visited.
    Success {
        /// All page texts concatenated in physical order, each preceded by
        /// a page-boundary marker (see [`page_marker`]) so the aggregate
        /// can be segmented back into pages.
        full_text: String,
        /// Per-page accounting in physical order.
        pages: Vec<PageReport>,
    },
    /// The document could not be opened; the batch continued without it.
    Failure {
        /// The per-file failure kind.
        error: OpenError,
    },
}

impl FileOutcome {
    /// `true` for [`FileOutcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, FileOutcome::Success { .. })
    }
}

/// Outcome for one file of a batch.
#[derive(Debug)]
pub struct ExtractionResult {
    /// The path this entry refers to.
    pub source: PathBuf,
    /// Success or per-file failure.
    pub outcome: FileOutcome,
}

/// Ordered collection of per-file outcomes from one extraction run.
///
/// Entries correlate index-for-index with the selection snapshot the run was
/// invoked over; a batch of N files always yields exactly N entries.
#[derive(Debug, Default)]
pub struct BatchReport {
    results: Vec<ExtractionResult>,
}

impl BatchReport {
    /// All per-file results, in selection order.
    pub fn results(&self) -> &[ExtractionResult] {
        &self.results
    }

    /// Number of files in the batch.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// `true` when the batch contained no files.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Files that opened and extracted.
    pub fn success_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome.is_success())
            .count()
    }

    /// Files recorded as failures.
    pub fn failure_count(&self) -> usize {
        self.len() - self.success_count()
    }

    /// Total characters extracted across all successful files.
    pub fn total_chars(&self) -> usize {
        self.results
            .iter()
            .map(|r| match &r.outcome {
                FileOutcome::Success { pages, .. } => {
                    pages.iter().map(|p| p.char_count).sum::<usize>()
                }
                FileOutcome::Failure { .. } => 0,
            })
            .sum()
    }
}

impl<'a> IntoIterator for &'a BatchReport {
    type Item = &'a ExtractionResult;
    type IntoIter = std::slice::Iter<'a, ExtractionResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// The page-boundary marker inserted before page `index` (0-based) in the
/// full-text accumulator.
///
/// ```
/// assert_eq!(pdfintake::page_marker(0), "--- Page 1 ---");
/// ```
pub fn page_marker(index: usize) -> String {
    format!("--- Page {} ---", index + 1)
}

// ── ExtractionPipeline ───────────────────────────────────────────────────────

/// Drives [`PdfDocument`] over a selection snapshot, isolating failures per
/// file and aggregating per-file results into a [`BatchReport`].
pub struct ExtractionPipeline<'a> {
    config: &'a IntakeConfig,
}

impl<'a> ExtractionPipeline<'a> {
    /// Create a pipeline bound to the given configuration.
    pub fn new(config: &'a IntakeConfig) -> Self {
        Self { config }
    }

    /// Extract every file of `paths` in order.
    ///
    /// One file's failure never stops the batch: the report always has
    /// exactly one entry per input path, success or failure. No retries are
    /// performed; a caller wanting to retry a failed file re-invokes the
    /// pipeline for that path.
    pub fn run(&self, paths: &[PathBuf]) -> Result<BatchReport> {
        let mut results = Vec::with_capacity(paths.len());

        for path in paths {
            let outcome = match Self::extract_file(path) {
                Ok(outcome) => outcome,
                Err(error) => {
                    log::warn!("skipping {}: {error}", path.display());
                    FileOutcome::Failure { error }
                }
            };

            if self.config.write_text_artifacts {
                if let FileOutcome::Success { full_text, .. } = &outcome {
                    self.write_artifact(path, full_text)?;
                }
            }

            results.push(ExtractionResult {
                source: path.clone(),
                outcome,
            });
        }

        Ok(BatchReport { results })
    }

    /// Open one document and fold its pages into a full-text accumulator.
    fn extract_file(path: &Path) -> std::result::Result<FileOutcome, OpenError> {
        let document = PdfDocument::open(path)?;

        let mut full_text = String::new();
        let mut pages = Vec::with_capacity(document.page_count());

        for page in document.pages() {
            full_text.push('\n');
            full_text.push_str(&page_marker(page.index));
            full_text.push('\n');
            full_text.push_str(&page.text);
            full_text.push('\n');

            pages.push(PageReport {
                index: page.index,
                char_count: page.char_count,
            });
        }

        Ok(FileOutcome::Success { full_text, pages })
    }

    /// Write one file's full text to `<file name>_extracted.txt`, inside the
    /// configured output directory or next to the source file.
    fn write_artifact(&self, source: &Path, full_text: &str) -> Result<()> {
        let mut name = source
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "document.pdf".into());
        name.push("_extracted.txt");

        let dest = match &self.config.output_directory {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                Path::new(dir).join(name)
            }
            None => source.with_file_name(name),
        };

        std::fs::write(dest, full_text)?;
        Ok(())
    }
}
