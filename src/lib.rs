//! # pdfintake
//!
//! A Rust library for collecting candidate PDF files, deduplicating them into
//! an ordered selection, and batch-extracting their text page by page.
//!
//! ## What this crate does
//!
//! 1. **Validate candidates** — checks that a path names an existing regular
//!    file with a `.pdf` extension (any letter case), without opening it.
//! 2. **Build a selection** — maintains an ordered, deduplicated set of
//!    validated paths fed from any source (drop events, file dialogs,
//!    directory scans).
//! 3. **Extract text** — opens each selected document, walks its pages in
//!    physical order, and concatenates page texts behind page-boundary
//!    markers so the aggregate stays segmentable.
//! 4. **Report per file** — one corrupt file never aborts a batch; every file
//!    gets a success or failure entry, in selection order.
//!
//! ## Quick example
//!
//! ```no_run
//! use pdfintake::{FileOutcome, IntakeConfig, IntakeController};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut intake = IntakeController::new(IntakeConfig::default());
//!
//! let added = intake.add(["report.pdf", "invoice.pdf"]);
//! println!("{} accepted, {} duplicate, {} rejected",
//!          added.accepted, added.duplicate, added.rejected);
//!
//! if intake.is_ready() {
//!     for result in intake.process()?.results() {
//!         match &result.outcome {
//!             FileOutcome::Success { pages, .. } => {
//!                 println!("{} — {} page(s)", result.source.display(), pages.len());
//!             }
//!             FileOutcome::Failure { error } => {
//!                 println!("{} — {error}", result.source.display());
//!             }
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

mod controller;
mod document;
mod pipeline;
mod selection;
pub mod validate;

pub use controller::IntakeController;
pub use document::{DocumentInfo, OpenError, Page, Pages, PdfDocument};
pub use pipeline::{
    page_marker, BatchReport, ExtractionPipeline, ExtractionResult, FileOutcome, PageReport,
};
pub use selection::{AddOutcome, SelectionSet};

// ── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration for [`IntakeController`].
///
/// Passed at construction time; the crate reads no ambient/global state.
#[derive(Debug, Clone, Default)]
pub struct IntakeConfig {
    /// When `true`, each successfully extracted file's full text is also
    /// written to disk as a `<file name>_extracted.txt` artifact during
    /// [`IntakeController::process`].
    pub write_text_artifacts: bool,

    /// Directory for text artifacts when `write_text_artifacts` is `true`.
    /// When unset, each artifact is written next to its source file.
    pub output_directory: Option<String>,
}

// ── Error type ───────────────────────────────────────────────────────────────

/// Errors returned to the immediate caller of the intake API.
///
/// Per-file extraction failures are *not* errors at this level; they are
/// recorded as [`FileOutcome::Failure`] entries inside the [`BatchReport`]
/// and never abort a batch.
#[derive(Error, Debug)]
pub enum IntakeError {
    /// [`IntakeController::process`] was invoked while the selection was
    /// empty. Callers must gate processing on
    /// [`IntakeController::is_ready`]; a silent empty report would be
    /// indistinguishable from a successful batch.
    #[error("cannot process an empty selection")]
    EmptySelection,

    /// A filesystem I/O error occurred outside a single document's
    /// extraction (e.g. while writing a text artifact or scanning a
    /// directory for candidates).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, IntakeError>;
