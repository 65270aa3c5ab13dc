use std::path::{Path, PathBuf};

use crate::document::{DocumentInfo, OpenError, PdfDocument};
use crate::pipeline::{BatchReport, ExtractionPipeline};
use crate::selection::{AddOutcome, SelectionSet};
use crate::validate;
use crate::{IntakeConfig, IntakeError, Result};

// ── IntakeController ─────────────────────────────────────────────────────────

/// Entry point tying the selection lifecycle to the extraction pipeline.
///
/// External collaborators — a drop handler, a file-browse dialog, a button —
/// call [`add`], [`clear`] and [`process`] directly and render their own
/// feedback from the returned structured outcomes. The controller owns its
/// [`SelectionSet`] exclusively and only ever hands out copies of it, so a
/// batch in flight operates on a snapshot that later mutations cannot touch.
///
/// # Example
///
/// ```no_run
/// use pdfintake::{IntakeConfig, IntakeController};
///
/// # fn main() -> pdfintake::Result<()> {
/// let mut intake = IntakeController::new(IntakeConfig::default());
///
/// intake.add(["report.pdf", "invoice.pdf"]);
/// if intake.is_ready() {
///     let report = intake.process()?;
///     println!("{} of {} file(s) extracted",
///              report.success_count(), report.len());
/// }
/// # Ok(())
/// # }
/// ```
///
/// [`add`]: IntakeController::add
/// [`clear`]: IntakeController::clear
/// [`process`]: IntakeController::process
pub struct IntakeController {
    selection: SelectionSet,
    config: IntakeConfig,
}

impl IntakeController {
    /// Create a controller with an empty selection.
    pub fn new(config: IntakeConfig) -> Self {
        Self {
            selection: SelectionSet::new(),
            config,
        }
    }

    // ── Intake ───────────────────────────────────────────────────────────────

    /// Feed candidate paths from any source (drop event, file dialog).
    ///
    /// Accepted paths are appended in input order; duplicates and invalid
    /// candidates are counted in the returned [`AddOutcome`], never errored.
    pub fn add<I, P>(&mut self, candidates: I) -> AddOutcome
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.selection.add(candidates)
    }

    /// Scan `dir` (non-recursively) for `.pdf` files and add them in file
    /// name order.
    pub fn add_directory<P: AsRef<Path>>(&mut self, dir: P) -> Result<AddOutcome> {
        let mut found = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && validate::has_pdf_extension(&path) {
                found.push(path);
            }
        }
        found.sort();
        Ok(self.selection.add(found))
    }

    /// Drop a single file from the selection. Returns `true` when it was
    /// present.
    pub fn remove<P: AsRef<Path>>(&mut self, path: P) -> bool {
        self.selection.remove(path)
    }

    /// Empty the selection unconditionally. Idempotent.
    pub fn clear(&mut self) {
        self.selection.clear();
    }

    /// Snapshot of the current selection, in first-accepted order.
    pub fn list(&self) -> Vec<PathBuf> {
        self.selection.list()
    }

    /// `true` once at least one file is selected — the single readiness
    /// signal a collaborator must consult before invoking
    /// [`process`](IntakeController::process).
    pub fn is_ready(&self) -> bool {
        !self.selection.is_empty()
    }

    // ── Processing ───────────────────────────────────────────────────────────

    /// Run the extraction pipeline over a snapshot of the selection.
    ///
    /// The snapshot is taken at entry: adding or clearing files while a
    /// returned report is still being read affects only the next run, never
    /// the one in flight. Invoking this with an empty selection is a
    /// contract violation and fails fast with
    /// [`IntakeError::EmptySelection`].
    pub fn process(&self) -> Result<BatchReport> {
        if !self.is_ready() {
            return Err(IntakeError::EmptySelection);
        }
        let snapshot = self.selection.list();
        ExtractionPipeline::new(&self.config).run(&snapshot)
    }

    /// Open one file and report its page count, encryption flag and
    /// metadata without extracting any text.
    pub fn inspect<P: AsRef<Path>>(&self, path: P) -> std::result::Result<DocumentInfo, OpenError> {
        Ok(PdfDocument::open(path)?.info())
    }

    /// The active configuration.
    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }
}
