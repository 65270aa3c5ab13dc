use std::path::{Path, PathBuf};

use crate::validate;

// ── AddOutcome ───────────────────────────────────────────────────────────────

/// Counts returned by [`SelectionSet::add`].
///
/// The core never renders user-facing messages; collaborators (a drop-zone
/// handler, a dialog) build their own feedback from these counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddOutcome {
    /// Candidates that passed validation and were appended.
    pub accepted: usize,
    /// Candidates already present (by canonical path), silently skipped.
    pub duplicate: usize,
    /// Candidates that failed validation.
    pub rejected: usize,
}

// ── SelectionSet ─────────────────────────────────────────────────────────────

/// Ordered, deduplicated collection of validated PDF paths.
///
/// Identity is the canonicalized path, so adding `./a.pdf` and its absolute
/// form counts as one file. Validity is checked at insertion time only; a
/// file deleted after selection surfaces later as a per-file
/// [`OpenError`](crate::OpenError) during extraction, never here.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    paths: Vec<PathBuf>,
}

impl SelectionSet {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append candidates, preserving input order.
    ///
    /// Rejected and duplicate candidates are counted, never errored, so one
    /// bad path in a drop of twenty does not spoil the rest.
    pub fn add<I, P>(&mut self, candidates: I) -> AddOutcome
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut outcome = AddOutcome::default();

        for candidate in candidates {
            let candidate = candidate.as_ref();

            if !validate::is_acceptable(candidate) {
                outcome.rejected += 1;
                continue;
            }

            // Canonicalization only fails if the file vanished between the
            // check above and here; count that as a rejection.
            let Some(path) = validate::canonical(candidate) else {
                outcome.rejected += 1;
                continue;
            };

            if self.paths.contains(&path) {
                outcome.duplicate += 1;
            } else {
                self.paths.push(path);
                outcome.accepted += 1;
            }
        }

        outcome
    }

    /// Remove one file, identified by its canonical path. Returns `true`
    /// when it was present. The order of the remaining entries is unchanged.
    pub fn remove<P: AsRef<Path>>(&mut self, path: P) -> bool {
        let target = validate::canonical(&path).unwrap_or_else(|| path.as_ref().to_path_buf());
        let before = self.paths.len();
        self.paths.retain(|p| *p != target);
        self.paths.len() != before
    }

    /// Empty the selection unconditionally. Idempotent.
    pub fn clear(&mut self) {
        self.paths.clear();
    }

    /// Copy-out snapshot of the selection in first-accepted order.
    ///
    /// Always a copy, never a live reference: a snapshot handed to the
    /// extraction pipeline is unaffected by later `add`/`clear` calls.
    pub fn list(&self) -> Vec<PathBuf> {
        self.paths.clone()
    }

    /// Number of selected files.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// `true` when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
