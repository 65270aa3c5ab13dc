//! Path-level candidate validation.
//!
//! Pure predicates: nothing here opens a file. Acceptability is decided from
//! path shape and filesystem metadata alone; whether the bytes behind the
//! path actually parse as a PDF is [`PdfDocument::open`]'s job.
//!
//! [`PdfDocument::open`]: crate::PdfDocument::open

use std::path::{Path, PathBuf};

/// Returns `true` when `path` names an existing regular file whose extension
/// is `.pdf` in any letter case.
///
/// Directories are rejected even when named like `dir.pdf`, and so are names
/// where `.pdf` is a substring but not the suffix (`report.pdfx`).
///
/// ```
/// assert!(!pdfintake::validate::is_acceptable("no_such_file.pdf"));
/// assert!(!pdfintake::validate::is_acceptable("notes.txt"));
/// ```
pub fn is_acceptable<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    path.is_file() && has_pdf_extension(path)
}

/// Returns `true` when the path's final component ends in `.pdf`,
/// case-insensitively. Extension-less names never match.
pub fn has_pdf_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// Resolve `path` to its canonical absolute form, the identity used for
/// deduplication and equality. Returns `None` when resolution fails (e.g.
/// the file vanished after validation).
pub fn canonical<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    std::fs::canonicalize(path).ok()
}
