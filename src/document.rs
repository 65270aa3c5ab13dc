use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use lopdf::Document;
use thiserror::Error;

// ── OpenError ────────────────────────────────────────────────────────────────

/// Why a single PDF could not be opened.
///
/// Recorded per file inside a [`BatchReport`](crate::BatchReport); an open
/// failure is fatal for that file only and never aborts a batch.
#[derive(Error, Debug)]
pub enum OpenError {
    /// The path does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Permission or other I/O failure before the parser ever ran, or the
    /// path is not a regular file.
    #[error("cannot read {}: {}", .0.display(), .1)]
    Unreadable(PathBuf, String),

    /// The bytes do not form a structurally valid PDF document. Files that
    /// pass the extension check but are not PDFs end up here.
    #[error("not a valid PDF {}: {}", .0.display(), .1)]
    Malformed(PathBuf, String),

    /// The document requires a password this crate does not supply. No
    /// password prompting exists, so this is terminal for the file.
    #[error("password-protected PDF: {}", .0.display())]
    EncryptedUnsupported(PathBuf),
}

impl OpenError {
    /// The path this error refers to.
    pub fn path(&self) -> &Path {
        match self {
            OpenError::NotFound(p)
            | OpenError::Unreadable(p, _)
            | OpenError::Malformed(p, _)
            | OpenError::EncryptedUnsupported(p) => p,
        }
    }
}

// ── DocumentInfo ─────────────────────────────────────────────────────────────

/// Accounting snapshot of one document: the extraction-free companion to a
/// full pipeline pass, answering "what is this file?" without touching page
/// content.
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    /// Total pages; zero-page documents are valid.
    pub page_count: usize,
    /// Whether the document structure declares encryption, independent of
    /// whether extraction succeeds.
    pub is_encrypted: bool,
    /// Info-dictionary entries; empty when the document carries none.
    pub metadata: BTreeMap<String, Option<String>>,
}

// ── Page ─────────────────────────────────────────────────────────────────────

/// Text extracted from a single page.
#[derive(Debug, Clone)]
pub struct Page {
    /// 0-based physical page index.
    pub index: usize,
    /// Extracted content; empty when the page has no extractable text.
    pub text: String,
    /// Number of characters in `text`.
    pub char_count: usize,
}

// ── PdfDocument ──────────────────────────────────────────────────────────────

/// One opened PDF document.
///
/// A `PdfDocument` is opened on demand for an extraction pass or an info
/// query and never cached: no file handle survives a pipeline run, and a
/// file changed on disk between selection and extraction is re-read freshly.
/// The lazy [`pages`](PdfDocument::pages) sequence is restarted by reopening
/// the document.
#[derive(Debug)]
pub struct PdfDocument {
    source: PathBuf,
    document: Document,
    encrypted: bool,
    page_numbers: Vec<u32>,
}

impl PdfDocument {
    /// Open and parse the PDF at `path`.
    ///
    /// Encrypted documents are unlocked with the empty user password when
    /// possible; [`is_encrypted`](PdfDocument::is_encrypted) still reports
    /// `true` for them. Anything needing a real password fails with
    /// [`OpenError::EncryptedUnsupported`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, OpenError> {
        let source = path.as_ref().to_path_buf();

        // Separate the filesystem failure kinds up front; the parser folds
        // everything into one error otherwise.
        match std::fs::metadata(&source) {
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(OpenError::NotFound(source));
            }
            Err(e) => return Err(OpenError::Unreadable(source, e.to_string())),
            Ok(m) if !m.is_file() => {
                return Err(OpenError::Unreadable(source, "not a regular file".into()));
            }
            Ok(_) => {}
        }

        let bytes = std::fs::read(&source).map_err(|e| match e.kind() {
            ErrorKind::NotFound => OpenError::NotFound(source.clone()),
            _ => OpenError::Unreadable(source.clone(), e.to_string()),
        })?;

        let mut document = Document::load_mem(&bytes)
            .map_err(|e| OpenError::Malformed(source.clone(), e.to_string()))?;

        let encrypted = document.is_encrypted();
        if encrypted && document.decrypt("").is_err() {
            return Err(OpenError::EncryptedUnsupported(source));
        }

        let mut page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
        page_numbers.sort_unstable();

        Ok(Self {
            source,
            document,
            encrypted,
            page_numbers,
        })
    }

    // ── Accounting ───────────────────────────────────────────────────────────

    /// Total pages. Zero is valid, not an error.
    pub fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    /// Whether the document structure declares encryption. The flag is read
    /// at open time and is independent of whether extraction succeeds.
    pub fn is_encrypted(&self) -> bool {
        self.encrypted
    }

    /// Key/value pairs from the document's Info dictionary.
    ///
    /// Missing metadata yields an empty map, never an error. Entries whose
    /// value is present but not a string are reported as `None`.
    pub fn metadata(&self) -> BTreeMap<String, Option<String>> {
        let mut out = BTreeMap::new();

        let Some(dict) = self
            .document
            .trailer
            .get(b"Info")
            .ok()
            .and_then(|v| v.as_reference().ok())
            .and_then(|id| self.document.get_object(id).ok())
            .and_then(|obj| obj.as_dict().ok())
        else {
            return out;
        };

        for (key, value) in dict.iter() {
            let key = String::from_utf8_lossy(key).into_owned();
            let value = value
                .as_str()
                .ok()
                .map(|s| String::from_utf8_lossy(s).into_owned());
            out.insert(key, value);
        }

        out
    }

    /// Page count, encryption flag and metadata in one struct; no text is
    /// extracted.
    pub fn info(&self) -> DocumentInfo {
        DocumentInfo {
            page_count: self.page_count(),
            is_encrypted: self.is_encrypted(),
            metadata: self.metadata(),
        }
    }

    /// The path this document was opened from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    // ── Extraction ───────────────────────────────────────────────────────────

    /// Lazy sequence of [`Page`]s, visited strictly in physical order
    /// `0..page_count`.
    ///
    /// A page whose content cannot be decoded yields an empty string for
    /// that page rather than failing the document; only open failures are
    /// fatal for a file.
    pub fn pages(&self) -> Pages<'_> {
        Pages {
            document: self,
            next: 0,
        }
    }

    fn page_text(&self, index: usize) -> String {
        let page_number = self.page_numbers[index];
        match self.document.extract_text(&[page_number]) {
            Ok(text) => text,
            Err(e) => {
                log::debug!(
                    "page {} of {} yielded no text: {e}",
                    index + 1,
                    self.source.display()
                );
                String::new()
            }
        }
    }
}

// ── Pages iterator ───────────────────────────────────────────────────────────

/// Lazy iterator over the pages of one [`PdfDocument`], produced by
/// [`PdfDocument::pages`].
pub struct Pages<'a> {
    document: &'a PdfDocument,
    next: usize,
}

impl Iterator for Pages<'_> {
    type Item = Page;

    fn next(&mut self) -> Option<Page> {
        if self.next >= self.document.page_count() {
            return None;
        }
        let index = self.next;
        self.next += 1;

        let text = self.document.page_text(index);
        let char_count = text.chars().count();
        Some(Page {
            index,
            text,
            char_count,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.document.page_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pages<'_> {}
