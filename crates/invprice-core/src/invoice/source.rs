//! Loading invoice text from files, PDFs and readers.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::pdf::{PdfExtractor, PdfProcessor};

/// Extensions accepted by [`InvoiceDocument::load`] in batch mode.
const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "txt", "text", "md"];

/// Where the invoice text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Plain text file.
    Text,
    /// Text extracted from a PDF.
    Pdf,
    /// Standard input or another reader.
    Stdin,
}

/// Invoice text ready to be sent to the extractor.
#[derive(Debug, Clone)]
pub struct InvoiceDocument {
    /// Display name of the source (path or `stdin`).
    pub source: String,
    /// Kind of source.
    pub kind: SourceKind,
    /// Raw invoice text.
    pub text: String,
}

impl InvoiceDocument {
    /// Wrap text that is already in memory.
    pub fn from_text(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind: SourceKind::Stdin,
            text: text.into(),
        }
    }

    /// Read the whole of `reader` as invoice text.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::from_text("stdin", text))
    }

    /// Load an invoice from disk. `.pdf` files go through PDF text
    /// extraction; anything else is read as UTF-8 text.
    pub fn load(path: &Path) -> Result<Self> {
        let source = path.display().to_string();

        let (kind, text) = if has_extension(path, "pdf") {
            let data = fs::read(path)?;
            let mut extractor = PdfExtractor::new();
            extractor.load(&data)?;
            debug!("{} has {} pages", source, extractor.page_count());
            (SourceKind::Pdf, extractor.extract_text()?)
        } else {
            (SourceKind::Text, fs::read_to_string(path)?)
        };

        debug!("Loaded {} ({:?}, {} chars)", source, kind, text.chars().count());

        Ok(Self { source, kind, text })
    }

    /// Whether the document has no visible text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Log a warning when a PDF yields suspiciously little text, as
    /// happens with scanned documents.
    pub fn warn_if_sparse(&self, min_pdf_text_length: usize) {
        let visible = self.text.trim().chars().count();
        if self.kind == SourceKind::Pdf && visible < min_pdf_text_length {
            warn!(
                "{} has only {} characters of text; it may be a scanned PDF",
                self.source, visible
            );
        } else if self.is_blank() {
            warn!("{} contains no text", self.source);
        }
    }
}

/// Whether batch mode should pick up `path`.
pub fn is_supported(path: &Path) -> bool {
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|ext| has_extension(path, ext))
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}
