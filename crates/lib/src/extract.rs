//! # Source Text Extraction
//!
//! The trait seam between the pipeline and the file-format plugin crates
//! (`mcqgen-pdf`, `mcqgen-text`), plus extension-based detection of which
//! extractor a given input file needs.

use std::path::Path;
use thiserror::Error;

/// Errors produced while turning an input file into document text.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse PDF content: {0}")]
    PdfParse(String),
    #[error("Input file is not valid UTF-8 text")]
    Decode,
    #[error("Extracted document text is empty")]
    EmptyDocument,
}

/// Extracts the full document text from raw file bytes as a single string.
pub trait Extractor {
    fn extract(&self, data: &[u8]) -> Result<String, ExtractError>;
}

/// The declared type of an input file, detected from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Pdf,
    PlainText,
}

impl SourceKind {
    /// Classifies a path: `.pdf` (case-insensitive) is a PDF, everything
    /// else is treated as plain text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => SourceKind::Pdf,
            _ => SourceKind::PlainText,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_source_kind_detects_pdf_case_insensitively() {
        assert_eq!(SourceKind::from_path(Path::new("notes.pdf")), SourceKind::Pdf);
        assert_eq!(SourceKind::from_path(Path::new("NOTES.PDF")), SourceKind::Pdf);
    }

    #[test]
    fn test_source_kind_defaults_to_plain_text() {
        assert_eq!(
            SourceKind::from_path(Path::new("notes.txt")),
            SourceKind::PlainText
        );
        assert_eq!(
            SourceKind::from_path(Path::new("no_extension")),
            SourceKind::PlainText
        );
    }
}
