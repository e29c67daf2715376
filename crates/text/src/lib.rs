//! # mcqgen-text: Plain-Text Extraction Plugin
//!
//! The `Extractor` implementation for plain-text documents. Input bytes
//! must be valid UTF-8; whitespace-only documents are rejected so the
//! pipeline never sends an empty quiz source to the model.

use mcqgen::{ExtractError, Extractor};

/// The `Extractor` implementation for plain text.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for PlainTextExtractor {
    fn extract(&self, data: &[u8]) -> Result<String, ExtractError> {
        let text = std::str::from_utf8(data).map_err(|_| ExtractError::Decode)?;
        if text.trim().is_empty() {
            return Err(ExtractError::EmptyDocument);
        }
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_through_utf8_text() {
        let text = PlainTextExtractor::new()
            .extract("Photosynthesis converts light into energy.".as_bytes())
            .unwrap();
        assert_eq!(text, "Photosynthesis converts light into energy.");
    }

    #[test]
    fn test_rejects_invalid_utf8() {
        let result = PlainTextExtractor::new().extract(&[0xff, 0xfe, 0x00]);
        assert!(matches!(result, Err(ExtractError::Decode)));
    }

    #[test]
    fn test_rejects_whitespace_only_document() {
        let result = PlainTextExtractor::new().extract(b"  \n\t ");
        assert!(matches!(result, Err(ExtractError::EmptyDocument)));
    }
}
