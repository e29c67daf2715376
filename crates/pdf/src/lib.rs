//! # mcqgen-pdf: PDF Text Extraction Plugin
//!
//! This crate turns PDF bytes into the single document string the quiz
//! pipeline consumes, implementing the `Extractor` trait from `mcqgen`.
//! Per-page text is concatenated with no page-boundary marker.

use mcqgen::{ExtractError, Extractor};
use pdf::file::FileOptions;
use tracing::info;

/// The `Extractor` implementation for PDF documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for PdfExtractor {
    fn extract(&self, data: &[u8]) -> Result<String, ExtractError> {
        let file = FileOptions::cached()
            .load(data)
            .map_err(|e| ExtractError::PdfParse(e.to_string()))?;
        let resolver = file.resolver();
        let mut full_text = String::new();

        for page_num in 0..file.num_pages() {
            let page = file
                .get_page(page_num)
                .map_err(|e| ExtractError::PdfParse(e.to_string()))?;
            if let Some(content) = &page.contents {
                let operations = content
                    .operations(&resolver)
                    .map_err(|e| ExtractError::PdfParse(e.to_string()))?;
                for op in operations.iter() {
                    if let pdf::content::Op::TextDraw { text } = op {
                        full_text.push_str(&text.to_string_lossy());
                    }
                }
            }
        }

        if full_text.trim().is_empty() {
            return Err(ExtractError::EmptyDocument);
        }

        info!(
            pages = file.num_pages(),
            chars = full_text.len(),
            "Extracted text from PDF."
        );
        Ok(full_text)
    }
}
