//! # PDF Extraction Tests
//!
//! Validates `PdfExtractor` against a generated single-page fixture and
//! against inputs that are not PDFs at all.

use mcqgen::{ExtractError, Extractor};
use mcqgen_pdf::PdfExtractor;
use mcqgen_test_utils::helpers::generate_test_pdf;

#[test]
fn test_extracts_text_from_generated_pdf() -> anyhow::Result<()> {
    let pdf_bytes = generate_test_pdf("The mitochondria is the powerhouse of the cell.")?;

    let text = PdfExtractor::new().extract(&pdf_bytes)?;

    assert!(
        text.contains("mitochondria"),
        "extracted text should contain the fixture content, got: {text}"
    );
    Ok(())
}

#[test]
fn test_rejects_non_pdf_bytes() {
    let result = PdfExtractor::new().extract(b"this is not a pdf");
    assert!(matches!(result, Err(ExtractError::PdfParse(_))));
}
