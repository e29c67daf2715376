//! # mcqgen-test-utils
//!
//! Shared helpers for the workspace's test suites: a recording mock AI
//! provider for asserting on prompt content and call order, and a PDF
//! fixture generator behind the `pdf` feature.

use async_trait::async_trait;
use mcqgen::providers::ai::AiProvider;
use mcqgen::{Completion, GenerateError, TokenUsage};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

/// The token usage attached to every canned mock response.
pub const MOCK_USAGE: TokenUsage = TokenUsage {
    prompt_tokens: 100,
    completion_tokens: 50,
    total_tokens: 150,
};

// --- Mock AI Provider ---

/// A programmable `AiProvider` that records every prompt it receives.
///
/// Responses are keyed by a unique substring of the expected prompt, so a
/// test can program different answers for the generation and review stages
/// and then assert on the recorded calls.
#[derive(Clone, Debug, Default)]
pub struct MockAiProvider {
    responses: Arc<Mutex<HashMap<String, Result<String, String>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockAiProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-programs a successful response for prompts containing `key`.
    pub fn add_response(&self, key: &str, response: &str) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(key.to_string(), Ok(response.to_string()));
    }

    /// Pre-programs a failure for prompts containing `key`.
    pub fn add_failure(&self, key: &str, message: &str) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(key.to_string(), Err(message.to_string()));
    }

    /// Retrieves the recorded prompts, in call order, for assertion.
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn complete(&self, prompt: &str) -> Result<Completion, GenerateError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(prompt.to_string());
        drop(calls);

        let responses = self.responses.lock().unwrap();
        for (key, response) in responses.iter() {
            if prompt.contains(key) {
                return match response {
                    Ok(text) => Ok(Completion {
                        text: text.clone(),
                        usage: MOCK_USAGE,
                    }),
                    Err(message) => Err(GenerateError::AiApi(message.clone())),
                };
            }
        }

        Err(GenerateError::AiApi(format!(
            "MockAiProvider: No response programmed for prompt. Got: '{prompt}'"
        )))
    }
}

// --- Test-Specific Helpers ---
#[cfg(feature = "pdf")]
pub mod helpers {
    use anyhow::Result;
    use printpdf::{
        BuiltinFont, Layer, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Pt, TextItem,
        TextMatrix, TextRenderingMode,
    };

    /// Generates a single-page PDF fixture containing the given text,
    /// compatible with printpdf v0.8.2.
    pub fn generate_test_pdf(text: &str) -> Result<Vec<u8>> {
        let mut doc = PdfDocument::new("mcqgen fixture");
        let mut page = PdfPage::new(Mm(210.0), Mm(297.0), vec![]);
        let layer_def = Layer::new("Layer 1");
        let layer_id = doc.add_layer(&layer_def);

        page.ops = vec![
            Op::BeginLayer {
                layer_id: layer_id.clone(),
            },
            Op::SetFontSizeBuiltinFont {
                size: Pt(12.0),
                font: BuiltinFont::Helvetica,
            },
            Op::StartTextSection,
            Op::SetTextMatrix {
                matrix: TextMatrix::Translate(Mm(10.0).into(), Mm(280.0).into()),
            },
            Op::SetTextRenderingMode {
                mode: TextRenderingMode::Fill,
            },
            Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(text.to_string())],
                font: BuiltinFont::Helvetica,
            },
            Op::EndTextSection,
            Op::EndLayer { layer_id },
        ];
        doc.pages.push(page);

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            eprintln!("PDF generation warnings: {warnings:?}");
        }

        Ok(bytes)
    }
}
