//! # mcqgen
//!
//! This crate turns a source document into a multiple-choice quiz by running
//! a two-stage prompt pipeline against a configurable AI provider: a
//! generation stage that asks for the quiz as JSON, then a review stage that
//! evaluates the generated questions. The quiz payload can be tabulated into
//! flat rows for CSV or JSON export.

pub mod errors;
pub mod extract;
pub mod prompts;
pub mod providers;
pub mod tabulate;
pub mod types;

pub use errors::GenerateError;
pub use extract::{ExtractError, Extractor, SourceKind};
pub use tabulate::tabulate;
pub use types::{
    Completion, GenerationRequest, PipelineOutput, QuizPipeline, QuizPipelineBuilder, QuizRow,
    TokenUsage,
};

use providers::ai::openai::estimate_cost;
use regex::Regex;
use tracing::{debug, info};

impl QuizPipeline {
    /// Executes the full quiz workflow for one request.
    ///
    /// The two stages run strictly sequentially: the generation stage must
    /// complete and its quiz payload is substituted into the review prompt
    /// before the review stage begins. Token usage and cost are summed
    /// across both stages. If either stage fails, the whole pipeline fails
    /// and the error propagates unchanged; in particular a generation
    /// failure means the review stage is never invoked.
    pub async fn execute(
        &self,
        request: GenerationRequest,
    ) -> Result<PipelineOutput, GenerateError> {
        info!(
            question_count = request.question_count,
            subject = %request.subject,
            "[execute] Starting quiz generation pipeline."
        );

        // --- Stage 1: Generation ---
        let generation_prompt = prompts::generation_prompt(&request)?;
        debug!(prompt = %generation_prompt, "--> Sending generation prompt");
        let generation = self.ai_provider.complete(&generation_prompt).await?;
        debug!("<-- Quiz payload from AI: {}", &generation.text);

        let quiz = Self::strip_code_fence(&generation.text)?;

        // --- Stage 2: Review ---
        let review_prompt = prompts::review_prompt(&request.subject, &quiz)?;
        debug!(prompt = %review_prompt, "--> Sending review prompt");
        let review = self.ai_provider.complete(&review_prompt).await?;

        let mut usage = generation.usage;
        usage.accumulate(&review.usage);
        let cost = estimate_cost(&usage);

        info!(
            total_tokens = usage.total_tokens,
            cost, "[execute] Pipeline finished."
        );

        Ok(PipelineOutput {
            quiz,
            review: review.text,
            usage,
            cost,
        })
    }

    /// Extracts the payload from a markdown code fence, if the model wrapped
    /// its response in one; otherwise returns the trimmed response as-is.
    fn strip_code_fence(raw_response: &str) -> Result<String, GenerateError> {
        let re = Regex::new(r"```(?:json)?\n?([\s\S]*?)```")?;
        let payload = re
            .captures(raw_response)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_else(|| raw_response.trim().to_string());
        Ok(payload)
    }
}
