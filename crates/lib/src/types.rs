use crate::errors::GenerateError;
use crate::prompts::RESPONSE_JSON_EXAMPLE;
use crate::providers::ai::AiProvider;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token counters reported by the completion endpoint for one call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

impl TokenUsage {
    /// Adds another call's counters into this one.
    pub fn accumulate(&mut self, other: &TokenUsage) {
        self.prompt_tokens += other.prompt_tokens;
        self.completion_tokens += other.completion_tokens;
        self.total_tokens += other.total_tokens;
    }
}

/// The raw text of one model call together with its token usage.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub usage: TokenUsage,
}

/// Everything needed to ask the model for one quiz.
///
/// Immutable once built; one instance is created per user submission and
/// owned by the pipeline for the duration of a single `execute` call.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Full source document text the questions must conform to.
    pub source_text: String,
    /// How many questions to ask for. Must be at least 1.
    pub question_count: u32,
    /// The subject the questions are aimed at, e.g. "Machine Learning".
    pub subject: String,
    /// Complexity level of the questions, e.g. "simple".
    pub tone: String,
    /// A serialized example collection showing the model the expected
    /// response shape. Not enforced as a schema on the model's output.
    pub format_example: String,
}

impl GenerationRequest {
    /// Creates a request using the built-in response format example.
    pub fn new(
        source_text: impl Into<String>,
        question_count: u32,
        subject: impl Into<String>,
        tone: impl Into<String>,
    ) -> Self {
        Self {
            source_text: source_text.into(),
            question_count,
            subject: subject.into(),
            tone: tone.into(),
            format_example: RESPONSE_JSON_EXAMPLE.to_string(),
        }
    }
}

/// The aggregated result of the generation and review stages.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// The quiz payload from the generation stage, expected (but not
    /// guaranteed) to be a JSON object of question entries.
    pub quiz: String,
    /// Free-text commentary from the review stage.
    pub review: String,
    /// Token usage summed across both stages.
    pub usage: TokenUsage,
    /// Estimated cost in USD for both stages.
    pub cost: f64,
}

/// One flattened quiz question, ready for CSV or JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRow {
    /// The question stem.
    #[serde(rename = "MCQ")]
    pub mcq: String,
    /// The labeled choices joined as `"a: ... | b: ..."`.
    #[serde(rename = "Choices")]
    pub choices: String,
    /// The label of the correct choice.
    #[serde(rename = "Correct")]
    pub correct: String,
}

/// Runs the two-stage quiz generation workflow against an AI provider.
pub struct QuizPipeline {
    pub(crate) ai_provider: Box<dyn AiProvider>,
}

impl fmt::Debug for QuizPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizPipeline")
            .field("ai_provider", &self.ai_provider)
            .finish()
    }
}

/// A builder for creating `QuizPipeline` instances.
///
/// The AI provider is injected here rather than read from process-wide
/// state, so credentials and model parameters stay scoped to the pipeline
/// that was built with them.
#[derive(Default)]
pub struct QuizPipelineBuilder {
    ai_provider: Option<Box<dyn AiProvider>>,
}

impl QuizPipelineBuilder {
    /// Creates a new `QuizPipelineBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the AI provider used by both pipeline stages.
    pub fn ai_provider(mut self, ai_provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(ai_provider);
        self
    }

    /// Builds the `QuizPipeline`, failing if no provider was configured.
    pub fn build(self) -> Result<QuizPipeline, GenerateError> {
        let ai_provider = self.ai_provider.ok_or(GenerateError::MissingAiProvider)?;
        Ok(QuizPipeline { ai_provider })
    }
}
