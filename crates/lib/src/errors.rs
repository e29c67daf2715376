use thiserror::Error;

/// Custom error types for the quiz generation pipeline.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to the AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned an error: {0}")]
    AiApi(String),
    #[error("AI provider returned an empty completion")]
    EmptyCompletion,
    #[error("API key is missing")]
    MissingApiKey,
    #[error("AI provider is missing")]
    MissingAiProvider,
    #[error("Prompt template placeholder `{name}` was not filled")]
    MissingPlaceholder { name: String },
    #[error("Quiz payload is not a JSON object: {0}")]
    PayloadParse(String),
    #[error("Quiz entry `{entry}` is missing or has a malformed `{field}` field")]
    SchemaViolation { entry: String, field: &'static str },
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}
