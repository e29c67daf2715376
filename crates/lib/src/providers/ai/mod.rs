pub mod openai;

use crate::errors::GenerateError;
use crate::types::Completion;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with an AI completion provider.
///
/// This defines a common interface for sending one prompt to a hosted
/// large-language-model endpoint and receiving its text plus token usage,
/// so the pipeline can be exercised against mock providers in tests.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Sends a single prompt and returns the model's completion.
    ///
    /// Failures (network, auth, rate limit, malformed response body) are
    /// surfaced as-is; no retries are performed.
    async fn complete(&self, prompt: &str) -> Result<Completion, GenerateError>;
}

dyn_clone::clone_trait_object!(AiProvider);
