pub mod ollama;
pub mod openai;

pub use ollama::OllamaClient;
pub use openai::OpenAiCompatClient;

use async_trait::async_trait;

use crate::error::PromptError;

/// Anything that turns a rendered prompt into raw model text.
///
/// Timeouts and cancellation belong to the implementation; callers only see
/// the final `Result`.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, PromptError>;

    /// Model identifier used in logs
    fn model_name(&self) -> &str;
}
