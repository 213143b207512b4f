use thiserror::Error;

/// Failure of one structured LLM exchange.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Failed to send request to LLM: {0}")]
    Http(#[from] reqwest::Error),

    #[error("LLM request failed (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned an empty response")]
    EmptyResponse,

    #[error("LLM output does not match the {prompt} schema: {source}")]
    InvalidOutput {
        prompt: String,
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize prompt input: {0}")]
    Serialize(#[source] serde_json::Error),
}
