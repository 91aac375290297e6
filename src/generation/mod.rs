pub mod gemini;
pub mod prompts;

use async_trait::async_trait;

/// An outside language-model service: one opaque call, no retry, no streaming.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, system_prompt: &str, input: &str) -> Result<String, GenerationError>;
}

#[derive(Debug)]
pub enum GenerationError {
    Request(String),
    Upstream { status: u16, body: String },
    Decode(String),
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationError::Request(msg) => write!(f, "request failed: {msg}"),
            GenerationError::Upstream { status, body } => {
                write!(f, "upstream returned {status}: {body}")
            }
            GenerationError::Decode(msg) => write!(f, "invalid response: {msg}"),
        }
    }
}

impl std::error::Error for GenerationError {}
