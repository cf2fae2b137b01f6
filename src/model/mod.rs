mod gemini;
mod mock;

use async_trait::async_trait;
use thiserror::Error;

pub use gemini::GeminiProvider;
pub use mock::MockModelProvider;

#[derive(Debug, Clone)]
pub struct ModelRequest {
    pub prompt: String,
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model request timed out")]
    Timeout,

    #[error("model request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model response contained no usable text")]
    EmptyResponse,
}

#[async_trait]
pub trait ModelProvider: Send + Sync {
    async fn complete(&self, request: ModelRequest) -> Result<String, ModelError>;
}
