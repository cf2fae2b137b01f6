use async_trait::async_trait;

use super::{ModelError, ModelProvider, ModelRequest};

#[derive(Debug, Default)]
pub struct MockModelProvider;

#[async_trait]
impl ModelProvider for MockModelProvider {
    async fn complete(&self, request: ModelRequest) -> Result<String, ModelError> {
        Ok(format!(
            "Mock health assistant reply.\n\nPrompt: {}",
            request.prompt
        ))
    }
}
