//! Deterministic echo model client.

use async_trait::async_trait;
use ragrelay_core::ports::{GenerationError, ModelClient};
use ragrelay_core::ModelMode;

/// Marker appended to every mock completion.
pub const MOCK_COMPLETION_MARKER: &str = "[mock completion]";

/// Model identifier reported by the mock client.
pub const MOCK_MODEL_NAME: &str = "mock-echo";

/// Echo backend with no external dependency.
///
/// Appends [`MOCK_COMPLETION_MARKER`] to the prompt and truncates the result
/// to the prompt length plus `max_new_tokens` characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockModelClient;

impl MockModelClient {
    pub const fn new() -> Self {
        Self
    }

    /// The completion this client produces, without going through the trait.
    pub fn complete(prompt: &str, max_new_tokens: u32) -> String {
        let separator = if prompt.ends_with(' ') { "" } else { " " };
        let limit = prompt.chars().count() + max_new_tokens as usize;

        format!("{prompt}{separator}{MOCK_COMPLETION_MARKER}")
            .chars()
            .take(limit)
            .collect()
    }
}

#[async_trait]
impl ModelClient for MockModelClient {
    fn mode(&self) -> ModelMode {
        ModelMode::Mock
    }

    fn model_name(&self) -> &str {
        MOCK_MODEL_NAME
    }

    async fn generate(
        &self,
        prompt: &str,
        max_new_tokens: u32,
        _temperature: f32,
    ) -> Result<String, GenerationError> {
        Ok(Self::complete(prompt, max_new_tokens))
    }
}
