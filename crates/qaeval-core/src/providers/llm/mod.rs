pub mod fake;
pub mod openai;
pub mod tracing;

use crate::config::{JudgeConfig, JudgeProvider};
use crate::errors::EvalError;
use crate::model::LlmResponse;
use async_trait::async_trait;
use std::sync::Arc;

/// Schema a structured-output request must conform to.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSchema {
    pub name: String,
    pub schema: serde_json::Value,
}

/// Narrow boundary to a chat-completion provider with a structured-output mode.
///
/// `LlmResponse::text` carries the raw payload; validating it against the schema
/// is the caller's job so any provider (or a plain JSON fallback) can be swapped in.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete_structured(
        &self,
        prompt: &str,
        schema: &ResponseSchema,
    ) -> anyhow::Result<LlmResponse>;

    fn provider_name(&self) -> &'static str;
}

/// Builds the judge client for `config`, wrapped in request tracing.
pub fn build_llm_client(config: &JudgeConfig) -> Result<Arc<dyn LlmClient>, EvalError> {
    config.validate()?;

    let inner: Arc<dyn LlmClient> = match config.provider {
        JudgeProvider::OpenAi => Arc::new(openai::OpenAiCompatibleClient::new(
            config.model.clone(),
            config.base_url.clone(),
            config.api_key.clone().unwrap_or_default(),
            config.temperature,
            config.max_tokens,
        )),
        JudgeProvider::Fake => {
            let mut client = fake::FakeClient::new(config.model.clone());
            if let Some(resp) = &config.fake_response {
                client = client.with_response(resp.clone());
            }
            Arc::new(client)
        }
    };

    ::tracing::debug!(provider = inner.provider_name(), model = %config.model, "judge client ready");
    Ok(Arc::new(tracing::TracingLlmClient::new(
        inner,
        config.model.clone(),
    )))
}
