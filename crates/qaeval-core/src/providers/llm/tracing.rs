use super::{LlmClient, ResponseSchema};
use crate::model::LlmResponse;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info_span, Instrument};

/// Records each judge request on a span: provider, model, token usage, latency, errors.
pub struct TracingLlmClient {
    inner: Arc<dyn LlmClient>,
    model: String,
}

impl TracingLlmClient {
    pub fn new(inner: Arc<dyn LlmClient>, model: String) -> Self {
        Self { inner, model }
    }
}

#[async_trait]
impl LlmClient for TracingLlmClient {
    async fn complete_structured(
        &self,
        prompt: &str,
        schema: &ResponseSchema,
    ) -> anyhow::Result<LlmResponse> {
        let span = info_span!(
            "judge.llm.request",
            "llm.provider" = self.inner.provider_name(),
            "llm.request.model" = self.model.as_str(),
            "llm.schema" = schema.name.as_str(),
            "llm.prompt_chars" = prompt.chars().count() as u64,
            "llm.usage.input_tokens" = tracing::field::Empty,
            "llm.usage.output_tokens" = tracing::field::Empty,
            "llm.duration_ms" = tracing::field::Empty,
            "error" = tracing::field::Empty,
            "error.message" = tracing::field::Empty
        );

        async move {
            let start = std::time::Instant::now();
            let result = self.inner.complete_structured(prompt, schema).await;
            let span = tracing::Span::current();
            span.record("llm.duration_ms", start.elapsed().as_millis() as u64);

            match &result {
                Ok(resp) => {
                    if let Some(usage) = resp.meta.get("usage") {
                        if let Some(i) = usage.get("input_tokens").and_then(|v| v.as_u64()) {
                            span.record("llm.usage.input_tokens", i);
                        }
                        if let Some(o) = usage.get("output_tokens").and_then(|v| v.as_u64()) {
                            span.record("llm.usage.output_tokens", o);
                        }
                    }
                    tracing::debug!(chars = resp.text.len(), "judge response received");
                }
                Err(e) => {
                    span.record("error", true);
                    span.record("error.message", e.to_string().as_str());
                    tracing::warn!(error = %e, "judge request failed");
                }
            }

            result
        }
        .instrument(span)
        .await
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }
}
