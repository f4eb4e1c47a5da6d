use super::{LlmClient, ResponseSchema};
use crate::model::LlmResponse;
use async_trait::async_trait;

#[derive(Debug)]
pub struct FakeClient {
    model: String,
    fixed_response: Option<String>,
}

impl FakeClient {
    pub fn new(model: String) -> Self {
        Self {
            model,
            fixed_response: None,
        }
    }

    pub fn with_response(mut self, response: String) -> Self {
        self.fixed_response = Some(response);
        self
    }
}

#[async_trait]
impl LlmClient for FakeClient {
    async fn complete_structured(
        &self,
        _prompt: &str,
        _schema: &ResponseSchema,
    ) -> anyhow::Result<LlmResponse> {
        // Default: a perfect score, so dry runs exercise the full path.
        let text = self
            .fixed_response
            .clone()
            .unwrap_or_else(|| r#"{"score": 1.0, "comment": "fake judge"}"#.to_string());

        Ok(LlmResponse {
            text,
            provider: "fake".to_string(),
            model: self.model.clone(),
            meta: serde_json::json!({}),
        })
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}
