use super::{LlmClient, ResponseSchema};
use crate::model::LlmResponse;
use async_trait::async_trait;
use serde_json::json;

/// Chat-completions client for OpenAI-compatible endpoints (OpenAI, OpenRouter, ...).
pub struct OpenAiCompatibleClient {
    pub model: String,
    pub base_url: String,
    pub api_key: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub client: reqwest::Client,
}

impl OpenAiCompatibleClient {
    pub fn new(
        model: String,
        base_url: String,
        api_key: String,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            model,
            base_url,
            api_key,
            temperature,
            max_tokens,
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    pub(crate) fn request_body(&self, prompt: &str, schema: &ResponseSchema) -> serde_json::Value {
        json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": schema.name,
                    "schema": schema.schema,
                    "strict": false
                }
            }
        })
    }
}

/// Pulls `choices[0].message.content` out of a chat-completions response.
pub(crate) fn extract_content(body: &serde_json::Value) -> anyhow::Result<String> {
    body.pointer("/choices/0/message/content")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("chat completion response missing choices[0].message.content"))
}

#[async_trait]
impl LlmClient for OpenAiCompatibleClient {
    async fn complete_structured(
        &self,
        prompt: &str,
        schema: &ResponseSchema,
    ) -> anyhow::Result<LlmResponse> {
        let url = self.endpoint();
        let body = self.request_body(prompt, schema);

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let error_text = resp.text().await.unwrap_or_default();
            anyhow::bail!("chat completion API error (status {}): {}", status, error_text);
        }

        let json: serde_json::Value = resp.json().await?;
        let text = extract_content(&json)?;

        let mut meta = json!({});
        if let Some(usage) = json.get("usage") {
            meta["usage"] = json!({
                "input_tokens": usage.get("prompt_tokens"),
                "output_tokens": usage.get("completion_tokens"),
            });
        }

        Ok(LlmResponse {
            text,
            provider: "openai".to_string(),
            model: self.model.clone(),
            meta,
        })
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JudgeConfig;
    use crate::errors::EvalError;
    use crate::judge::Judge;

    fn client() -> OpenAiCompatibleClient {
        OpenAiCompatibleClient::new(
            "openai/gpt-5.2".to_string(),
            "https://openrouter.ai/api/v1/".to_string(),
            "test-key".to_string(),
            0.0,
            64,
        )
    }

    #[test]
    fn endpoint_joins_base_url_without_double_slash() {
        assert_eq!(
            client().endpoint(),
            "https://openrouter.ai/api/v1/chat/completions"
        );
    }

    #[test]
    fn request_carries_single_user_message_and_schema() {
        let schema = ResponseSchema {
            name: "ScoreSchema".into(),
            schema: json!({"type": "object"}),
        };
        let body = client().request_body("rate this", &schema);

        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "rate this");
        assert_eq!(body["temperature"], 0.0);
        assert_eq!(body["response_format"]["type"], "json_schema");
        assert_eq!(body["response_format"]["json_schema"]["name"], "ScoreSchema");
        assert_eq!(
            body["response_format"]["json_schema"]["schema"]["type"],
            "object"
        );
    }

    #[test]
    fn extract_content_reads_first_choice() {
        let body = json!({"choices": [{"message": {"content": "{\"score\": 0.5}"}}]});
        assert_eq!(extract_content(&body).unwrap(), "{\"score\": 0.5}");
    }

    #[test]
    fn extract_content_errors_without_choices() {
        let err = extract_content(&json!({"error": "nope"})).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    fn config_for(base_url: String) -> JudgeConfig {
        JudgeConfig {
            base_url,
            api_key: Some("test-key".into()),
            ..JudgeConfig::default()
        }
    }

    #[tokio::test]
    async fn error_status_surfaces_as_judge_failure() {
        let base =
            crate::test_support::serve_once("500 Internal Server Error", r#"{"error": "down"}"#)
                .await;
        let judge = Judge::from_config(config_for(base)).unwrap();
        let err = judge.score("Q", "E", "A").await.unwrap_err();
        match &err {
            EvalError::JudgeFailure { provider, source } => {
                assert_eq!(provider, "openai");
                assert!(source.to_string().contains("status 500"), "{source}");
            }
            other => panic!("expected JudgeFailure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn success_response_is_scored() {
        let base = crate::test_support::serve_once(
            "200 OK",
            r#"{"choices": [{"message": {"content": "{\"score\": 0.75, \"comment\": \"close\"}"}}], "usage": {"prompt_tokens": 10, "completion_tokens": 5}}"#,
        )
        .await;
        let judge = Judge::from_config(config_for(base)).unwrap();
        let verdict = judge.score("Q", "E", "A").await.unwrap();
        assert_eq!(verdict.score, 0.75);
        assert_eq!(verdict.comment.as_deref(), Some("close"));
    }
}
