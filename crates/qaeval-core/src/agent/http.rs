use super::{AgentPipeline, PipelineInput, PipelineOutput};
use crate::model::ChatMessage;
use async_trait::async_trait;

/// Agent pipeline served over HTTP: `POST {messages}` -> `{messages}`.
pub struct HttpPipeline {
    pub endpoint: String,
    bearer: Option<String>,
    client: reqwest::Client,
}

impl HttpPipeline {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            bearer: None,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }
}

/// Reads `messages` from a pipeline response.
///
/// `content` may be a plain string or a list of parts (`{"type": "text", "text": ...}`),
/// in which case the text parts are concatenated. A missing `messages` reads as empty.
pub(crate) fn parse_output(body: &serde_json::Value) -> anyhow::Result<PipelineOutput> {
    let Some(raw) = body.get("messages") else {
        return Ok(PipelineOutput::default());
    };
    let items = raw
        .as_array()
        .ok_or_else(|| anyhow::anyhow!("pipeline response 'messages' is not an array"))?;

    let messages = items
        .iter()
        .map(|m| {
            let role = m
                .get("role")
                .or_else(|| m.get("type"))
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            let content = match m.get("content") {
                Some(serde_json::Value::String(s)) => s.clone(),
                Some(serde_json::Value::Array(parts)) => parts
                    .iter()
                    .filter_map(|p| p.as_str().or_else(|| p.get("text").and_then(|t| t.as_str())))
                    .collect::<Vec<_>>()
                    .join(""),
                _ => String::new(),
            };
            ChatMessage { role, content }
        })
        .collect();

    Ok(PipelineOutput { messages })
}

#[async_trait]
impl AgentPipeline for HttpPipeline {
    async fn invoke(&self, input: PipelineInput) -> anyhow::Result<PipelineOutput> {
        let mut req = self.client.post(&self.endpoint).json(&input);
        if let Some(token) = &self.bearer {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let error_text = resp.text().await.unwrap_or_default();
            anyhow::bail!("agent pipeline error (status {}): {}", status, error_text);
        }

        let body: serde_json::Value = resp.json().await?;
        let output = parse_output(&body)?;
        tracing::debug!(endpoint = %self.endpoint, messages = output.messages.len(), "pipeline invoked");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn input_serializes_as_messages_object() {
        let input = PipelineInput {
            messages: vec![ChatMessage::human("hi")],
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({"messages": [{"role": "human", "content": "hi"}]})
        );
    }

    #[test]
    fn parses_string_content() {
        let out = parse_output(&json!({
            "messages": [
                {"type": "human", "content": "Q"},
                {"type": "ai", "content": "A", "id": "run-1"}
            ]
        }))
        .unwrap();
        assert_eq!(out.messages.len(), 2);
        assert_eq!(out.messages[1], ChatMessage::new("ai", "A"));
    }

    #[test]
    fn joins_content_parts() {
        let out = parse_output(&json!({
            "messages": [{"role": "assistant", "content": [
                {"type": "text", "text": "Use "},
                {"type": "text", "text": "prune."}
            ]}]
        }))
        .unwrap();
        assert_eq!(out.messages[0].content, "Use prune.");
    }

    #[test]
    fn missing_messages_reads_as_empty() {
        let out = parse_output(&json!({"status": "ok"})).unwrap();
        assert!(out.messages.is_empty());
    }

    #[test]
    fn non_array_messages_is_error() {
        assert!(parse_output(&json!({"messages": "nope"})).is_err());
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let base = crate::test_support::serve_once("500 Internal Server Error", "boom").await;
        let pipeline = HttpPipeline::new(format!("{base}/invoke"));
        let err = pipeline
            .invoke(PipelineInput {
                messages: vec![ChatMessage::human("Q")],
            })
            .await
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("status 500"), "{msg}");
        assert!(msg.contains("boom"), "{msg}");
    }

    #[tokio::test]
    async fn success_status_returns_messages() {
        let base = crate::test_support::serve_once(
            "200 OK",
            r#"{"messages": [{"type": "human", "content": "Q"}, {"type": "ai", "content": "A"}]}"#,
        )
        .await;
        let out = HttpPipeline::new(base)
            .with_bearer("t")
            .invoke(PipelineInput {
                messages: vec![ChatMessage::human("Q")],
            })
            .await
            .unwrap();
        assert_eq!(out.messages[1], ChatMessage::new("ai", "A"));
    }
}
