use super::{AgentPipeline, PipelineInput, PipelineOutput};
use crate::model::ChatMessage;
use async_trait::async_trait;

/// Stand-in pipeline: answers with a fixed text, or echoes the question.
#[derive(Debug, Clone, Default)]
pub struct FakePipeline {
    answer: Option<String>,
}

impl FakePipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(answer: impl Into<String>) -> Self {
        Self {
            answer: Some(answer.into()),
        }
    }
}

#[async_trait]
impl AgentPipeline for FakePipeline {
    async fn invoke(&self, input: PipelineInput) -> anyhow::Result<PipelineOutput> {
        let question = input
            .messages
            .last()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        let answer = self.answer.clone().unwrap_or(question);

        let mut messages = input.messages;
        messages.push(ChatMessage::new("ai", answer));
        Ok(PipelineOutput { messages })
    }
}
