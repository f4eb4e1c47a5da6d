//! Adapter between harness input records and the agent pipeline.

pub mod fake;
pub mod http;

use crate::errors::EvalError;
use crate::model::{AgentInput, AgentOutput, ChatMessage};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Invocation shape of the agent pipeline: `{messages: [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineInput {
    pub messages: Vec<ChatMessage>,
}

/// Result shape of the agent pipeline; only `messages` is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOutput {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// The agent workflow under evaluation.
#[async_trait]
pub trait AgentPipeline: Send + Sync {
    async fn invoke(&self, input: PipelineInput) -> anyhow::Result<PipelineOutput>;
}

/// Reduces the multi-turn pipeline interface to single-question, single-answer runs.
#[derive(Clone)]
pub struct AgentRunner {
    pipeline: Arc<dyn AgentPipeline>,
}

impl AgentRunner {
    pub fn new(pipeline: Arc<dyn AgentPipeline>) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self, input: &AgentInput) -> Result<AgentOutput, EvalError> {
        let content = input
            .messages
            .first()
            .map(|m| m.content.clone())
            .unwrap_or_default();

        let result = self
            .pipeline
            .invoke(PipelineInput {
                messages: vec![ChatMessage::human(content)],
            })
            .await
            .map_err(EvalError::pipeline_failure)?;

        let answer = result
            .messages
            .last()
            .map(|m| m.content.clone())
            .unwrap_or_default();

        Ok(AgentOutput {
            final_report: answer,
        })
    }
}
