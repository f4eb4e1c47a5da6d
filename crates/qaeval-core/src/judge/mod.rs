//! LLM-as-judge scoring of an answer against a reference answer.
//!
//! - prompt.rs: prompt builder only
//! - schema.rs: structured-output contract
//! - client.rs: response parse boundary

mod client;
pub mod prompt;
pub mod schema;


pub use prompt::build_prompt;
pub use schema::ScoreSchema;

use crate::config::JudgeConfig;
use crate::errors::EvalError;
use crate::model::{JudgeVerdict, QA_CORRECTNESS_KEY};
use crate::providers::llm::{build_llm_client, LlmClient, ResponseSchema};
use std::sync::Arc;

#[derive(Clone)]
pub struct Judge {
    config: JudgeConfig,
    client: Arc<dyn LlmClient>,
    schema: ResponseSchema,
}

impl Judge {
    pub fn new(config: JudgeConfig, client: Arc<dyn LlmClient>) -> Self {
        Self {
            config,
            client,
            schema: schema::score_response_schema(),
        }
    }

    /// Builds the provider client from `config` and wraps it.
    pub fn from_config(config: JudgeConfig) -> Result<Self, EvalError> {
        let client = build_llm_client(&config)?;
        Ok(Self::new(config, client))
    }

    pub fn config(&self) -> &JudgeConfig {
        &self.config
    }

    /// Scores `actual` against `expected` for `question` on a 0.0..=1.0 scale.
    ///
    /// An empty question, or empty expected and actual answers together, score 0.0
    /// without a provider call. Provider failures are returned as-is, never retried.
    pub async fn score(
        &self,
        question: &str,
        expected: &str,
        actual: &str,
    ) -> Result<JudgeVerdict, EvalError> {
        if question.is_empty() || (expected.is_empty() && actual.is_empty()) {
            tracing::debug!("degenerate example, scoring 0.0 without a judge call");
            return Ok(JudgeVerdict::zero());
        }

        let prompt = build_prompt(question, expected, actual);
        let resp = self
            .client
            .complete_structured(&prompt, &self.schema)
            .await
            .map_err(|e| EvalError::judge_failure(self.client.provider_name(), e))?;

        let parsed = client::parse_score(&resp.text)?;
        let score = parsed.score.clamp(0.0, 1.0);
        if score != parsed.score {
            tracing::warn!(raw = parsed.score, clamped = score, "judge score out of range");
        }

        Ok(JudgeVerdict {
            key: QA_CORRECTNESS_KEY.to_string(),
            score,
            comment: Some(parsed.comment),
        })
    }
}
