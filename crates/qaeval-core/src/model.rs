use serde::{Deserialize, Serialize};

/// Scoring dimension reported by the judge.
pub const QA_CORRECTNESS_KEY: &str = "qa_correctness";

/// One fixed test case: a question and its reference answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub question: String,
    pub expected: String,
}

impl Example {
    pub fn new(question: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            expected: expected.into(),
        }
    }
}

/// A conversational message as exchanged with the agent pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn human(content: impl Into<String>) -> Self {
        Self::new("human", content)
    }
}

/// Harness-side input handed to the agent runner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentInput {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl AgentInput {
    pub fn from_question(question: &str) -> Self {
        Self {
            messages: vec![ChatMessage::user(question)],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentOutput {
    pub final_report: String,
}

/// Outcome of a single judge evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgeVerdict {
    pub key: String,
    pub score: f64,
    /// `None` when the judge short-circuited without a model call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl JudgeVerdict {
    pub fn zero() -> Self {
        Self {
            key: QA_CORRECTNESS_KEY.to_string(),
            score: 0.0,
            comment: None,
        }
    }
}

/// Per-example outcome of running the pipeline and scoring it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub index: usize,
    pub question: String,
    pub expected: String,
    pub actual: String,
    pub score: f64,
    pub comment: String,
}

/// Run-level summary: mean score plus every record in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    pub mean_score: f64,
    pub records: Vec<ResultRecord>,
}

impl AggregateReport {
    /// Builds the report from records already ordered by index.
    pub fn from_records(records: Vec<ResultRecord>) -> Self {
        let mean_score = if records.is_empty() {
            0.0
        } else {
            records.iter().map(|r| r.score).sum::<f64>() / records.len() as f64
        };
        Self {
            mean_score,
            records,
        }
    }
}

/// Raw response from an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub text: String,
    pub provider: String,
    pub model: String,
    pub meta: serde_json::Value,
}
