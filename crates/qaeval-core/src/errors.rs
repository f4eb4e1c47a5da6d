//! Error taxonomy for an evaluation run.

/// Boxed error used to carry boundary failures without reinterpreting them.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// Judge output could not be coerced into the score schema.
    #[error("judge response violates score schema: {detail}")]
    SchemaViolation { detail: String },

    /// Transport or provider-side failure during a judge call.
    #[error("judge call to '{provider}' failed: {source}")]
    JudgeFailure {
        provider: String,
        #[source]
        source: BoxError,
    },

    /// Failure raised by the agent pipeline, passed through as-is.
    #[error(transparent)]
    PipelineFailure(BoxError),

    /// Failure of one example; aborts the whole run.
    #[error("example {index} ({question:?}) failed: {source}")]
    ExampleFailed {
        index: usize,
        question: String,
        #[source]
        source: Box<EvalError>,
    },

    #[error("dataset error: {0}")]
    Dataset(String),

    #[error("config error: {0}")]
    Config(String),
}

impl EvalError {
    pub fn schema_violation(detail: impl Into<String>) -> Self {
        Self::SchemaViolation {
            detail: detail.into(),
        }
    }

    pub fn judge_failure(provider: impl Into<String>, err: anyhow::Error) -> Self {
        Self::JudgeFailure {
            provider: provider.into(),
            source: err.into(),
        }
    }

    pub fn pipeline_failure(err: anyhow::Error) -> Self {
        Self::PipelineFailure(err.into())
    }

    /// True for failures originating in the judge boundary (schema or transport).
    pub fn is_judge_failure(&self) -> bool {
        match self {
            Self::SchemaViolation { .. } | Self::JudgeFailure { .. } => true,
            Self::ExampleFailed { source, .. } => source.is_judge_failure(),
            _ => false,
        }
    }

    pub fn is_pipeline_failure(&self) -> bool {
        match self {
            Self::PipelineFailure(_) => true,
            Self::ExampleFailed { source, .. } => source.is_pipeline_failure(),
            _ => false,
        }
    }

    /// Index of the example being processed when the run failed, if any.
    pub fn example_index(&self) -> Option<usize> {
        match self {
            Self::ExampleFailed { index, .. } => Some(*index),
            _ => None,
        }
    }
}
