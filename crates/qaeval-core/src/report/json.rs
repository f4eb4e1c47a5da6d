use crate::model::{AggregateReport, ResultRecord, QA_CORRECTNESS_KEY};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Machine-readable results of one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunArtifacts {
    pub run_id: String,
    /// RFC 3339 timestamp.
    pub generated_at: String,
    pub key: String,
    pub judge_model: String,
    pub mean_score: f64,
    pub records: Vec<ResultRecord>,
}

impl RunArtifacts {
    pub fn new(report: &AggregateReport, judge_model: &str) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            key: QA_CORRECTNESS_KEY.to_string(),
            judge_model: judge_model.to_string(),
            mean_score: report.mean_score,
            records: report.records.clone(),
        }
    }
}

pub fn write_json(artifacts: &RunArtifacts, out: &Path) -> anyhow::Result<()> {
    std::fs::write(out, serde_json::to_string_pretty(artifacts)?)?;
    tracing::info!(path = %out.display(), records = artifacts.records.len(), "wrote results");
    Ok(())
}
