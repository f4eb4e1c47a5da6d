//! Per-example progress reporting. The harness emits one event per finished
//! example; the console layer consumes them via a sink.

use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressEvent {
    /// 1-based position of the example in the input.
    pub position: usize,
    pub total: usize,
    pub question: String,
    pub score: f64,
}

pub type ProgressSink = Arc<dyn Fn(ProgressEvent) + Send + Sync>;
