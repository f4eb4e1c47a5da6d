use crate::agent::AgentRunner;
use crate::errors::EvalError;
use crate::judge::Judge;
use crate::model::{AgentInput, AggregateReport, Example, ResultRecord};
use crate::report::progress::{ProgressEvent, ProgressSink};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::Instrument;

/// Drives every example through the agent and the judge, then aggregates.
///
/// Fail-fast: the first agent or judge failure aborts the run and no report is
/// produced. The error names the example that was being processed.
#[derive(Clone)]
pub struct Harness {
    runner: AgentRunner,
    judge: Judge,
    progress: Option<ProgressSink>,
}

impl Harness {
    pub fn new(runner: AgentRunner, judge: Judge) -> Self {
        Self {
            runner,
            judge,
            progress: None,
        }
    }

    pub fn with_progress(mut self, sink: ProgressSink) -> Self {
        self.progress = Some(sink);
        self
    }

    pub fn judge(&self) -> &Judge {
        &self.judge
    }

    /// Processes examples strictly one at a time, in input order.
    pub async fn run(&self, examples: &[Example]) -> Result<AggregateReport, EvalError> {
        let total = examples.len();
        let mut records = Vec::with_capacity(total);

        for (index, example) in examples.iter().enumerate() {
            let record = self.evaluate_example(index, example).await?;
            self.emit_progress(&record, total);
            records.push(record);
        }

        let report = AggregateReport::from_records(records);
        tracing::info!(examples = total, mean_score = report.mean_score, "evaluation finished");
        Ok(report)
    }

    /// Processes up to `parallel` examples at once.
    ///
    /// Records come back in index order and the mean is summed in index order, so
    /// the report equals the sequential one regardless of completion order.
    /// Progress events are also emitted in index order; a finished record waits
    /// until every earlier one has been reported.
    pub async fn run_concurrent(
        &self,
        examples: &[Example],
        parallel: usize,
    ) -> Result<AggregateReport, EvalError> {
        if parallel <= 1 {
            return self.run(examples).await;
        }

        let total = examples.len();
        // No more permits than examples; also keeps the count under MAX_PERMITS.
        let permits = parallel.min(total.max(1)).min(Semaphore::MAX_PERMITS);
        let sem = Arc::new(Semaphore::new(permits));
        let mut join_set = JoinSet::new();

        for (index, example) in examples.iter().enumerate() {
            let sem = sem.clone();
            let this = self.clone();
            let example = example.clone();
            join_set.spawn(async move {
                // The semaphore is never closed.
                let _permit = sem.acquire_owned().await.ok();
                this.evaluate_example(index, &example).await
            });
        }

        let mut slots: Vec<Option<ResultRecord>> = vec![None; total];
        let mut next_unreported = 0;
        while let Some(joined) = join_set.join_next().await {
            let record = match joined {
                Ok(Ok(record)) => record,
                Ok(Err(e)) => {
                    join_set.abort_all();
                    return Err(e);
                }
                Err(join_err) => {
                    join_set.abort_all();
                    // Tasks are only aborted above, so a join error here is a panic.
                    std::panic::resume_unwind(join_err.into_panic());
                }
            };
            let index = record.index;
            slots[index] = Some(record);
            while let Some(Some(ready)) = slots.get(next_unreported) {
                self.emit_progress(ready, total);
                next_unreported += 1;
            }
        }

        let records: Vec<ResultRecord> = slots.into_iter().flatten().collect();
        let report = AggregateReport::from_records(records);
        tracing::info!(
            examples = total,
            parallel,
            mean_score = report.mean_score,
            "evaluation finished"
        );
        Ok(report)
    }

    async fn evaluate_example(
        &self,
        index: usize,
        example: &Example,
    ) -> Result<ResultRecord, EvalError> {
        let fail = |source: EvalError| EvalError::ExampleFailed {
            index,
            question: example.question.clone(),
            source: Box::new(source),
        };

        async {
            let input = AgentInput::from_question(&example.question);
            let output = self.runner.run(&input).await.map_err(fail)?;
            let actual = output.final_report;

            let verdict = self
                .judge
                .score(&example.question, &example.expected, &actual)
                .await
                .map_err(fail)?;

            tracing::debug!(score = verdict.score, "example scored");
            Ok::<_, EvalError>(ResultRecord {
                index,
                question: example.question.clone(),
                expected: example.expected.clone(),
                actual,
                score: verdict.score,
                comment: verdict.comment.unwrap_or_default(),
            })
        }
        .instrument(tracing::debug_span!("example", index))
        .await
    }

    fn emit_progress(&self, record: &ResultRecord, total: usize) {
        if let Some(sink) = &self.progress {
            sink(ProgressEvent {
                position: record.index + 1,
                total,
                question: record.question.clone(),
                score: record.score,
            });
        }
    }
}
