//! End-to-end run over the public API with the fake judge and fake pipeline.

use qaeval_core::agent::fake::FakePipeline;
use qaeval_core::agent::AgentRunner;
use qaeval_core::config::JudgeConfig;
use qaeval_core::dataset::builtin_examples;
use qaeval_core::engine::Harness;
use qaeval_core::errors::EvalError;
use qaeval_core::judge::Judge;
use qaeval_core::model::Example;
use qaeval_core::report::console::format_progress_line;
use qaeval_core::report::json::{write_json, RunArtifacts};
use qaeval_core::report::progress::{ProgressEvent, ProgressSink};
use std::sync::{Arc, Mutex};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn harness(judge_response: &str, answer: &str) -> Harness {
    init_tracing();
    let judge = Judge::from_config(JudgeConfig::fake(judge_response)).unwrap();
    let runner = AgentRunner::new(Arc::new(FakePipeline::with_answer(answer)));
    Harness::new(runner, judge)
}

#[tokio::test]
async fn builtin_set_runs_end_to_end() {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink_lines = lines.clone();
    let sink: ProgressSink = Arc::new(move |ev: ProgressEvent| {
        sink_lines.lock().unwrap().push(format_progress_line(
            ev.position,
            ev.total,
            &ev.question,
            ev.score,
        ));
    });

    let examples = builtin_examples();
    let report = harness(r#"{"score": 0.8, "comment": "fine"}"#, "some answer")
        .with_progress(sink)
        .run(&examples)
        .await
        .unwrap();

    assert_eq!(report.records.len(), examples.len());
    assert!((report.mean_score - 0.8).abs() < 1e-9);
    assert!(report.records.iter().all(|r| r.comment == "fine"));

    let lines = lines.lock().unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "[1/3] Q: What is docker-compose.yml?... → score: 0.80");
}

#[tokio::test]
async fn out_of_range_judge_scores_are_clamped() {
    let report = harness(r#"{"score": 3.5}"#, "answer")
        .run(&[Example::new("Q", "E")])
        .await
        .unwrap();
    assert_eq!(report.records[0].score, 1.0);
    assert_eq!(report.mean_score, 1.0);
}

#[tokio::test]
async fn schema_violation_aborts_with_example_index() {
    let err = harness("not json at all", "answer")
        .run(&[Example::new("Q0", "E0"), Example::new("Q1", "E1")])
        .await
        .unwrap_err();
    match err {
        EvalError::ExampleFailed { index, source, .. } => {
            assert_eq!(index, 0);
            assert!(matches!(*source, EvalError::SchemaViolation { .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn report_is_available_as_structured_data() {
    let h = harness(r#"{"score": 0.5, "comment": "half"}"#, "answer");
    let report = h.run_concurrent(&builtin_examples(), 3).await.unwrap();

    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("out.json");
    let artifacts = RunArtifacts::new(&report, &h.judge().config().model);
    write_json(&artifacts, &path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["key"], "qa_correctness");
    assert_eq!(json["judge_model"], "fake");
    assert_eq!(json["mean_score"], 0.5);
    let records = json["records"].as_array().unwrap();
    assert_eq!(records.len(), 3);
    for (i, r) in records.iter().enumerate() {
        assert_eq!(r["index"], i);
        assert_eq!(r["comment"], "half");
    }
}
