use super::super::args::RunArgs;
use super::builder::{agent_runner, judge_config, load_dataset};
use crate::exit_codes;
use anyhow::Context;
use qaeval_core::engine::Harness;
use qaeval_core::errors::EvalError;
use qaeval_core::judge::Judge;
use qaeval_core::report::console::{default_progress_sink, print_summary};
use qaeval_core::report::json::{write_json, RunArtifacts};

pub(crate) async fn cmd_run(args: RunArgs) -> anyhow::Result<i32> {
    let setup = (|| {
        let examples = load_dataset(&args.dataset)?;
        let judge = Judge::from_config(judge_config(&args.judge)?)?;
        let runner = agent_runner(&args.agent)?;
        Ok::<_, EvalError>((examples, Harness::new(runner, judge)))
    })();
    let (examples, harness) = match setup {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    tracing::info!(
        examples = examples.len(),
        judge = harness.judge().config().provider.as_str(),
        model = %harness.judge().config().model,
        parallel = args.parallel,
        "starting evaluation"
    );

    let harness = harness.with_progress(default_progress_sink());
    let report = match harness.run_concurrent(&examples, args.parallel).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {}", describe_failure(&e, examples.len()));
            return Ok(exit_codes::RUN_FAILED);
        }
    };

    print_summary(&report);

    if let Some(path) = &args.output {
        let artifacts = RunArtifacts::new(&report, &harness.judge().config().model);
        if let Err(e) =
            write_json(&artifacts, path).with_context(|| format!("failed to write {}", path.display()))
        {
            eprintln!("error: {e:#}");
            return Ok(exit_codes::OUTPUT_FAILED);
        }
    }

    if let Some(min) = args.min_score {
        if report.mean_score < min {
            eprintln!(
                "mean score {:.2} is below --min-score {:.2}",
                report.mean_score, min
            );
            return Ok(exit_codes::BELOW_MIN_SCORE);
        }
    }

    Ok(exit_codes::SUCCESS)
}

/// `example i/n (question prefix) failed: <cause>`
fn describe_failure(err: &EvalError, total: usize) -> String {
    match err {
        EvalError::ExampleFailed {
            index,
            question,
            source,
        } => {
            let prefix: String = question.chars().take(50).collect();
            format!(
                "example {}/{} ({}) failed: {}",
                index + 1,
                total,
                prefix,
                source
            )
        }
        other => other.to_string(),
    }
}
