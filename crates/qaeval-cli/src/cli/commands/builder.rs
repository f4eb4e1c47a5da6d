use super::super::args::{AgentArgs, AgentKind, DatasetArgs, JudgeArgs};
use qaeval_core::agent::fake::FakePipeline;
use qaeval_core::agent::http::HttpPipeline;
use qaeval_core::agent::{AgentPipeline, AgentRunner};
use qaeval_core::config::{JudgeConfig, JudgeProvider};
use qaeval_core::dataset::{builtin_examples, load_examples};
use qaeval_core::errors::EvalError;
use qaeval_core::model::Example;
use std::sync::Arc;

pub(crate) fn load_dataset(args: &DatasetArgs) -> Result<Vec<Example>, EvalError> {
    match &args.examples {
        Some(path) => load_examples(path),
        None => Ok(builtin_examples()),
    }
}

pub(crate) fn judge_config(args: &JudgeArgs) -> Result<JudgeConfig, EvalError> {
    let provider = JudgeProvider::parse(&args.judge)?;
    let mut cfg = JudgeConfig {
        provider,
        model: args.judge_model.clone(),
        base_url: args.judge_base_url.clone(),
        api_key: args.judge_api_key.clone(),
        temperature: args.judge_temperature,
        max_tokens: args.judge_max_tokens,
        fake_response: None,
    };
    if provider == JudgeProvider::Fake {
        cfg.model = "fake".to_string();
        cfg.fake_response = Some(fake_score_response(args.fake_judge_score));
    }
    cfg.validate()?;
    Ok(cfg)
}

fn fake_score_response(score: f64) -> String {
    format!(r#"{{"score": {}, "comment": "fake judge"}}"#, score)
}

pub(crate) fn agent_runner(args: &AgentArgs) -> Result<AgentRunner, EvalError> {
    let pipeline: Arc<dyn AgentPipeline> = match args.agent {
        AgentKind::Http => {
            let url = args
                .agent_url
                .as_deref()
                .filter(|u| !u.trim().is_empty())
                .ok_or_else(|| {
                    EvalError::Config(
                        "--agent http requires --agent-url (or QAEVAL_AGENT_URL)".into(),
                    )
                })?;
            let mut pipeline = HttpPipeline::new(url);
            if let Some(token) = &args.agent_token {
                pipeline = pipeline.with_bearer(token.clone());
            }
            Arc::new(pipeline)
        }
        AgentKind::Fake => match &args.agent_answer {
            Some(answer) => Arc::new(FakePipeline::with_answer(answer.clone())),
            None => Arc::new(FakePipeline::new()),
        },
    };
    Ok(AgentRunner::new(pipeline))
}
