use clap::{Parser, Subcommand, ValueEnum};
use qaeval_core::config::{DEFAULT_BASE_URL, DEFAULT_JUDGE_MODEL, DEFAULT_MAX_TOKENS};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "qaeval", version, about = "LLM-as-judge evaluation of a conversational agent")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run every example through the agent and score it with the judge
    Run(RunArgs),
    /// Print the example set
    List(ListArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct DatasetArgs {
    /// Example file (.yaml/.yml/.json, list of {question, expected}); built-in set when omitted
    #[arg(long, env = "QAEVAL_EXAMPLES")]
    pub examples: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ListArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,
}

#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum AgentKind {
    /// Agent pipeline served over HTTP (POST {messages} -> {messages})
    #[default]
    Http,
    /// Fixed answer or echo (dry runs)
    Fake,
}

#[derive(clap::Args, Debug, Clone)]
pub struct AgentArgs {
    #[arg(long, value_enum, default_value_t = AgentKind::Http, env = "QAEVAL_AGENT")]
    pub agent: AgentKind,

    /// Pipeline endpoint (required with --agent http)
    #[arg(long, env = "QAEVAL_AGENT_URL")]
    pub agent_url: Option<String>,

    /// Bearer token sent to the pipeline endpoint
    #[arg(long, env = "QAEVAL_AGENT_TOKEN", hide_env_values = true)]
    pub agent_token: Option<String>,

    /// Fixed answer for --agent fake (echoes the question when omitted)
    #[arg(long)]
    pub agent_answer: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct JudgeArgs {
    /// Judge provider
    /// - openai: any OpenAI-compatible chat-completions endpoint (OpenRouter by default)
    /// - fake: fixed score, no network (tests/dev)
    #[arg(long, default_value = "openai", env = "QAEVAL_JUDGE")]
    pub judge: String,

    /// Judge model identifier (provider-specific)
    #[arg(long, default_value = DEFAULT_JUDGE_MODEL, env = "QAEVAL_JUDGE_MODEL")]
    pub judge_model: String,

    #[arg(long, default_value = DEFAULT_BASE_URL, env = "OPENROUTER_BASE_URL")]
    pub judge_base_url: String,

    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true, hide = true)]
    pub judge_api_key: Option<String>,

    /// Temperature used for judge calls
    #[arg(long, default_value_t = 0.0, env = "QAEVAL_JUDGE_TEMPERATURE")]
    pub judge_temperature: f32,

    /// Max tokens for the judge response
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS, env = "QAEVAL_JUDGE_MAX_TOKENS")]
    pub judge_max_tokens: u32,

    /// Score returned by --judge fake
    #[arg(long, default_value_t = 1.0, value_parser = parse_finite_score)]
    pub fake_judge_score: f64,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    #[command(flatten)]
    pub agent: AgentArgs,

    #[command(flatten)]
    pub judge: JudgeArgs,

    /// Examples evaluated concurrently (1 = strictly sequential)
    #[arg(long, default_value_t = 1)]
    pub parallel: usize,

    /// Write the full results as JSON
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Exit with code 1 when the mean score is below this value
    #[arg(long)]
    pub min_score: Option<f64>,
}

fn parse_finite_score(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(format!("'{s}' is not a finite number"))
    }
}
