use crate::errors::EvalError;
use std::fmt;

pub const DEFAULT_JUDGE_MODEL: &str = "openai/gpt-5.2";
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MAX_TOKENS: u32 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JudgeProvider {
    /// Any chat-completions endpoint speaking the OpenAI wire format (OpenRouter included).
    OpenAi,
    /// Deterministic fixed-response judge for tests and dry runs.
    Fake,
}

impl JudgeProvider {
    pub fn parse(s: &str) -> Result<Self, EvalError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" | "openrouter" => Ok(Self::OpenAi),
            "fake" => Ok(Self::Fake),
            other => Err(EvalError::Config(format!(
                "unknown judge provider '{}' (expected 'openai' or 'fake')",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Fake => "fake",
        }
    }
}

/// Judge model configuration, read once at startup and passed in explicitly.
#[derive(Clone)]
pub struct JudgeConfig {
    pub provider: JudgeProvider,
    pub model: String,
    pub base_url: String,
    pub api_key: Option<String>,
    /// Fixed at the minimum so repeated runs score the same input alike.
    pub temperature: f32,
    pub max_tokens: u32,
    /// Response text returned by the fake provider.
    pub fake_response: Option<String>,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            provider: JudgeProvider::OpenAi,
            model: DEFAULT_JUDGE_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            temperature: 0.0,
            max_tokens: DEFAULT_MAX_TOKENS,
            fake_response: None,
        }
    }
}

impl JudgeConfig {
    pub fn fake(response: impl Into<String>) -> Self {
        Self {
            provider: JudgeProvider::Fake,
            model: "fake".to_string(),
            fake_response: Some(response.into()),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), EvalError> {
        if self.model.trim().is_empty() {
            return Err(EvalError::Config("judge model must not be empty".into()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(EvalError::Config(format!(
                "judge temperature {} out of range [0.0, 2.0]",
                self.temperature
            )));
        }
        if self.provider == JudgeProvider::OpenAi {
            let has_key = self
                .api_key
                .as_deref()
                .map(|k| !k.trim().is_empty())
                .unwrap_or(false);
            if !has_key {
                return Err(EvalError::Config(
                    "judge provider 'openai' requires an API key (set OPENROUTER_API_KEY)".into(),
                ));
            }
            if self.base_url.trim().is_empty() {
                return Err(EvalError::Config("judge base URL must not be empty".into()));
            }
        }
        Ok(())
    }
}

// Keeps the API key out of logs.
impl fmt::Debug for JudgeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JudgeConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}
