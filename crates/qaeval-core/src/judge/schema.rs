use crate::providers::llm::ResponseSchema;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer};

/// Shape the judge model is asked to produce.
///
/// The 0.0..=1.0 bound is requested in the prompt, not enforced here; the judge clamps.
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
pub struct ScoreSchema {
    /// Score 0.0-1.0: how well the assistant's answer covers the expected one (1.0 = fully correct).
    pub score: f64,
    /// Short justification of the score.
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schemars(with = "String")]
    pub comment: String,
}

fn null_as_empty<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

pub fn score_response_schema() -> ResponseSchema {
    ResponseSchema {
        name: "ScoreSchema".to_string(),
        schema: schemars::schema_for!(ScoreSchema).to_value(),
    }
}
