use super::schema::ScoreSchema;
use crate::errors::EvalError;

/// Coerces raw judge output into [`ScoreSchema`].
///
/// Providers sometimes wrap the object in prose or code fences, so decoding starts
/// at the first `{` and reads exactly one JSON value.
pub(crate) fn parse_score(text: &str) -> Result<ScoreSchema, EvalError> {
    let text = text.trim();
    let json_start_idx = text
        .find('{')
        .ok_or_else(|| EvalError::schema_violation("no JSON object found in judge output"))?;

    let val: serde_json::Value = serde_json::Deserializer::from_str(&text[json_start_idx..])
        .into_iter::<serde_json::Value>()
        .next()
        .ok_or_else(|| EvalError::schema_violation("no JSON object found in judge output"))?
        .map_err(|e| EvalError::schema_violation(format!("invalid JSON: {}", e)))?;

    if val.get("score").is_none() {
        return Err(EvalError::schema_violation("judge JSON missing 'score' field"));
    }

    serde_json::from_value(val).map_err(|e| EvalError::schema_violation(e.to_string()))
}
