//! Example sets: the built-in container-tooling questions, or a YAML/JSON file.

use crate::errors::EvalError;
use crate::model::Example;
use std::path::Path;

pub fn builtin_examples() -> Vec<Example> {
    vec![
        Example::new(
            "What is docker-compose.yml?",
            "A YAML configuration file used to define and run multi-container Docker applications.",
        ),
        Example::new(
            "How do I remove all unused images?",
            "Use the command docker image prune -a.",
        ),
        Example::new(
            "How do I install Docker Desktop on Ubuntu?",
            "Download the latest .deb package and install it with sudo apt-get install ./docker-desktop.deb.",
        ),
    ]
}

/// Loads `[{question, expected}, ...]` from a `.yaml`, `.yml` or `.json` file.
pub fn load_examples(path: &Path) -> Result<Vec<Example>, EvalError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| EvalError::Dataset(format!("failed to read {}: {}", path.display(), e)))?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let examples: Vec<Example> = match ext.as_deref() {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&raw)
            .map_err(|e| EvalError::Dataset(format!("{}: {}", path.display(), e)))?,
        Some("json") => serde_json::from_str(&raw)
            .map_err(|e| EvalError::Dataset(format!("{}: {}", path.display(), e)))?,
        _ => {
            return Err(EvalError::Dataset(format!(
                "{}: unsupported extension (expected .yaml, .yml or .json)",
                path.display()
            )))
        }
    };

    tracing::debug!(path = %path.display(), count = examples.len(), "loaded examples");
    Ok(examples)
}
