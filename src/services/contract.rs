use serde::de::DeserializeOwned;
use thiserror::Error;

/// The provider answered, but the content doesn't match the endpoint's
/// JSON contract. Reported as an internal error, never retried here.
#[derive(Error, Debug)]
pub enum ContractError {
    #[error("LLM reply is not valid JSON: {0}")]
    NotJson(serde_json::Error),
    #[error("LLM reply has unexpected shape: {0}")]
    Shape(serde_json::Error),
}

/// Models routinely ignore the "no markdown" instruction and fence their
/// JSON anyway. Drop a leading ``` line and a trailing ``` line if present.
pub fn strip_code_fences(raw: &str) -> String {
    let content = raw.trim();
    if !content.starts_with("```") {
        return content.to_string();
    }

    let mut lines: Vec<&str> = content.lines().collect();
    lines.remove(0);
    if lines.last().is_some_and(|line| line.trim() == "```") {
        lines.pop();
    }

    lines.join("\n").trim().to_string()
}

/// Parses the model's raw reply into the endpoint's typed contract.
pub fn normalize<T: DeserializeOwned>(raw: &str) -> Result<T, ContractError> {
    let content = strip_code_fences(raw);

    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(ContractError::NotJson)?;

    serde_json::from_value(value).map_err(ContractError::Shape)
}
